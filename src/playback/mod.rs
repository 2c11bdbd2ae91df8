//! Move history and the playback state machine.
//!
//! The driver steps an externally supplied move list one token at a time.
//! The caller's loop (owned by the interaction layer) decides the cadence:
//! `step()` is the only suspension point, so cancellation is honored
//! between steps and a move is always atomic with respect to it.
//!
//! ## States
//!
//! - **Idle**: nothing queued. `start` moves to Stepping.
//! - **Stepping**: tokens remain, or the driver is about to re-query the
//!   solver. Each `step` applies one token and records it.
//! - **Paused**: `step` is a no-op until `resume`.
//! - **Complete**: terminal for the run - entered only when the cube is
//!   solved and no tokens remain.
//!
//! Running out of tokens on an unsolved cube is not an error: the
//! external solver may have been invoked with a bounded search depth that
//! does not always yield a single-pass solution, so the driver solves
//! again from where it stopped (through the bounded retry chain).
//! Cancellation is prospective: remaining tokens are discarded, applied
//! moves stay applied.

pub mod journal;

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CubeState, Move, MoveRecord};
use crate::solver::{solve_with_retry, CubeSolver, SolveSource, SolverConfig};

/// Driver state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing queued.
    #[default]
    Idle,
    /// Executing a sequence.
    Stepping,
    /// Execution suspended; `resume` continues.
    Paused,
    /// The cube is solved and no tokens remain.
    Complete,
}

/// What a single `step` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One token was applied to the cube and recorded.
    Applied(Move),
    /// The queue ran dry on an unsolved cube; a continuation plan was
    /// fetched through the retry chain and queued.
    Requeried {
        /// Number of tokens now queued.
        queued: usize,
        /// Which attempt produced them.
        source: SolveSource,
    },
    /// The queue ran dry on a solved cube; the driver is now Complete.
    Solved,
    /// The driver was not in Stepping; nothing happened.
    NotStepping,
}

/// Steps a move list against a cube, recording history.
///
/// The driver borrows the cube and solver per call rather than owning
/// them - there is no hidden global state.
#[derive(Debug)]
pub struct PlaybackDriver {
    status: PlaybackStatus,
    pending: VecDeque<Move>,
    history: Vector<MoveRecord>,
    config: SolverConfig,
}

impl PlaybackDriver {
    /// Create an idle driver with the default solver configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create an idle driver with an explicit solver configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            pending: VecDeque::new(),
            history: Vector::new(),
            config,
        }
    }

    /// Current state.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Tokens still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Moves applied so far in this run, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Transitions ===

    /// Begin executing a sequence: Idle (or Complete) → Stepping.
    ///
    /// Clears the history of the previous run. Returns false - and
    /// changes nothing - if a run is already in progress.
    pub fn start(&mut self, moves: Vec<Move>) -> bool {
        match self.status {
            PlaybackStatus::Idle | PlaybackStatus::Complete => {
                self.pending = moves.into();
                self.history = Vector::new();
                self.status = PlaybackStatus::Stepping;
                true
            }
            PlaybackStatus::Stepping | PlaybackStatus::Paused => {
                log::warn!("start ignored: a run is already in progress");
                false
            }
        }
    }

    /// Suspend stepping: Stepping → Paused. No-op otherwise.
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Stepping {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Continue stepping: Paused → Stepping. No-op otherwise.
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Stepping;
        }
    }

    /// Abandon the run: Stepping/Paused → Idle.
    ///
    /// Remaining tokens are discarded; already-applied moves stay applied
    /// and the history is kept for the journal.
    pub fn cancel(&mut self) {
        match self.status {
            PlaybackStatus::Stepping | PlaybackStatus::Paused => {
                self.pending.clear();
                self.status = PlaybackStatus::Idle;
            }
            PlaybackStatus::Idle | PlaybackStatus::Complete => {}
        }
    }

    // === Stepping ===

    /// Advance by at most one move.
    ///
    /// While Stepping: pops one token, applies it to `cube`, appends it
    /// to the history. When the queue is empty: Complete if the cube is
    /// solved, otherwise one re-query through the retry chain. In any
    /// other state this is a no-op.
    pub fn step(
        &mut self,
        cube: &mut CubeState,
        solver: &mut dyn CubeSolver,
    ) -> StepOutcome {
        if self.status != PlaybackStatus::Stepping {
            return StepOutcome::NotStepping;
        }

        if let Some(mv) = self.pending.pop_front() {
            cube.apply(mv);
            let ordinal = self.history.len() as u32 + 1;
            self.history.push_back(MoveRecord::new(ordinal, mv));
            return StepOutcome::Applied(mv);
        }

        if cube.is_solved() {
            self.status = PlaybackStatus::Complete;
            return StepOutcome::Solved;
        }

        log::debug!("queue exhausted on unsolved cube, re-querying solver");
        let plan = solve_with_retry(solver, cube, &self.config);
        if plan.moves.is_empty() {
            // The solver claims there is nothing to do but the cube is
            // not solved - stop rather than spin.
            log::warn!("continuation plan is empty on an unsolved cube, going idle");
            self.status = PlaybackStatus::Idle;
            return StepOutcome::Requeried {
                queued: 0,
                source: plan.source,
            };
        }
        let queued = plan.moves.len();
        self.pending = plan.moves.into();
        StepOutcome::Requeried {
            queued,
            source: plan.source,
        }
    }

    /// Persist this run's history as a plain-text journal.
    ///
    /// See [`journal::write_move_log`]; returns the written path, or
    /// `None` when the history is empty.
    pub fn write_journal(
        &self,
        dir: &std::path::Path,
        capture_key: &str,
    ) -> std::io::Result<Option<std::path::PathBuf>> {
        let records: Vec<MoveRecord> = self.history.iter().copied().collect();
        journal::write_move_log(dir, capture_key, &records)
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverError;

    struct NeverCalled;

    impl CubeSolver for NeverCalled {
        fn solve(&mut self, _: &str, _: Option<u8>) -> Result<String, SolverError> {
            panic!("solver must not be called");
        }
    }

    fn seq(tokens: &str) -> Vec<Move> {
        tokens
            .split_whitespace()
            .map(|t| Move::parse(t).unwrap())
            .collect()
    }

    #[test]
    fn test_new_driver_is_idle() {
        let driver = PlaybackDriver::new();
        assert_eq!(driver.status(), PlaybackStatus::Idle);
        assert_eq!(driver.remaining(), 0);
        assert!(driver.history().is_empty());
    }

    #[test]
    fn test_step_while_idle_is_noop() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        let outcome = driver.step(&mut cube, &mut NeverCalled);
        assert_eq!(outcome, StepOutcome::NotStepping);
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn test_start_steps_and_records() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();

        assert!(driver.start(seq("R U R'")));
        assert_eq!(driver.status(), PlaybackStatus::Stepping);
        assert_eq!(driver.remaining(), 3);

        let outcome = driver.step(&mut cube, &mut NeverCalled);
        assert_eq!(outcome, StepOutcome::Applied(Move::parse("R").unwrap()));
        assert_eq!(driver.remaining(), 2);
        assert_eq!(driver.history().len(), 1);
        assert_eq!(driver.history()[0].ordinal, 1);
    }

    #[test]
    fn test_start_rejected_mid_run() {
        let mut driver = PlaybackDriver::new();
        assert!(driver.start(seq("R")));
        assert!(!driver.start(seq("U")));
        assert_eq!(driver.remaining(), 1);
    }

    #[test]
    fn test_pause_blocks_steps() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        driver.start(seq("R U"));

        driver.pause();
        assert_eq!(driver.status(), PlaybackStatus::Paused);
        assert_eq!(
            driver.step(&mut cube, &mut NeverCalled),
            StepOutcome::NotStepping
        );
        assert_eq!(driver.remaining(), 2);

        driver.resume();
        assert!(matches!(
            driver.step(&mut cube, &mut NeverCalled),
            StepOutcome::Applied(_)
        ));
    }

    #[test]
    fn test_cancel_is_prospective() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        driver.start(seq("R U F"));
        driver.step(&mut cube, &mut NeverCalled);

        driver.cancel();
        assert_eq!(driver.status(), PlaybackStatus::Idle);
        assert_eq!(driver.remaining(), 0);
        // The applied R stays applied; only the rest is discarded.
        assert_ne!(cube, CubeState::solved());
        assert_eq!(driver.history().len(), 1);
    }

    #[test]
    fn test_complete_when_solved_and_empty() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        cube.apply(Move::parse("R").unwrap());

        driver.start(seq("R'"));
        driver.step(&mut cube, &mut NeverCalled);
        assert!(cube.is_solved());

        let outcome = driver.step(&mut cube, &mut NeverCalled);
        assert_eq!(outcome, StepOutcome::Solved);
        assert_eq!(driver.status(), PlaybackStatus::Complete);

        // Complete is terminal for this run.
        assert_eq!(
            driver.step(&mut cube, &mut NeverCalled),
            StepOutcome::NotStepping
        );
    }

    #[test]
    fn test_requery_on_unsolved_exhaustion() {
        struct FinishIt;
        impl CubeSolver for FinishIt {
            fn solve(&mut self, _: &str, _: Option<u8>) -> Result<String, SolverError> {
                Ok("U'".into())
            }
        }

        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        cube.apply(Move::parse("U").unwrap());

        // An empty initial plan forces an immediate re-query.
        driver.start(Vec::new());
        let outcome = driver.step(&mut cube, &mut FinishIt);
        assert_eq!(
            outcome,
            StepOutcome::Requeried {
                queued: 1,
                source: SolveSource::Direct,
            }
        );

        driver.step(&mut cube, &mut FinishIt);
        assert!(cube.is_solved());
        assert_eq!(
            driver.step(&mut cube, &mut FinishIt),
            StepOutcome::Solved
        );
    }

    #[test]
    fn test_empty_continuation_goes_idle() {
        struct SaysDone;
        impl CubeSolver for SaysDone {
            fn solve(&mut self, _: &str, _: Option<u8>) -> Result<String, SolverError> {
                Ok(String::new())
            }
        }

        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();
        cube.apply(Move::parse("F").unwrap());

        driver.start(Vec::new());
        let outcome = driver.step(&mut cube, &mut SaysDone);
        assert_eq!(
            outcome,
            StepOutcome::Requeried {
                queued: 0,
                source: SolveSource::Direct,
            }
        );
        assert_eq!(driver.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_start_again_after_complete() {
        let mut driver = PlaybackDriver::new();
        let mut cube = CubeState::solved();

        driver.start(Vec::new());
        driver.step(&mut cube, &mut NeverCalled);
        assert_eq!(driver.status(), PlaybackStatus::Complete);

        assert!(driver.start(seq("L2")));
        assert_eq!(driver.status(), PlaybackStatus::Stepping);
        assert!(driver.history().is_empty());
    }
}
