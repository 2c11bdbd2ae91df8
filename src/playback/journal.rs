//! Persisted move log for audit and replay outside the running process.
//!
//! Plain text, one file per run, filename keyed by the capture timestamp
//! supplied by the caller (the engine itself never reads the clock).
//! The file carries the total step count, one line per step with its
//! ordinal, symbol and description, per-face statistics, and a final
//! compact space-joined line for copy/paste replay.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::{format_sequence, FaceId, Move, MoveRecord};

/// Write a run's move log under `dir`, named `solution_<capture_key>.txt`.
///
/// Returns the written path, or `Ok(None)` when there are no records -
/// an empty run is not worth a file.
pub fn write_move_log(
    dir: &Path,
    capture_key: &str,
    records: &[MoveRecord],
) -> io::Result<Option<PathBuf>> {
    if records.is_empty() {
        log::debug!("no moves recorded, skipping journal");
        return Ok(None);
    }

    let path = dir.join(format!("solution_{capture_key}.txt"));
    fs::write(&path, render(records))?;
    log::debug!("move journal written to {}", path.display());
    Ok(Some(path))
}

/// Render the journal body.
fn render(records: &[MoveRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total steps: {}\n\n", records.len()));

    for record in records {
        out.push_str(&format!(
            "{:4}: {:3} {}\n",
            record.ordinal,
            record.mv.to_string(),
            record.mv.description()
        ));
    }

    out.push_str("\nMoves by face:\n");
    let total = records.len() as f64;
    for face in FaceId::all() {
        let count = records.iter().filter(|r| r.mv.face == face).count();
        if count > 0 {
            let percent = count as f64 / total * 100.0;
            out.push_str(&format!("  {}: {} ({:.1}%)\n", face.letter(), count, percent));
        }
    }

    let moves: Vec<Move> = records.iter().map(|r| r.mv).collect();
    out.push('\n');
    out.push_str(&format_sequence(&moves));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(tokens: &str) -> Vec<MoveRecord> {
        tokens
            .split_whitespace()
            .enumerate()
            .map(|(i, t)| MoveRecord::new(i as u32 + 1, Move::parse(t).unwrap()))
            .collect()
    }

    #[test]
    fn test_render_layout() {
        let body = render(&records("R U' R U2"));
        let lines: Vec<_> = body.lines().collect();

        assert_eq!(lines[0], "Total steps: 4");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("   1: R "));
        assert!(lines[2].ends_with("Right face clockwise"));
        assert!(lines[3].contains("U' "));

        // Statistics only list faces that appear.
        assert!(body.contains("  U: 2 (50.0%)"));
        assert!(body.contains("  R: 2 (50.0%)"));
        assert!(!body.contains("  F:"));

        // Compact line is last.
        assert_eq!(*lines.last().unwrap(), "R U' R U2");
    }

    #[test]
    fn test_write_and_skip_empty() {
        let dir = std::env::temp_dir().join("cube_engine_journal_test");
        fs::create_dir_all(&dir).unwrap();

        let path = write_move_log(&dir, "20240101_120000", &records("R U"))
            .unwrap()
            .unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "solution_20240101_120000.txt"
        );
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("Total steps: 2"));

        assert_eq!(write_move_log(&dir, "empty", &[]).unwrap(), None);
        assert!(!dir.join("solution_empty.txt").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
