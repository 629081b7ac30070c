//! Testing utilities for boxarea workspace
//!
//! Shared fixtures, builders and temp-file helpers.

#![allow(missing_docs)]

use boxarea_core::BoxRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Door category label used by the reference dataset
pub const DOOR: &str = "Deur";

/// Window category label used by the reference dataset
pub const WINDOW: &str = "Raam";

/// Header line of the reference dataset
pub const HEADER: &str = "id,x1,y1,x2,y2,category";

/// Reference dataset shipped at the workspace root
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("boxes.csv")
}

pub fn door(id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> BoxRecord {
    BoxRecord::new(id, x1, y1, x2, y2, DOOR).unwrap()
}

pub fn window(id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> BoxRecord {
    BoxRecord::new(id, x1, y1, x2, y2, WINDOW).unwrap()
}

/// Render records as CSV lines, optionally preceded by [`HEADER`]
pub fn to_csv(boxes: &[BoxRecord], header: bool) -> String {
    let mut out = String::new();
    if header {
        out.push_str(HEADER);
        out.push('\n');
    }
    for b in boxes {
        out.push_str(&format!(
            "{},{:?},{:?},{:?},{:?},{}\n",
            b.id(),
            b.x1(),
            b.y1(),
            b.x2(),
            b.y2(),
            b.category()
        ));
    }
    out
}

/// Write `content` to `name` inside a fresh temp dir
///
/// The returned [`TempDir`] must be kept alive while the file is used.
pub fn write_temp_csv(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Approximate float comparison used across tests
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
