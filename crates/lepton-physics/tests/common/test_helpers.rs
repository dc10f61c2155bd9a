//! Helper functions for integration tests

use super::capture_log;
use std::path::{Path, PathBuf};

/// Install the capturing logger and start this test with an empty log.
pub fn init_logging() {
    capture_log::install();
    capture_log::clear();
}

/// Fresh scratch directory unique to this process and test.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("lepton-physics-{}", std::process::id()))
        .join(test);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Material description + energy-loss table pair inside `dir`.
pub fn model_inputs(dir: &Path, description: &str) -> (PathBuf, PathBuf) {
    let mdf = dir.join("standard.xml");
    let dedx = dir.join("dedx");
    std::fs::write(&mdf, description).unwrap();
    std::fs::create_dir_all(&dedx).unwrap();
    (mdf, dedx)
}
