use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const RECORD_DIR: &str = ".record";
pub const CONFIG_FILE: &str = ".record/config.yaml";
pub const DB_FILE: &str = ".record/lifts.redb";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn record_dir(root: &Path) -> PathBuf {
    root.join(RECORD_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
