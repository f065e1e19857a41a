use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory holding the game's JSON data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// The resolved data root itself.
pub fn data_root() -> PathBuf {
    DATA_ROOT.clone()
}

/// Resolve the most likely location of the `data/json` directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = Vec::new();

    // Common layouts: crate-local and workspace-root `data/json`.
    candidates.push(PathBuf::from("data/json"));
    candidates.push(PathBuf::from("scrounge_engine/data/json"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("data/json"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("data/json"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("data/json"))
}
