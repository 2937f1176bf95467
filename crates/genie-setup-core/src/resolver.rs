//! Installation-root discovery. The interactive prompt loop lives in the CLI;
//! this module holds the pure pieces: default-candidate construction, pasted
//! input cleanup, and the shallow layout check.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the default ComfyUI candidate path.
pub const ROOT_ENV_VAR: &str = "COMFYUI_PATH";

/// Subdirectories a ComfyUI installation is expected to contain.
pub const EXPECTED_SUBDIRS: &[&str] = &["custom_nodes", "models"];

/// Result of the shallow installation-root check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootCheck {
    /// Directory exists and has the expected layout.
    Valid,
    /// Directory exists but some expected subdirectories are missing.
    MissingLayout { missing: Vec<&'static str> },
    /// Path does not exist or is not a directory.
    NotADirectory,
}

/// Default candidate for the installation root: `$COMFYUI_PATH` if set,
/// otherwise `./ComfyUI` under the current working directory.
pub fn default_candidate() -> PathBuf {
    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    std::env::current_dir()
        .map(|cwd| cwd.join("ComfyUI"))
        .unwrap_or_else(|_| PathBuf::from("ComfyUI"))
}

/// Strip surrounding quotes from a pasted path ("copy as path" in most file
/// managers wraps the result in quotes).
pub fn strip_quotes(input: &str) -> &str {
    input.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Shallow structural check of a candidate root. Missing subdirectories are
/// reported rather than rejected; the caller decides whether to proceed.
pub fn check_root(path: &Path) -> RootCheck {
    if !path.is_dir() {
        return RootCheck::NotADirectory;
    }
    let missing: Vec<&'static str> = EXPECTED_SUBDIRS
        .iter()
        .copied()
        .filter(|sub| !path.join(sub).is_dir())
        .collect();
    if missing.is_empty() {
        RootCheck::Valid
    } else {
        RootCheck::MissingLayout { missing }
    }
}
