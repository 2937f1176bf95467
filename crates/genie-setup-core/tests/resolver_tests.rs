// Tests for genie_setup_core::resolver — quote stripping, the shallow layout
// check, and default-candidate construction.

use std::path::Path;

use genie_setup_core::resolver::{
    check_root, default_candidate, strip_quotes, RootCheck, ROOT_ENV_VAR,
};

// ---------------------------------------------------------------------------
// strip_quotes
// ---------------------------------------------------------------------------

/// Plain input passes through with surrounding whitespace removed.
#[test]
fn strip_quotes_trims_whitespace() {
    assert_eq!(strip_quotes("  /opt/ComfyUI  "), "/opt/ComfyUI");
}

/// Double quotes from "copy as path" are removed.
#[test]
fn strip_quotes_removes_double_quotes() {
    assert_eq!(strip_quotes("\"/opt/Comfy UI\""), "/opt/Comfy UI");
}

/// Single quotes are removed too.
#[test]
fn strip_quotes_removes_single_quotes() {
    assert_eq!(strip_quotes("'/opt/ComfyUI'"), "/opt/ComfyUI");
}

/// Interior quotes are left alone.
#[test]
fn strip_quotes_keeps_interior_quotes() {
    assert_eq!(strip_quotes("a\"b"), "a\"b");
}

// ---------------------------------------------------------------------------
// check_root
// ---------------------------------------------------------------------------

/// A nonexistent path is NotADirectory.
#[test]
fn check_root_nonexistent_path() {
    assert_eq!(
        check_root(Path::new("/definitely/not/a/real/path")),
        RootCheck::NotADirectory
    );
}

/// A regular file is NotADirectory.
#[test]
fn check_root_plain_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, b"x").unwrap();
    assert_eq!(check_root(&file), RootCheck::NotADirectory);
}

/// An empty directory reports both expected subdirectories as missing.
#[test]
fn check_root_empty_dir_missing_both() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        check_root(dir.path()),
        RootCheck::MissingLayout {
            missing: vec!["custom_nodes", "models"]
        }
    );
}

/// A directory with only custom_nodes reports models as missing.
#[test]
fn check_root_reports_only_missing_subdir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("custom_nodes")).unwrap();
    assert_eq!(
        check_root(dir.path()),
        RootCheck::MissingLayout {
            missing: vec!["models"]
        }
    );
}

/// A directory with both expected subdirectories is Valid.
#[test]
fn check_root_full_layout_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("custom_nodes")).unwrap();
    std::fs::create_dir(dir.path().join("models")).unwrap();
    assert_eq!(check_root(dir.path()), RootCheck::Valid);
}

/// A file named custom_nodes does not satisfy the layout check.
#[test]
fn check_root_subdir_must_be_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("custom_nodes"), b"x").unwrap();
    std::fs::create_dir(dir.path().join("models")).unwrap();
    assert_eq!(
        check_root(dir.path()),
        RootCheck::MissingLayout {
            missing: vec!["custom_nodes"]
        }
    );
}

// ---------------------------------------------------------------------------
// default_candidate
// ---------------------------------------------------------------------------

/// The env var overrides the cwd-based default; without it the candidate ends
/// in ComfyUI. Both cases live in one test since the env var is process-wide.
#[test]
fn default_candidate_env_override_and_fallback() {
    std::env::set_var(ROOT_ENV_VAR, "/srv/comfy");
    assert_eq!(default_candidate(), Path::new("/srv/comfy"));

    // Blank override is ignored.
    std::env::set_var(ROOT_ENV_VAR, "  ");
    assert!(default_candidate().ends_with("ComfyUI"));

    std::env::remove_var(ROOT_ENV_VAR);
    let candidate = default_candidate();
    assert!(candidate.ends_with("ComfyUI"));
    assert!(candidate.is_absolute());
}
