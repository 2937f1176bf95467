//! Idempotent install of custom-node plugins via `git clone`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

use crate::manifest::CustomNode;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("git not found on PATH")]
    GitNotFound,
    #[error("git clone exited with {0}")]
    CloneFailed(std::process::ExitStatus),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of an idempotent node install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeInstallOutcome {
    /// Target directory already existed; nothing was touched.
    AlreadyInstalled,
    /// Repository was cloned into place.
    Cloned,
}

/// Clones custom-node repositories. The git executable is injectable so tests
/// can prove the already-installed path never spawns a process.
#[derive(Debug, Clone)]
pub struct NodeInstaller {
    git: OsString,
}

impl Default for NodeInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeInstaller {
    pub fn new() -> Self {
        Self {
            git: OsString::from("git"),
        }
    }

    /// Use a specific git executable instead of `git` from PATH.
    pub fn with_git_program(git: impl Into<OsString>) -> Self {
        Self { git: git.into() }
    }

    /// Target directory for `node` under `root`.
    pub fn target_dir(root: &Path, node: &CustomNode) -> PathBuf {
        root.join("custom_nodes").join(node.name)
    }

    /// Ensure `node` is present under `<root>/custom_nodes/`. An existing
    /// directory is left untouched: re-running never mutates an install, and
    /// no `git pull` is attempted.
    pub async fn ensure_installed(
        &self,
        root: &Path,
        node: &CustomNode,
    ) -> Result<NodeInstallOutcome, NodeError> {
        let target = Self::target_dir(root, node);
        if target.exists() {
            info!("{} already installed at {}", node.name, target.display());
            return Ok(NodeInstallOutcome::AlreadyInstalled);
        }

        which::which(&self.git).map_err(|_| NodeError::GitNotFound)?;

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Cloning {} from {}", node.name, node.url);
        let status = Command::new(&self.git)
            .arg("clone")
            .arg(node.url)
            .arg(&target)
            .status()
            .await?;
        if !status.success() {
            return Err(NodeError::CloneFailed(status));
        }
        info!("Cloned {} into {}", node.name, target.display());
        Ok(NodeInstallOutcome::Cloned)
    }
}
