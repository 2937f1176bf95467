//! The linear setup flow: resolve the ComfyUI root, install the ComfyUI-GGUF
//! custom node, then fetch each manifest model in order. Phase failures are
//! reported and the flow continues; the final summary lists every issue.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use genie_setup_core::fetch::{Downloader, FetchError, FetchOutcome};
use genie_setup_core::manifest::{self, ModelArtifact, CUSTOM_NODE, MANIFEST};
use genie_setup_core::nodes::{NodeError, NodeInstallOutcome, NodeInstaller};
use genie_setup_core::resolver::{self, RootCheck};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{prompt, status};

const BANNER: &str = "----------------------------------------------------------------";

pub async fn run(root_flag: Option<PathBuf>) -> anyhow::Result<()> {
    println!("{BANNER}");
    println!("Welcome to the OutfitGenie Auto-Installer!");
    println!("This tool will install the required custom nodes and models.");
    println!("{BANNER}");

    let root = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        resolve_root(&mut input, root_flag, resolver::default_candidate())?
    };
    tracing::debug!("resolved installation root: {}", root.display());
    println!();

    let node = install_custom_node(&root).await;
    println!();

    let models = if manifest::all_present(&root) {
        status::success("All model files are already in place. Skipping downloads.");
        MANIFEST
            .iter()
            .map(|artifact| (artifact, Ok(FetchOutcome::AlreadyPresent)))
            .collect()
    } else {
        install_models(&root).await
    };

    let report = SetupReport { node, models };
    println!();
    println!("{BANNER}");
    print_summary(&report);
    println!("{BANNER}");
    Ok(())
}

/// Resolve the installation root: a `--root` flag first, then the default
/// candidate confirmation, then a prompt loop that only ends when the user
/// supplies (or explicitly overrides to) an acceptable directory.
fn resolve_root(
    input: &mut impl BufRead,
    root_flag: Option<PathBuf>,
    candidate: PathBuf,
) -> std::io::Result<PathBuf> {
    if let Some(flag) = root_flag {
        if let Some(root) = vet_candidate(input, flag)? {
            return Ok(root);
        }
    }

    if candidate.exists() {
        let use_default = prompt::confirm_default_yes(
            input,
            &format!("Found ComfyUI at '{}'. Use this?", candidate.display()),
        )?;
        if use_default {
            return Ok(candidate);
        }
    }

    loop {
        let raw = prompt::prompt_line(input, "Please enter the full path to your 'ComfyUI' folder: ")?;
        let path = PathBuf::from(resolver::strip_quotes(&raw));
        if let Some(root) = vet_candidate(input, path)? {
            return Ok(root);
        }
    }
}

/// Soft-validate one candidate. Returns None when the user should be asked
/// for another path.
fn vet_candidate(input: &mut impl BufRead, path: PathBuf) -> std::io::Result<Option<PathBuf>> {
    match resolver::check_root(&path) {
        RootCheck::Valid => Ok(Some(path)),
        RootCheck::MissingLayout { missing } => {
            let missing = missing
                .iter()
                .map(|m| format!("'{m}'"))
                .collect::<Vec<_>>()
                .join(" and ");
            status::warning(format!(
                "That folder exists but doesn't look like a valid ComfyUI installation (missing {missing})."
            ));
            if prompt::confirm_default_no(input, "Use it anyway?")? {
                Ok(Some(path))
            } else {
                Ok(None)
            }
        }
        RootCheck::NotADirectory => {
            status::error(format!("Directory not found: {}", path.display()));
            Ok(None)
        }
    }
}

/// Phase 2: ensure the ComfyUI-GGUF custom node is present. Failures are
/// reported here and returned for the summary; they never abort the flow.
async fn install_custom_node(root: &Path) -> Result<NodeInstallOutcome, NodeError> {
    status::info(format!("Checking for {}...", CUSTOM_NODE.name));

    let result = NodeInstaller::new().ensure_installed(root, &CUSTOM_NODE).await;
    match &result {
        Ok(NodeInstallOutcome::AlreadyInstalled) => {
            status::success(format!("{} is already installed. Skipping.", CUSTOM_NODE.name));
        }
        Ok(NodeInstallOutcome::Cloned) => {
            status::success(format!("Installed {} successfully.", CUSTOM_NODE.name));
        }
        Err(NodeError::GitNotFound) => {
            status::error("Git command not found. Please install Git.");
        }
        Err(NodeError::CloneFailed(_)) => {
            status::error("Failed to clone repository. Do you have git installed?");
        }
        Err(NodeError::Io(e)) => {
            status::error(format!("Failed to install {}: {e}", CUSTOM_NODE.name));
        }
    }
    result
}

/// Phase 3: fetch every manifest artifact, best effort. One failed download
/// does not stop the remaining entries.
async fn install_models(root: &Path) -> Vec<(&'static ModelArtifact, Result<FetchOutcome, FetchError>)> {
    let downloader = Downloader::new();
    let mut results = Vec::with_capacity(MANIFEST.len());
    for artifact in MANIFEST {
        results.push((artifact, install_model(&downloader, root, artifact).await));
    }
    results
}

async fn install_model(
    downloader: &Downloader,
    root: &Path,
    artifact: &ModelArtifact,
) -> Result<FetchOutcome, FetchError> {
    let dest = artifact.dest_path(root);
    if dest.exists() {
        status::success(format!(
            "{} already exists at {}. Skipping download.",
            artifact.label(),
            dest.display()
        ));
        return Ok(FetchOutcome::AlreadyPresent);
    }

    status::info(format!("Downloading {} (~{} MB)...", artifact.label(), artifact.size_mb));
    status::info(format!("URL: {}", artifact.url));

    let bar = transfer_bar(artifact);
    let bar_events = bar.clone();
    let result = downloader
        .fetch_artifact(root, artifact, move |progress| {
            if let Some(total) = progress.total_bytes {
                bar_events.set_length(total);
            }
            bar_events.set_position(progress.bytes_downloaded);
        })
        .await;

    match &result {
        Ok(_) => {
            bar.finish();
            status::success(format!("Downloaded {}.", artifact.label()));
        }
        Err(e) => {
            bar.finish_and_clear();
            status::error(format!("Failed to download {}: {e}", artifact.label()));
        }
    }
    result
}

/// Byte-progress bar seeded with the manifest's size estimate; the real
/// Content-Length replaces it on the first progress event.
fn transfer_bar(artifact: &ModelArtifact) -> ProgressBar {
    let bar = ProgressBar::new(u64::from(artifact.size_mb) * 1024 * 1024);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("=> "),
    );
    bar
}

/// Per-phase results collected for the final summary.
struct SetupReport {
    node: Result<NodeInstallOutcome, NodeError>,
    models: Vec<(&'static ModelArtifact, Result<FetchOutcome, FetchError>)>,
}

impl SetupReport {
    fn failures(&self) -> Vec<String> {
        let mut failures = Vec::new();
        if let Err(e) = &self.node {
            failures.push(format!("{}: {e}", CUSTOM_NODE.name));
        }
        for (artifact, result) in &self.models {
            if let Err(e) = result {
                failures.push(format!("{}: {e}", artifact.label()));
            }
        }
        failures
    }
}

/// Final summary. Success is only claimed when every phase actually
/// succeeded or was already in place.
fn print_summary(report: &SetupReport) {
    let failures = report.failures();
    if failures.is_empty() {
        status::success("Installation complete!");
        println!("1. Restart ComfyUI if it is running.");
        println!("2. Refresh your web browser.");
        println!("3. Start creating outfits!");
    } else {
        status::warning(format!("Setup finished with {} issue(s):", failures.len()));
        for failure in &failures {
            status::error(failure);
        }
        println!("Re-run this tool once the above is fixed; completed steps are skipped automatically.");
    }
}
