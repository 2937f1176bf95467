mod prompt;
mod setup;
mod status;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "genie-setup",
    version,
    about = "Install the custom nodes and models OutfitGenie needs into an existing ComfyUI"
)]
struct Cli {
    /// Path to the ComfyUI installation root (skips the default-path prompt)
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The setup flow runs as its own task so Ctrl-C stays responsive even
    // while a prompt blocks on stdin. Individual phase failures are reported
    // inside the flow; the process exits 0 either way.
    let flow = tokio::spawn(setup::run(cli.root));
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\nSetup cancelled.");
            // Exit directly: a prompt may still be blocking a worker thread
            // on stdin, which would stall runtime shutdown indefinitely.
            std::process::exit(0);
        }
        joined = flow => {
            joined.map_err(|e| anyhow::anyhow!("setup task failed: {e}"))??;
        }
    }
    Ok(())
}
