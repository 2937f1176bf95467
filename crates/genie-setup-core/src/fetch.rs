//! Streaming artifact downloads with skip-if-exists caching.

use std::path::Path;

use futures::StreamExt;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::manifest::ModelArtifact;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Progress event for one transfer, emitted after every received chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    pub bytes_downloaded: u64,
    /// Server-reported total, when the response carried a Content-Length.
    pub total_bytes: Option<u64>,
}

/// Outcome of one idempotent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination file already existed; no request was made.
    AlreadyPresent,
    /// File was downloaded.
    Downloaded { bytes: u64 },
}

/// Downloads manifest artifacts over a shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Ensure `artifact` exists under `root`, downloading it if missing.
    ///
    /// An existing destination file is accepted as installed without any
    /// content verification. The transfer streams into a
    /// `<filename>.downloading` temp file that is renamed over the
    /// destination once complete, so an interrupted run never leaves a
    /// truncated file that a later run would mistake for a finished one.
    pub async fn fetch_artifact<F>(
        &self,
        root: &Path,
        artifact: &ModelArtifact,
        on_progress: F,
    ) -> Result<FetchOutcome, FetchError>
    where
        F: Fn(DownloadProgress),
    {
        let dir = artifact.dest_dir(root);
        let dest = artifact.dest_path(root);

        if dest.exists() {
            info!("{} already exists at {}, skipping", artifact.filename, dest.display());
            return Ok(FetchOutcome::AlreadyPresent);
        }

        std::fs::create_dir_all(&dir)?;

        info!("Downloading {} from {}", artifact.filename, artifact.url);
        let response = self.client.get(artifact.url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status(),
                url: artifact.url.to_string(),
            });
        }

        let total_bytes = response.content_length();
        let tmp = dir.join(format!("{}.downloading", artifact.filename));
        let mut out = tokio::fs::File::create(&tmp).await?;
        let mut stream = response.bytes_stream();
        let mut bytes_downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            out.write_all(&chunk).await?;
            bytes_downloaded += chunk.len() as u64;
            on_progress(DownloadProgress {
                bytes_downloaded,
                total_bytes,
            });
        }
        out.flush().await?;
        drop(out);

        tokio::fs::rename(&tmp, &dest).await?;
        info!("Downloaded {} to {}", artifact.filename, dest.display());
        Ok(FetchOutcome::Downloaded {
            bytes: bytes_downloaded,
        })
    }
}
