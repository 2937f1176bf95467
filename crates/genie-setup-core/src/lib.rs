//! Core logic for the OutfitGenie ComfyUI setup tool: the artifact manifest,
//! installation-root checks, the custom-node installer, and the streaming
//! artifact downloader. All user interaction lives in the CLI crate.

pub mod fetch;
pub mod manifest;
pub mod nodes;
pub mod resolver;
