//! Hardcoded manifest of everything this installer provisions: the
//! ComfyUI-GGUF custom node and the three model files OutfitGenie needs.

use std::path::{Path, PathBuf};

/// A single model file to place under the ComfyUI `models/` tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub key: &'static str,
    pub url: &'static str,
    /// Destination directory relative to the installation root, '/'-separated.
    pub rel_path: &'static str,
    pub filename: &'static str,
    /// Approximate size for display only. Transfers use the server-reported
    /// Content-Length.
    pub size_mb: u32,
}

impl ModelArtifact {
    /// Destination directory under `root`.
    pub fn dest_dir(&self, root: &Path) -> PathBuf {
        self.rel_path
            .split('/')
            .fold(root.to_path_buf(), |dir, part| dir.join(part))
    }

    /// Full destination path under `root`.
    pub fn dest_path(&self, root: &Path) -> PathBuf {
        self.dest_dir(root).join(self.filename)
    }

    /// Label used in status lines, e.g. "vae model (ae.safetensors)".
    pub fn label(&self) -> String {
        format!("{} model ({})", self.key, self.filename)
    }
}

/// A custom-node plugin cloned into `custom_nodes/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomNode {
    pub name: &'static str,
    pub url: &'static str,
}

/// The plugin required to load GGUF checkpoints inside ComfyUI.
pub const CUSTOM_NODE: CustomNode = CustomNode {
    name: "ComfyUI-GGUF",
    url: "https://github.com/city96/ComfyUI-GGUF.git",
};

/// The fixed artifact manifest, downloaded in order.
pub const MANIFEST: &[ModelArtifact] = &[
    ModelArtifact {
        key: "diffusion",
        url: "https://huggingface.co/gguf-org/z-image-gguf/resolve/main/z-image-turbo-q3_k_s.gguf",
        rel_path: "models/diffusion_models",
        filename: "z-image-turbo-q3_k_s.gguf",
        size_mb: 2600,
    },
    ModelArtifact {
        key: "text_encoder",
        url: "https://huggingface.co/unsloth/Qwen3-4B-GGUF/resolve/main/Qwen3-4B-Q4_K_M.gguf",
        rel_path: "models/text_encoders",
        filename: "Qwen3-4B-Q4_K_M.gguf",
        size_mb: 2500,
    },
    ModelArtifact {
        key: "vae",
        url: "https://huggingface.co/Comfy-Org/z_image_turbo/resolve/main/split_files/vae/ae.safetensors",
        rel_path: "models/vae",
        filename: "ae.safetensors",
        size_mb: 335,
    },
];

/// Look up a manifest entry by key.
pub fn find_artifact(key: &str) -> Option<&'static ModelArtifact> {
    MANIFEST.iter().find(|a| a.key == key)
}

/// Check whether every manifest artifact already exists under `root`.
pub fn all_present(root: &Path) -> bool {
    MANIFEST.iter().all(|a| a.dest_path(root).exists())
}
