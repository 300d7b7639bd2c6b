use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

/// Default CDN bases hosting the face-api model weights, tried in order.
pub const CDN_SOURCES: [&str; 3] = [
    "https://cdn.jsdelivr.net/gh/justadudewhohacks/face-api.js-models@master",
    "https://raw.githubusercontent.com/justadudewhohacks/face-api.js-models/master",
    "https://unpkg.com/face-api.js@0.22.2/weights",
];

/// The four networks the scanner needs, one manifest + one shard each.
pub const MODEL_FILES: [&str; 8] = [
    "tiny_face_detector_model-weights_manifest.json",
    "tiny_face_detector_model-shard1",
    "face_landmark_68_model-weights_manifest.json",
    "face_landmark_68_model-shard1",
    "face_recognition_model-weights_manifest.json",
    "face_recognition_model-shard1",
    "face_expression_model-weights_manifest.json",
    "face_expression_model-shard1",
];

/// A manifest body shorter than this is a placeholder, not real JSON.
const MIN_MANIFEST_BYTES: usize = 50;

/// Weight shards are hundreds of KB; anything under this is a bad download.
const MIN_SHARD_BYTES: usize = 1000;

/// Lifecycle of the model assets. Owned by the loader; nothing else mutates
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelState {
    #[default]
    Unloaded,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} is a placeholder, not a weights manifest")]
    PlaceholderManifest(String),
    #[error("{0} truncated ({1} bytes)")]
    TruncatedShard(String, usize),
    #[error("no model source available (tried {0} CDNs and the local cache)")]
    NoSource(usize),
}

/// Downloads and caches the model weight files.
///
/// Tries each CDN base in order, then falls back to whatever is already in
/// the cache directory. A load that already reached `Ready` is a no-op.
pub struct ModelLoader {
    sources: Vec<String>,
    cache_dir: PathBuf,
    client: reqwest::Client,
    state: ModelState,
}

impl ModelLoader {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self::with_sources(cache_dir, CDN_SOURCES.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_sources(cache_dir: PathBuf, sources: Vec<String>) -> Self {
        Self {
            sources,
            cache_dir,
            client: reqwest::Client::new(),
            state: ModelState::Unloaded,
        }
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    /// Path of a cached model file.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(name)
    }

    pub async fn load(&mut self) -> Result<(), ModelError> {
        if self.state == ModelState::Ready {
            return Ok(());
        }
        self.state = ModelState::Loading;
        fs::create_dir_all(&self.cache_dir).await?;

        for source in self.sources.clone() {
            match self.fetch_all(&source).await {
                Ok(()) => {
                    info!("model weights loaded from {}", source);
                    self.state = ModelState::Ready;
                    return Ok(());
                }
                Err(err) => {
                    warn!("model source {} failed: {}", source, err);
                }
            }
        }

        // All CDNs failed; a previously populated cache is still usable.
        if self.cache_is_complete().await {
            info!("model weights loaded from cache at {}", self.cache_dir.display());
            self.state = ModelState::Ready;
            return Ok(());
        }

        self.state = ModelState::Failed;
        Err(ModelError::NoSource(self.sources.len()))
    }

    async fn fetch_all(&self, base: &str) -> Result<(), ModelError> {
        for name in MODEL_FILES {
            let url = format!("{}/{}", base, name);
            let response = self.client.get(&url).send().await?.error_for_status()?;
            let body = response.bytes().await?;
            validate_model_file(name, &body)?;
            fs::write(self.file_path(name), &body).await?;
        }
        Ok(())
    }

    async fn cache_is_complete(&self) -> bool {
        for name in MODEL_FILES {
            match fs::read(self.file_path(name)).await {
                Ok(body) if validate_model_file(name, &body).is_ok() => {}
                _ => return false,
            }
        }
        true
    }
}

/// Reject placeholder manifests and truncated shards before they reach the
/// classifier.
pub fn validate_model_file(name: &str, body: &[u8]) -> Result<(), ModelError> {
    if is_manifest(name) {
        let looks_like_json = body.len() >= MIN_MANIFEST_BYTES
            && std::str::from_utf8(body)
                .map(|text| text.trim_start().starts_with('{') || text.trim_start().starts_with('['))
                .unwrap_or(false);
        if !looks_like_json {
            return Err(ModelError::PlaceholderManifest(name.to_string()));
        }
    } else if body.len() < MIN_SHARD_BYTES {
        return Err(ModelError::TruncatedShard(name.to_string(), body.len()));
    }
    Ok(())
}

fn is_manifest(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "json")
}
