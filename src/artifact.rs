use sha2::{Digest, Sha256};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filename of the pretrained leaf model inside the cache directory.
const MODEL_FILE: &str = "leaf_cnn.onnx";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("model artifact not found at {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("artifact hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Locates and integrity-checks the pretrained model artifact.
///
/// The model is deployed out-of-band (there is no public download);
/// the locator only answers "where is it on this machine" so the
/// classifier can load it once at startup.
#[derive(Debug, Clone)]
pub struct ModelLocator {
    models_dir: PathBuf,
}

impl ModelLocator {
    /// Locator over the default models directory.
    pub fn new_default() -> Self {
        Self::new(Self::default_models_dir())
    }

    pub fn new<P: AsRef<Path>>(models_dir: P) -> Self {
        Self {
            models_dir: models_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the default models directory path.
    pub fn default_models_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("LEAFLORE_CACHE") {
            return PathBuf::from(path).join("models");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("leaflore").join("models");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("leaflore").join("models");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("leaflore").join("models")
    }

    /// Resolves the model artifact path.
    ///
    /// `LEAFLORE_MODEL` points at the file directly and wins; otherwise
    /// the locator expects `leaf_cnn.onnx` inside its models directory.
    pub fn resolve(&self) -> Result<PathBuf, ArtifactError> {
        if let Ok(path) = env::var("LEAFLORE_MODEL") {
            let path = PathBuf::from(path);
            log::info!("Using model from LEAFLORE_MODEL: {:?}", path);
            if path.exists() {
                return Ok(path);
            }
            return Err(ArtifactError::NotFound(path));
        }

        let path = self.models_dir.join(MODEL_FILE);
        if path.exists() {
            Ok(path)
        } else {
            Err(ArtifactError::NotFound(path))
        }
    }

    /// Checks the artifact against its `<file>.sha256` sidecar.
    ///
    /// Deployments that ship a sidecar get a startup integrity check;
    /// without one the artifact is trusted as-is.
    pub fn verify(&self, path: &Path) -> Result<(), ArtifactError> {
        let sidecar = sidecar_path(path);
        if !sidecar.exists() {
            log::debug!("No checksum sidecar at {:?}, skipping verification", sidecar);
            return Ok(());
        }

        let expected = fs::read_to_string(&sidecar)?
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let actual = format!("{:x}", hasher.finalize());

        if actual != expected {
            log::error!("Artifact {:?} failed verification", path);
            return Err(ArtifactError::HashMismatch { expected, actual });
        }
        log::info!("Artifact {:?} verified against sidecar", path);
        Ok(())
    }
}

fn sidecar_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(".sha256");
    PathBuf::from(os)
}
