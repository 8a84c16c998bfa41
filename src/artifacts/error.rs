use std::path::PathBuf;
use thiserror::Error;

/// Raised while building the [`ArtifactStore`](super::store::ArtifactStore).
/// Any of these aborts startup.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("failed to read {artifact} artifact at {}: {source}", path.display())]
    Io {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {artifact} artifact at {}: {source}", path.display())]
    Parse {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },
}

impl ArtifactLoadError {
    pub fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        ArtifactLoadError::Invalid {
            artifact,
            reason: reason.into(),
        }
    }
}
