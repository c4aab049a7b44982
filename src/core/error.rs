use std::path::PathBuf;
use thiserror::Error;

/// Central error type for metadata resolution.
/// Every module returns `Result<T, MetaError>`.
#[derive(Debug, Error)]
pub enum MetaError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("Offline mode and no cached copy at {0:?}")]
    Offline(PathBuf),

    // ── Integrity ───────────────────────────────────────
    #[error("SHA-1 mismatch for {path:?}: expected {expected}, got {actual}")]
    Sha1Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Version ─────────────────────────────────────────
    #[error("Minecraft version {0} not found in any version manifest")]
    VersionNotFound(String),
}

/// Convenience alias used throughout the crate.
pub type MetaResult<T> = Result<T, MetaError>;

impl MetaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetaError::Io {
            path: path.into(),
            source,
        }
    }
}
