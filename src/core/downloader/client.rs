use std::path::Path;

use reqwest::Client;
use sha1::{Digest, Sha1};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{MetaError, MetaResult};

/// SHA-1 validated downloader for manifests and version files.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Download a single file to `dest`, optionally validating SHA-1.
    ///
    /// Creates parent directories as needed. Nothing is written when the
    /// checksum does not match.
    pub async fn download_file(
        &self,
        url: &str,
        dest: &Path,
        sha1_expected: Option<&str>,
    ) -> MetaResult<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MetaError::io(parent, e))?;
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetaError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;

        // Validate on the in-memory buffer before touching the destination
        if let Some(expected) = sha1_expected {
            let actual = sha1_hex(&bytes);
            if !actual.eq_ignore_ascii_case(expected) {
                return Err(MetaError::Sha1Mismatch {
                    path: dest.to_path_buf(),
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        {
            let mut file = tokio::fs::File::create(dest)
                .await
                .map_err(|e| MetaError::io(dest, e))?;
            file.write_all(&bytes)
                .await
                .map_err(|e| MetaError::io(dest, e))?;
            file.flush().await.map_err(|e| MetaError::io(dest, e))?;
        }

        debug!("Downloaded: {} -> {:?} ({} bytes)", url, dest, bytes.len());
        Ok(())
    }

    /// Validate an existing file's SHA-1.
    pub async fn validate_sha1(path: &Path, expected: &str) -> MetaResult<bool> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MetaError::io(path, e))?;
        Ok(sha1_hex(&bytes).eq_ignore_ascii_case(expected))
    }
}

pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_of_empty_input() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[tokio::test]
    async fn validate_sha1_matches_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, b"{}").unwrap();

        let expected = sha1_hex(b"{}");
        assert!(Downloader::validate_sha1(&path, &expected).await.unwrap());
        assert!(!Downloader::validate_sha1(&path, &sha1_hex(b"[]"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn validate_sha1_on_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Downloader::validate_sha1(&dir.path().join("nope"), "00").await;
        assert!(matches!(result, Err(MetaError::Io { .. })));
    }
}
