use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

const APP_DIR_NAME: &str = "mcmeta";
const VERSION_INFO_FILE: &str = "minecraft-info.json";

/// Per-user cache root, used when no explicit root is configured.
pub fn default_user_cache() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Layout of the user-scoped metadata cache.
///
/// Only computes paths; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    user_cache: PathBuf,
}

impl CachePaths {
    pub fn new(user_cache: impl Into<PathBuf>) -> Self {
        Self {
            user_cache: user_cache.into(),
        }
    }

    pub fn user_cache(&self) -> &Path {
        &self.user_cache
    }

    /// `{userCache}/{version}`
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.user_cache.join(version)
    }

    /// `{userCache}/{version}/minecraft-info.json`
    pub fn version_info_file(&self, version: &str) -> PathBuf {
        self.version_dir(version).join(VERSION_INFO_FILE)
    }

    /// `{userCache}/{version}/{version}.jar`
    pub fn local_artifact(&self, version: &str) -> PathBuf {
        self.version_dir(version).join(format!("{version}.jar"))
    }

    pub fn manifest_file(&self, file_name: &str) -> PathBuf {
        self.user_cache.join(file_name)
    }

    /// Cache file for a user-supplied manifest URL. Distinct URLs get
    /// distinct files so switching manifests never serves a stale one.
    pub fn custom_manifest_file(&self, url: &str) -> PathBuf {
        let digest = hex::encode(Sha1::digest(url.as_bytes()));
        self.manifest_file(&format!("versions_manifest-{}.json", &digest[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_artifact_is_label_dir_and_label_jar() {
        let paths = CachePaths::new("/home/user/.cache");
        assert_eq!(
            paths.local_artifact("1.20.1-custom"),
            PathBuf::from("/home/user/.cache/1.20.1-custom/1.20.1-custom.jar")
        );
    }

    #[test]
    fn version_info_lives_next_to_artifact() {
        let paths = CachePaths::new("/cache");
        assert_eq!(
            paths.version_info_file("1.20.1"),
            PathBuf::from("/cache/1.20.1/minecraft-info.json")
        );
    }

    #[test]
    fn custom_manifest_files_differ_per_url() {
        let paths = CachePaths::new("/cache");
        let a = paths.custom_manifest_file("https://a.example/manifest.json");
        let b = paths.custom_manifest_file("https://b.example/manifest.json");
        assert_ne!(a, b);
        assert!(a
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("versions_manifest-") && n.len() == 31));
    }
}
