use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{MetaError, MetaResult};
use crate::core::paths::{default_user_cache, CachePaths};

pub const VERSION_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";
pub const EXPERIMENTAL_VERSION_MANIFEST_URL: &str =
    "https://maven.fabricmc.net/net/minecraft/experimental_versions.json";

const DEFAULT_MANIFEST_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Options shared by every metadata provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetadataOptions {
    pub minecraft_version: String,
    pub version_manifest_url: String,
    pub experimental_version_manifest_url: String,
    /// When set, only this manifest is consulted.
    pub custom_manifest_url: Option<String>,
    pub user_cache: PathBuf,
    pub offline: bool,
    pub manifest_max_age_secs: u64,
    /// Version label whose client/server jars come from the local cache.
    pub override_version: Option<String>,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            minecraft_version: String::new(),
            version_manifest_url: VERSION_MANIFEST_URL.to_string(),
            experimental_version_manifest_url: EXPERIMENTAL_VERSION_MANIFEST_URL.to_string(),
            custom_manifest_url: None,
            user_cache: default_user_cache(),
            offline: false,
            manifest_max_age_secs: DEFAULT_MANIFEST_MAX_AGE_SECS,
            override_version: None,
        }
    }
}

impl MetadataOptions {
    pub fn for_version(minecraft_version: impl Into<String>) -> Self {
        Self {
            minecraft_version: minecraft_version.into(),
            ..Self::default()
        }
    }

    /// Load options from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> MetaResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No options file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(MetaError::io(path, e)),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn cache_paths(&self) -> CachePaths {
        CachePaths::new(&self.user_cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = MetadataOptions::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(options, MetadataOptions::default());
        assert_eq!(options.version_manifest_url, VERSION_MANIFEST_URL);
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(
            &path,
            r#"{ "minecraft_version": "1.20.1", "offline": true, "user_cache": "/srv/cache" }"#,
        )
        .unwrap();

        let options = MetadataOptions::load(&path).unwrap();
        assert_eq!(options.minecraft_version, "1.20.1");
        assert!(options.offline);
        assert_eq!(options.user_cache, PathBuf::from("/srv/cache"));
        assert_eq!(options.manifest_max_age_secs, DEFAULT_MANIFEST_MAX_AGE_SECS);
        assert!(options.override_version.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            MetadataOptions::load(&path),
            Err(MetaError::Json(_))
        ));
    }
}
