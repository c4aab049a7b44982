use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::core::config::MetadataOptions;
use crate::core::downloader::Downloader;
use crate::core::error::{MetaError, MetaResult};
use crate::core::paths::CachePaths;
use crate::core::version::{VersionDescriptor, VersionEntry, VersionManifest};

use super::supplier::VersionMetaSupplier;

const VERSION_MANIFEST_FILE: &str = "versions_manifest.json";
const EXPERIMENTAL_VERSION_MANIFEST_FILE: &str = "experimental_versions_manifest.json";

/// Resolves a version descriptor through the version manifests, caching
/// manifests and version files under the user cache.
pub struct RemoteMetadataProvider {
    options: MetadataOptions,
    paths: CachePaths,
    downloader: Downloader,
    meta: OnceCell<VersionDescriptor>,
}

impl RemoteMetadataProvider {
    pub fn new(options: MetadataOptions, client: reqwest::Client) -> Self {
        let paths = options.cache_paths();
        Self {
            options,
            paths,
            downloader: Downloader::new(client),
            meta: OnceCell::new(),
        }
    }

    pub fn options(&self) -> &MetadataOptions {
        &self.options
    }

    pub async fn version_meta(&self) -> MetaResult<&VersionDescriptor> {
        self.meta.get_or_try_init(|| self.resolve()).await
    }

    async fn resolve(&self) -> MetaResult<VersionDescriptor> {
        let version = &self.options.minecraft_version;
        info!("Resolving metadata for Minecraft {}", version);

        let entry = self.find_entry(version).await?;
        let info_path = self.paths.version_info_file(version);
        self.ensure_version_file(&entry, &info_path).await?;

        let raw = tokio::fs::read_to_string(&info_path)
            .await
            .map_err(|e| MetaError::io(&info_path, e))?;
        let meta: VersionDescriptor = serde_json::from_str(&raw)?;

        debug!(
            "Loaded metadata for {} ({} libraries)",
            meta.id,
            meta.libraries.len()
        );
        Ok(meta)
    }

    async fn find_entry(&self, version: &str) -> MetaResult<VersionEntry> {
        if let Some(url) = &self.options.custom_manifest_url {
            let manifest = self
                .load_manifest(url, &self.paths.custom_manifest_file(url))
                .await?;
            return manifest
                .find_version(version)
                .cloned()
                .ok_or_else(|| MetaError::VersionNotFound(version.to_string()));
        }

        let manifest = self
            .load_manifest(
                &self.options.version_manifest_url,
                &self.paths.manifest_file(VERSION_MANIFEST_FILE),
            )
            .await?;
        if let Some(entry) = manifest.find_version(version) {
            return Ok(entry.clone());
        }

        debug!(
            "{} not in the version manifest, trying experimental versions",
            version
        );
        let experimental = self
            .load_manifest(
                &self.options.experimental_version_manifest_url,
                &self.paths.manifest_file(EXPERIMENTAL_VERSION_MANIFEST_FILE),
            )
            .await?;
        experimental
            .find_version(version)
            .cloned()
            .ok_or_else(|| MetaError::VersionNotFound(version.to_string()))
    }

    async fn load_manifest(&self, url: &str, cache_file: &Path) -> MetaResult<VersionManifest> {
        let cached = tokio::fs::try_exists(cache_file).await.unwrap_or(false);

        if self.options.offline {
            if !cached {
                return Err(MetaError::Offline(cache_file.to_path_buf()));
            }
            debug!("Offline, using cached manifest {:?}", cache_file);
        } else if cached && self.is_fresh(cache_file).await {
            debug!("Using cached manifest {:?}", cache_file);
        } else {
            match self.downloader.download_file(url, cache_file, None).await {
                Ok(()) => info!("Refreshed version manifest from {}", url),
                Err(e) if cached => {
                    warn!("Failed to refresh {}: {}; using cached copy", url, e)
                }
                Err(e) => return Err(e),
            }
        }

        let raw = tokio::fs::read_to_string(cache_file)
            .await
            .map_err(|e| MetaError::io(cache_file, e))?;
        VersionManifest::parse(&raw)
    }

    async fn is_fresh(&self, path: &Path) -> bool {
        let max_age = Duration::from_secs(self.options.manifest_max_age_secs);
        let Ok(metadata) = tokio::fs::metadata(path).await else {
            return false;
        };
        metadata
            .modified()
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .is_some_and(|age| age < max_age)
    }

    async fn ensure_version_file(&self, entry: &VersionEntry, dest: &Path) -> MetaResult<()> {
        if tokio::fs::try_exists(dest).await.unwrap_or(false) {
            let up_to_date = match entry.sha1.as_deref() {
                Some(sha1) => Downloader::validate_sha1(dest, sha1).await?,
                None => true,
            };
            if up_to_date {
                debug!("Version file {:?} is up to date", dest);
                return Ok(());
            }
            warn!("Cached version file {:?} is stale", dest);
        }

        if self.options.offline {
            return Err(MetaError::Offline(dest.to_path_buf()));
        }

        self.downloader
            .download_file(&entry.url, dest, entry.sha1.as_deref())
            .await
    }
}

#[async_trait]
impl VersionMetaSupplier for RemoteMetadataProvider {
    async fn fetch_version_meta(&self) -> MetaResult<VersionDescriptor> {
        self.version_meta().await.cloned()
    }
}
