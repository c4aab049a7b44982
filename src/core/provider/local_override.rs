use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::core::config::MetadataOptions;
use crate::core::error::{MetaError, MetaResult};
use crate::core::paths::CachePaths;
use crate::core::version::{DownloadReference, VersionDescriptor};

use super::supplier::VersionMetaSupplier;

/// Download targets that are redirected to the local jar.
const OVERRIDDEN_TARGETS: [&str; 2] = ["client", "server"];

/// Serves the descriptor of a base supplier with its client and server
/// downloads pointing at a jar in the user cache.
///
/// The derived descriptor is built once per instance. A failed base fetch
/// leaves nothing cached, so the next call fetches again.
pub struct OverrideMetadataProvider<S> {
    version_label: String,
    local_artifact: PathBuf,
    base: S,
    meta: OnceCell<VersionDescriptor>,
}

impl<S: VersionMetaSupplier> OverrideMetadataProvider<S> {
    pub fn new(version_label: impl Into<String>, cache_root: &Path, base: S) -> Self {
        let version_label = version_label.into();
        let local_artifact = CachePaths::new(cache_root).local_artifact(&version_label);

        Self {
            version_label,
            local_artifact,
            base,
            meta: OnceCell::new(),
        }
    }

    pub fn from_options(
        version_label: impl Into<String>,
        options: &MetadataOptions,
        base: S,
    ) -> Self {
        Self::new(version_label, &options.user_cache, base)
    }

    pub fn version_label(&self) -> &str {
        &self.version_label
    }

    /// `{cacheRoot}/{label}/{label}.jar`. The file is not required to exist.
    pub fn local_artifact_path(&self) -> &Path {
        &self.local_artifact
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    /// The overridden descriptor, fetching the base on first use.
    ///
    /// Concurrent first calls share a single base fetch.
    pub async fn version_meta(&self) -> MetaResult<&VersionDescriptor> {
        self.meta
            .get_or_try_init(|| async {
                debug!(
                    "Resolving base metadata for override {}",
                    self.version_label
                );
                let base = self.base.fetch_version_meta().await?;
                Ok::<_, MetaError>(self.apply_override(&base))
            })
            .await
    }

    fn apply_override(&self, base: &VersionDescriptor) -> VersionDescriptor {
        let reference = DownloadReference::local(&self.local_artifact);

        let mut downloads = base.downloads.clone();
        for target in OVERRIDDEN_TARGETS {
            downloads.insert(target.to_string(), reference.clone());
        }

        info!(
            "Overriding {} downloads of {} with {}",
            OVERRIDDEN_TARGETS.join("/"),
            base.id,
            reference.url
        );
        base.with_downloads(downloads, &self.version_label)
    }
}

#[async_trait]
impl<S: VersionMetaSupplier> VersionMetaSupplier for OverrideMetadataProvider<S> {
    async fn fetch_version_meta(&self) -> MetaResult<VersionDescriptor> {
        self.version_meta().await.cloned()
    }
}
