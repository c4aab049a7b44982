pub mod local_override;
pub mod remote;
pub mod supplier;

use std::path::Path;

use crate::core::config::MetadataOptions;
use crate::core::error::MetaResult;
use crate::core::http::build_http_client;
use crate::core::version::VersionDescriptor;

pub use local_override::OverrideMetadataProvider;
pub use remote::RemoteMetadataProvider;
pub use supplier::VersionMetaSupplier;

/// Dispatcher without Box<dyn>: picks the provider the options call for.
pub enum MetadataProvider {
    Remote(RemoteMetadataProvider),
    Override(OverrideMetadataProvider<RemoteMetadataProvider>),
}

impl MetadataProvider {
    pub fn new(options: MetadataOptions, client: reqwest::Client) -> Self {
        match options.override_version.clone() {
            Some(label) => {
                let user_cache = options.user_cache.clone();
                let base = RemoteMetadataProvider::new(options, client);
                Self::Override(OverrideMetadataProvider::new(label, &user_cache, base))
            }
            None => Self::Remote(RemoteMetadataProvider::new(options, client)),
        }
    }

    /// Same as [`MetadataProvider::new`], with the crate's shared HTTP client.
    pub fn from_options(options: MetadataOptions) -> MetaResult<Self> {
        let client = build_http_client()?;
        Ok(Self::new(options, client))
    }

    pub async fn version_meta(&self) -> MetaResult<&VersionDescriptor> {
        match self {
            MetadataProvider::Remote(p) => p.version_meta().await,
            MetadataProvider::Override(p) => p.version_meta().await,
        }
    }

    /// Local jar backing the client/server downloads, when overriding.
    pub fn local_artifact_path(&self) -> Option<&Path> {
        match self {
            MetadataProvider::Remote(_) => None,
            MetadataProvider::Override(p) => Some(p.local_artifact_path()),
        }
    }
}
