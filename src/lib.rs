pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::config::MetadataOptions;
pub use crate::core::error::{MetaError, MetaResult};
pub use crate::core::http::build_http_client;
pub use crate::core::provider::{
    MetadataProvider, OverrideMetadataProvider, RemoteMetadataProvider, VersionMetaSupplier,
};
pub use crate::core::version::{DownloadReference, VersionDescriptor};

/// Install a structured-logging subscriber driven by `RUST_LOG`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mcmeta=debug")),
        )
        .try_init();
}
