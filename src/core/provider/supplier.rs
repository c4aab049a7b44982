use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::MetaResult;
use crate::core::version::VersionDescriptor;

/// Anything that can produce the version descriptor for one version.
///
/// Implementations may hit the network or disk. Each call hands out an
/// owned descriptor, so callers are free to modify their copy.
#[async_trait]
pub trait VersionMetaSupplier: Send + Sync {
    async fn fetch_version_meta(&self) -> MetaResult<VersionDescriptor>;
}

#[async_trait]
impl<T> VersionMetaSupplier for Arc<T>
where
    T: VersionMetaSupplier + ?Sized,
{
    async fn fetch_version_meta(&self) -> MetaResult<VersionDescriptor> {
        (**self).fetch_version_meta().await
    }
}
