pub mod descriptor;
pub mod manifest;

#[cfg(test)]
pub(crate) mod fixtures;

pub use descriptor::{
    DownloadReference, JavaVersion, Library, LibraryRule, OsRule, RuleAction, VersionDescriptor,
    UNKNOWN_SIZE,
};
pub use manifest::{LatestVersions, VersionEntry, VersionManifest};
