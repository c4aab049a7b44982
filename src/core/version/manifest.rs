// ─── Version Manifest ───
// Parses Mojang-style version manifests (official, experimental or custom).

use serde::{Deserialize, Serialize};

use crate::core::error::MetaResult;

/// Top-level version manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionManifest {
    #[serde(default)]
    pub latest: Option<LatestVersions>,
    pub versions: Vec<VersionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

/// A single entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
    pub url: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(rename = "releaseTime")]
    pub release_time: String,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default, rename = "complianceLevel")]
    pub compliance_level: Option<i32>,
}

impl VersionManifest {
    pub fn parse(raw: &str) -> MetaResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Find a specific version entry by ID (e.g. "1.20.4").
    pub fn find_version(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// List all official stable versions (release only).
    pub fn releases(&self) -> Vec<&VersionEntry> {
        self.versions
            .iter()
            .filter(|v| v.version_type == "release")
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "latest": { "release": "1.20.4", "snapshot": "24w03a" },
        "versions": [
            { "id": "24w03a", "type": "snapshot", "url": "https://example.com/24w03a.json",
              "time": "2024-01-17T13:35:24+00:00", "releaseTime": "2024-01-17T13:24:38+00:00",
              "sha1": "ff", "complianceLevel": 1 },
            { "id": "1.20.4", "type": "release", "url": "https://example.com/1.20.4.json",
              "time": "2023-12-07T08:00:00+00:00", "releaseTime": "2023-12-07T08:00:00+00:00",
              "sha1": "abc123", "complianceLevel": 1 }
        ]
    }"#;

    #[test]
    fn deserialize_manifest_entry() {
        let json = r#"{
            "id": "1.20.4",
            "type": "release",
            "releaseTime": "2023-12-07T08:00:00+00:00",
            "url": "https://example.com/1.20.4.json",
            "sha1": "abc123"
        }"#;
        let entry: VersionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1.20.4");
        assert_eq!(entry.version_type, "release");
        assert_eq!(entry.release_time, "2023-12-07T08:00:00+00:00");
        assert!(entry.compliance_level.is_none());
    }

    #[test]
    fn find_and_filter_versions() {
        let manifest = VersionManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.latest.as_ref().unwrap().release, "1.20.4");
        assert_eq!(
            manifest.find_version("24w03a").unwrap().sha1.as_deref(),
            Some("ff")
        );
        assert!(manifest.find_version("1.20.1-custom").is_none());

        let releases = manifest.releases();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].id, "1.20.4");
    }

    #[test]
    fn experimental_manifest_without_latest() {
        let manifest = VersionManifest::parse(
            r#"{ "versions": [{ "id": "1.19_deep_dark_experimental_snapshot-1", "type": "pending",
                 "url": "https://example.com/x.json", "releaseTime": "2022-02-16T13:00:00+00:00" }] }"#,
        )
        .unwrap();
        assert!(manifest.latest.is_none());
        assert!(manifest.releases().is_empty());
    }
}
