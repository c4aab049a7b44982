// ─── Version Descriptor ───
// Typed Mojang version JSON, plus the download references it carries.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use url::Url;

/// Size sentinel for artifacts whose byte count was never computed.
pub const UNKNOWN_SIZE: i64 = -1;

/// A fully parsed Mojang version JSON.
///
/// Treated as an immutable value: providers that need a different
/// descriptor build a new one rather than editing a shared instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_index: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    #[serde(default)]
    pub compliance_level: i32,
    #[serde(default)]
    pub downloads: BTreeMap<String, DownloadReference>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<JavaVersion>,
    #[serde(default)]
    pub libraries: Vec<Library>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<serde_json::Value>,
    pub main_class: String,
    #[serde(default)]
    pub minimum_launcher_version: i32,
    pub release_time: String,
    pub time: String,
    #[serde(rename = "type")]
    pub release_type: String,
}

/// One retrievable artifact: where it lives and how to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadReference {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub sha1: String,
    #[serde(default = "unknown_size")]
    pub size: i64,
    pub url: String,
}

fn unknown_size() -> i64 {
    UNKNOWN_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub major_version: u32,
}

impl DownloadReference {
    /// Reference to a jar already present on this machine.
    ///
    /// `sha1` stays empty and `size` is [`UNKNOWN_SIZE`]: the local file is
    /// trusted as-is and consumers see it as unverified.
    pub fn local(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            sha1: String::new(),
            size: UNKNOWN_SIZE,
            url: file_url(path),
        }
    }

    pub fn is_verified(&self) -> bool {
        !self.sha1.is_empty() && self.size != UNKNOWN_SIZE
    }
}

/// `file://` URI for `path`. Relative paths are resolved against the
/// current directory first.
fn file_url(path: &Path) -> String {
    Url::from_file_path(path)
        .or_else(|_| {
            std::path::absolute(path)
                .map_err(|_| ())
                .and_then(Url::from_file_path)
        })
        .map(String::from)
        .unwrap_or_else(|_| format!("file:{}", path.display()))
}

impl VersionDescriptor {
    pub fn download(&self, name: &str) -> Option<&DownloadReference> {
        self.downloads.get(name)
    }

    /// Whether this version was released at or after `release_time`.
    /// Unparseable timestamps on either side compare as `false`.
    pub fn is_version_or_newer(&self, release_time: &str) -> bool {
        match (
            DateTime::parse_from_rfc3339(&self.release_time),
            DateTime::parse_from_rfc3339(release_time),
        ) {
            (Ok(own), Ok(other)) => own >= other,
            _ => false,
        }
    }

    pub fn has_natives_to_extract(&self) -> bool {
        self.libraries.iter().any(|lib| lib.natives.is_some())
    }

    /// Copy of this descriptor with `downloads` and `id` replaced.
    /// Every other field is carried over unchanged.
    pub fn with_downloads(
        &self,
        downloads: BTreeMap<String, DownloadReference>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            downloads,
            id: id.into(),
            ..self.clone()
        }
    }
}

// ─── Library Entry with Rules ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<LibraryRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives: Option<serde_json::Value>,
    /// Keys this crate does not interpret (`extract`, `url`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryRule {
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Disallow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Library {
    /// Evaluate whether this library should be included for the current OS.
    ///
    /// Rules logic (Mojang):
    /// - No rules → allowed.
    /// - Otherwise start disallowed and apply each matching rule in order.
    pub fn is_allowed_for_current_os(&self) -> bool {
        let rules = match &self.rules {
            Some(r) => r,
            None => return true,
        };

        let current_os = current_os_name();
        let mut allowed = false;

        for rule in rules {
            let os_matches = match &rule.os {
                None => true,
                Some(os) => match &os.name {
                    None => true,
                    Some(name) => name == current_os,
                },
            };

            if os_matches {
                allowed = rule.action == RuleAction::Allow;
            }
        }

        allowed
    }

    /// Native classifier for the current OS, with `${arch}` expanded.
    pub fn native_classifier_for_current_os(&self) -> Option<String> {
        let natives = self.natives.as_ref()?;
        let os = current_os_name();
        natives.as_object()?.get(os)?.as_str().map(|s| {
            let arch = if cfg!(target_pointer_width = "64") {
                "64"
            } else {
                "32"
            };
            s.replace("${arch}", arch)
        })
    }
}

/// Get the Mojang OS name for the current platform.
fn current_os_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "osx"
    } else {
        "linux"
    }
}
