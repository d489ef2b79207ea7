//! api::models
//!
//! Typed shapes for the resources the insight cards render. The core
//! fetch path deals in opaque JSON items; these models are the
//! card-facing interpretation of the common resources.

use std::collections::BTreeMap;

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A published release.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    /// Display name; releases created from bare tags may have none.
    pub name: Option<String>,
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub prerelease: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Name to display, falling back to the tag.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

/// A repository contributor with commit count.
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub id: u64,
    pub html_url: String,
    pub contributions: u64,
}

/// Language breakdown: bytes of code per language.
///
/// Served as a single JSON object, not a paginated array.
pub type Languages = BTreeMap<String, u64>;

/// Repository README metadata and content.
#[derive(Debug, Clone, Deserialize)]
pub struct Readme {
    pub name: String,
    pub path: String,
    pub html_url: Option<String>,
    /// Raw content as served (base64 with embedded newlines).
    pub content: String,
    pub encoding: String,
}

impl Readme {
    /// Decode the content if it is base64-encoded.
    ///
    /// Returns `None` for unknown encodings or undecodable content.
    pub fn decoded_content(&self) -> Option<String> {
        if self.encoding != "base64" {
            return None;
        }
        let stripped: String = self.content.split_whitespace().collect();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(stripped)
            .ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// A branch, as listed by the branches endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub protected: bool,
}

/// Repository license information.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseInfo {
    pub license: License,
}

/// A license identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
}
