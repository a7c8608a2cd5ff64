//! Image source resolution

use super::ImagePayload;
use serde::{Deserialize, Serialize};

/// Where an image's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Absolute http(s) URL
    Url(String),
    /// Object inside a storage bucket
    Storage { bucket: String, path: String },
    /// Neither a usable URL nor a storage path
    Missing,
}

/// Object storage settings used to build public image URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base URL of the storage service, e.g. `https://xyz.supabase.co`
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    /// Public URL of an object, or `None` when no storage service is configured
    pub fn public_url(&self, bucket: &str, path: &str) -> Option<String> {
        let base = self.public_base_url.as_deref()?.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!(
            "{}/storage/v1/object/public/{}/{}",
            base,
            bucket,
            path.trim_start_matches('/')
        ))
    }

    /// Resolve an image source to something loadable
    pub fn resolve(&self, source: &ImageSource) -> Option<String> {
        match source {
            ImageSource::Url(url) => Some(url.clone()),
            ImageSource::Storage { bucket, path } => self.public_url(bucket, path),
            ImageSource::Missing => None,
        }
    }
}

impl ImagePayload {
    pub fn source(&self) -> ImageSource {
        if let Some(url) = self.url.as_deref().filter(|u| is_http_url(u)) {
            return ImageSource::Url(url.to_string());
        }
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => ImageSource::Storage {
                bucket: self.bucket().to_string(),
                path: path.to_string(),
            },
            _ => ImageSource::Missing,
        }
    }
}

pub fn is_http_url(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Remove copy/paste artifacts: a trailing `$0` and surrounding whitespace
pub fn strip_accidental_suffix(url: &str) -> String {
    url.strip_suffix("$0").unwrap_or(url).trim().to_string()
}
