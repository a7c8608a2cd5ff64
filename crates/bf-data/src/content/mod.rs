//! Content items as stored and as rendered

mod image;
mod normalize;

pub use image::{is_http_url, strip_accidental_suffix, ImageSource, StorageConfig};
pub use normalize::{normalize_blocks, normalize_item, normalize_items};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback image dimensions when the payload carries none
pub const DEFAULT_IMAGE_WIDTH: f32 = 1600.0;
pub const DEFAULT_IMAGE_HEIGHT: f32 = 900.0;

/// Storage bucket used when an image payload names none
pub const DEFAULT_BUCKET: &str = "images";

/// A content row as it comes out of storage.
///
/// `data` is loosely typed: it may be an object, a nested object under its own
/// `data` key, or a JSON document serialized into a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub order: i64,
    #[serde(default, alias = "section_id")]
    pub section_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

/// Image reference plus presentation hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub url: Option<String>,
    pub path: Option<String>,
    pub bucket: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub width: f32,
    pub height: f32,
}

impl Default for ImagePayload {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            bucket: None,
            alt: None,
            caption: None,
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

impl ImagePayload {
    pub fn bucket(&self) -> &str {
        self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET)
    }
}

/// Typed body of a content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "UPPERCASE")]
pub enum BlockBody {
    Text { text: String },
    Code { code: String, language: Option<String> },
    Image(ImagePayload),
}

/// A block ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: BlockBody,
}

/// A normalized content row
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub order: i64,
    pub section_id: String,
    pub block: ContentBlock,
}
