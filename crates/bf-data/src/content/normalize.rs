//! Tolerant coercion of historical content shapes into typed blocks

use super::{
    strip_accidental_suffix, BlockBody, ContentBlock, ContentItem, ImagePayload, RawContentItem,
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Text,
    Code,
    Image,
}

impl BlockKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Some(BlockKind::Text),
            "CODE" => Some(BlockKind::Code),
            "IMAGE" => Some(BlockKind::Image),
            _ => None,
        }
    }
}

/// Normalize one stored row. Rows of unknown type yield `None`.
pub fn normalize_item(raw: &RawContentItem) -> Option<ContentItem> {
    let parsed = match &raw.data {
        Value::String(s) => parse_embedded(s),
        other => other.clone(),
    };
    let payload = nested_payload(&parsed);

    let kind_name = parsed
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or(&raw.kind);
    let Some(kind) = BlockKind::parse(kind_name) else {
        warn!(id = %raw.id, kind = %raw.kind, "unknown content type, skipping");
        return None;
    };

    let block = ContentBlock {
        title: raw.title.clone().or_else(|| string_field(&parsed, "title")),
        subtitle: raw.subtitle.clone().or_else(|| string_field(&parsed, "subtitle")),
        body: body_from(kind, payload),
    };

    Some(ContentItem {
        id: raw.id.clone(),
        order: raw.order,
        section_id: raw.section_id.clone(),
        block,
    })
}

/// Normalize rows, dropping unknown types and ordering by `order`
pub fn normalize_items<'a, I>(rows: I) -> Vec<ContentItem>
where
    I: IntoIterator<Item = &'a RawContentItem>,
{
    let mut items: Vec<ContentItem> = rows.into_iter().filter_map(normalize_item).collect();
    items.sort_by_key(|item| item.order);
    items
}

/// Normalize already-shaped blocks (`{type, title?, subtitle?, data}`).
///
/// Accepts a single block or an array of blocks. Image data may be flat or
/// wrapped one level deeper under its own `data` key.
pub fn normalize_blocks(value: &Value) -> Vec<ContentBlock> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        single => vec![single],
    };

    items
        .into_iter()
        .filter_map(|item| {
            let kind = item.get("type").and_then(Value::as_str).and_then(BlockKind::parse)?;
            let data = item.get("data").unwrap_or(&Value::Null);
            let payload = match kind {
                BlockKind::Image => nested_payload(data),
                _ => data,
            };
            Some(ContentBlock {
                title: string_field(item, "title"),
                subtitle: string_field(item, "subtitle"),
                body: body_from(kind, payload),
            })
        })
        .collect()
}

fn body_from(kind: BlockKind, payload: &Value) -> BlockBody {
    match kind {
        BlockKind::Text => BlockBody::Text {
            text: string_field(payload, "text").unwrap_or_default(),
        },
        BlockKind::Code => BlockBody::Code {
            code: string_field(payload, "code").unwrap_or_default(),
            language: non_empty_field(payload, "language"),
        },
        BlockKind::Image => BlockBody::Image(image_payload(payload)),
    }
}

fn image_payload(payload: &Value) -> ImagePayload {
    ImagePayload {
        url: non_empty_field(payload, "url").map(|url| strip_accidental_suffix(&url)),
        path: non_empty_field(payload, "path"),
        bucket: non_empty_field(payload, "bucket"),
        alt: non_empty_field(payload, "alt"),
        caption: non_empty_field(payload, "caption"),
        width: number_field(payload, "width").unwrap_or(DEFAULT_IMAGE_WIDTH),
        height: number_field(payload, "height").unwrap_or(DEFAULT_IMAGE_HEIGHT),
    }
}

/// Payload stored one level deeper under `data`, or the value itself
fn nested_payload(value: &Value) -> &Value {
    match value.get("data") {
        Some(inner) if !inner.is_null() => inner,
        _ => value,
    }
}

fn parse_embedded(s: &str) -> Value {
    match serde_json::from_str(s) {
        Ok(value) => value,
        Err(e) => {
            let preview: String = s.chars().take(120).collect();
            warn!(error = %e, data = %preview, "failed to parse content data string");
            Value::Object(Map::new())
        }
    }
}

/// Field coerced to a string; null and absent yield `None`
fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`string_field`] but also treats empty strings as absent
fn non_empty_field(value: &Value, key: &str) -> Option<String> {
    string_field(value, key).filter(|s| !s.is_empty())
}

/// Finite number, or a string that parses as one
fn number_field(value: &Value, key: &str) -> Option<f32> {
    let number = match value.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number as f32)
}
