//! Content handling for the BioForge section viewer

pub mod cache;
pub mod catalog;
pub mod config;
pub mod content;
pub mod store;

use thiserror::Error;

// Re-exports
pub use cache::ContentCache;
pub use catalog::{parse_route, project_routes, title_from_slug, Project, SectionKind};
pub use config::AppConfig;
pub use content::{
    normalize_blocks, normalize_item, normalize_items, BlockBody, ContentBlock, ContentItem,
    ImagePayload, ImageSource, RawContentItem, StorageConfig,
};
pub use store::{ContentDocument, ContentStore, Section, SectionRow};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown project '{0}'")]
    UnknownProject(String),

    #[error("Project '{slug}' has no section '{section}'")]
    UnknownSection { slug: String, section: String },

    #[error("Not a project route: {0}")]
    InvalidRoute(String),

    #[error("Other error: {0}")]
    Other(String),
}
