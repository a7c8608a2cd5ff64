//! In-memory content store loaded from a JSON document

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{builtin_projects, parse_route, Project, SectionKind};
use crate::content::{normalize_items, ContentItem, RawContentItem};
use crate::DataError;

/// A section row: which project it belongs to and what it is called
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRow {
    pub id: String,
    #[serde(alias = "project")]
    pub project_slug: String,
    pub title: String,
}

/// On-disk shape of the content document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub projects: Vec<Project>,
    pub sections: Vec<SectionRow>,
    pub items: Vec<RawContentItem>,
}

/// A project section with its normalized content
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub slug: String,
    pub kind: SectionKind,
    pub items: Vec<ContentItem>,
}

impl Section {
    pub fn title(&self) -> &str {
        self.kind.title()
    }

    pub fn route(&self) -> String {
        self.kind.route(&self.slug)
    }
}

/// Projects and their sections, keyed for lookup by route
pub struct ContentStore {
    projects: Vec<Project>,
    sections: AHashMap<(String, SectionKind), Section>,
}

impl ContentStore {
    /// Load a content document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            projects = store.projects.len(),
            sections = store.sections.len(),
            "content loaded"
        );
        Ok(store)
    }

    pub fn from_json(contents: &str) -> Result<Self, DataError> {
        let document: ContentDocument = serde_json::from_str(contents)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: ContentDocument) -> Self {
        let projects = if document.projects.is_empty() {
            builtin_projects()
        } else {
            document.projects
        };

        let mut sections: AHashMap<(String, SectionKind), Section> = AHashMap::new();
        let mut by_id: AHashMap<String, (String, SectionKind)> = AHashMap::new();
        for row in document.sections {
            let Some(kind) = SectionKind::from_title(&row.title) else {
                warn!(id = %row.id, title = %row.title, "unknown section title, skipping");
                continue;
            };
            let key = (row.project_slug.clone(), kind);
            by_id.insert(row.id.clone(), key.clone());
            sections.insert(
                key,
                Section {
                    id: row.id,
                    slug: row.project_slug,
                    kind,
                    items: Vec::new(),
                },
            );
        }

        for item in normalize_items(&document.items) {
            match by_id.get(&item.section_id) {
                Some(key) => {
                    if let Some(section) = sections.get_mut(key) {
                        section.items.push(item);
                    }
                }
                None => warn!(id = %item.id, section = %item.section_id, "item for unknown section"),
            }
        }

        Self { projects, sections }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, slug: &str) -> Result<&Project, DataError> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| DataError::UnknownProject(slug.to_string()))
    }

    /// Ordered section routes of a project
    pub fn routes_for(&self, slug: &str) -> Result<Vec<String>, DataError> {
        self.project(slug).map(Project::routes)
    }

    pub fn section(&self, slug: &str, kind: SectionKind) -> Result<&Section, DataError> {
        self.project(slug)?;
        self.sections
            .get(&(slug.to_string(), kind))
            .ok_or_else(|| DataError::UnknownSection {
                slug: slug.to_string(),
                section: kind.title().to_string(),
            })
    }

    pub fn section_for_route(&self, route: &str) -> Result<&Section, DataError> {
        let (slug, kind) =
            parse_route(route).ok_or_else(|| DataError::InvalidRoute(route.to_string()))?;
        self.section(slug, kind)
    }
}
