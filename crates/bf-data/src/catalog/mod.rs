//! Projects, their sections, and the routes that address them

use serde::{Deserialize, Serialize};

/// Prefix shared by every project route
pub const PROJECTS_ROUTE: &str = "/projects";

/// A research project write-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Project {
    pub fn routes(&self) -> Vec<String> {
        project_routes(&self.slug)
    }
}

/// The fixed pages every project is split into, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    Overview,
    Methodology,
    Testing,
    DataAnalysis,
    Findings,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Overview,
        SectionKind::Methodology,
        SectionKind::Testing,
        SectionKind::DataAnalysis,
        SectionKind::Findings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Overview => "Overview",
            SectionKind::Methodology => "Methodology",
            SectionKind::Testing => "Testing",
            SectionKind::DataAnalysis => "Data Analysis",
            SectionKind::Findings => "Findings",
        }
    }

    /// Route segment after the project slug; the overview lives at the project root
    pub fn segment(self) -> Option<&'static str> {
        match self {
            SectionKind::Overview => None,
            SectionKind::Methodology => Some("methodology"),
            SectionKind::Testing => Some("testing"),
            SectionKind::DataAnalysis => Some("data-analysis"),
            SectionKind::Findings => Some("findings"),
        }
    }

    pub fn from_segment(segment: Option<&str>) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == segment)
    }

    /// Match a stored section title, ignoring case and surrounding whitespace
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(title))
    }

    pub fn route(self, slug: &str) -> String {
        match self.segment() {
            Some(segment) => format!("{}/{}/{}", PROJECTS_ROUTE, slug, segment),
            None => format!("{}/{}", PROJECTS_ROUTE, slug),
        }
    }
}

/// Routes of every section of a project, in reading order
pub fn project_routes(slug: &str) -> Vec<String> {
    SectionKind::ALL.iter().map(|kind| kind.route(slug)).collect()
}

/// Split a section route into its project slug and section
pub fn parse_route(route: &str) -> Option<(&str, SectionKind)> {
    let rest = route.strip_prefix(PROJECTS_ROUTE)?.strip_prefix('/')?;
    let rest = rest.trim_end_matches('/');
    let (slug, segment) = match rest.split_once('/') {
        Some((slug, segment)) => (slug, Some(segment)),
        None => (rest, None),
    };
    if slug.is_empty() {
        return None;
    }
    SectionKind::from_segment(segment).map(|kind| (slug, kind))
}

/// "peripheral-nerve-regeneration" -> "Peripheral Nerve Regeneration"
pub fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut at_word_start = true;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !is_word;
    }
    title
}

/// Projects shown when no content document provides any
pub fn builtin_projects() -> Vec<Project> {
    vec![Project {
        slug: "peripheral-nerve-regeneration-genes".to_string(),
        title: "Peripheral Nerve Regeneration".to_string(),
        description: "Exploring gene regulation in peripheral nerve repair.".to_string(),
    }]
}
