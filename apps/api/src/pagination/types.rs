//! Pagination data model — sections in, pages out.
//!
#![allow(dead_code)]
//!
//! Everything here is created fresh per pagination call; nothing is persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Section types
// ────────────────────────────────────────────────────────────────────────────

/// The kind of content a section renders.
///
/// Unknown type strings are kept verbatim in `Other` so title resolution can
/// fall back to the raw name. `PageBreak` is a sentinel that only forces a
/// page boundary and never appears on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    Experience,
    Education,
    Projects,
    Achievements,
    Training,
    General,
    TechnicalSkills,
    SpecializedSkills,
    PageBreak,
    Other(String),
}

impl SectionType {
    pub fn as_str(&self) -> &str {
        match self {
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Projects => "projects",
            SectionType::Achievements => "achievements",
            SectionType::Training => "training",
            SectionType::General => "general",
            SectionType::TechnicalSkills => "technical_skills",
            SectionType::SpecializedSkills => "specialized_skills",
            SectionType::PageBreak => "page_break",
            SectionType::Other(raw) => raw,
        }
    }

    pub fn is_skills(&self) -> bool {
        matches!(
            self,
            SectionType::TechnicalSkills | SectionType::SpecializedSkills
        )
    }
}

impl From<String> for SectionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "experience" => SectionType::Experience,
            "education" => SectionType::Education,
            "projects" => SectionType::Projects,
            "achievements" => SectionType::Achievements,
            "training" => SectionType::Training,
            "general" => SectionType::General,
            "technical_skills" => SectionType::TechnicalSkills,
            "specialized_skills" => SectionType::SpecializedSkills,
            "page_break" => SectionType::PageBreak,
            _ => SectionType::Other(raw),
        }
    }
}

impl From<SectionType> for String {
    fn from(section_type: SectionType) -> Self {
        section_type.as_str().to_string()
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// Which column a section is assigned to within a two-column/sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPlacement {
    #[default]
    Main,
    Sidebar,
}

// Unrecognized placements fall back to `Main` instead of failing the request.
impl<'de> Deserialize<'de> for LayoutPlacement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("sidebar") => LayoutPlacement::Sidebar,
            _ => LayoutPlacement::Main,
        })
    }
}

/// The page's column arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    SingleColumn,
    TwoColumn,
    Sidebar,
}

impl LayoutKind {
    /// All layout kinds the strategy selector knows about.
    pub const SUPPORTED: [LayoutKind; 3] = [
        LayoutKind::SingleColumn,
        LayoutKind::TwoColumn,
        LayoutKind::Sidebar,
    ];

    /// Parses a layout identifier; anything unknown is treated as single-column.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "two-column" => LayoutKind::TwoColumn,
            "sidebar" => LayoutKind::Sidebar,
            _ => LayoutKind::SingleColumn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::SingleColumn => "single-column",
            LayoutKind::TwoColumn => "two-column",
            LayoutKind::Sidebar => "sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Everything a Measurement Provider needs to know about where a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutContext {
    pub kind: LayoutKind,
    pub placement: LayoutPlacement,
    pub orientation: Orientation,
}

impl LayoutContext {
    pub fn new(kind: LayoutKind, placement: LayoutPlacement, orientation: Orientation) -> Self {
        Self {
            kind,
            placement,
            orientation,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input types
// ────────────────────────────────────────────────────────────────────────────

/// Per-section styling knobs that affect pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingConfig {
    #[serde(default)]
    pub layout_placement: LayoutPlacement,
    /// Caps how many project items are ever considered (projects only).
    #[serde(default)]
    pub projects_to_view: Option<usize>,
}

/// Display override for one (section type, field name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub section_type: SectionType,
    pub field_name: String,
    pub display_name: String,
}

/// One named content block of a CV document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub section_type: SectionType,
    pub display_order: i32,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(default)]
    pub styling: StylingConfig,
}

impl Section {
    pub fn new(section_type: SectionType, display_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            section_type,
            display_order,
            is_required: false,
            field_mappings: Vec::new(),
            styling: StylingConfig::default(),
        }
    }

    pub fn placed(mut self, placement: LayoutPlacement) -> Self {
        self.styling.layout_placement = placement;
        self
    }

    pub fn is_page_break(&self) -> bool {
        self.section_type == SectionType::PageBreak
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// How much of a splittable section's items appear on one specific page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialSectionRecord {
    /// Item objects actually rendered on this page.
    pub items: Vec<Value>,
    /// Zero-based index of `items[0]` within the section's full item list.
    pub start_index: usize,
    pub total_items: usize,
    /// True when items of this section remain after this page's slice.
    pub is_partial: bool,
    /// Resolved title on the first page, `"<title> (continued)"` afterwards.
    pub title: String,
}

/// One produced page. Page numbers are 1-indexed and contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: usize,
    pub sections: Vec<Section>,
    pub partial_sections: BTreeMap<Uuid, PartialSectionRecord>,
}

impl Page {
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number,
            sections: Vec::new(),
            partial_sections: BTreeMap::new(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn contains_section(&self, id: Uuid) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }
}
