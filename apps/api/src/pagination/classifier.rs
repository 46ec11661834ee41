//! Section Classifier — splittability and display titles.

use crate::pagination::types::{FieldMapping, Section, SectionType};

/// Field name whose mapping overrides a section's display title.
const SECTION_TITLE_FIELD: &str = "section_title";

/// Returns true if the section's items may be divided across pages.
pub fn is_splittable(section_type: &SectionType) -> bool {
    matches!(
        section_type,
        SectionType::Experience
            | SectionType::Projects
            | SectionType::Education
            | SectionType::Training
            | SectionType::Achievements
    )
}

/// Built-in title for a section type, if it has one.
pub fn default_title(section_type: &SectionType) -> Option<&'static str> {
    let title = match section_type {
        SectionType::Experience => "Work Experience",
        SectionType::Education => "Education",
        SectionType::Projects => "Projects",
        SectionType::TechnicalSkills => "Technical Skills",
        SectionType::SpecializedSkills => "Specialized Skills",
        SectionType::Training => "Training & Certifications",
        SectionType::Achievements => "Achievements",
        SectionType::General => "General Information",
        SectionType::PageBreak | SectionType::Other(_) => return None,
    };
    Some(title)
}

/// Resolves the human-readable title for a section.
///
/// Lookup order:
/// 1. a `section_title` mapping on the section itself
/// 2. a `section_title` mapping for the section type in `field_mappings`
/// 3. the static default-title table
/// 4. the raw section-type string
pub fn resolve_title(section: &Section, field_mappings: &[FieldMapping]) -> String {
    section
        .field_mappings
        .iter()
        .chain(field_mappings.iter())
        .find(|m| m.field_name == SECTION_TITLE_FIELD && m.section_type == section.section_type)
        .map(|m| m.display_name.clone())
        .or_else(|| default_title(&section.section_type).map(str::to_string))
        .unwrap_or_else(|| section.section_type.as_str().to_string())
}

/// Title used on every page after the first one holding a split section.
pub fn continued_title(title: &str) -> String {
    format!("{title} (continued)")
}
