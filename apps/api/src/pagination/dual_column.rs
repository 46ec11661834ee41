//! Dual-Column Paginator — main and sidebar columns paginated independently, then merged.
//!
//! Columns do not balance against each other: a short column simply contributes
//! nothing to trailing pages.

use crate::pagination::measurement::MeasurementProvider;
use crate::pagination::placement::partition;
use crate::pagination::single_column::paginate_column;
use crate::pagination::strategy::{PaginationRequest, Paginator};
use crate::pagination::types::{LayoutContext, LayoutKind, LayoutPlacement, Page};

/// Paginator for `two-column` and `sidebar` layouts.
#[derive(Debug, Clone, Copy)]
pub struct DualColumnPaginator {
    kind: LayoutKind,
}

impl DualColumnPaginator {
    pub const fn new(kind: LayoutKind) -> Self {
        Self { kind }
    }
}

impl Paginator for DualColumnPaginator {
    fn layout_kind(&self) -> LayoutKind {
        self.kind
    }

    fn distribute(
        &self,
        request: &PaginationRequest<'_>,
        measure: &dyn MeasurementProvider,
    ) -> Vec<Page> {
        let (main, sidebar) = partition(request.sections);

        let main_context =
            LayoutContext::new(self.kind, LayoutPlacement::Main, request.orientation);
        let sidebar_context =
            LayoutContext::new(self.kind, LayoutPlacement::Sidebar, request.orientation);

        let main_pages = paginate_column(&main, request, &main_context, measure);
        let sidebar_pages = paginate_column(&sidebar, request, &sidebar_context, measure);

        merge_columns(main_pages, sidebar_pages)
    }
}

/// Merges two independently numbered page runs by page index.
///
/// Main-column sections come before sidebar sections on each merged page.
pub fn merge_columns(main_pages: Vec<Page>, sidebar_pages: Vec<Page>) -> Vec<Page> {
    let total_pages = main_pages.len().max(sidebar_pages.len()).max(1);
    let mut main_iter = main_pages.into_iter();
    let mut sidebar_iter = sidebar_pages.into_iter();

    (0..total_pages)
        .map(|idx| {
            let mut merged = Page::new(idx + 1);
            for column_page in [main_iter.next(), sidebar_iter.next()].into_iter().flatten() {
                merged.sections.extend(column_page.sections);
                merged.partial_sections.extend(column_page.partial_sections);
            }
            merged
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::measurement::testing::{FixedMeasurement, RecordingMeasurement};
    use crate::pagination::types::{Orientation, Section, SectionType};
    use serde_json::{json, Value};

    fn items(n: usize) -> Value {
        Value::Array((0..n).map(|i| json!({ "idx": i })).collect())
    }

    fn request<'a>(
        sections: &'a [Section],
        data: &'a Value,
        max_pages: usize,
    ) -> PaginationRequest<'a> {
        PaginationRequest {
            sections,
            field_mappings: &[],
            employee_data: data,
            content_height: 200.0,
            max_pages,
            orientation: Orientation::Portrait,
        }
    }

    #[test]
    fn test_main_three_pages_sidebar_one_page_merge() {
        let exp = Section::new(SectionType::Experience, 0);
        let skills =
            Section::new(SectionType::TechnicalSkills, 1).placed(LayoutPlacement::Sidebar);
        let sections = vec![exp.clone(), skills.clone()];
        // 4 experience items per page -> 10 items over 3 pages
        let data = json!({ "experience": items(10), "technical_skills": ["Rust", "SQL"] });

        let paginator = DualColumnPaginator::new(LayoutKind::Sidebar);
        let pages =
            paginator.distribute(&request(&sections, &data, 10), &FixedMeasurement::new(40.0));

        assert_eq!(pages.len(), 3);
        assert_eq!(pages.iter().map(|p| p.page_number).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pages[0].sections, vec![exp.clone(), skills]);
        assert_eq!(pages[1].sections, vec![exp.clone()]);
        assert_eq!(pages[2].sections, vec![exp.clone()]);
        assert!(pages.iter().all(|p| p.partial_sections.contains_key(&exp.id)));
    }

    #[test]
    fn test_sidebar_longer_than_main() {
        let general = Section::new(SectionType::General, 0);
        let edu = Section::new(SectionType::Education, 1).placed(LayoutPlacement::Sidebar);
        let sections = vec![general.clone(), edu.clone()];
        let data = json!({ "general": {"name": "Ada"}, "education": items(6) });

        let pages = DualColumnPaginator::new(LayoutKind::TwoColumn)
            .distribute(&request(&sections, &data, 10), &FixedMeasurement::new(40.0));

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].sections, vec![general, edu.clone()]);
        assert_eq!(pages[1].sections, vec![edu.clone()]);
        assert_eq!(pages[1].partial_sections[&edu.id].title, "Education (continued)");
    }

    #[test]
    fn test_columns_respect_max_pages() {
        let exp = Section::new(SectionType::Experience, 0);
        let edu = Section::new(SectionType::Education, 1).placed(LayoutPlacement::Sidebar);
        let sections = vec![exp.clone(), edu.clone()];
        let data = json!({ "experience": items(40), "education": items(40) });

        let pages = DualColumnPaginator::new(LayoutKind::TwoColumn)
            .distribute(&request(&sections, &data, 2), &FixedMeasurement::new(40.0));
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert!(page.partial_sections[&exp.id].is_partial);
            assert!(page.partial_sections[&edu.id].is_partial);
        }
    }

    #[test]
    fn test_merge_keeps_partial_records_from_both_columns() {
        let exp = Section::new(SectionType::Experience, 0);
        let edu = Section::new(SectionType::Education, 1).placed(LayoutPlacement::Sidebar);
        let sections = vec![exp.clone(), edu.clone()];
        // main: 4 + 4 + 2 items, sidebar: 4 + 2 items
        let data = json!({ "experience": items(10), "education": items(6) });

        let pages = DualColumnPaginator::new(LayoutKind::TwoColumn)
            .distribute(&request(&sections, &data, 10), &FixedMeasurement::new(40.0));

        assert_eq!(pages.len(), 3);
        for page in &pages[..2] {
            assert_eq!(page.sections, vec![exp.clone(), edu.clone()]);
            assert_eq!(page.partial_sections.len(), 2);
        }
        assert_eq!(pages[0].partial_sections[&exp.id].start_index, 0);
        assert_eq!(pages[0].partial_sections[&edu.id].start_index, 0);
        assert_eq!(pages[1].partial_sections[&exp.id].start_index, 4);
        assert_eq!(pages[1].partial_sections[&edu.id].start_index, 4);
        assert!(!pages[1].partial_sections[&edu.id].is_partial);
        assert_eq!(pages[2].sections, vec![exp.clone()]);
        assert!(!pages[2].partial_sections.contains_key(&edu.id));
    }

    #[test]
    fn test_columns_measured_with_their_own_placement_and_orientation() {
        let exp = Section::new(SectionType::Experience, 0);
        let general = Section::new(SectionType::General, 1);
        let edu = Section::new(SectionType::Education, 2).placed(LayoutPlacement::Sidebar);
        let skills =
            Section::new(SectionType::TechnicalSkills, 3).placed(LayoutPlacement::Sidebar);
        let sections = vec![exp, general, edu, skills];
        let data = json!({
            "experience": items(6),
            "general": {"name": "Ada"},
            "education": items(6),
            "technical_skills": ["Rust"]
        });
        let req = PaginationRequest {
            orientation: Orientation::Landscape,
            ..request(&sections, &data, 5)
        };

        let measure = RecordingMeasurement::new(FixedMeasurement::new(40.0));
        DualColumnPaginator::new(LayoutKind::Sidebar).distribute(&req, &measure);

        let main = LayoutContext::new(
            LayoutKind::Sidebar,
            LayoutPlacement::Main,
            Orientation::Landscape,
        );
        let sidebar = LayoutContext::new(
            LayoutKind::Sidebar,
            LayoutPlacement::Sidebar,
            Orientation::Landscape,
        );
        assert_eq!(measure.contexts_for(&SectionType::Experience), vec![main]);
        assert_eq!(measure.contexts_for(&SectionType::General), vec![main]);
        assert_eq!(measure.contexts_for(&SectionType::Education), vec![sidebar]);
        assert_eq!(measure.contexts_for(&SectionType::TechnicalSkills), vec![sidebar]);
    }

    #[test]
    fn test_empty_columns_yield_one_blank_page() {
        let data = json!({});
        let pages = DualColumnPaginator::new(LayoutKind::Sidebar)
            .distribute(&request(&[], &data, 5), &FixedMeasurement::new(40.0));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].sections.is_empty());
        assert!(pages[0].partial_sections.is_empty());
    }

    #[test]
    fn test_merge_tolerates_missing_column_pages() {
        let merged = merge_columns(vec![Page::new(1)], vec![Page::new(1), Page::new(2)]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].page_number, 2);

        let merged = merge_columns(Vec::new(), Vec::new());
        assert_eq!(merged.len(), 1);
    }
}
