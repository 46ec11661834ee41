//! Placement Resolver — display ordering and main/sidebar column membership.

use crate::pagination::types::{LayoutKind, LayoutPlacement, Section};

/// Sorts sections by display order (stable, so ties keep caller order).
pub fn sort_by_display_order(sections: &[Section]) -> Vec<Section> {
    let mut sorted = sections.to_vec();
    sorted.sort_by_key(|s| s.display_order);
    sorted
}

/// Splits sections into `(main, sidebar)` columns, each in display order.
pub fn partition(sections: &[Section]) -> (Vec<Section>, Vec<Section>) {
    sort_by_display_order(sections)
        .into_iter()
        .partition(|s| s.styling.layout_placement == LayoutPlacement::Main)
}

/// `Sidebar` when the sidebar column holds a skills section, `TwoColumn` otherwise.
pub fn classify_layout(_main: &[Section], sidebar: &[Section]) -> LayoutKind {
    if sidebar.iter().any(|s| s.section_type.is_skills()) {
        LayoutKind::Sidebar
    } else {
        LayoutKind::TwoColumn
    }
}

/// Picks a layout kind for a document whose caller did not name one.
///
/// Documents without any sidebar section are single-column.
pub fn infer_layout(sections: &[Section]) -> LayoutKind {
    let (main, sidebar) = partition(sections);
    if sidebar.is_empty() {
        LayoutKind::SingleColumn
    } else {
        classify_layout(&main, &sidebar)
    }
}
