//! Single-Column Paginator — greedy packing of one ordered section stream onto pages.
//!
//! # Algorithm
//! Sections are walked in display order against one running page and height.
//! - `page_break` seals the current page if it has content.
//! - Non-splittable sections are placed whole; they move to a new page when
//!   they would overflow a page that already holds something.
//! - Splittable sections are sliced: each pass asks the Measurement Provider
//!   how many of the remaining items fit, records a `PartialSectionRecord`,
//!   and seals the page while items remain.
//!
//! # Termination
//! Every pass either consumes items or seals a non-empty page, and the run is
//! bounded by `max_pages` plus a per-section iteration cap. Anything cut off by
//! those bounds is dropped and logged.

use serde_json::Value;
use tracing::{debug, warn};

use crate::pagination::classifier::{continued_title, is_splittable, resolve_title};
use crate::pagination::data::get_section_data;
use crate::pagination::measurement::{
    FittingItem, MeasurementProvider, SplitResult, SECTION_TITLE_ALLOWANCE,
};
use crate::pagination::placement::sort_by_display_order;
use crate::pagination::strategy::{PaginationRequest, Paginator};
use crate::pagination::types::{
    LayoutContext, LayoutKind, LayoutPlacement, Page, PartialSectionRecord, Section, SectionType,
};

/// Below this much free space a page is sealed before trying to split into it.
pub const MIN_AVAILABLE_HEIGHT: f32 = 100.0;

/// Absolute ceiling on split passes for one section.
pub const MAX_SPLIT_ITERATIONS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Page-boundary decisions
// ────────────────────────────────────────────────────────────────────────────

/// What the run does next at a page-boundary decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep filling the current page.
    Accumulate,
    /// Seal the current page and continue on a fresh one.
    SealAndAdvance,
    /// Nothing left to place for the current section.
    Done,
}

/// A `page_break` only starts a new page when the current one has content.
pub fn page_break_step(page_has_content: bool) -> Step {
    if page_has_content {
        Step::SealAndAdvance
    } else {
        Step::Accumulate
    }
}

/// A whole section moves to a new page only if it overflows a non-empty page.
pub fn whole_section_step(
    current_height: f32,
    estimated: f32,
    content_height: f32,
    page_has_content: bool,
) -> Step {
    if current_height + estimated > content_height && page_has_content {
        Step::SealAndAdvance
    } else {
        Step::Accumulate
    }
}

/// Safety valve: a non-empty page with almost no room left is sealed before splitting.
pub fn free_space_step(available: f32, page_has_content: bool) -> Step {
    if available < MIN_AVAILABLE_HEIGHT && page_has_content {
        Step::SealAndAdvance
    } else {
        Step::Accumulate
    }
}

/// After placing a slice: continue on a new page while items remain.
pub fn after_slice_step(remaining: usize) -> Step {
    if remaining == 0 {
        Step::Done
    } else {
        Step::SealAndAdvance
    }
}

/// Split passes allowed per section: `min(max_pages * 2, 20)`.
pub fn split_iteration_limit(max_pages: usize) -> usize {
    max_pages.saturating_mul(2).min(MAX_SPLIT_ITERATIONS)
}

// ────────────────────────────────────────────────────────────────────────────
// Page cursor
// ────────────────────────────────────────────────────────────────────────────

/// Running state of one column: sealed pages, the open page and its used height.
///
/// The open page never gets a number above `max_pages`.
#[derive(Debug)]
pub(crate) struct PageCursor {
    pages: Vec<Page>,
    current: Page,
    current_height: f32,
    max_pages: usize,
}

impl PageCursor {
    pub(crate) fn new(max_pages: usize) -> Self {
        Self {
            pages: Vec::new(),
            current: Page::new(1),
            current_height: 0.0,
            max_pages: max_pages.max(1),
        }
    }

    pub(crate) fn has_content(&self) -> bool {
        self.current.has_content()
    }

    pub(crate) fn current_height(&self) -> f32 {
        self.current_height
    }

    pub(crate) fn page_number(&self) -> usize {
        self.current.page_number
    }

    /// Seals the open page and opens the next one. Returns false at the page cap.
    pub(crate) fn seal_and_advance(&mut self) -> bool {
        if self.current.page_number >= self.max_pages {
            return false;
        }
        let next = Page::new(self.current.page_number + 1);
        let sealed = std::mem::replace(&mut self.current, next);
        self.pages.push(sealed);
        self.current_height = 0.0;
        true
    }

    fn place_whole(&mut self, section: &Section, height: f32) {
        self.current.sections.push(section.clone());
        self.current_height += height;
    }

    fn place_slice(&mut self, section: &Section, record: PartialSectionRecord, height: f32) {
        if !self.current.contains_section(section.id) {
            self.current.sections.push(section.clone());
        }
        self.current.partial_sections.insert(section.id, record);
        self.current_height += height;
    }

    /// Seals the last page if it has content; an empty run yields one blank page.
    pub(crate) fn finish(mut self) -> Vec<Page> {
        if self.current.has_content() {
            self.pages.push(self.current);
        }
        if self.pages.is_empty() {
            self.pages.push(Page::new(1));
        }
        self.pages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Column run
// ────────────────────────────────────────────────────────────────────────────

/// Packs `sections` (already in display order) onto pages for one column.
///
/// Shared by the single-column paginator and both columns of the dual-column one.
pub(crate) fn paginate_column(
    sections: &[Section],
    request: &PaginationRequest<'_>,
    context: &LayoutContext,
    measure: &dyn MeasurementProvider,
) -> Vec<Page> {
    let mut cursor = PageCursor::new(request.max_pages);

    for section in sections {
        if section.is_page_break() {
            if page_break_step(cursor.has_content()) == Step::SealAndAdvance
                && !cursor.seal_and_advance()
            {
                debug!(
                    page = cursor.page_number(),
                    "Page break ignored: page cap reached"
                );
            }
            continue;
        }

        let Some(items) = get_section_data(request.employee_data, &section.section_type) else {
            continue;
        };

        if is_splittable(&section.section_type) {
            place_splittable(&mut cursor, section, items, request, context, measure);
        } else {
            place_non_splittable(&mut cursor, section, &items, request, context, measure);
        }
    }

    cursor.finish()
}

fn place_non_splittable(
    cursor: &mut PageCursor,
    section: &Section,
    items: &[Value],
    request: &PaginationRequest<'_>,
    context: &LayoutContext,
    measure: &dyn MeasurementProvider,
) {
    let estimated = measure.estimate_height(&section.section_type, items, context);

    let step = whole_section_step(
        cursor.current_height(),
        estimated,
        request.content_height,
        cursor.has_content(),
    );
    if step == Step::SealAndAdvance && !cursor.seal_and_advance() {
        warn!(
            section_id = %section.id,
            section_type = %section.section_type,
            max_pages = request.max_pages,
            "Section dropped: page cap reached"
        );
        return;
    }

    cursor.place_whole(section, estimated);
}

fn place_splittable(
    cursor: &mut PageCursor,
    section: &Section,
    mut items: Vec<Value>,
    request: &PaginationRequest<'_>,
    context: &LayoutContext,
    measure: &dyn MeasurementProvider,
) {
    if section.section_type == SectionType::Projects {
        if let Some(cap) = section.styling.projects_to_view {
            items.truncate(cap);
        }
    }

    let title = resolve_title(section, request.field_mappings);
    let total_items = items.len();
    let limit = split_iteration_limit(request.max_pages.max(1));
    let mut slices_emitted = 0usize;
    let mut iterations = 0usize;

    while !items.is_empty() {
        if iterations >= limit {
            warn!(
                section_id = %section.id,
                section_type = %section.section_type,
                dropped_items = items.len(),
                iterations,
                "Section truncated: split iteration cap reached"
            );
            return;
        }
        iterations += 1;

        let available = request.content_height - cursor.current_height();

        if free_space_step(available, cursor.has_content()) == Step::SealAndAdvance {
            if !cursor.seal_and_advance() {
                warn_page_cap(section, items.len(), request.max_pages);
                return;
            }
            continue;
        }

        let split = if available >= MIN_AVAILABLE_HEIGHT {
            measure.split(&section.section_type, &items, available, &title, context)
        } else {
            SplitResult::default()
        };

        let split = if split.fitting.is_empty() {
            if cursor.has_content() {
                warn!(
                    section_id = %section.id,
                    section_type = %section.section_type,
                    available,
                    "Estimation anomaly: no items fit despite free space; starting a new page"
                );
                if !cursor.seal_and_advance() {
                    warn_page_cap(section, items.len(), request.max_pages);
                    return;
                }
                continue;
            }
            // A fresh page is as empty as it gets; place the head item alone.
            warn!(
                section_id = %section.id,
                section_type = %section.section_type,
                available,
                "Estimation anomaly: item does not fit on an empty page; placing it anyway"
            );
            force_head_item(&section.section_type, &items, context, measure)
        } else {
            split
        };

        // The slice is taken from our own list so pages always partition the items.
        let consumed = split.fitting.len().min(items.len());
        let rest = items.split_off(consumed);
        let slice_height: f32 = split
            .fitting
            .iter()
            .take(consumed)
            .map(|f| f.estimated_height)
            .sum();

        let record = PartialSectionRecord {
            start_index: total_items - (consumed + rest.len()),
            total_items,
            is_partial: !rest.is_empty(),
            title: if slices_emitted == 0 {
                title.clone()
            } else {
                continued_title(&title)
            },
            items,
        };
        cursor.place_slice(section, record, slice_height + SECTION_TITLE_ALLOWANCE);
        slices_emitted += 1;
        items = rest;

        if after_slice_step(items.len()) == Step::SealAndAdvance && !cursor.seal_and_advance() {
            warn_page_cap(section, items.len(), request.max_pages);
            return;
        }
    }
}

fn force_head_item(
    section_type: &SectionType,
    items: &[Value],
    context: &LayoutContext,
    measure: &dyn MeasurementProvider,
) -> SplitResult {
    let Some((head, rest)) = items.split_first() else {
        return SplitResult::default();
    };
    SplitResult {
        fitting: vec![FittingItem {
            content: head.clone(),
            estimated_height: measure.estimate_height(
                section_type,
                std::slice::from_ref(head),
                context,
            ),
        }],
        remaining: rest.to_vec(),
    }
}

fn warn_page_cap(section: &Section, dropped_items: usize, max_pages: usize) {
    warn!(
        section_id = %section.id,
        section_type = %section.section_type,
        dropped_items,
        max_pages,
        "Section truncated: page cap reached"
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Paginator
// ────────────────────────────────────────────────────────────────────────────

/// Lays every section out in one full-width column, ignoring placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleColumnPaginator;

impl Paginator for SingleColumnPaginator {
    fn layout_kind(&self) -> LayoutKind {
        LayoutKind::SingleColumn
    }

    fn distribute(
        &self,
        request: &PaginationRequest<'_>,
        measure: &dyn MeasurementProvider,
    ) -> Vec<Page> {
        let sections = sort_by_display_order(request.sections);
        let context = LayoutContext::new(
            LayoutKind::SingleColumn,
            LayoutPlacement::Main,
            request.orientation,
        );
        paginate_column(&sections, request, &context, measure)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
