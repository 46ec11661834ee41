//! Layout Strategy Selector — maps a layout kind to its paginator.
//!
//! `select` never fails: unknown identifiers get the single-column paginator.

use serde_json::Value;

use crate::pagination::dual_column::DualColumnPaginator;
use crate::pagination::measurement::MeasurementProvider;
use crate::pagination::single_column::SingleColumnPaginator;
use crate::pagination::types::{FieldMapping, LayoutKind, Orientation, Page, Section};

/// Inputs of one pagination run. Borrowed; nothing outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct PaginationRequest<'a> {
    pub sections: &'a [Section],
    pub field_mappings: &'a [FieldMapping],
    pub employee_data: &'a Value,
    /// Usable page height, in the same units as the measurement estimates.
    pub content_height: f32,
    pub max_pages: usize,
    pub orientation: Orientation,
}

/// A page-packing strategy.
pub trait Paginator: Send + Sync {
    fn layout_kind(&self) -> LayoutKind;

    /// Lays the request's sections out onto pages numbered `1..=N`, `1 <= N <= max_pages`.
    fn distribute(
        &self,
        request: &PaginationRequest<'_>,
        measure: &dyn MeasurementProvider,
    ) -> Vec<Page>;
}

static SINGLE_COLUMN: SingleColumnPaginator = SingleColumnPaginator;
static TWO_COLUMN: DualColumnPaginator = DualColumnPaginator::new(LayoutKind::TwoColumn);
static SIDEBAR: DualColumnPaginator = DualColumnPaginator::new(LayoutKind::Sidebar);

/// Returns the paginator for a layout kind.
pub fn paginator_for(kind: LayoutKind) -> &'static dyn Paginator {
    match kind {
        LayoutKind::SingleColumn => &SINGLE_COLUMN,
        LayoutKind::TwoColumn => &TWO_COLUMN,
        LayoutKind::Sidebar => &SIDEBAR,
    }
}

/// Returns the paginator for a layout identifier (`single-column`, `two-column`, `sidebar`).
pub fn select(layout_kind: &str) -> &'static dyn Paginator {
    paginator_for(LayoutKind::parse(layout_kind))
}

/// Identifiers of every supported layout kind.
pub fn supported_layouts() -> Vec<&'static str> {
    LayoutKind::SUPPORTED.iter().map(LayoutKind::as_str).collect()
}
