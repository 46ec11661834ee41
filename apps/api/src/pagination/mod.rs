// CV pagination engine
// Lays ordered CV sections out across fixed-height pages, splitting long
// sections and supporting single-column and main/sidebar layouts.
// Pure, synchronous, CPU-bound; HTTP callers run it inside tokio::task::spawn_blocking.

pub mod classifier;
pub mod data;
pub mod dual_column;
pub mod handlers;
pub mod measurement;
pub mod placement;
pub mod single_column;
pub mod strategy;
pub mod types;

use tracing::debug;

// Re-export the public API consumed by other modules (state, handlers).
pub use measurement::{HeuristicMeasurement, MeasurementProvider};
pub use strategy::{PaginationRequest, Paginator};
pub use types::{Orientation, Page};

/// Runs `paginator` over one document.
pub fn paginate(
    paginator: &dyn Paginator,
    request: &PaginationRequest<'_>,
    measure: &dyn MeasurementProvider,
) -> Vec<Page> {
    let pages = paginator.distribute(request, measure);
    debug!(
        layout = paginator.layout_kind().as_str(),
        sections = request.sections.len(),
        pages = pages.len(),
        "Pagination complete"
    );
    pages
}
