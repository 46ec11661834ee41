//! Measurement Provider — height estimation and item-level splitting.
//!
//! The paginator never measures anything itself. It asks a `MeasurementProvider`
//! how tall a block of items is, and how many of them fit in the space left on
//! the current page. `AppState` holds an `Arc<dyn MeasurementProvider>`;
//! `HeuristicMeasurement` is the default backend.

pub mod heuristic;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::types::{
    LayoutContext, LayoutKind, LayoutPlacement, Orientation, SectionType,
};

pub use heuristic::HeuristicMeasurement;

/// Flat per-item height used for section types without a dedicated splitter.
pub const GENERIC_ITEM_HEIGHT: f32 = 40.0;

/// Fixed height reserved for a section's title block on each page it appears on.
pub const SECTION_TITLE_ALLOWANCE: f32 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Split result types
// ────────────────────────────────────────────────────────────────────────────

/// An item that fits on the current page, with its own estimated height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingItem {
    pub content: Value,
    pub estimated_height: f32,
}

/// Outcome of splitting a list of items against an available height.
///
/// `fitting` followed by `remaining` is always the input list in original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub fitting: Vec<FittingItem>,
    pub remaining: Vec<Value>,
}

impl SplitResult {
    pub fn fitting_height(&self) -> f32 {
        self.fitting.iter().map(|f| f.estimated_height).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The measurement trait. Implement this to swap estimation backends without
/// touching the paginators.
pub trait MeasurementProvider: Send + Sync {
    /// Layout-aware estimate of the rendered height of `items` as one section.
    fn estimate_height(
        &self,
        section_type: &SectionType,
        items: &[Value],
        context: &LayoutContext,
    ) -> f32;

    /// Layout-agnostic estimate: a full-width, main-column rendering.
    fn estimate_height_plain(
        &self,
        section_type: &SectionType,
        items: &[Value],
        orientation: Orientation,
    ) -> f32 {
        let context =
            LayoutContext::new(LayoutKind::SingleColumn, LayoutPlacement::Main, orientation);
        self.estimate_height(section_type, items, &context)
    }

    /// Splits `items` into the prefix that fits in `available_height` and the rest.
    fn split(
        &self,
        section_type: &SectionType,
        items: &[Value],
        available_height: f32,
        title: &str,
        context: &LayoutContext,
    ) -> SplitResult;
}

/// Default split for unrecognized section types: everything fits, flat height, no remainder.
pub fn split_generic(items: &[Value]) -> SplitResult {
    SplitResult {
        fitting: items
            .iter()
            .map(|content| FittingItem {
                content: content.clone(),
                estimated_height: GENERIC_ITEM_HEIGHT,
            })
            .collect(),
        remaining: Vec::new(),
    }
}

/// Greedy, order-preserving split: takes items while their running height fits in `budget`.
///
/// Stops at the first item that does not fit, so a short item after a long one
/// is never pulled forward.
pub fn split_greedy<F>(items: &[Value], budget: f32, mut item_height: F) -> SplitResult
where
    F: FnMut(&Value) -> f32,
{
    let mut used = 0.0_f32;
    let mut fitting = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let height = item_height(item);
        if used + height > budget {
            return SplitResult {
                fitting,
                remaining: items[idx..].to_vec(),
            };
        }
        used += height;
        fitting.push(FittingItem {
            content: item.clone(),
            estimated_height: height,
        });
    }

    SplitResult {
        fitting,
        remaining: Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────
