//! Heuristic height estimates for CV sections.
//!
//! Widths are approximated in characters per line rather than glyph metrics.
//! The paginator's title allowance and minimum-space threshold absorb the
//! residual error; the goal is a stable estimate, not a typeset one.

use serde_json::Value;

use crate::pagination::measurement::{
    split_generic, split_greedy, MeasurementProvider, SplitResult, SECTION_TITLE_ALLOWANCE,
};
use crate::pagination::types::{
    LayoutContext, LayoutKind, LayoutPlacement, Orientation, SectionType,
};

/// Height of one printed line of body text.
const LINE_HEIGHT: f32 = 16.0;
/// Vertical gap between consecutive items of a section.
const ITEM_GAP: f32 = 10.0;
/// Indent consumed by a bullet marker, in characters.
const BULLET_INDENT: usize = 3;

/// Estimates the height of one item given the characters that fit on a line.
type ItemEstimator = fn(&Value, usize) -> f32;

/// Default estimator shipped with the service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurement;

impl MeasurementProvider for HeuristicMeasurement {
    fn estimate_height(
        &self,
        section_type: &SectionType,
        items: &[Value],
        context: &LayoutContext,
    ) -> f32 {
        if items.is_empty() {
            return 0.0;
        }
        let cpl = chars_per_line(context);
        let body: f32 = if section_type.is_skills() {
            estimate_skills(items, cpl)
        } else {
            let estimator = item_estimator(section_type).unwrap_or(estimate_general_item);
            items.iter().map(|item| estimator(item, cpl)).sum()
        };
        SECTION_TITLE_ALLOWANCE + body
    }

    fn split(
        &self,
        section_type: &SectionType,
        items: &[Value],
        available_height: f32,
        title: &str,
        context: &LayoutContext,
    ) -> SplitResult {
        let Some(estimator) = item_estimator(section_type) else {
            return split_generic(items);
        };
        let cpl = chars_per_line(context);
        let budget = available_height - title_height(title, cpl);
        split_greedy(items, budget, |item| estimator(item, cpl))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Per-type item estimator for splittable sections; `None` means the generic splitter.
fn item_estimator(section_type: &SectionType) -> Option<ItemEstimator> {
    let estimator: ItemEstimator = match section_type {
        SectionType::Experience => estimate_experience_item,
        SectionType::Projects => estimate_project_item,
        SectionType::Education => estimate_education_item,
        SectionType::Training => estimate_training_item,
        SectionType::Achievements => estimate_achievement_item,
        _ => return None,
    };
    Some(estimator)
}

/// Characters of body text that fit on one line for the given layout.
fn chars_per_line(context: &LayoutContext) -> usize {
    let portrait = match (context.kind, context.placement) {
        (LayoutKind::SingleColumn, _) => 95,
        (_, LayoutPlacement::Main) => 62,
        (_, LayoutPlacement::Sidebar) => 30,
    };
    match context.orientation {
        Orientation::Portrait => portrait,
        Orientation::Landscape => portrait * 7 / 5,
    }
}

/// Title block height; long titles in narrow columns wrap onto extra lines.
fn title_height(title: &str, cpl: usize) -> f32 {
    let extra_lines = wrapped_lines(title, cpl).saturating_sub(1);
    SECTION_TITLE_ALLOWANCE + extra_lines as f32 * LINE_HEIGHT
}

// ────────────────────────────────────────────────────────────────────────────
// Per-type estimators
// ────────────────────────────────────────────────────────────────────────────

fn estimate_experience_item(item: &Value, cpl: usize) -> f32 {
    // position line + company/date line
    let mut lines = 2;
    lines += wrapped_lines(text(item, "description"), cpl);
    lines += bullet_lines(item, "responsibilities", cpl);
    lines_to_height(lines)
}

fn estimate_project_item(item: &Value, cpl: usize) -> f32 {
    let mut lines = wrapped_lines(text(item, "name"), cpl).max(1);
    lines += wrapped_lines(text(item, "description"), cpl);
    lines += wrapped_lines(&joined(item, "technologies"), cpl);
    lines += bullet_lines(item, "highlights", cpl);
    lines_to_height(lines)
}

fn estimate_education_item(item: &Value, cpl: usize) -> f32 {
    // degree line + institution/date line
    let lines = 2 + wrapped_lines(text(item, "description"), cpl);
    lines_to_height(lines)
}

fn estimate_training_item(item: &Value, cpl: usize) -> f32 {
    let heading = format!("{} {}", text(item, "name"), text(item, "issuer"));
    let lines =
        wrapped_lines(&heading, cpl).max(1) + wrapped_lines(text(item, "description"), cpl);
    lines_to_height(lines)
}

fn estimate_achievement_item(item: &Value, cpl: usize) -> f32 {
    let lines = wrapped_lines(text(item, "title"), cpl).max(1)
        + wrapped_lines(text(item, "description"), cpl);
    lines_to_height(lines)
}

/// Any other block: one wrapped line group per scalar field.
fn estimate_general_item(item: &Value, cpl: usize) -> f32 {
    let lines: usize = match item {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| wrapped_lines(&format!("{key}: {}", scalar_text(value)), cpl))
            .sum(),
        other => wrapped_lines(&scalar_text(other), cpl),
    };
    lines_to_height(lines.max(1))
}

/// Skills render as one flowing comma-separated list rather than stacked items.
fn estimate_skills(items: &[Value], cpl: usize) -> f32 {
    let names: Vec<String> = items
        .iter()
        .map(|item| match item.get("name") {
            Some(name) => scalar_text(name),
            None => scalar_text(item),
        })
        .collect();
    let lines = wrapped_lines(&names.join(", "), cpl).max(1);
    lines_to_height(lines)
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn lines_to_height(lines: usize) -> f32 {
    lines as f32 * LINE_HEIGHT + ITEM_GAP
}

/// Greedy word-wrap line count at `cpl` characters per line. Empty text is 0 lines.
fn wrapped_lines(text: &str, cpl: usize) -> usize {
    let cpl = cpl.max(1);
    let mut lines = 0usize;
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if lines == 0 {
            lines = 1;
            current = len;
        } else if current + 1 + len > cpl {
            lines += 1;
            current = len;
        } else {
            current += 1 + len;
        }
        // words longer than a line break across several; the tail stays open
        if current > cpl {
            lines += (current - 1) / cpl;
            current = (current - 1) % cpl + 1;
        }
    }
    lines
}

fn bullet_lines(item: &Value, key: &str, cpl: usize) -> usize {
    item.get(key)
        .and_then(Value::as_array)
        .map(|bullets| {
            bullets
                .iter()
                .map(|b| wrapped_lines(&scalar_text(b), cpl.saturating_sub(BULLET_INDENT)))
                .sum::<usize>()
        })
        .unwrap_or(0)
}

fn text<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("")
}

fn joined(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => scalar_text(other),
        None => String::new(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
