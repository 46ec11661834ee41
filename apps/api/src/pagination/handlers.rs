use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::pagination::placement::infer_layout;
use crate::pagination::strategy::{paginator_for, select, supported_layouts, PaginationRequest};
use crate::pagination::types::{FieldMapping, LayoutKind, Orientation, Page, Section};
use crate::pagination::paginate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PaginateRequest {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    /// Per-employee data bag, keyed by section type.
    #[serde(default)]
    pub employee_data: Value,
    /// `single-column`, `two-column` or `sidebar`; inferred from placements when absent.
    #[serde(default)]
    pub layout_kind: Option<String>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub content_height: Option<f32>,
    #[serde(default)]
    pub max_pages: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PaginateResponse {
    pub layout_kind: LayoutKind,
    pub total_pages: usize,
    pub pages: Vec<Page>,
}

#[derive(Debug, Serialize)]
pub struct LayoutsResponse {
    pub layouts: Vec<&'static str>,
}

/// GET /api/v1/cv/layouts
pub async fn handle_list_layouts() -> Json<LayoutsResponse> {
    Json(LayoutsResponse {
        layouts: supported_layouts(),
    })
}

/// POST /api/v1/cv/paginate
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(req): Json<PaginateRequest>,
) -> Result<Json<PaginateResponse>, AppError> {
    let content_height = req
        .content_height
        .unwrap_or_else(|| state.config.content_height(req.orientation));
    if !content_height.is_finite() || content_height <= 0.0 {
        return Err(AppError::Validation(format!(
            "content_height must be a positive number, got {content_height}"
        )));
    }

    let max_pages = req.max_pages.unwrap_or(state.config.max_pages);
    if max_pages == 0 {
        return Err(AppError::Validation(
            "max_pages must be at least 1".to_string(),
        ));
    }

    if !(req.employee_data.is_object() || req.employee_data.is_null()) {
        return Err(AppError::UnprocessableEntity(
            "employee_data must be a JSON object keyed by section type".to_string(),
        ));
    }

    let paginator = match req.layout_kind.as_deref() {
        Some(raw) => select(raw),
        None => paginator_for(infer_layout(&req.sections)),
    };
    let layout_kind = paginator.layout_kind();

    // CPU-bound layout run — spawn_blocking to avoid blocking the async executor.
    let measure = state.measurement.clone();
    let section_count = req.sections.len();
    let pages = tokio::task::spawn_blocking(move || {
        let request = PaginationRequest {
            sections: &req.sections,
            field_mappings: &req.field_mappings,
            employee_data: &req.employee_data,
            content_height,
            max_pages,
            orientation: req.orientation,
        };
        paginate(paginator, &request, measure.as_ref())
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pagination: {e}"))
    })?;

    info!(
        layout = layout_kind.as_str(),
        sections = section_count,
        pages = pages.len(),
        "CV paginated"
    );

    Ok(Json(PaginateResponse {
        layout_kind,
        total_pages: pages.len(),
        pages,
    }))
}
