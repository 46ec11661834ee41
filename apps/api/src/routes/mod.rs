pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pagination::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV layout API
        .route("/api/v1/cv/layouts", get(handlers::handle_list_layouts))
        .route("/api/v1/cv/paginate", post(handlers::handle_paginate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::pagination::HeuristicMeasurement;

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            measurement: Arc::new(HeuristicMeasurement),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_layouts() {
        let (status, body) =
            send(Request::get("/api/v1/cv/layouts").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layouts"], json!(["single-column", "two-column", "sidebar"]));
    }

    #[tokio::test]
    async fn test_paginate_infers_sidebar_layout() {
        let experience: Vec<Value> = (0..30)
            .map(|i| {
                json!({
                    "position": format!("Engineer {i}"),
                    "company": "Acme",
                    "description": "Maintained the internal HR tooling and payroll exports.",
                    "responsibilities": ["Reviewed code", "Ran the on-call rotation"]
                })
            })
            .collect();
        let body = json!({
            "sections": [
                { "id": Uuid::new_v4(), "section_type": "experience", "display_order": 1 },
                {
                    "id": Uuid::new_v4(),
                    "section_type": "technical_skills",
                    "display_order": 2,
                    "styling": { "layout_placement": "sidebar" }
                }
            ],
            "employee_data": {
                "experience": experience,
                "technical_skills": ["Rust", "PostgreSQL", "Kubernetes"]
            }
        });

        let (status, body) = send(post_json("/api/v1/cv/paginate", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout_kind"], "sidebar");
        let total = body["total_pages"].as_u64().unwrap();
        assert!(total >= 2 && total <= 10);
        let pages = body["pages"].as_array().unwrap();
        assert_eq!(pages.len() as u64, total);
        for (idx, page) in pages.iter().enumerate() {
            assert_eq!(page["page_number"], json!(idx + 1));
        }
        assert_eq!(pages[0]["sections"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_paginate_empty_document_returns_one_page() {
        let body = json!({ "sections": [], "employee_data": {} });
        let (status, body) = send(post_json("/api/v1/cv/paginate", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout_kind"], "single-column");
        assert_eq!(body["total_pages"], 1);
    }

    #[tokio::test]
    async fn test_paginate_selects_explicit_layout_kind() {
        let sections = json!([
            { "id": Uuid::new_v4(), "section_type": "general", "display_order": 1 }
        ]);
        let data = json!({ "general": { "name": "Ada" } });

        for (requested, selected) in [
            ("two-column", "two-column"),
            ("sidebar", "sidebar"),
            ("magazine", "single-column"),
        ] {
            let body = json!({
                "sections": sections,
                "employee_data": data,
                "layout_kind": requested
            });
            let (status, body) = send(post_json("/api/v1/cv/paginate", body)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["layout_kind"], selected);
            assert_eq!(body["total_pages"], 1);
        }
    }

    #[tokio::test]
    async fn test_paginate_rejects_bad_input() {
        let (status, body) = send(post_json(
            "/api/v1/cv/paginate",
            json!({ "sections": [], "content_height": -5.0 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(post_json(
            "/api/v1/cv/paginate",
            json!({ "sections": [], "max_pages": 0 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(post_json(
            "/api/v1/cv/paginate",
            json!({ "sections": [], "employee_data": [1, 2] }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }
}
