use std::sync::Arc;

use crate::config::Config;
use crate::pagination::MeasurementProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable height estimator. Default: HeuristicMeasurement.
    pub measurement: Arc<dyn MeasurementProvider>,
}
