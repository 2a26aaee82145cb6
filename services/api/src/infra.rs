use metrics_exporter_prometheus::PrometheusHandle;
use spoilage_ai::analysis::SpoilageAnalysisService;
use spoilage_ai::config::AppConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Train the model once and apply the configured advisory delay.
pub(crate) fn build_analysis_service(config: &AppConfig) -> SpoilageAnalysisService {
    let service = SpoilageAnalysisService::new();
    match config.analysis.advisory_delay_ms {
        Some(ms) if ms > 0 => service.with_advisory_delay(Duration::from_millis(ms)),
        _ => service,
    }
}
