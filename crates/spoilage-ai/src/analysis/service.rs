use std::time::Duration;

use tracing::debug;

use super::advisory;
use super::dataset::TRAINING_SET;
use super::domain::{FeatureVector, FoodAnalysisResult, FoodInput};
use super::estimator;
use super::guardrails;
use super::tree::SpoilageClassifier;

/// Facade owning the trained model.
///
/// Construction trains the tree on the built-in dataset exactly once;
/// afterwards the service is immutable and can be shared behind an `Arc`
/// across concurrent requests without locking.
pub struct SpoilageAnalysisService {
    classifier: SpoilageClassifier,
    advisory_delay: Option<Duration>,
}

impl SpoilageAnalysisService {
    pub fn new() -> Self {
        Self {
            classifier: SpoilageClassifier::train(&TRAINING_SET),
            advisory_delay: None,
        }
    }

    /// Add a cosmetic delay before each result, so UI demos feel like a
    /// remote analysis call. The delay never affects the computed output.
    pub fn with_advisory_delay(mut self, delay: Duration) -> Self {
        self.advisory_delay = Some(delay);
        self
    }

    /// Analyze one food item: predict, apply guardrails, and derive the
    /// advisory text and remaining-safe-time from the final status.
    pub async fn analyze(&self, input: &FoodInput) -> FoodAnalysisResult {
        if let Some(delay) = self.advisory_delay {
            tokio::time::sleep(delay).await;
        }

        let features = FeatureVector::from(input);
        let prediction = self.classifier.predict(&features);
        let predicted_risk = prediction.risk.round().clamp(0.0, 100.0) as u8;

        let (status, risk_score) = guardrails::apply(input, prediction.label, predicted_risk);

        debug!(
            food = %input.name,
            predicted = prediction.label.label(),
            status = status.label(),
            risk_score,
            "analysis complete"
        );

        FoodAnalysisResult {
            risk_score,
            status,
            reason: advisory::reason(input, status, risk_score),
            handling_instruction: advisory::handling_instruction(status, input.storage_temp),
            remaining_safe_hours: estimator::remaining_safe_hours(input, status),
        }
    }
}

impl Default for SpoilageAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
