use super::domain::{FoodInput, SpoilageStatus};
use tracing::debug;

/// Deterministic post-prediction safety rule.
///
/// Rules are escalation-only: a triggered rule raises the status to at
/// least `floor_status` and the risk to at least `floor_risk`, and can
/// never lower either. They run in the fixed order of [`RULES`].
struct GuardrailRule {
    name: &'static str,
    floor_status: SpoilageStatus,
    floor_risk: u8,
    triggered: fn(&FoodInput) -> bool,
}

/// Cooked food held above 20 °C for more than four hours sits in the
/// bacterial danger zone (B. cereus and friends) no matter what the
/// tree learned from the dataset.
fn cooked_danger_zone(input: &FoodInput) -> bool {
    input.is_cooked && input.storage_temp > 20.0 && input.hours_since_prep > 4.0
}

const RULES: [GuardrailRule; 1] = [GuardrailRule {
    name: "cooked-danger-zone",
    floor_status: SpoilageStatus::Reject,
    floor_risk: 85,
    triggered: cooked_danger_zone,
}];

/// Apply every guardrail to the raw model prediction.
pub(crate) fn apply(
    input: &FoodInput,
    predicted: SpoilageStatus,
    predicted_risk: u8,
) -> (SpoilageStatus, u8) {
    let mut status = predicted;
    let mut risk = predicted_risk;

    for rule in &RULES {
        if (rule.triggered)(input) {
            status = status.max(rule.floor_status);
            risk = risk.max(rule.floor_risk);
            debug!(rule = rule.name, "guardrail escalated prediction");
        }
    }

    (status, risk)
}
