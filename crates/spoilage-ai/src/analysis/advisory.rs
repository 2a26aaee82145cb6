use super::domain::{FoodInput, SpoilageStatus};

/// Human-readable explanation of the final verdict.
///
/// For rejects the danger-zone wording wins over the generic high-risk
/// one; everything else falls through to the fixed caution / safe
/// templates with the observed hours and temperature interpolated.
pub(crate) fn reason(input: &FoodInput, status: SpoilageStatus, risk: u8) -> String {
    let time_msg = format!("{}h exposure", input.hours_since_prep);
    let temp_msg = format!("at {}°C", input.storage_temp);

    if status == SpoilageStatus::Reject {
        if input.storage_temp > 20.0 && input.hours_since_prep > 4.0 {
            return format!("High bacterial risk due to {time_msg} {temp_msg} (Danger Zone).");
        }
        if risk > 80 {
            return "Predicted spoilage risk is critically high based on historical safety data."
                .to_string();
        }
    }

    if status == SpoilageStatus::Caution {
        return format!("Approaching safety limits ({time_msg}). Quality may be compromised.");
    }

    format!("Conditions ({time_msg}, {temp_msg}) are within safe donation limits.")
}

/// Handling advice for the donor, keyed on status and current temperature.
pub(crate) fn handling_instruction(status: SpoilageStatus, temp: f64) -> String {
    match status {
        SpoilageStatus::Safe => {
            if temp > 10.0 {
                "Refrigerate immediately to maintain freshness.".to_string()
            } else {
                "Keep chilled.".to_string()
            }
        }
        SpoilageStatus::Caution => {
            "Check for smell/texture changes. Consume immediately or freeze. Do not re-store."
                .to_string()
        }
        SpoilageStatus::Reject => {
            "Do not consume or donate. Dispose of safely to prevent contamination.".to_string()
        }
    }
}
