use super::domain::{FoodInput, SpoilageStatus};

/// Hours until the item should no longer be donated, rounded to one
/// decimal place.
///
/// Independent of the tree: only the final status and the raw inputs
/// drive it. The maximum safe window comes from a temperature band
/// (boundary values belong to the lower band):
/// below 5 °C → 72 h, 5–15 °C → 12 h, 15–30 °C → 4 h, above 30 °C → 2 h.
pub(crate) fn remaining_safe_hours(input: &FoodInput, status: SpoilageStatus) -> f64 {
    if status == SpoilageStatus::Reject {
        return 0.0;
    }

    let max_hours = if input.storage_temp < 5.0 {
        72.0
    } else if input.storage_temp < 15.0 {
        12.0
    } else if input.storage_temp > 30.0 {
        2.0
    } else {
        4.0
    };

    let remaining = (max_hours - input.hours_since_prep).max(0.0);
    (remaining * 10.0).round() / 10.0
}
