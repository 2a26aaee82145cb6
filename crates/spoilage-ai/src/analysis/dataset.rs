use super::domain::{SpoilageStatus, TrainingSample};

const fn sample(
    cooked: bool,
    hours: f64,
    temp: f64,
    label: SpoilageStatus,
    risk_score: u8,
) -> TrainingSample {
    TrainingSample {
        cooked,
        hours,
        temp,
        label,
        risk_score,
    }
}

/// Hand-curated training set derived from FDA time/temperature guidance.
///
/// Built once at startup and never mutated. Cooked food spoils fastest at
/// ambient temperature (the four-hour danger-zone boundary shows up in the
/// labels), raw items are modeled conservatively, and frozen storage keeps
/// both safe far past any room-temperature window.
pub(crate) const TRAINING_SET: [TrainingSample; 19] = [
    // cooked, ambient and hot storage
    sample(true, 0.5, 25.0, SpoilageStatus::Safe, 5),
    sample(true, 1.0, 25.0, SpoilageStatus::Safe, 15),
    sample(true, 2.5, 20.0, SpoilageStatus::Safe, 25),
    sample(true, 3.0, 25.0, SpoilageStatus::Caution, 45),
    sample(true, 4.5, 25.0, SpoilageStatus::Reject, 85),
    sample(true, 6.0, 22.0, SpoilageStatus::Reject, 95),
    sample(true, 2.0, 35.0, SpoilageStatus::Caution, 60),
    sample(true, 4.0, 35.0, SpoilageStatus::Reject, 90),
    // cooked, refrigerated
    sample(true, 10.0, 4.0, SpoilageStatus::Safe, 10),
    sample(true, 24.0, 4.0, SpoilageStatus::Safe, 20),
    sample(true, 48.0, 4.0, SpoilageStatus::Caution, 55),
    // raw produce and meat
    sample(false, 1.0, 20.0, SpoilageStatus::Safe, 10),
    sample(false, 3.0, 20.0, SpoilageStatus::Caution, 40),
    sample(false, 5.0, 20.0, SpoilageStatus::Reject, 75),
    sample(false, 1.0, 30.0, SpoilageStatus::Caution, 45),
    sample(false, 3.0, 30.0, SpoilageStatus::Reject, 85),
    sample(false, 12.0, 5.0, SpoilageStatus::Safe, 15),
    // frozen
    sample(true, 100.0, -5.0, SpoilageStatus::Safe, 0),
    sample(false, 100.0, -5.0, SpoilageStatus::Safe, 0),
];
