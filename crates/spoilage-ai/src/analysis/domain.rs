use serde::{Deserialize, Serialize};

/// Safety classification for a donated food item, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpoilageStatus {
    Safe,
    Caution,
    Reject,
}

impl SpoilageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SpoilageStatus::Safe => "SAFE",
            SpoilageStatus::Caution => "CAUTION",
            SpoilageStatus::Reject => "REJECT",
        }
    }
}

/// Donor-provided description of a food item submitted for analysis.
///
/// `name` and `quantity` are display-only and never reach the model;
/// the classifier sees only the cooked flag, elapsed hours, and storage
/// temperature. Field names match the camelCase payload the UI sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInput {
    pub name: String,
    pub is_cooked: bool,
    pub hours_since_prep: f64,
    pub storage_temp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// Final analysis verdict returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysisResult {
    pub risk_score: u8,
    pub status: SpoilageStatus,
    pub reason: String,
    pub handling_instruction: String,
    pub remaining_safe_hours: f64,
}

/// The three model features, in fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feature {
    Cooked,
    Hours,
    Temp,
}

impl Feature {
    pub(crate) const ALL: [Feature; 3] = [Feature::Cooked, Feature::Hours, Feature::Temp];
}

/// Numeric feature triple fed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FeatureVector {
    pub(crate) cooked: f64,
    pub(crate) hours: f64,
    pub(crate) temp: f64,
}

impl FeatureVector {
    pub(crate) fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Cooked => self.cooked,
            Feature::Hours => self.hours,
            Feature::Temp => self.temp,
        }
    }
}

impl From<&FoodInput> for FeatureVector {
    fn from(input: &FoodInput) -> Self {
        Self {
            cooked: if input.is_cooked { 1.0 } else { 0.0 },
            hours: input.hours_since_prep,
            temp: input.storage_temp,
        }
    }
}

/// One labeled example in the fixed training set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrainingSample {
    pub(crate) cooked: bool,
    pub(crate) hours: f64,
    pub(crate) temp: f64,
    pub(crate) label: SpoilageStatus,
    pub(crate) risk_score: u8,
}

impl TrainingSample {
    pub(crate) fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Cooked => {
                if self.cooked {
                    1.0
                } else {
                    0.0
                }
            }
            Feature::Hours => self.hours,
            Feature::Temp => self.temp,
        }
    }
}
