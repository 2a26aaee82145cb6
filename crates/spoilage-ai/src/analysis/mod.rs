//! Food spoilage risk analysis.
//!
//! A decision tree is trained once at startup on a fixed, hand-curated
//! dataset and then shared read-only across requests. Every analysis is
//! a pure traversal: predict, apply escalation-only safety guardrails,
//! derive the advisory text and the remaining-safe-time estimate, and
//! assemble the result. The facade cannot fail for well-typed input.

mod advisory;
mod dataset;
mod domain;
mod estimator;
mod guardrails;
mod intake;
mod router;
mod service;
mod tree;

#[cfg(test)]
mod tests;

pub use domain::{FoodAnalysisResult, FoodInput, SpoilageStatus};
pub use intake::{validate, IntakeError};
pub use router::analysis_router;
pub use service::SpoilageAnalysisService;
