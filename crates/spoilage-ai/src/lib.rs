//! Food spoilage analysis service library.
//!
//! The [`analysis`] module holds the decision-tree classifier, the
//! safety guardrails layered on top of it, and the service facade that
//! the HTTP and CLI shells call. `config`, `error`, and `telemetry`
//! carry the runtime plumbing shared by every entry point.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
