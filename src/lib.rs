//! Rule-based cardiovascular risk scoring.
//!
//! [`engine::score`] turns a [`types::profile::HealthProfile`] into a
//! [`types::assessment::RiskAssessment`] using a fixed, versioned rule table.
//! The remaining modules are adapters: profile intake, report rendering,
//! layered configuration and the prediction service wire format.

pub mod config;
pub mod engine;
pub mod error;
pub mod intake;
pub mod remote;
pub mod report;
pub mod types;
