//! # maxent-core
//!
//! Core types, configuration, and errors for the maximum-entropy
//! policy-mixture weighting service.
//!
//! This crate defines the shared vocabulary used across the workspace:
//! - **Config**: `WeightingConfig` — explicit, reentrant configuration
//! - **Types**: optimizer state and result reports
//! - **Errors**: unified error handling with `MaxentError`
//!
//! The numerical routines themselves (simplex projection, entropy ascent,
//! strategy selection) live in `maxent-weights`.

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{WeightMode, WeightingConfig};
pub use errors::{MaxentError, Result};
pub use types::{CorrectiveSolution, CorrectiveState, StopReason};
