//! # maxent-weights
//!
//! Entropy-maximizing mixture weights for policy ensembles.
//!
//! Given N state-visitation distributions over a shared discrete support,
//! this crate computes a convex weighting of them — uniform, geometric-decay,
//! or fully-corrective (iterative gradient ascent on the Shannon entropy of
//! the weighted mixture). The output is always a probability vector: every
//! weight non-negative, summing to 1.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   selector::get_weights      │  ← validation, dispatch, cleanup
//! └──────────────────────────────┘
//!       │            │
//!       │            ▼
//!       │   ┌─────────────────────────────┐
//!       │   │ corrective::CorrectiveOptimizer │  ← entropy ascent loop
//!       │   └─────────────────────────────┘
//!       │            │            │
//!       ▼            ▼            ▼
//! ┌──────────────────────┐  ┌──────────────────┐
//! │ simplex::project_*   │  │ entropy::mixture │
//! │ (sort-and-threshold) │  │ shannon_entropy  │
//! └──────────────────────┘  └──────────────────┘
//! ```
//!
//! Single-threaded and synchronous throughout; every call is self-contained
//! and reentrant. Diagnostics go through the `log` facade and can be
//! redirected or suppressed without affecting results.

pub mod corrective;
pub mod entropy;
pub mod selector;
pub mod simplex;

// Re-export commonly used items
pub use corrective::{fully_corrective_weights, CorrectiveOptimizer};
pub use entropy::{mixture, shannon_entropy};
pub use selector::{geometric_weights, get_weights, uniform_weights, validate_distributions};
pub use simplex::{project_unit_simplex, validate_simplex};
