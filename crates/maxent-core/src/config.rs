//! Weighting configuration.
//!
//! Configuration is passed explicitly into every entry point rather than read
//! from process-wide state, so the weighting functions stay reentrant and
//! unit-testable in isolation.

use crate::errors::{MaxentError, Result};
use serde::{Deserialize, Serialize};

/// Resolved weighting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightMode {
    /// Equal weight 1/N for every distribution (default)
    Uniform,
    /// Closed-form geometric-decay weights, projected onto the simplex
    Geometric,
    /// Iterative gradient ascent on mixture entropy
    FullyCorrective,
}

/// Tunables for the weight selector and the fully-corrective optimizer.
///
/// The two mode flags mirror the mutually-exclusive switches of the
/// surrounding pipeline; `validate()` rejects the contradictory combination
/// before any computation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightingConfig {
    /// Use geometric-decay weighting
    pub geometric: bool,

    /// Use fully-corrective (entropy-ascent) weighting
    pub fully_corrective: bool,

    /// Decay base for geometric weights; later distributions receive
    /// larger raw weight `gamma^(N-i)`
    pub gamma: f64,

    /// Entropy-plateau stopping tolerance for the optimizer
    pub eps: f64,

    /// Gradient-ascent step size
    pub step: f64,

    /// Optimizer iteration budget
    pub max_iters: usize,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            geometric: false,
            fully_corrective: false,
            gamma: 0.90,
            eps: 1e-3,
            step: 0.2,
            max_iters: 100_000,
        }
    }
}

impl WeightingConfig {
    /// Validates the configuration.
    ///
    /// ## Errors
    /// Returns `ConfigError` if both mode flags are set, if any tunable is
    /// non-finite or non-positive, or if the iteration budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.geometric && self.fully_corrective {
            return Err(MaxentError::config(
                "must set only one of: fully_corrective, geometric",
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(MaxentError::config(format!(
                "gamma must be finite and positive, got {}",
                self.gamma
            )));
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(MaxentError::config(format!(
                "eps must be finite and positive, got {}",
                self.eps
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(MaxentError::config(format!(
                "step must be finite and positive, got {}",
                self.step
            )));
        }
        if self.max_iters == 0 {
            return Err(MaxentError::config("max_iters must be at least 1"));
        }
        Ok(())
    }

    /// Resolves the mode flags to a strategy.
    ///
    /// `fully_corrective` takes precedence; callers are expected to run
    /// `validate()` first, which rejects the ambiguous combination.
    pub fn mode(&self) -> WeightMode {
        if self.fully_corrective {
            WeightMode::FullyCorrective
        } else if self.geometric {
            WeightMode::Geometric
        } else {
            WeightMode::Uniform
        }
    }
}
