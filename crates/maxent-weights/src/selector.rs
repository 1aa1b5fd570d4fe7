//! Weight selection: dispatch between uniform, geometric-decay, and
//! fully-corrective strategies, with an unconditional normalization pass.

use maxent_core::{MaxentError, Result, WeightMode, WeightingConfig};

use crate::corrective::fully_corrective_weights;
use crate::simplex::project_unit_simplex;

/// Relative tolerance on the final weight sum; drift beyond this triggers a
/// second, logged renormalization.
const RENORM_RTOL: f64 = 1e-8;

/// Validates a distribution set: non-empty, equal-length non-empty vectors,
/// all entries finite and non-negative.
pub fn validate_distributions(distributions: &[Vec<f64>]) -> Result<()> {
    if distributions.is_empty() {
        return Err(MaxentError::validation(
            "at least one distribution is required",
        ));
    }
    let dim = distributions[0].len();
    if dim == 0 {
        return Err(MaxentError::validation(
            "distributions must have at least one support point",
        ));
    }
    for (idx, dist) in distributions.iter().enumerate() {
        if dist.len() != dim {
            return Err(MaxentError::validation(format!(
                "distribution {} has length {} but distribution 0 has length {}",
                idx,
                dist.len(),
                dim
            )));
        }
        for &value in dist {
            if !value.is_finite() {
                return Err(MaxentError::validation(format!(
                    "distribution {} contains a non-finite entry",
                    idx
                )));
            }
            if value < 0.0 {
                return Err(MaxentError::validation(format!(
                    "distribution {} contains a negative entry ({})",
                    idx, value
                )));
            }
        }
    }
    Ok(())
}

/// Equal weights `1/n` for `n` distributions.
pub fn uniform_weights(n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(MaxentError::validation(
            "cannot build weights for zero distributions",
        ));
    }
    Ok(vec![1.0 / n as f64; n])
}

/// Geometric-decay weights, projected onto the simplex.
///
/// Raw weight `gamma^(n-i)` for index i, so later distributions receive
/// larger raw weight, then a single simplex projection normalizes.
pub fn geometric_weights(n: usize, gamma: f64) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(MaxentError::validation(
            "cannot build weights for zero distributions",
        ));
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(MaxentError::config(format!(
            "gamma must be finite and positive, got {}",
            gamma
        )));
    }
    let raw: Vec<f64> = (0..n).map(|i| gamma.powi((n - i) as i32)).collect();
    project_unit_simplex(&raw)
}

/// Returns the weighting for the distributions under the configured mode.
///
/// Dispatches to uniform (default), geometric-decay, or fully-corrective
/// weights, then applies the unconditional cleanup pass: elementwise absolute
/// value and division by the total. If the sum still drifts from 1 beyond
/// relative tolerance 1e-8, a second renormalization runs and is logged —
/// self-healing, never surfaced as an error.
///
/// ## Errors
/// - `ConfigError` if the configuration is invalid (e.g. both mode flags set)
/// - `ValidationError` for an empty or malformed distribution set
/// - `NumericalError` if projection fails or all weight mass vanishes
pub fn get_weights(distributions: &[Vec<f64>], config: &WeightingConfig) -> Result<Vec<f64>> {
    config.validate()?;
    validate_distributions(distributions)?;

    let mode = config.mode();
    let mut weights = match mode {
        WeightMode::FullyCorrective => fully_corrective_weights(distributions, config)?,
        WeightMode::Geometric => geometric_weights(distributions.len(), config.gamma)?,
        WeightMode::Uniform => uniform_weights(distributions.len())?,
    };

    // Cleanup pass, regardless of which strategy produced the vector.
    for w in weights.iter_mut() {
        *w = w.abs();
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(MaxentError::numerical(format!(
            "weight vector has invalid total mass {} after cleanup",
            total
        )));
    }
    for w in weights.iter_mut() {
        *w /= total;
    }

    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > RENORM_RTOL {
        log::warn!("Re-normalizing weight vector: sum = {:.12}", sum);
        for w in weights.iter_mut() {
            *w /= sum;
        }
    }

    log::info!("Selected {:?} weights: {:?}", mode, weights);
    Ok(weights)
}
