//! Fully-corrective weighting: projected gradient ascent on mixture entropy.
//!
//! Starting from the geometric-decay weights, each iteration re-projects the
//! candidate onto the probability simplex, evaluates the entropy of the
//! weighted mixture, and steps along a stabilized entropy gradient. The
//! gradient uses `ln(mixture + 1)` rather than the exact entropy gradient —
//! the offset keeps the logarithm defined on empty support and damps the
//! update, and it is part of the defined behavior of this scheme.

use maxent_core::{
    CorrectiveSolution, CorrectiveState, MaxentError, Result, StopReason, WeightingConfig,
};

use crate::entropy::{mixture, shannon_entropy};
use crate::selector::{geometric_weights, validate_distributions};
use crate::simplex::project_unit_simplex;

/// Weight-stationarity floor: iteration stops once consecutive projected
/// iterates move less than this in Euclidean norm.
const STATIONARY_NORM: f64 = 6e-3;

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Projected-gradient-ascent optimizer for mixture-entropy weights.
pub struct CorrectiveOptimizer {
    gamma: f64,
    eps: f64,
    step: f64,
    max_iters: usize,
}

impl CorrectiveOptimizer {
    pub fn new(config: &WeightingConfig) -> Self {
        Self {
            gamma: config.gamma,
            eps: config.eps,
            step: config.step,
            max_iters: config.max_iters,
        }
    }

    /// Runs the ascent loop and returns the final feasible weights with
    /// convergence diagnostics.
    ///
    /// The returned weights are always the last *projected* iterate:
    /// convergence is measured between consecutive projected iterates, and
    /// when the iteration budget runs out the trailing unprojected ascent
    /// step is discarded. Budget exhaustion is a soft degradation
    /// (`StopReason::IterationBudget`), not an error.
    ///
    /// ## Errors
    /// - `ValidationError` for an empty or shape-mismatched distribution set
    /// - `ConfigError` for a zero iteration budget
    /// - `NumericalError` if projection receives non-finite values
    pub fn optimize(&self, distributions: &[Vec<f64>]) -> Result<CorrectiveSolution> {
        validate_distributions(distributions)?;
        if self.max_iters == 0 {
            return Err(MaxentError::config("max_iters must be at least 1"));
        }

        let n = distributions.len();
        let mut state = CorrectiveState::new(n);
        state.weights = geometric_weights(n, self.gamma)?;

        log::info!(
            "Starting fully-corrective gradient ascent over {} distributions",
            n
        );

        let mut feasible = state.weights.clone();
        let mut final_entropy = 0.0;
        let mut iterations = 0;
        let mut stop_reason = StopReason::IterationBudget;

        for iteration in 0..self.max_iters {
            state.iteration = iteration;
            state.weights = project_unit_simplex(&state.weights)?;
            feasible.clone_from(&state.weights);

            let mix = mixture(&state.weights, distributions);
            let log_mix: Vec<f64> = mix.iter().map(|m| m.ln_1p()).collect();

            let gradients: Vec<f64> = distributions
                .iter()
                .map(|dist| -dist.iter().zip(&log_mix).map(|(d, l)| d * l).sum::<f64>())
                .collect();

            let entropy = shannon_entropy(&mix);
            let norm = euclidean_distance(&state.weights, &state.previous_weights);

            log::debug!(
                "Iteration {}: entropy = {:.4}, norm = {:.4}, weights = {:?}",
                iteration,
                entropy,
                norm,
                state.weights
            );

            final_entropy = entropy;
            iterations = iteration + 1;

            if (entropy - state.previous_entropy).abs() < self.eps {
                stop_reason = StopReason::EntropyPlateau;
                break;
            }
            if norm < STATIONARY_NORM {
                stop_reason = StopReason::StationaryWeights;
                break;
            }

            state.previous_weights.clone_from(&state.weights);
            state.previous_entropy = entropy;
            for (w, g) in state.weights.iter_mut().zip(&gradients) {
                *w += self.step * g;
            }
        }

        match stop_reason {
            StopReason::IterationBudget => log::warn!(
                "Fully-corrective ascent exhausted {} iterations without converging; \
                 returning last feasible iterate (entropy = {:.4})",
                self.max_iters,
                final_entropy
            ),
            _ => log::info!(
                "Fully-corrective ascent converged after {} iterations \
                 (entropy = {:.4}, reason = {:?})",
                iterations,
                final_entropy,
                stop_reason
            ),
        }

        Ok(CorrectiveSolution {
            weights: feasible,
            entropy: final_entropy,
            iterations,
            stop_reason,
        })
    }
}

/// Computes fully-corrective weights for the given distributions.
///
/// Convenience wrapper around [`CorrectiveOptimizer::optimize`] returning
/// only the weight vector.
pub fn fully_corrective_weights(
    distributions: &[Vec<f64>],
    config: &WeightingConfig,
) -> Result<Vec<f64>> {
    let solution = CorrectiveOptimizer::new(config).optimize(distributions)?;
    Ok(solution.weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::validate_simplex;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identical_distributions_converge_toward_uniform() {
        // Equal gradients for every index leave the iterate fixed under
        // projection, so the result stays at the (near-uniform) start.
        let dist = vec![0.1, 0.2, 0.3, 0.4];
        let distributions = vec![dist.clone(), dist];
        let config = WeightingConfig {
            fully_corrective: true,
            ..Default::default()
        };

        let solution = CorrectiveOptimizer::new(&config)
            .optimize(&distributions)
            .unwrap();
        validate_simplex(&solution.weights, 1e-8).unwrap();
        assert_abs_diff_eq!(solution.weights[0], 0.5, epsilon = 0.05);
        assert_abs_diff_eq!(solution.weights[1], 0.5, epsilon = 0.05);
        assert!(solution.iterations < config.max_iters);
    }

    #[test]
    fn test_budget_exhaustion_returns_feasible_iterate() {
        let distributions = vec![vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]];
        let config = WeightingConfig {
            fully_corrective: true,
            max_iters: 1,
            ..Default::default()
        };

        let solution = CorrectiveOptimizer::new(&config)
            .optimize(&distributions)
            .unwrap();
        assert_eq!(solution.stop_reason, StopReason::IterationBudget);
        assert_eq!(solution.iterations, 1);
        validate_simplex(&solution.weights, 1e-8).unwrap();
    }

    #[test]
    fn test_zero_budget_rejected() {
        let distributions = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
        let config = WeightingConfig {
            fully_corrective: true,
            max_iters: 0,
            ..Default::default()
        };
        assert!(matches!(
            CorrectiveOptimizer::new(&config).optimize(&distributions),
            Err(MaxentError::ConfigError(_))
        ));
    }

    #[test]
    fn test_empty_distribution_set_rejected() {
        let config = WeightingConfig::default();
        assert!(matches!(
            CorrectiveOptimizer::new(&config).optimize(&[]),
            Err(MaxentError::ValidationError(_))
        ));
    }

    #[test]
    fn test_wrapper_returns_weight_vector() {
        let distributions = vec![vec![0.9, 0.1], vec![0.1, 0.9]];
        let config = WeightingConfig {
            fully_corrective: true,
            ..Default::default()
        };
        let weights = fully_corrective_weights(&distributions, &config).unwrap();
        assert_eq!(weights.len(), 2);
        validate_simplex(&weights, 1e-8).unwrap();
    }
}
