//! Core data types for mixture-entropy weight optimization.

use serde::{Deserialize, Serialize};

/// Reason the fully-corrective optimizer stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Mixture entropy changed less than `eps` between iterations
    EntropyPlateau,
    /// Consecutive projected iterates moved less than the stationarity floor
    StationaryWeights,
    /// Iteration budget exhausted without meeting either stopping criterion
    IterationBudget,
}

/// Mutable state carried across fully-corrective iterations.
///
/// Initialized from the geometric-decay weights, mutated every iteration,
/// and discarded once the loop terminates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectiveState {
    /// Current weight vector (projected at the top of each iteration)
    pub weights: Vec<f64>,
    /// Projected weights from the previous iteration
    pub previous_weights: Vec<f64>,
    /// Mixture entropy from the previous iteration
    pub previous_entropy: f64,
    /// Iteration counter
    pub iteration: usize,
}

impl CorrectiveState {
    pub fn new(num_distributions: usize) -> Self {
        Self {
            weights: vec![0.0; num_distributions],
            previous_weights: vec![0.0; num_distributions],
            previous_entropy: 0.0,
            iteration: 0,
        }
    }
}

/// Result of a fully-corrective optimization run.
///
/// `weights` is always the last projected feasible iterate; the trailing
/// unprojected ascent step is never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectiveSolution {
    /// Final weight vector on the probability simplex
    pub weights: Vec<f64>,
    /// Mixture entropy at the final iterate
    pub entropy: f64,
    /// Number of iterations executed
    pub iterations: usize,
    /// Which stopping criterion fired
    pub stop_reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrective_state_init() {
        let state = CorrectiveState::new(3);
        assert_eq!(state.weights, vec![0.0; 3]);
        assert_eq!(state.previous_weights, vec![0.0; 3]);
        assert_eq!(state.previous_entropy, 0.0);
        assert_eq!(state.iteration, 0);
    }

    #[test]
    fn test_solution_serde_round_trip() {
        let solution = CorrectiveSolution {
            weights: vec![0.5, 0.5],
            entropy: 1.2,
            iterations: 7,
            stop_reason: StopReason::EntropyPlateau,
        };
        let json = serde_json::to_string(&solution).unwrap();
        let restored: CorrectiveSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.weights, solution.weights);
        assert_eq!(restored.stop_reason, StopReason::EntropyPlateau);
    }
}
