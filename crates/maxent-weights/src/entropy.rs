//! Mixture construction and Shannon entropy.

/// Elementwise weighted sum of the distributions: `sum_i w_i * d_i`.
///
/// Callers guarantee `weights.len() == distributions.len()` and equal-length
/// distribution vectors; the selector boundary validates both.
pub fn mixture(weights: &[f64], distributions: &[Vec<f64>]) -> Vec<f64> {
    debug_assert_eq!(weights.len(), distributions.len());
    let dim = distributions.first().map_or(0, |d| d.len());
    let mut mix = vec![0.0; dim];
    for (w, dist) in weights.iter().zip(distributions) {
        for (m, d) in mix.iter_mut().zip(dist) {
            *m += w * d;
        }
    }
    mix
}

/// Shannon entropy of a non-negative frequency vector, in nats.
///
/// The input is treated as unnormalized: it is divided by its total mass
/// first, then `-sum(p * ln(p))` is taken with the `0 * ln(0) = 0`
/// convention. A vector with zero total mass has entropy 0.
pub fn shannon_entropy(values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let mut entropy = 0.0;
    for &v in values {
        if v > 0.0 {
            let p = v / total;
            entropy -= p * p.ln();
        }
    }
    entropy
}
