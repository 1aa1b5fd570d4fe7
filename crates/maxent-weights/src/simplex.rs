//! Euclidean projection onto the probability simplex.
//!
//! Given any real vector `y`, `project_unit_simplex` returns the point of
//! `{x : x >= 0, sum(x) = 1}` closest to `y` in Euclidean distance, using the
//! closed-form sort-and-threshold construction (Duchi et al. 2008). No
//! external solver is involved, so the only failure modes are malformed
//! inputs — and those fail loudly rather than yielding a garbage vector.

use maxent_core::{MaxentError, Result};

/// Absolute tolerance for the feasibility self-check on projection output.
const FEASIBILITY_TOL: f64 = 1e-6;

/// Projects `y` onto the unit simplex.
///
/// ## Errors
/// - `ValidationError` if `y` is empty
/// - `NumericalError` if `y` contains non-finite entries, or if the computed
///   point fails the simplex feasibility check
pub fn project_unit_simplex(y: &[f64]) -> Result<Vec<f64>> {
    if y.is_empty() {
        return Err(MaxentError::validation(
            "cannot project an empty vector onto the simplex",
        ));
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(MaxentError::numerical(
            "projection input contains non-finite entries",
        ));
    }

    // Sort descending, then find the largest prefix whose running threshold
    // theta = (prefix_sum - 1) / prefix_len still leaves its last element
    // positive. The first element always qualifies: u[0] - (u[0] - 1) = 1.
    let mut sorted = y.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut prefix_sum = 0.0;
    let mut theta = 0.0;
    for (i, &u) in sorted.iter().enumerate() {
        prefix_sum += u;
        let candidate = (prefix_sum - 1.0) / (i as f64 + 1.0);
        if u - candidate > 0.0 {
            theta = candidate;
        }
    }

    let projected: Vec<f64> = y.iter().map(|&v| (v - theta).max(0.0)).collect();
    validate_simplex(&projected, FEASIBILITY_TOL).map_err(|e| {
        MaxentError::numerical(format!("simplex projection produced an infeasible point: {}", e))
    })?;
    Ok(projected)
}

/// Checks whether `p` lies on the probability simplex within `tol`.
///
/// Does not normalize; callers wanting normalization must do it explicitly.
pub fn validate_simplex(p: &[f64], tol: f64) -> Result<()> {
    if p.is_empty() {
        return Err(MaxentError::validation("simplex vector must be non-empty"));
    }
    if p.iter().any(|v| !v.is_finite()) {
        return Err(MaxentError::numerical(
            "simplex vector contains non-finite values",
        ));
    }
    if p.iter().any(|&v| v < -tol) {
        return Err(MaxentError::numerical("simplex vector has negative entries"));
    }
    let sum: f64 = p.iter().sum();
    if (sum - 1.0).abs() > tol {
        return Err(MaxentError::numerical(format!(
            "simplex vector sums to {} rather than 1",
            sum
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    }

    #[test]
    fn test_projection_known_values() {
        // A constant shift along (1,...,1) is absorbed by the sum constraint.
        let projected = project_unit_simplex(&[0.5, 0.5, 0.5]).unwrap();
        for w in &projected {
            assert_relative_eq!(*w, 1.0 / 3.0, epsilon = 1e-12);
        }

        // Mass concentrates on the dominant coordinate.
        let projected = project_unit_simplex(&[2.0, 0.0]).unwrap();
        assert_relative_eq!(projected[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(projected[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_is_feasible_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let dim = rng.gen_range(1..12);
            let y: Vec<f64> = (0..dim).map(|_| rng.gen_range(-5.0..5.0)).collect();
            let projected = project_unit_simplex(&y).unwrap();
            validate_simplex(&projected, 1e-9).unwrap();
        }
    }

    #[test]
    fn test_projection_idempotent_on_simplex_points() {
        let point = vec![0.2, 0.3, 0.5];
        let projected = project_unit_simplex(&point).unwrap();
        for (p, q) in point.iter().zip(&projected) {
            assert_relative_eq!(p, q, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_projection_is_closest_point_at_d3() {
        // Brute-force reference: sweep a fine grid over the 3-simplex and
        // confirm no grid point beats the projection.
        let targets = [
            vec![0.2, -0.1, 1.4],
            vec![-1.0, -1.0, 5.0],
            vec![0.4, 0.4, 0.4],
        ];
        for y in &targets {
            let projected = project_unit_simplex(y).unwrap();
            let projected_dist = squared_distance(&projected, y);

            let steps = 100usize;
            for i in 0..=steps {
                for j in 0..=(steps - i) {
                    let a = i as f64 / steps as f64;
                    let b = j as f64 / steps as f64;
                    let grid_point = vec![a, b, 1.0 - a - b];
                    let grid_dist = squared_distance(&grid_point, y);
                    assert!(
                        projected_dist <= grid_dist + 1e-9,
                        "grid point {:?} beats projection {:?} for target {:?}",
                        grid_point,
                        projected,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_projection_rejects_empty_input() {
        assert!(matches!(
            project_unit_simplex(&[]),
            Err(MaxentError::ValidationError(_))
        ));
    }

    #[test]
    fn test_projection_rejects_non_finite_input() {
        assert!(matches!(
            project_unit_simplex(&[0.5, f64::NAN]),
            Err(MaxentError::NumericalError(_))
        ));
        assert!(matches!(
            project_unit_simplex(&[f64::INFINITY, 0.0]),
            Err(MaxentError::NumericalError(_))
        ));
    }

    #[test]
    fn test_validate_simplex_rejects_drift() {
        assert!(validate_simplex(&[0.6, 0.6], 1e-6).is_err());
        assert!(validate_simplex(&[-0.1, 1.1], 1e-6).is_err());
        assert!(validate_simplex(&[0.5, 0.5], 1e-6).is_ok());
    }
}
