//! Least squares solver and small summary statistics.
//!
//! The Gumbel fit is a straight line in reduced-variate space:
//!
//! ```text
//! minimize Σ (V_i - (μ + s · y_i))^2
//! ```
//!
//! We build the `n × 2` design matrix `[1, y_i]` and solve it with SVD.
//! nalgebra's `QR::solve` is intended for square systems and will panic for
//! non-square matrices, so SVD is used for the tall case.
//!
//! A rank-deficient design (all `y_i` equal) must be detected by the caller
//! before solving: SVD would silently return the minimum-norm solution.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Mean and population variance of a slice. `None` for an empty slice.
pub fn mean_and_variance(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    Some((mean, var))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_matches_closed_form_on_noisy_line() {
        let xs = [0.5, 1.5, 2.0, 3.5, 4.0];
        let ys = [3.1, 5.9, 7.2, 11.4, 12.6];
        let rows: Vec<f64> = xs.iter().flat_map(|&x| [1.0, x]).collect();
        let x = DMatrix::from_row_slice(xs.len(), 2, &rows);
        let y = DVector::from_row_slice(&ys);
        let beta = solve_least_squares(&x, &y).unwrap();

        let (mx, vx) = mean_and_variance(&xs).unwrap();
        let (my, _) = mean_and_variance(&ys).unwrap();
        let cov = xs.iter().zip(ys.iter()).map(|(a, b)| (a - mx) * (b - my)).sum::<f64>() / xs.len() as f64;
        let slope = cov / vx;
        let intercept = my - slope * mx;

        assert!((beta[1] - slope).abs() < 1e-10);
        assert!((beta[0] - intercept).abs() < 1e-10);
    }

    #[test]
    fn mean_and_variance_basic() {
        assert!(mean_and_variance(&[]).is_none());
        let (m, v) = mean_and_variance(&[1.0, 2.0, 3.0]).unwrap();
        assert!((m - 2.0).abs() < 1e-12);
        assert!((v - 2.0 / 3.0).abs() < 1e-12);
    }
}
