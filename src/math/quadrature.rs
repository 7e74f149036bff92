//! Quadrature weights on uniformly spaced nodes

use crate::analysis::Quadrature;

/// Composite weights for `n` nodes with spacing `h`
///
/// Simpson uses the 1/3 rule on pairs of panels and, for an odd number of
/// panels, the 3/8 rule on the last three. With two nodes both rules reduce to
/// the trapezoid.
pub fn weights(rule: Quadrature, n: usize, h: f64) -> Vec<f64> {
    match rule {
        Quadrature::Trapezoidal => trapezoid_weights(n, h),
        Quadrature::Simpson => simpson_weights(n, h),
    }
}

fn trapezoid_weights(n: usize, h: f64) -> Vec<f64> {
    let mut w = vec![h; n];
    if n > 0 {
        w[0] = 0.5 * h;
        w[n - 1] = 0.5 * h;
    }
    if n == 1 {
        w[0] = 0.0;
    }
    w
}

fn simpson_weights(n: usize, h: f64) -> Vec<f64> {
    if n < 3 {
        return trapezoid_weights(n, h);
    }

    let panels = n - 1;
    let mut w = vec![0.0; n];
    let paired = if panels % 2 == 0 { panels } else { panels - 3 };

    for a in (0..paired).step_by(2) {
        w[a] += h / 3.0;
        w[a + 1] += 4.0 * h / 3.0;
        w[a + 2] += h / 3.0;
    }

    if panels % 2 == 1 {
        let s = paired;
        w[s] += 3.0 * h / 8.0;
        w[s + 1] += 9.0 * h / 8.0;
        w[s + 2] += 9.0 * h / 8.0;
        w[s + 3] += 3.0 * h / 8.0;
    }

    w
}

/// Integrate samples with precomputed weights
#[inline]
pub fn integrate(values: impl IntoIterator<Item = f64>, weights: &[f64]) -> f64 {
    values.into_iter().zip(weights).map(|(v, w)| v * w).sum()
}
