//! Bracketed scalar root finding

/// Why a bracketed search stopped without a root
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootError {
    /// f(a) and f(b) have the same sign
    NotBracketed { fa: f64, fb: f64 },
    /// Iteration budget exhausted; carries the best estimate
    MaxIterations { best: f64, iterations: usize },
    /// f returned NaN or infinity
    NonFinite { x: f64 },
}

/// A converged root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    pub iterations: usize,
}

/// Brent's method on [a, b]
///
/// Combines bisection, secant and inverse quadratic interpolation. Converges
/// when the bracket half-width falls below `tol` (plus a relative machine
/// epsilon term) or f hits zero exactly.
pub fn brent<F>(mut f: F, a: f64, b: f64, tol: f64, max_iter: usize) -> Result<Root, RootError>
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() {
        return Err(RootError::NonFinite { x: a });
    }
    if !fb.is_finite() {
        return Err(RootError::NonFinite { x: b });
    }
    if fa == 0.0 {
        return Ok(Root { x: a, iterations: 0 });
    }
    if fb == 0.0 {
        return Ok(Root { x: b, iterations: 0 });
    }
    if fa.signum() == fb.signum() {
        return Err(RootError::NotBracketed { fa, fb });
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 1..=max_iter {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(Root { x: b, iterations: iter });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Attempt interpolation
            let s = fb / fa;
            let mut p;
            let mut q;
            if a == c {
                // Secant
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                // Inverse quadratic
                let qa = fa / fc;
                let r = fb / fc;
                p = s * (2.0 * xm * qa * (qa - r) - (b - a) * (r - 1.0));
                q = (qa - 1.0) * (r - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = f(b);
        if !fb.is_finite() {
            return Err(RootError::NonFinite { x: b });
        }
    }

    Err(RootError::MaxIterations {
        best: b,
        iterations: max_iter,
    })
}
