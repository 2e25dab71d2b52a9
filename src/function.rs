//! The plotted function and its pole guards.

/// Display form of the plotted function.
pub const EXPRESSION: &str = "y = tan(0.5·x) / x³ + 7.5";

/// Denominators below this magnitude are treated as poles.
pub const POLE_EPSILON: f64 = 1e-9;

/// Evaluate `tan(0.5x) / x³ + 7.5`.
///
/// Returns `None` near either pole (the tangent's `cos(0.5x) = 0` and the
/// cubic's `x = 0`) and whenever the result is not finite.
pub fn evaluate(x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }
    let half = 0.5 * x;
    let cos = half.cos();
    if cos.abs() < POLE_EPSILON {
        return None;
    }
    let cube = x * x * x;
    if cube.abs() < POLE_EPSILON {
        return None;
    }
    let value = half.sin() / cos / cube + 7.5;
    value.is_finite().then_some(value)
}
