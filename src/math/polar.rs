//! Small angle and reflection helpers shared by the track shapes.

use super::Vector2;

/// Reflects `val` across `reflector` on the number line.
#[must_use]
pub fn reflect_over(val: f64, reflector: f64) -> f64 {
    let diff = reflector - val;
    val + 2.0 * diff
}

/// Converts polar `(r, theta)` to a cartesian offset. `theta` is in radians.
#[must_use]
pub fn cartesian_from_polar(r: f64, theta: f64) -> Vector2 {
    Vector2::new(r * theta.cos(), r * theta.sin())
}

/// Converts radians to degrees.
#[must_use]
pub fn degrees_from_radians(theta: f64) -> f64 {
    theta.to_degrees()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn reflect_across_point() {
        assert_abs_diff_eq!(reflect_over(2.0, 5.0), 8.0);
        assert_abs_diff_eq!(reflect_over(5.0, 5.0), 5.0);
        assert_abs_diff_eq!(reflect_over(-1.0, 0.0), 1.0);
    }

    #[test]
    fn polar_quarter_turn() {
        let v = cartesian_from_polar(2.0, FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn half_turn_is_180_degrees() {
        assert_abs_diff_eq!(degrees_from_radians(PI), 180.0, epsilon = 1e-12);
    }
}
