use crate::CoreError;

/// Floating point type used throughout the services
pub type Real = f64;

/// Full turn in radians, used to convert Hz to angular frequency.
pub const TWO_PI: Real = 2.0 * std::f64::consts::PI;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within either the absolute or the relative bound.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let scale = a.abs().max(b.abs());
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * scale
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Require `v > 0` and finite.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

/// Angular frequency (rad/s) for a frequency in Hz.
#[inline]
pub fn angular_frequency(frequency_hz: Real) -> Real {
    TWO_PI * frequency_hz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_mixes_abs_and_rel() {
        let tol = Tolerances::default();
        assert!(nearly_equal(0.0, 5e-13, tol));
        assert!(nearly_equal(1e6, 1e6 + 1e-4, tol));
        assert!(!nearly_equal(1.8097, 1.8098, tol));
        assert!(!nearly_equal(Real::NAN, Real::NAN, tol));
    }

    #[test]
    fn ensure_finite_passes_values_through() {
        assert_eq!(ensure_finite(-2.5, "x"), Ok(-2.5));
        let err = ensure_finite(Real::NEG_INFINITY, "energy").unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1.0, "q").is_ok());
        assert_eq!(
            ensure_positive(0.0, "q").unwrap_err(),
            CoreError::InvalidArg { what: "q" }
        );
        assert!(ensure_positive(-3.0, "q").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "q"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn one_hz_is_two_pi_rad_per_s() {
        assert_eq!(angular_frequency(1.0), TWO_PI);
        assert_eq!(angular_frequency(0.0), 0.0);
    }
}
