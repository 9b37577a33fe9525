//! Rounding policies.
//!
//! All seven modes operate on a magnitude scaled by `10^fraction_digits`,
//! so "away from zero" and "toward zero" resolve against the absolute
//! value. Rounding is total: no input produces an error.

use crate::options::RoundingMode;

/// Rounds a non-negative magnitude to `fraction_digits` decimal places.
///
/// Zero and subnormal magnitudes are returned unchanged; scaling a
/// subnormal loses its remaining precision to division artifacts.
pub(crate) fn round_magnitude(magnitude: f64, fraction_digits: usize, mode: RoundingMode) -> f64 {
    if magnitude == 0.0 || magnitude < f64::MIN_POSITIVE {
        return magnitude;
    }

    let scale = 10f64.powi(fraction_digits as i32);
    let scaled = magnitude * scale;
    let rounded = match mode {
        RoundingMode::HalfUp => scaled.round(),
        RoundingMode::HalfDown => {
            if scaled - scaled.floor() > 0.5 {
                scaled.ceil()
            } else {
                scaled.floor()
            }
        }
        RoundingMode::HalfEven => round_half_even(scaled),
        RoundingMode::Ceiling => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
        RoundingMode::Up => scaled.ceil(),
        RoundingMode::Down => scaled.trunc(),
    };
    rounded / scale
}

fn round_half_even(scaled: f64) -> f64 {
    let floor = scaled.floor();
    if scaled - floor == 0.5 {
        if (floor as i64) % 2 == 0 {
            floor
        } else {
            scaled.ceil()
        }
    } else {
        scaled.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RoundingMode::*;

    #[test]
    fn half_up_ties_go_outward() {
        assert_eq!(round_magnitude(2.5, 0, HalfUp), 3.0);
        assert_eq!(round_magnitude(0.125, 2, HalfUp), 0.13);
        assert_eq!(round_magnitude(2.4, 0, HalfUp), 2.0);
    }

    #[test]
    fn half_down_ties_go_inward() {
        assert_eq!(round_magnitude(2.5, 0, HalfDown), 2.0);
        assert_eq!(round_magnitude(0.125, 2, HalfDown), 0.12);
        assert_eq!(round_magnitude(2.51, 0, HalfDown), 3.0);
    }

    #[test]
    fn half_even_picks_even_neighbor() {
        assert_eq!(round_magnitude(2.5, 0, HalfEven), 2.0);
        assert_eq!(round_magnitude(3.5, 0, HalfEven), 4.0);
        assert_eq!(round_magnitude(1.25, 1, HalfEven), 1.2);
        assert_eq!(round_magnitude(1.75, 1, HalfEven), 1.8);
        assert_eq!(round_magnitude(2.6, 0, HalfEven), 3.0);
    }

    #[test]
    fn directed_modes() {
        assert_eq!(round_magnitude(1.234, 2, Ceiling), 1.24);
        assert_eq!(round_magnitude(1.236, 2, Floor), 1.23);
        assert_eq!(round_magnitude(1.231, 2, Up), 1.24);
        assert_eq!(round_magnitude(1.239, 2, Down), 1.23);
    }

    #[test]
    fn exact_values_stay_put() {
        assert_eq!(round_magnitude(1.25, 2, Up), 1.25);
        assert_eq!(round_magnitude(3.0, 0, Down), 3.0);
    }

    #[test]
    fn zero_and_subnormals_unchanged() {
        assert_eq!(round_magnitude(0.0, 2, HalfUp), 0.0);
        let subnormal = f64::MIN_POSITIVE / 2.0;
        assert_eq!(round_magnitude(subnormal, 2, HalfUp), subnormal);
    }
}
