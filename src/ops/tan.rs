//! Tangent.

use crate::ctx;
use crate::defs::{Error, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::cos::cos_series;
use crate::ops::sin::sin_series;
use crate::ops::util::reduce_trig_arg;

impl DecimalNumber {
    /// Computes the tangent of the number (in radians) as the ratio of its
    /// sine and cosine. The result is rounded to the current scale.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the cosine of the argument rounds to zero at the
    ///    current scale.
    pub fn tan(&self) -> Result<Self, Error> {
        let scale = ctx::scale();
        let ws = scale + GUARD_DIGITS;
        let (q, t) = reduce_trig_arg(&self.abs(), ws);

        let (sin_v, cos_v) = match q {
            0 => (sin_series(&t, ws), cos_series(&t, ws)),
            1 => (cos_series(&t, ws), sin_series(&t, ws).neg()),
            2 => (sin_series(&t, ws).neg(), cos_series(&t, ws).neg()),
            _ => (cos_series(&t, ws).neg(), sin_series(&t, ws)),
        };
        let sin_v = if self.is_negative() { sin_v.neg() } else { sin_v };

        if cos_v.round_to(scale).is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(sin_v.div_round(&cos_v, ws).normalized())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::HALF;
    use crate::ctx::{scale_lock, set_scale};
    use crate::defs::DEFAULT_SCALE;

    #[test]
    fn test_tan() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        assert!(DecimalNumber::new().tan().unwrap().is_zero());
        assert_eq!(
            DecimalNumber::from_i64(1).tan().unwrap().to_string(),
            "1.5574077246549022"
        );
        assert_eq!(
            DecimalNumber::parse("-1").unwrap().tan().unwrap().to_string(),
            "-1.5574077246549022"
        );
        assert_eq!(
            DecimalNumber::parse("0.5").unwrap().tan().unwrap().to_string(),
            "0.5463024898437905"
        );
    }

    #[test]
    fn test_tan_near_half_pi() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        // π/2 rounded to the scale has a cosine that normalizes to zero
        let half_pi = DecimalNumber::pi().mul_full_prec(&HALF).normalized();
        assert_eq!(half_pi.tan().unwrap_err(), Error::DivisionByZero);
    }
}
