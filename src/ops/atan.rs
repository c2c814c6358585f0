//! Arctangent.

use crate::common::consts::{HALF, ONE, TENTH};
use crate::ctx;
use crate::defs::{Error, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::consts;

impl DecimalNumber {
    /// Computes the arctangent of the number. The result is rounded to the
    /// current scale.
    pub fn atan(&self) -> Self {
        let ws = ctx::scale() + GUARD_DIGITS;
        atan_to(self, ws).normalized()
    }

    /// Computes the angle between the positive x axis and the point
    /// `(x, self)`, with `self` being the ordinate. The result is rounded to
    /// the current scale.
    ///
    /// ## Errors
    ///
    ///  - MathDomainError: both `self` and `x` are zero.
    pub fn atan2(&self, x: &Self) -> Result<Self, Error> {
        let y = self;
        let ws = ctx::scale() + GUARD_DIGITS;

        let ret = if x.is_zero() {
            if y.is_zero() {
                return Err(Error::MathDomainError);
            }
            let half_pi = consts::pi_to(ws + 1).mul_full_prec(&HALF);
            if y.is_negative() {
                half_pi.neg()
            } else {
                half_pi
            }
        } else {
            let a = atan_to(&y.div_round(x, ws), ws);
            if x.is_negative() {
                let pi = consts::pi_to(ws);
                if y.is_negative() {
                    a.sub_full_prec(&pi)
                } else {
                    a.add_full_prec(&pi)
                }
            } else {
                a
            }
        };

        Ok(ret.normalized())
    }
}

// Arctangent at `ws` fractional digits.
pub(super) fn atan_to(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    let t = x.abs();

    let ret = if t > *ONE {
        // atan(x) = π/2 - atan(1/x) for x > 1
        let inv = ONE.div_round(&t, ws + 2);
        let half_pi = consts::pi_to(ws + 1).mul_full_prec(&HALF);
        half_pi.sub_full_prec(&atan_series(&inv, ws)).round_to(ws)
    } else {
        atan_series(&t, ws)
    };

    if x.is_negative() {
        ret.neg()
    } else {
        ret
    }
}

// Series after half-angle reductions atan(x) = 2·atan(x/(1+√(1+x²))); each
// reduction roughly halves the argument, the doublings are restored at the
// end.
fn atan_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    debug_assert!(!x.is_negative());

    let wp = ws + 4;

    let mut x = x.round_to(wp);
    let mut j = 0u32;
    while x > *TENTH {
        let hyp = ONE.add_full_prec(&x.mul_full_prec(&x)).sqrt_to(wp);
        x = x.div_round(&ONE.add_full_prec(&hyp), wp);
        j += 1;
    }

    // x - x^3/3 + x^5/5 - ...
    let x2 = x.mul_full_prec(&x).round_to(wp);
    let mut term = x.clone();
    let mut sum = x;
    let mut k = 1u64;
    loop {
        term = term.mul_full_prec(&x2).round_to(wp).neg();
        let contrib = term.div_round(&DecimalNumber::from_u64(2 * k + 1), wp);
        if contrib.is_zero() {
            break;
        }
        sum = sum.add_full_prec(&contrib).round_to(wp);
        k += 1;
    }

    sum.mul_full_prec(&DecimalNumber::from_u64(1u64 << j))
        .round_to(ws)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::{scale_lock, set_scale};
    use crate::defs::DEFAULT_SCALE;

    #[test]
    fn test_atan() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        assert!(DecimalNumber::new().atan().is_zero());
        assert_eq!(
            DecimalNumber::from_i64(1).atan().to_string(),
            "0.7853981633974483"
        );
        assert_eq!(
            DecimalNumber::from_i64(-1).atan().to_string(),
            "-0.7853981633974483"
        );
        assert_eq!(
            DecimalNumber::from_i64(2).atan().to_string(),
            "1.1071487177940905"
        );
        assert_eq!(
            DecimalNumber::parse("0.05").unwrap().atan().to_string(),
            "0.0499583957219428"
        );
    }

    #[test]
    fn test_atan2() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let zero = DecimalNumber::new();
        let one = DecimalNumber::from_i64(1);
        let neg_one = DecimalNumber::from_i64(-1);

        assert_eq!(one.atan2(&one).unwrap().to_string(), "0.7853981633974483");
        assert_eq!(
            one.atan2(&neg_one).unwrap().to_string(),
            "2.3561944901923449"
        );
        assert_eq!(
            neg_one.atan2(&neg_one).unwrap().to_string(),
            "-2.3561944901923449"
        );
        assert_eq!(
            neg_one.atan2(&one).unwrap().to_string(),
            "-0.7853981633974483"
        );

        // on the axes
        assert_eq!(one.atan2(&zero).unwrap().to_string(), "1.5707963267948966");
        assert_eq!(
            neg_one.atan2(&zero).unwrap().to_string(),
            "-1.5707963267948966"
        );
        assert!(zero.atan2(&one).unwrap().is_zero());
        assert_eq!(
            zero.atan2(&neg_one).unwrap().to_string(),
            "3.1415926535897932"
        );

        assert_eq!(
            zero.atan2(&zero).unwrap_err(),
            Error::MathDomainError
        );
    }
}
