//! Natural logarithm.

use crate::common::consts::{ONE, TENTH};
use crate::common::util::digit_count;
use crate::ctx;
use crate::defs::{Error, Sign, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::consts;

impl DecimalNumber {
    /// Computes the natural logarithm of the number. The result is rounded
    /// to the current scale.
    ///
    /// ## Errors
    ///
    ///  - MathDomainError: the argument is not positive.
    pub fn ln(&self) -> Result<Self, Error> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::MathDomainError);
        }

        let ws = ctx::scale() + GUARD_DIGITS;

        // self = m · 10^k with m in [1, 10), so that ln(self) = ln(m) + k·ln(10)
        let dc = digit_count(&self.m);
        let k = dc as isize - 1 - self.d as isize;
        let m = DecimalNumber::from_raw_parts(self.m.clone(), dc - 1, Sign::Pos);

        let mut ret = ln_series(&m, ws);
        if k != 0 {
            let kd = DecimalNumber::from_i64(k as i64);
            let ln10 = consts::ln10_to(ws + kd.int_digits());
            ret = ret.add_full_prec(&ln10.mul_full_prec(&kd)).round_to(ws);
        }

        Ok(ret.normalized())
    }
}

// ln of a value of one or more. Repeated square roots bring the argument
// close to 1, then ln(x) = 2·Σ u^(2j+1)/(2j+1) with u = (x-1)/(x+1), and
// every halving of the logarithm is undone by a doubling at the end.
pub(crate) fn ln_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    debug_assert!(*x >= *ONE);

    let wp = ws + 4;

    let mut x = x.round_to(wp);
    let mut j = 0u32;
    while x.sub_full_prec(&ONE) > *TENTH {
        x = x.sqrt_to(wp);
        j += 1;
    }

    let u = x
        .sub_full_prec(&ONE)
        .div_round(&x.add_full_prec(&ONE), wp);
    let u2 = u.mul_full_prec(&u).round_to(wp);

    let mut term = u.clone();
    let mut sum = u;
    let mut k = 1u64;
    loop {
        term = term.mul_full_prec(&u2).round_to(wp);
        let contrib = term.div_round(&DecimalNumber::from_u64(2 * k + 1), wp);
        if contrib.is_zero() {
            break;
        }
        sum = sum.add_full_prec(&contrib).round_to(wp);
        k += 1;
    }

    sum.mul_full_prec(&DecimalNumber::from_u64(1u64 << (j + 1)))
        .round_to(ws)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::{scale_lock, set_scale};
    use crate::defs::DEFAULT_SCALE;

    #[test]
    fn test_ln() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        assert_eq!(
            DecimalNumber::parse("0.732").unwrap().ln().unwrap().to_string(),
            "-0.3119747650208255"
        );
        assert_eq!(
            DecimalNumber::from_i64(10).ln().unwrap().to_string(),
            "2.3025850929940457"
        );
        assert_eq!(
            DecimalNumber::from_i64(2).ln().unwrap().to_string(),
            "0.6931471805599453"
        );

        // ln(1) is canonical zero
        let z = DecimalNumber::from_i64(1).ln().unwrap();
        assert!(z.is_zero());
        assert_eq!(z.decimals(), 0);

        // powers of ten reduce to multiples of ln(10)
        assert_eq!(
            DecimalNumber::from_i64(100).ln().unwrap().to_string(),
            "4.6051701859880914"
        );

        // the logarithm of e at the current scale is 1
        let e = DecimalNumber::e();
        assert_eq!(e.ln().unwrap(), DecimalNumber::from_i64(1));
    }

    #[test]
    fn test_ln_domain() {
        assert_eq!(
            DecimalNumber::new().ln().unwrap_err(),
            Error::MathDomainError
        );
        assert_eq!(
            DecimalNumber::from_i64(-3).ln().unwrap_err(),
            Error::MathDomainError
        );
    }
}
