//! Arcsine.

use crate::common::consts::{HALF, ONE};
use crate::ctx;
use crate::defs::{Error, Sign, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::consts;
use num_bigint::BigUint;

impl DecimalNumber {
    /// Computes the arcsine of the number. The result is rounded to the
    /// current scale.
    ///
    /// ## Errors
    ///
    ///  - MathDomainError: the argument is out of the range \[-1, 1\].
    pub fn asin(&self) -> Result<Self, Error> {
        let ws = ctx::scale() + GUARD_DIGITS;
        Ok(asin_to(self, ws)?.normalized())
    }
}

// Arcsine at `ws` fractional digits.
pub(super) fn asin_to(x: &DecimalNumber, ws: usize) -> Result<DecimalNumber, Error> {
    let t = x.abs();
    if t > *ONE {
        return Err(Error::MathDomainError);
    }

    // beyond √2/2 the series slows down; switch to the complement
    // asin(x) = π/2 - asin(√(1 - x²))
    let threshold = DecimalNumber::from_raw_parts(BigUint::from(7071u32), 4, Sign::Pos);
    let ret = if t <= threshold {
        asin_series(&t, ws)
    } else {
        let y = ONE.sub_full_prec(&t.mul_full_prec(&t)).sqrt_to(ws);
        let half_pi = consts::pi_to(ws + 1).mul_full_prec(&HALF);
        half_pi.sub_full_prec(&asin_series(&y, ws)).round_to(ws)
    };

    Ok(if x.is_negative() { ret.neg() } else { ret })
}

// asin: x + x^3/6 + 3·x^5/40 + ...
fn asin_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    let x2 = x.mul_full_prec(x).round_to(ws);

    let mut term = x.round_to(ws);
    let mut sum = term.clone();
    let mut k = 0u64;
    loop {
        let num = (2 * k + 1) * (2 * k + 1);
        let den = (2 * k + 2) * (2 * k + 3);
        term = term
            .mul_full_prec(&x2)
            .mul_full_prec(&DecimalNumber::from_u64(num))
            .div_round(&DecimalNumber::from_u64(den), ws);
        if term.is_zero() {
            break sum;
        }
        sum = sum.add_full_prec(&term).round_to(ws);
        k += 1;
    }
}
