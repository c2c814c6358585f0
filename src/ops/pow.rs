//! Integer power and exponentiation.

use crate::common::consts::ONE;
use crate::common::util::digit_count;
use crate::ctx;
use crate::defs::{Error, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::consts;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

impl DecimalNumber {
    /// Raises the number to the integer power `n` by binary exponentiation.
    /// A negative `n` raises to `-n` and takes the reciprocal. The result is
    /// rounded to the current scale.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the number is zero and `n` is negative.
    pub fn pow(&self, n: i64) -> Result<Self, Error> {
        if n == 0 {
            return Ok(DecimalNumber::from_u64(1));
        }

        let mag = n.unsigned_abs();
        let ws = ctx::scale() + GUARD_DIGITS + (mag as usize).saturating_mul(self.magnitude_digits());

        let r = pow_uint(self, &BigUint::from(mag), ws);
        if n > 0 {
            Ok(r.normalized())
        } else {
            ONE.div(&r)
        }
    }

    /// Computes e raised to the power of the number. The result is rounded to
    /// the current scale.
    pub fn exp(&self) -> Self {
        if self.is_zero() {
            return DecimalNumber::from_u64(1);
        }

        let ws = ctx::scale() + GUARD_DIGITS;

        // x = n + f with integer n and f in [0, 1), so that e^x = e^n · e^f
        let trunc = self.to_int_truncate();
        let frac = self.sub_full_prec(&DecimalNumber::from(trunc.clone()));
        let (n, f) = if frac.is_negative() {
            (trunc - 1, frac.add_full_prec(&ONE))
        } else {
            (trunc, frac)
        };

        // e^n is below half an ulp of the current scale; 3 > 1/log10(e)
        if n < BigInt::from(-3 * (ctx::scale() as i64 + 1)) {
            return Self::new();
        }

        let ef = exp_series(&f, ws + 2);
        if n.is_zero() {
            return ef.normalized();
        }

        let mag = n.magnitude();
        let ret = if n.is_negative() {
            let en = pow_uint(&consts::e_to(ws + 4), mag, ws + 4);
            ef.div_round(&en, ws + 4)
        } else {
            // the integer part of e^n grows by roughly 0.4343·n digits
            let extra = (mag * 4343u32 / BigUint::from(10000u32))
                .to_usize()
                .unwrap_or(usize::MAX / 2)
                + 4;
            let en = pow_uint(&consts::e_to(ws + extra), mag, ws + extra);
            en.mul_full_prec(&ef)
        };

        ret.normalized()
    }

    // Count of digits the magnitude of the value occupies on the dominant
    // side of the decimal point: integer digits for values of one or more,
    // leading fractional zeros plus one otherwise.
    fn magnitude_digits(&self) -> usize {
        let dc = digit_count(&self.m);
        if dc > self.d {
            dc - self.d
        } else {
            self.d - dc + 1
        }
    }
}

// Binary exponentiation over the bits of `n`; intermediate products are
// rounded to `ws` fractional digits. `n` must not be zero.
pub(super) fn pow_uint(base: &DecimalNumber, n: &BigUint, ws: usize) -> DecimalNumber {
    debug_assert!(!n.is_zero());

    let mut acc = DecimalNumber::from_u64(1);
    let mut sq = base.round_to(ws);

    let bits = n.bits();
    for i in 0..bits {
        if n.bit(i) {
            acc = acc.mul_full_prec(&sq).round_to(ws);
        }
        if i + 1 < bits {
            sq = sq.mul_full_prec(&sq).round_to(ws);
        }
    }
    acc
}

// Maclaurin series Σ x^k / k! for x in [0, 1).
fn exp_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    let mut term = DecimalNumber::from_u64(1);
    let mut sum = term.clone();
    let mut k = 1u64;
    loop {
        term = term
            .mul_full_prec(x)
            .div_round(&DecimalNumber::from_u64(k), ws);
        if term.is_zero() {
            break sum;
        }
        sum = sum.add_full_prec(&term).round_to(ws);
        k += 1;
    }
}
