//! Sine.

use crate::ctx;
use crate::defs::GUARD_DIGITS;
use crate::num::DecimalNumber;
use crate::ops::cos::cos_series;
use crate::ops::util::reduce_trig_arg;

impl DecimalNumber {
    /// Computes the sine of the number (in radians). The result is rounded
    /// to the current scale.
    pub fn sin(&self) -> Self {
        if self.is_zero() {
            return Self::new();
        }

        let ws = ctx::scale() + GUARD_DIGITS;
        let (q, t) = reduce_trig_arg(&self.abs(), ws);

        let ret = match q {
            0 => sin_series(&t, ws),
            1 => cos_series(&t, ws),
            2 => sin_series(&t, ws).neg(),
            _ => cos_series(&t, ws).neg(),
        };

        let ret = if self.is_negative() { ret.neg() } else { ret };
        ret.normalized()
    }
}

// sin: x - x^3/3! + x^5/5! - ...
pub(super) fn sin_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    let x2 = x.mul_full_prec(x).round_to(ws);

    let mut term = x.round_to(ws);
    let mut sum = term.clone();
    let mut n = 1u64;
    loop {
        term = term
            .mul_full_prec(&x2)
            .div_round(&DecimalNumber::from_u64((n + 1) * (n + 2)), ws)
            .neg();
        if term.is_zero() {
            break sum;
        }
        sum = sum.add_full_prec(&term).round_to(ws);
        n += 2;
    }
}
