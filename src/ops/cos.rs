//! Cosine.

use crate::ctx;
use crate::defs::GUARD_DIGITS;
use crate::num::DecimalNumber;
use crate::ops::sin::sin_series;
use crate::ops::util::reduce_trig_arg;

impl DecimalNumber {
    /// Computes the cosine of the number (in radians). The result is rounded
    /// to the current scale.
    pub fn cos(&self) -> Self {
        let ws = ctx::scale() + GUARD_DIGITS;
        let (q, t) = reduce_trig_arg(&self.abs(), ws);

        let ret = match q {
            0 => cos_series(&t, ws),
            1 => sin_series(&t, ws).neg(),
            2 => cos_series(&t, ws).neg(),
            _ => sin_series(&t, ws),
        };

        ret.normalized()
    }
}

// cos: 1 - x^2/2! + x^4/4! - ...
pub(super) fn cos_series(x: &DecimalNumber, ws: usize) -> DecimalNumber {
    let x2 = x.mul_full_prec(x).round_to(ws);

    let mut term = DecimalNumber::from_u64(1);
    let mut sum = term.clone();
    let mut n = 0u64;
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
