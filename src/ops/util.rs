//! Auxiliary operations shared by the trigonometric functions.

use crate::common::consts::{HALF, TWO};
use crate::common::util::ten_pow;
use crate::defs::Sign;
use crate::num::DecimalNumber;
use crate::ops::consts;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

// Floor of the quotient of two non-negative values. The divisor must not be
// zero.
pub(super) fn floor_div_int(a: &DecimalNumber, b: &DecimalNumber) -> BigUint {
    debug_assert!(!a.is_negative() && !b.is_negative() && !b.is_zero());
    (a.mantissa() * ten_pow(b.decimals())) / (b.mantissa() * ten_pow(a.decimals()))
}

// Reduces a non-negative angle modulo 2π and splits it into a quadrant and a
// residual in [0, π/2], both at `ws` fractional digits. π is requested with
// enough extra digits to absorb the cancellation for large arguments.
pub(super) fn reduce_trig_arg(x: &DecimalNumber, ws: usize) -> (u32, DecimalNumber) {
    debug_assert!(!x.is_negative());

    let pi = consts::pi_to(ws + x.int_digits() + 1);
    let two_pi = pi.mul_full_prec(&TWO);

    let mut r = x.clone();
    if r >= two_pi {
        let k = DecimalNumber::from_raw_parts(floor_div_int(&r, &two_pi), 0, Sign::Pos);
        r = r.sub_full_prec(&two_pi.mul_full_prec(&k)).round_to(ws);
    }

    let half_pi = pi.mul_full_prec(&HALF);
    let q = (floor_div_int(&r, &half_pi) % 4u32).to_u32().unwrap_or(0);
    let qd = DecimalNumber::from_u64(q as u64);
    let t = r.sub_full_prec(&half_pi.mul_full_prec(&qd)).round_to(ws);

    (q, t)
}
