//! The number π.

use crate::defs::GUARD_DIGITS;
use crate::num::DecimalNumber;

// Seed for the cache; recomputation starts beyond these digits.
const PI_100: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Holds the value of π computed so far.
#[derive(Debug)]
pub struct PiCache {
    val: DecimalNumber,
    computed_decimals: usize,
}

impl PiCache {
    pub fn new() -> Self {
        PiCache {
            val: DecimalNumber::parse(PI_100).expect("Constant PI initialization."),
            computed_decimals: 98,
        }
    }

    /// Returns π rounded to `k` fractional digits, refining the cached value
    /// first when it is too short.
    pub(crate) fn for_scale(&mut self, k: usize) -> DecimalNumber {
        if self.computed_decimals < k {
            self.val = compute_pi(k + GUARD_DIGITS);
            self.computed_decimals = k;
        }
        self.val.round_to(k)
    }
}

// Sums the series 3 + Σ tᵢ with tᵢ = tᵢ₋₁·nᵢ/dᵢ, where the integer pairs
// grow by 8 and 32 per step, until the sum stops changing at `wp` fractional
// digits.
fn compute_pi(wp: usize) -> DecimalNumber {
    let mut lasts = DecimalNumber::new();
    let mut t = DecimalNumber::from_u64(3);
    let mut s = DecimalNumber::from_u64(3);
    let (mut n, mut na) = (1u64, 0u64);
    let (mut d, mut da) = (0u64, 24u64);

    while s != lasts {
        lasts = s.clone();
        n += na;
        na += 8;
        d += da;
        da += 32;
        t = t
            .mul_full_prec(&DecimalNumber::from_u64(n))
            .div_round(&DecimalNumber::from_u64(d), wp);
        s = s.add_full_prec(&t).round_to(wp);
    }
    s
}
