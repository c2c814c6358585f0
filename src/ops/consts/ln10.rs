//! Natural logarithm of 10.

use crate::common::consts::TEN;
use crate::defs::GUARD_DIGITS;
use crate::num::DecimalNumber;
use crate::ops::log::ln_series;

/// Holds the value of ln(10) computed so far.
#[derive(Debug)]
pub struct Ln10Cache {
    val: DecimalNumber,
    computed_decimals: usize,
}

impl Ln10Cache {
    pub fn new() -> Self {
        Ln10Cache {
            val: DecimalNumber::new(),
            computed_decimals: 0,
        }
    }

    /// Returns ln(10) rounded to `k` fractional digits, refining the cached
    /// value first when it is too short.
    pub(crate) fn for_scale(&mut self, k: usize) -> DecimalNumber {
        if self.computed_decimals < k {
            self.val = ln_series(&TEN, k + GUARD_DIGITS);
            self.computed_decimals = k;
        }
        self.val.round_to(k)
    }
}
