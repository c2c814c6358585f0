//! Square root computation.

use crate::common::util::ten_pow;
use crate::ctx;
use crate::defs::{Error, Sign};
use crate::num::DecimalNumber;
use num_bigint::BigUint;
use num_traits::{One, Zero};

impl DecimalNumber {
    /// Computes the square root of the number, truncated toward zero at the
    /// current scale, so that squaring the result never exceeds the argument.
    ///
    /// ## Errors
    ///
    ///  - MathDomainError: the argument is negative.
    pub fn sqrt(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(Self::new());
        }
        if self.is_negative() {
            return Err(Error::MathDomainError);
        }

        let r = self.sqrt_to(ctx::scale());
        Ok(if r.is_zero() { Self::new() } else { r })
    }

    // Truncated square root with `decimals` fractional digits.
    // The argument must not be negative.
    pub(crate) fn sqrt_to(&self, decimals: usize) -> Self {
        debug_assert!(!self.is_negative());

        if self.m.is_zero() {
            return Self::new();
        }

        // lift to an integer holding 2·decimals fractional digit pairs
        let e = 2 * decimals as isize - self.d as isize;
        let m = if e >= 0 {
            &self.m * ten_pow(e as usize)
        } else {
            &self.m / ten_pow(-e as usize)
        };
        if m.is_zero() {
            return Self::new();
        }

        Self::from_raw_parts(isqrt(&m), decimals, Sign::Pos)
    }
}

// Integer square root by Newton iteration. The initial estimate is a power
// of two not less than the root; the iteration decreases until it settles on
// the greatest integer whose square does not exceed `n`.
fn isqrt(n: &BigUint) -> BigUint {
    let mut x = BigUint::one() << ((n.bits() as usize + 1) / 2);
    loop {
        let y = (&x + n / &x) >> 1usize;
        if y >= x {
            break x;
        }
        x = y;
    }
}
