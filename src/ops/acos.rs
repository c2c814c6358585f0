//! Arccosine.

use crate::common::consts::HALF;
use crate::ctx;
use crate::defs::{Error, GUARD_DIGITS};
use crate::num::DecimalNumber;
use crate::ops::asin::asin_to;
use crate::ops::consts;

impl DecimalNumber {
    /// Computes the arccosine of the number as `π/2 - asin(x)`. The result is
    /// rounded to the current scale.
    ///
    /// ## Errors
    ///
    ///  - MathDomainError: the argument is out of the range \[-1, 1\].
    pub fn acos(&self) -> Result<Self, Error> {
        let ws = ctx::scale() + GUARD_DIGITS;

        let a = asin_to(self, ws)?;
        let half_pi = consts::pi_to(ws + 1).mul_full_prec(&HALF);

        Ok(half_pi.sub_full_prec(&a).normalized())
    }
}
