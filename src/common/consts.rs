//! Static constants.

use crate::defs::Sign;
use crate::num::DecimalNumber;
use lazy_static::lazy_static;
use num_bigint::BigUint;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: DecimalNumber = DecimalNumber::from_u64(1);

    /// 2
    pub(crate) static ref TWO: DecimalNumber = DecimalNumber::from_u64(2);

    /// 10
    pub(crate) static ref TEN: DecimalNumber = DecimalNumber::from_u64(10);

    /// 0.5
    pub(crate) static ref HALF: DecimalNumber = DecimalNumber::from_raw_parts(BigUint::from(5u32), 1, Sign::Pos);

    /// 0.1
    pub(crate) static ref TENTH: DecimalNumber = DecimalNumber::from_raw_parts(BigUint::from(1u32), 1, Sign::Pos);
}
