//! Conversions between DecimalNumber and integers.

use crate::common::util::ten_pow;
use crate::defs::{Error, Sign};
use crate::num::DecimalNumber;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

impl DecimalNumber {
    /// Returns a new number with the value of `n`.
    pub fn from_i64(n: i64) -> Self {
        let s = if n < 0 { Sign::Neg } else { Sign::Pos };
        Self::from_raw_parts(BigUint::from(n.unsigned_abs()), 0, s)
    }

    /// Returns a new number with the value of `n`.
    pub fn from_u64(n: u64) -> Self {
        Self::from_raw_parts(BigUint::from(n), 0, Sign::Pos)
    }

    /// Builds a number from an integer mantissa and a count of fractional
    /// digits; the represented value is `mantissa · 10^(-decimals)`.
    ///
    /// ## Errors
    ///
    ///  - BadInit: `decimals` is negative.
    pub fn from_parts(mantissa: i64, decimals: i32) -> Result<Self, Error> {
        if decimals < 0 {
            return Err(Error::BadInit);
        }
        let s = if mantissa < 0 { Sign::Neg } else { Sign::Pos };
        Ok(Self::from_raw_parts(
            BigUint::from(mantissa.unsigned_abs()),
            decimals as usize,
            s,
        ))
    }

    /// Returns the integer part of the value, truncated toward zero.
    pub fn to_int_truncate(&self) -> BigInt {
        let q = BigInt::from(&self.m / ten_pow(self.d));
        if self.s.is_negative() {
            -q
        } else {
            q
        }
    }

    /// Returns the value rounded half to even to zero fractional digits.
    pub fn to_int_round(&self) -> BigInt {
        let r = self.round_to(0);
        let q = BigInt::from(r.m);
        if r.s.is_negative() {
            -q
        } else {
            q
        }
    }
}

impl From<BigInt> for DecimalNumber {
    fn from(n: BigInt) -> Self {
        let s = if n.is_negative() { Sign::Neg } else { Sign::Pos };
        Self::from_raw_parts(n.magnitude().clone(), 0, s)
    }
}

impl From<BigUint> for DecimalNumber {
    fn from(n: BigUint) -> Self {
        Self::from_raw_parts(n, 0, Sign::Pos)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for DecimalNumber {
            fn from(n: $t) -> Self {
                DecimalNumber::from_i64(n as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for DecimalNumber {
            fn from(n: $t) -> Self {
                DecimalNumber::from_u64(n as u64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_from_int() {
        assert_eq!(DecimalNumber::from_i64(0).to_string(), "0");
        assert_eq!(DecimalNumber::from_i64(-42).to_string(), "-42");
        assert_eq!(DecimalNumber::from_u64(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(DecimalNumber::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(DecimalNumber::from(-7i32).to_string(), "-7");
        assert_eq!(DecimalNumber::from(200u8).to_string(), "200");
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(DecimalNumber::from_parts(12345, 2).unwrap().to_string(), "123.45");
        assert_eq!(DecimalNumber::from_parts(-5, 3).unwrap().to_string(), "-0.005");
        assert_eq!(DecimalNumber::from_parts(7, 0).unwrap().to_string(), "7");
        assert_eq!(DecimalNumber::from_parts(1, -1).unwrap_err(), Error::BadInit);
    }

    #[test]
    fn test_to_int() {
        let v = DecimalNumber::parse("-1.7").unwrap();
        assert_eq!(v.to_int_truncate(), BigInt::from(-1));
        assert_eq!(v.to_int_round(), BigInt::from(-2));

        let v = DecimalNumber::parse("2.5").unwrap();
        assert_eq!(v.to_int_truncate(), BigInt::from(2));
        assert_eq!(v.to_int_round(), BigInt::from(2));

        let v = DecimalNumber::parse("1.5").unwrap();
        assert_eq!(v.to_int_round(), BigInt::from(2));

        let v = DecimalNumber::parse("0.4999").unwrap();
        assert_eq!(v.to_int_truncate(), BigInt::from(0));
        assert_eq!(v.to_int_round(), BigInt::from(0));
    }
}
