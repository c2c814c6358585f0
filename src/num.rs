//! DecimalNumber definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::util::{digit_count, ten_pow};
use crate::ctx;
use crate::defs::{Error, Sign};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// A decimal floating point number with a mantissa of arbitrary size, a count
/// of fractional digits, and a sign.
///
/// The represented value is `sign · mantissa · 10^(-decimals)`. Results of
/// operations carry at most [`scale`](crate::scale) fractional digits and are
/// rounded half to even.
#[derive(Debug, Clone)]
pub struct DecimalNumber {
    pub(crate) m: BigUint,
    pub(crate) d: usize,
    pub(crate) s: Sign,
}

impl DecimalNumber {
    /// Returns a new number with the value of 0.
    pub fn new() -> Self {
        DecimalNumber {
            m: BigUint::zero(),
            d: 0,
            s: Sign::Pos,
        }
    }

    /// Builds a number from a mantissa, a count of fractional digits, and a
    /// sign. The represented value is `s · m · 10^(-decimals)`. A zero
    /// mantissa is always positive.
    pub fn from_raw_parts(m: BigUint, decimals: usize, s: Sign) -> Self {
        let s = if m.is_zero() { Sign::Pos } else { s };
        DecimalNumber { m, d: decimals, s }
    }

    /// Returns the mantissa digits.
    pub fn mantissa(&self) -> &BigUint {
        &self.m
    }

    /// Returns the count of fractional digits.
    pub fn decimals(&self) -> usize {
        self.d
    }

    /// Returns the sign.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the value is greater than or equal to zero.
    pub fn is_positive(&self) -> bool {
        self.s.is_positive()
    }

    /// Returns true if the value is less than zero.
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    // Count of digits to the left of the decimal point.
    pub(crate) fn int_digits(&self) -> usize {
        let dc = digit_count(&self.m);
        if dc > self.d {
            dc - self.d
        } else {
            0
        }
    }

    /// Copies the value of `other` into `self`.
    pub fn copy_from(&mut self, other: &Self) {
        self.m = other.m.clone();
        self.d = other.d;
        self.s = other.s;
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        DecimalNumber {
            m: self.m.clone(),
            d: self.d,
            s: Sign::Pos,
        }
    }

    /// Returns the value with the opposite sign. Zero keeps the positive sign.
    pub fn neg(&self) -> Self {
        let s = if self.m.is_zero() {
            Sign::Pos
        } else {
            self.s.invert()
        };
        DecimalNumber {
            m: self.m.clone(),
            d: self.d,
            s,
        }
    }

    /// Returns the value rounded to at most `decimals` fractional digits
    /// using rounding half to even. A value with fewer fractional digits is
    /// returned unchanged.
    pub fn round_to(&self, decimals: usize) -> Self {
        if self.d <= decimals {
            return self.clone();
        }

        let p10 = ten_pow(self.d - decimals);
        let (mut q, r) = self.m.div_rem(&p10);

        // half to even: compare the doubled remainder with the divisor
        let r2 = &r << 1usize;
        if r2 > p10 || (r2 == p10 && q.is_odd()) {
            q += 1u32;
        }

        Self::from_raw_parts(q, decimals, self.s)
    }

    /// Returns the value rounded to the current scale, with zero brought to
    /// its canonical form. This is the unary plus of the library: it snaps a
    /// value of any declared precision to the current scale.
    pub fn normalized(&self) -> Self {
        let r = self.round_to(ctx::scale());
        if r.m.is_zero() {
            Self::new()
        } else {
            r
        }
    }

    // Signed mantissa brought up to `decimals` fractional digits.
    pub(crate) fn signed_scaled(&self, decimals: usize) -> BigInt {
        debug_assert!(decimals >= self.d);
        let mut m = BigInt::from(self.m.clone());
        if decimals > self.d {
            m *= BigInt::from(ten_pow(decimals - self.d));
        }
        if self.s.is_negative() {
            -m
        } else {
            m
        }
    }

    // Builds a number from a signed mantissa.
    pub(crate) fn from_signed(m: BigInt, decimals: usize) -> Self {
        let s = if m.is_negative() { Sign::Neg } else { Sign::Pos };
        Self::from_raw_parts(m.magnitude().clone(), decimals, s)
    }

    /// Adds `rhs` and rounds the result to the current scale.
    pub fn add(&self, rhs: &Self) -> Self {
        self.add_full_prec(rhs).normalized()
    }

    /// Subtracts `rhs` and rounds the result to the current scale.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.sub_full_prec(rhs).normalized()
    }

    /// Multiplies by `rhs` and rounds the result to the current scale.
    pub fn mul(&self, rhs: &Self) -> Self {
        self.mul_full_prec(rhs).normalized()
    }

    /// Divides by `rhs`. The quotient carries one guard digit beyond the
    /// current scale and is rounded half to even back to the scale.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.div_to(rhs, ctx::scale())?.normalized())
    }

    // Exact sum; the result carries the larger count of fractional digits.
    pub(crate) fn add_full_prec(&self, rhs: &Self) -> Self {
        let d = self.d.max(rhs.d);
        Self::from_signed(self.signed_scaled(d) + rhs.signed_scaled(d), d)
    }

    // Exact difference.
    pub(crate) fn sub_full_prec(&self, rhs: &Self) -> Self {
        let d = self.d.max(rhs.d);
        Self::from_signed(self.signed_scaled(d) - rhs.signed_scaled(d), d)
    }

    // Exact product; the counts of fractional digits add up.
    pub(crate) fn mul_full_prec(&self, rhs: &Self) -> Self {
        let s = if self.s == rhs.s { Sign::Pos } else { Sign::Neg };
        Self::from_raw_parts(&self.m * &rhs.m, self.d + rhs.d, s)
    }

    // Division rounded half to even to `decimals` fractional digits.
    pub(crate) fn div_to(&self, rhs: &Self, decimals: usize) -> Result<Self, Error> {
        if rhs.m.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_round(rhs, decimals))
    }

    // Quotient with one guard digit, rounded half to even to `decimals`
    // fractional digits. The divisor must not be zero.
    pub(crate) fn div_round(&self, rhs: &Self, decimals: usize) -> Self {
        debug_assert!(!rhs.m.is_zero());

        let shift = decimals as isize + 1 + rhs.d as isize - self.d as isize;
        let q = if shift >= 0 {
            &self.m * ten_pow(shift as usize) / &rhs.m
        } else {
            &self.m / (&rhs.m * ten_pow(-shift as usize))
        };

        let s = if self.s == rhs.s { Sign::Pos } else { Sign::Neg };
        Self::from_raw_parts(q, decimals + 1, s).round_to(decimals)
    }

    // Comparison of the mantissas aligned to a common count of fractional
    // digits.
    pub(crate) fn cmp_val(&self, rhs: &Self) -> core::cmp::Ordering {
        let d = self.d.max(rhs.d);
        self.signed_scaled(d).cmp(&rhs.signed_scaled(d))
    }
}

impl Default for DecimalNumber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::{scale_lock, set_scale};
    use crate::defs::DEFAULT_SCALE;

    #[test]
    fn test_canonical_zero() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let a = DecimalNumber::parse("1.50").unwrap();
        let z = a.sub(&a);
        assert!(z.is_zero());
        assert_eq!(z.decimals(), 0);
        assert!(z.is_positive());

        // multiplying zero by a negative value keeps zero positive
        let z = DecimalNumber::new().mul(&DecimalNumber::from_i64(-5));
        assert!(z.is_positive());
        assert_eq!(z.decimals(), 0);

        // rounding may collapse the mantissa to zero
        let t = DecimalNumber::parse("-0.004").unwrap();
        let r = t.round_to(2);
        assert!(r.is_zero());
        assert!(r.is_positive());
    }

    #[test]
    fn test_round_half_to_even() {
        let check = |s: &str, decimals: usize, expected: &str| {
            let v = DecimalNumber::parse(s).unwrap();
            assert_eq!(v.round_to(decimals).to_string(), expected, "{}", s);
        };

        check("0.5", 0, "0");
        check("1.5", 0, "2");
        check("2.5", 0, "2");
        check("3.5", 0, "4");
        check("-1.5", 0, "-2");
        check("-2.5", 0, "-2");

        check("2.675", 2, "2.68");
        check("2.665", 2, "2.66");
        check("2.6751", 2, "2.68");
        check("2.6749", 2, "2.67");

        // fewer digits than requested: unchanged
        check("2.5", 3, "2.5");
    }

    #[test]
    fn test_add_sub() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let a = DecimalNumber::parse("7.3329").unwrap();
        let b = DecimalNumber::parse("157.82").unwrap();
        assert_eq!(a.add(&b).to_string(), "165.1529");
        assert_eq!(b.add(&a).to_string(), "165.1529");

        assert_eq!(a.sub(&b).to_string(), "-150.4871");
        assert_eq!(b.sub(&a).to_string(), "150.4871");

        // additive identity and inverse
        let z = DecimalNumber::new();
        assert_eq!(a.add(&z), a.normalized());
        assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn test_mul() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let a = DecimalNumber::parse("-1.2").unwrap();
        let b = DecimalNumber::parse("0.04").unwrap();
        assert_eq!(a.mul(&b).to_string(), "-0.048");
        assert_eq!(b.mul(&a).to_string(), "-0.048");
        assert_eq!(a.mul(&a).to_string(), "1.44");
    }

    #[test]
    fn test_div() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let one = DecimalNumber::from_i64(1);
        let three = DecimalNumber::from_i64(3);
        assert_eq!(one.div(&three).unwrap().to_string(), "0.3333333333333333");
        assert_eq!(
            DecimalNumber::from_i64(2).div(&three).unwrap().to_string(),
            "0.6666666666666667"
        );

        let r = DecimalNumber::from_i64(-6).div(&DecimalNumber::from_i64(2)).unwrap();
        assert_eq!(r.to_string(), "-3.0000000000000000");

        assert_eq!(
            one.div(&DecimalNumber::new()).unwrap_err(),
            Error::DivisionByZero
        );

        // zero divided by anything is canonical zero
        let z = DecimalNumber::new().div(&DecimalNumber::from_i64(-5)).unwrap();
        assert!(z.is_zero());
        assert!(z.is_positive());
        assert_eq!(z.decimals(), 0);
    }

    #[test]
    fn test_normalized() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        // a parsed literal keeps its declared precision until normalized
        let v = DecimalNumber::parse("0.12345678901234567891").unwrap();
        assert_eq!(v.decimals(), 20);
        let n = v.normalized();
        assert_eq!(n.decimals(), DEFAULT_SCALE);
        assert_eq!(n.to_string(), "0.1234567890123457");
    }

    #[test]
    fn test_neg_abs() {
        let a = DecimalNumber::parse("-12.5").unwrap();
        assert_eq!(a.abs().to_string(), "12.5");
        assert_eq!(a.neg().to_string(), "12.5");
        assert_eq!(a.neg().neg().to_string(), "-12.5");

        // zero cannot become negative
        assert!(DecimalNumber::new().neg().is_positive());
    }

    #[test]
    fn test_copy_from() {
        let a = DecimalNumber::parse("9.75").unwrap();
        let mut b = DecimalNumber::new();
        b.copy_from(&a);
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "9.75");
    }

    #[test]
    fn test_distributivity_within_ulp() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let ulp = DecimalNumber::from_raw_parts(1u32.into(), DEFAULT_SCALE, Sign::Pos);
        for _ in 0..100 {
            let a = DecimalNumber::from_parts(rand::random::<i32>() as i64, 10).unwrap();
            let b = DecimalNumber::from_parts(rand::random::<i32>() as i64, 4).unwrap();
            let c = DecimalNumber::from_parts(rand::random::<i32>() as i64, 12).unwrap();

            let l = a.mul(&b.add(&c));
            let r = a.mul(&b).add(&a.mul(&c));
            assert!(l.sub_full_prec(&r).abs() <= ulp);
        }
    }

    #[test]
    fn test_division_inverse_within_ulp() {
        let _lock = scale_lock();
        set_scale(DEFAULT_SCALE);

        let ulp = DecimalNumber::from_raw_parts(1u32.into(), DEFAULT_SCALE, Sign::Pos);
        for _ in 0..100 {
            let a = DecimalNumber::from_parts(rand::random::<i32>() as i64, 5).unwrap();
            let b = DecimalNumber::from_parts((rand::random::<u16>() as i64) + 1, 5).unwrap();

            let r = a.div(&b).unwrap().mul(&b);
            assert!(r.sub_full_prec(&a.normalized()).abs() <= ulp);
        }
    }
}
