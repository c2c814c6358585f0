//! Auxiliary functions.

use num_bigint::BigUint;

/// 10 raised to the power of `n`.
pub fn ten_pow(n: usize) -> BigUint {
    BigUint::from(10u32).pow(n as u32)
}

/// Count of decimal digits of `m`; zero has one digit.
pub fn digit_count(m: &BigUint) -> usize {
    m.to_str_radix(10).len()
}
