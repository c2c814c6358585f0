//! Euler's number.

use crate::defs::GUARD_DIGITS;
use crate::num::DecimalNumber;

// Seed for the cache; recomputation starts beyond these digits.
const E_100: &str = "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274";

/// Holds the value of e computed so far.
#[derive(Debug)]
pub struct ECache {
    val: DecimalNumber,
    computed_decimals: usize,
}

impl ECache {
    pub fn new() -> Self {
        ECache {
            val: DecimalNumber::parse(E_100).expect("Constant E initialization."),
            computed_decimals: 98,
        }
    }

    /// Returns e rounded to `k` fractional digits, refining the cached value
    /// first when it is too short.
    pub(crate) fn for_scale(&mut self, k: usize) -> DecimalNumber {
        if self.computed_decimals < k {
            self.val = compute_e(k + GUARD_DIGITS);
            self.computed_decimals = k;
        }
        self.val.round_to(k)
    }
}

// Sums Σ 1/k! until the sum stops changing at `wp` fractional digits.
fn compute_e(wp: usize) -> DecimalNumber {
    let mut lasts = DecimalNumber::new();
    let mut s = DecimalNumber::from_u64(2);
    let mut term = DecimalNumber::from_u64(1);
    let mut k = 2u64;

    while s != lasts {
        lasts = s.clone();
        term = term.div_round(&DecimalNumber::from_u64(k), wp);
        s = s.add_full_prec(&term).round_to(wp);
        k += 1;
    }
    s
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_compute_e() {
        let computed = compute_e(60);
        let seeded = DecimalNumber::parse(E_100).unwrap();
        assert_eq!(computed.round_to(50), seeded.round_to(50));
    }

    #[test]
    fn test_refinement() {
        let mut cache = ECache::new();

        assert_eq!(cache.for_scale(16).to_string(), "2.7182818284590452");
        assert_eq!(
            cache.for_scale(40).to_string(),
            "2.7182818284590452353602874713526624977572"
        );

        let long = cache.for_scale(120);
        assert_eq!(long.decimals(), 120);
        assert_eq!(long.round_to(16), cache.for_scale(16));
    }
}
