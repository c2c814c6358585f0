//! DecimalNumber parsing.

use crate::defs::{Error, Sign};
use crate::num::DecimalNumber;
use core::str::FromStr;
use num_bigint::BigUint;

impl DecimalNumber {
    /// Parses a number from its decimal string representation: an optional
    /// `-`, integer digits, and an optional fractional part after a single
    /// point. At least one digit must be present. The declared precision of
    /// the literal is kept until the value takes part in an operation.
    ///
    /// ## Errors
    ///
    ///  - ParseError: the input is not a well-formed decimal literal.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let b = s.as_bytes();

        let (sign, b) = match b.first() {
            Some(b'-') => (Sign::Neg, &b[1..]),
            _ => (Sign::Pos, b),
        };

        let (int_part, b) = eat_digits(b);
        let (frac_part, b) = match b.first() {
            Some(b'.') => eat_digits(&b[1..]),
            _ => (&b""[..], b),
        };

        if !b.is_empty() || (int_part.is_empty() && frac_part.is_empty()) {
            return Err(Error::ParseError);
        }

        let mut digits = Vec::with_capacity(int_part.len() + frac_part.len());
        digits.extend_from_slice(int_part);
        digits.extend_from_slice(frac_part);

        let m = BigUint::parse_bytes(&digits, 10).ok_or(Error::ParseError)?;

        Ok(Self::from_raw_parts(m, frac_part.len(), sign))
    }
}

/// Carves off decimal digits up to the first non-digit character.
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|c| c.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

impl FromStr for DecimalNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecimalNumber::parse(s)
    }
}
