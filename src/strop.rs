//! DecimalNumber formatting.

use crate::num::DecimalNumber;
use core::fmt;

impl DecimalNumber {
    // Integer and fractional digit groups of the canonical rendering; the
    // fractional group is padded on the left to `decimals` digits.
    fn digit_groups(&self) -> (String, String) {
        let digits = self.m.to_str_radix(10);

        if self.d == 0 {
            (digits, String::new())
        } else if digits.len() > self.d {
            let (i, f) = digits.split_at(digits.len() - self.d);
            (i.to_string(), f.to_string())
        } else {
            let mut f = String::with_capacity(self.d);
            for _ in 0..self.d - digits.len() {
                f.push('0');
            }
            f.push_str(&digits);
            ("0".to_string(), f)
        }
    }

    /// Renders the number with the integer part grouped in threes with `,`
    /// separators.
    pub fn to_string_thousands(&self) -> String {
        let (int_part, frac_part) = self.digit_groups();

        let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + self.d + 2);
        if self.s.is_negative() {
            out.push('-');
        }
        for (i, c) in int_part.chars().enumerate() {
            if i != 0 && (int_part.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        if self.d > 0 {
            out.push('.');
            out.push_str(&frac_part);
        }
        out
    }

    /// Renders the number within at most `max_len` characters. If the
    /// integer portion alone does not fit, the literal string `"Overflow"`
    /// is returned. Otherwise fractional digits are truncated (not rounded)
    /// from the right; a truncated rendering leaves room for at least one
    /// more character, and a dangling decimal point is dropped.
    ///
    /// ## Panics
    ///
    /// Panics if `max_len` is less than 8.
    pub fn to_string_max_length(&self, max_len: usize) -> String {
        assert!(max_len >= 8, "max_len must be at least 8");

        let mut out = self.to_string();
        let int_len = out.find('.').unwrap_or(out.len());
        if int_len > max_len {
            return "Overflow".to_string();
        }

        if out.len() > max_len {
            while out.len() >= max_len && !out.ends_with('.') {
                out.pop();
            }
            if out.ends_with('.') {
                out.pop();
            }
        }
        out
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.digit_groups();
        if self.s.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&int_part)?;
        if self.d > 0 {
            f.write_str(".")?;
            f.write_str(&frac_part)?;
        }
        Ok(())
    }
}
