//! Decfloat implements arbitrary precision decimal floating point numbers
//! for environments without wide hardware floating point.
//!
//! A [`DecimalNumber`] holds the value `sign · mantissa · 10^(-decimals)`
//! with an unbounded integer mantissa. Results of operations carry at most
//! [`scale`] fractional digits (16 by default, configurable with
//! [`set_scale`]) and are rounded half to even. The constants π and e are
//! cached process-wide and refined progressively when the scale grows.
//!
//! ## Examples
//!
//! ```
//! use decfloat::DecimalNumber;
//!
//! let a = DecimalNumber::parse("7.3329").unwrap();
//! let b = DecimalNumber::parse("157.82").unwrap();
//! assert_eq!((a + b).to_string(), "165.1529");
//!
//! let n = DecimalNumber::from_i64(2);
//! assert_eq!(n.sqrt().unwrap().to_string(), "1.4142135623730950");
//! assert_eq!(n.pow(107).unwrap().to_string(), "162259276829213363391578010288128");
//!
//! assert_eq!(DecimalNumber::pi().to_string(), "3.1415926535897932");
//! ```
//!
//! Errors are reported through the [`Error`] enum; no NaN or infinity
//! values exist:
//!
//! ```
//! use decfloat::{DecimalNumber, Error};
//!
//! let r = DecimalNumber::from_i64(1).div(&DecimalNumber::new());
//! assert_eq!(r.unwrap_err(), Error::DivisionByZero);
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
mod ctx;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::scale;
pub use crate::ctx::set_scale;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::DEFAULT_SCALE;
pub use crate::num::DecimalNumber;
