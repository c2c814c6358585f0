//! Deserialization of DecimalNumber.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::num::DecimalNumber;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

struct DecimalNumberVisitor {}

impl<'de> Deserialize<'de> for DecimalNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalNumberVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalNumberVisitor {
    type Value = DecimalNumber;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or integer `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DecimalNumber::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DecimalNumber::from_i64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        DecimalNumber::from_str(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
