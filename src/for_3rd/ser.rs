//! Serialization of DecimalNumber.
//! Serialization uses the canonical decimal string.

use crate::num::DecimalNumber;
use serde::{Serialize, Serializer};

impl Serialize for DecimalNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::num::DecimalNumber;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&DecimalNumber::new()).unwrap(), "\"0\"");
        assert_eq!(
            to_string(&DecimalNumber::parse("-12.50").unwrap()).unwrap(),
            "\"-12.50\""
        );
    }
}
