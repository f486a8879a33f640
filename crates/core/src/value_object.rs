//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Positive count of a menu item on an order line.
///
/// Construction (including deserialization) rejects zero and negative values,
/// so a `Quantity` held anywhere in the domain is always valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self(value.unsigned_abs()))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    // Built from a positive i64, so always in range.
    fn from(value: Quantity) -> Self {
        value.0 as i64
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert!(Quantity::new(1).is_ok());
        assert_eq!(
            Quantity::new(0).unwrap_err(),
            DomainError::validation("quantity must be positive")
        );
        assert!(Quantity::new(-3).is_err());
    }

    #[test]
    fn large_quantities_are_kept_whole() {
        let big = i64::from(u32::MAX) + 1;
        let q = Quantity::new(big).unwrap();
        assert_eq!(q.get(), 4_294_967_296);
        assert_eq!(i64::from(q), big);

        let max = Quantity::new(i64::MAX).unwrap();
        assert_eq!(serde_json::to_string(&max).unwrap(), i64::MAX.to_string());
    }

    #[test]
    fn quantity_deserialization_is_validated() {
        let q: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(q.get(), 2);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }
}
