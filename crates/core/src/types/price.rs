//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A price in the billing currency's standard unit (dollars, not cents).
///
/// Menu items and cart entries carry prices as decimals; the payment
/// collaborator wants minor units, see [`Price::to_minor_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the price is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Convert to minor units (cents), truncating sub-cent digits.
    ///
    /// `12.345` converts to `1234`. Returns `None` when the amount does not
    /// fit in an `i64`.
    #[must_use]
    pub fn to_minor_units(&self) -> Option<i64> {
        (self.0 * Decimal::ONE_HUNDRED).trunc().to_i64()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Prices live in a NUMERIC column; delegate to sqlx's Decimal support.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units_truncates() {
        let price = Price::new(Decimal::new(12_345, 3)); // 12.345
        assert_eq!(price.to_minor_units(), Some(1234));
    }

    #[test]
    fn test_to_minor_units_exact() {
        let price = Price::new(Decimal::new(1099, 2)); // 10.99
        assert_eq!(price.to_minor_units(), Some(1099));
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::new(Decimal::ONE).is_positive());
        assert!(!Price::new(Decimal::ZERO).is_positive());
        assert!(!Price::new(Decimal::NEGATIVE_ONE).is_positive());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(format!("{}", Price::new(Decimal::new(95, 1))), "9.50");
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(price.amount(), Decimal::new(125, 1));
    }
}
