//! Money values with exactly two fraction digits.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Largest amount a single transaction may carry (one trillion)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// A non-negative amount of money, always held at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::NegativeAmount);
        }
        let rounded = round_cents(value);
        if rounded > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(format_money(MAX_AMOUNT)));
        }
        Ok(Self(rounded))
    }

    /// Parse user input such as `"12"`, `"12.5"` or `" 3.999 "`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAmount);
        }
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self.0))
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Format any decimal (including a negative balance) with two fraction digits.
pub fn format_money(value: Decimal) -> String {
    let rounded = round_cents(value);
    // "-0.00" can come out of rounding a tiny negative value
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    rounded.to_string()
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        let value = Decimal::try_from(v).map_err(E::custom)?;
        Amount::new(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Amount::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::new(Decimal::from(v)).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_parse_pads_to_two_digits() {
        assert_eq!(Amount::parse("100").unwrap().to_string(), "100.00");
        assert_eq!(Amount::parse("12.5").unwrap().to_string(), "12.50");
        assert_eq!(Amount::parse(" 0 ").unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_parse_rounds_half_away_from_zero() {
        assert_eq!(Amount::parse("3.999").unwrap().to_string(), "4.00");
        assert_eq!(Amount::parse("1.005").unwrap().to_string(), "1.01");
        assert_eq!(Amount::parse("1.004").unwrap().to_string(), "1.00");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Amount::parse(""), Err(ValidationError::EmptyAmount));
        assert_eq!(Amount::parse("   "), Err(ValidationError::EmptyAmount));
        assert_eq!(
            Amount::parse("abc"),
            Err(ValidationError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(Amount::parse("-5"), Err(ValidationError::NegativeAmount));
    }

    #[test]
    fn test_parse_rejects_amounts_above_limit() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000u64));
        assert_eq!(Amount::parse("1000000000000").unwrap().to_string(), "1000000000000.00");
        assert_eq!(
            Amount::parse("1000000000000.01"),
            Err(ValidationError::AmountTooLarge("1000000000000.00".to_string()))
        );
        assert!(matches!(
            Amount::parse("50000000000000000000000000000"),
            Err(ValidationError::AmountTooLarge(_))
        ));
        assert!(serde_json::from_str::<Amount>("\"50000000000000000000000000000\"").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let amount = Amount::parse("40").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"40.00\"");
    }

    #[test]
    fn test_deserializes_string_or_number() {
        let from_str: Amount = serde_json::from_str("\"19.90\"").unwrap();
        let from_num: Amount = serde_json::from_str("19.9").unwrap();
        let from_int: Amount = serde_json::from_str("7").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_int.to_string(), "7.00");
        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
    }

    #[test]
    fn test_format_money_signed() {
        let value = Decimal::from_f64(-12.3).unwrap();
        assert_eq!(format_money(value), "-12.30");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
        assert_eq!(format_money(Decimal::new(-1, 3)), "0.00");
    }
}
