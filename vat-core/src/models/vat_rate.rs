use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name one of the supported rates.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported VAT rate '{0}', expected one of 0%, 5%, 8%, 23%")]
pub struct ParseVatRateError(String);

/// The fixed set of VAT rates offered by the rate selector.
///
/// Serialized as its percentage label (`"23%"`), and parsed from either a
/// percentage (`"23"`, `"23%"`) or a fraction (`"0.23"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VatRate {
    Zero,
    Five,
    Eight,
    #[default]
    TwentyThree,
}

impl VatRate {
    /// All rates in selector order.
    pub fn all() -> &'static [VatRate] {
        &[
            VatRate::Zero,
            VatRate::Five,
            VatRate::Eight,
            VatRate::TwentyThree,
        ]
    }

    /// Whole-number percentage, e.g. `23` for 23%.
    pub fn percent(&self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Five => 5,
            Self::Eight => 8,
            Self::TwentyThree => 23,
        }
    }

    /// The rate as a fraction of one, e.g. `0.23` for 23%.
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0%",
            Self::Five => "5%",
            Self::Eight => "8%",
            Self::TwentyThree => "23%",
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl fmt::Display for VatRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VatRate {
    type Err = ParseVatRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(percent) = trimmed.strip_suffix('%') {
            let percent = percent.trim();
            return Self::all()
                .iter()
                .copied()
                .find(|rate| rate.percent().to_string() == percent)
                .ok_or_else(|| ParseVatRateError(s.to_string()));
        }

        if let Some(rate) = Self::all()
            .iter()
            .copied()
            .find(|rate| rate.percent().to_string() == trimmed)
        {
            return Ok(rate);
        }

        let fraction: Decimal = trimmed
            .parse()
            .map_err(|_| ParseVatRateError(s.to_string()))?;
        Self::all()
            .iter()
            .copied()
            .find(|rate| rate.fraction() == fraction)
            .ok_or_else(|| ParseVatRateError(s.to_string()))
    }
}

impl TryFrom<String> for VatRate {
    type Error = ParseVatRateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VatRate> for String {
    fn from(rate: VatRate) -> Self {
        rate.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_rate_is_twenty_three_percent() {
        assert_eq!(VatRate::default(), VatRate::TwentyThree);
    }

    #[test]
    fn fraction_matches_percentage() {
        assert_eq!(VatRate::Zero.fraction(), dec!(0));
        assert_eq!(VatRate::Five.fraction(), dec!(0.05));
        assert_eq!(VatRate::Eight.fraction(), dec!(0.08));
        assert_eq!(VatRate::TwentyThree.fraction(), dec!(0.23));
    }

    #[test]
    fn labels_are_in_selector_order() {
        let labels: Vec<&str> = VatRate::all().iter().map(VatRate::label).collect();

        assert_eq!(labels, vec!["0%", "5%", "8%", "23%"]);
    }

    #[test]
    fn parse_accepts_percent_label() {
        assert_eq!("23%".parse::<VatRate>(), Ok(VatRate::TwentyThree));
        assert_eq!(" 8 % ".parse::<VatRate>(), Ok(VatRate::Eight));
    }

    #[test]
    fn parse_accepts_bare_percentage() {
        assert_eq!("5".parse::<VatRate>(), Ok(VatRate::Five));
        assert_eq!("0".parse::<VatRate>(), Ok(VatRate::Zero));
    }

    #[test]
    fn parse_accepts_fraction() {
        assert_eq!("0.23".parse::<VatRate>(), Ok(VatRate::TwentyThree));
        assert_eq!("0.08".parse::<VatRate>(), Ok(VatRate::Eight));
    }

    #[test]
    fn parse_rejects_unsupported_rate() {
        assert_eq!(
            "19%".parse::<VatRate>(),
            Err(ParseVatRateError("19%".to_string()))
        );
        assert!("0.19".parse::<VatRate>().is_err());
        assert!("abc".parse::<VatRate>().is_err());
        assert!("".parse::<VatRate>().is_err());
    }

    #[test]
    fn string_conversion_uses_label() {
        assert_eq!(String::from(VatRate::Eight), "8%");
        assert_eq!(VatRate::try_from("8%".to_string()), Ok(VatRate::Eight));
    }
}
