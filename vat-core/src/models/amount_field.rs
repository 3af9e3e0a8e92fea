use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::VatRate;
use crate::calculations::Conversion;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown amount field '{0}', expected 'net', 'gross' or 'vat'")]
pub struct ParseAmountFieldError(String);

/// One of the three linked amounts shown by the calculator.
///
/// Whichever field is active is the input; the other two are derived from
/// it through [`AmountField::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    Net,
    #[default]
    Gross,
    Vat,
}

impl AmountField {
    /// All fields in display order.
    pub fn all() -> &'static [AmountField] {
        &[AmountField::Gross, AmountField::Net, AmountField::Vat]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Net => "Net",
            Self::Gross => "Gross",
            Self::Vat => "VAT amount",
        }
    }

    /// The two fields derived when `self` is the input.
    pub fn others(&self) -> [AmountField; 2] {
        match self {
            Self::Net => [Self::Gross, Self::Vat],
            Self::Gross => [Self::Net, Self::Vat],
            Self::Vat => [Self::Gross, Self::Net],
        }
    }

    /// Derives the full net/gross/VAT triple from a value entered in this field.
    ///
    /// Returns `None` when the triple is undefined: a VAT amount at a 0% rate,
    /// or arithmetic that would overflow.
    pub fn derive(
        &self,
        value: Decimal,
        rate: VatRate,
    ) -> Option<Conversion> {
        let conversion = match self {
            Self::Net => Conversion::from_net(value, rate),
            Self::Gross => Conversion::from_gross(value, rate),
            Self::Vat => Conversion::from_vat(value, rate),
        };

        if conversion.is_none() {
            debug!(field = %self, %value, %rate, "no conversion for input");
        }

        conversion
    }
}

impl fmt::Display for AmountField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AmountField {
    type Err = ParseAmountFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "net" => Ok(Self::Net),
            "gross" => Ok(Self::Gross),
            "vat" => Ok(Self::Vat),
            _ => Err(ParseAmountFieldError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_field_is_gross() {
        assert_eq!(AmountField::default(), AmountField::Gross);
    }

    #[test]
    fn others_never_contain_self() {
        for field in AmountField::all() {
            assert!(!field.others().contains(field));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("NET".parse::<AmountField>(), Ok(AmountField::Net));
        assert_eq!(" vat ".parse::<AmountField>(), Ok(AmountField::Vat));
        assert_eq!(
            "brutto".parse::<AmountField>(),
            Err(ParseAmountFieldError("brutto".to_string()))
        );
    }

    #[test]
    fn derive_dispatches_on_input_field() {
        let from_gross = AmountField::Gross.derive(dec!(123), VatRate::TwentyThree);
        let from_net = AmountField::Net.derive(dec!(100), VatRate::TwentyThree);
        let from_vat = AmountField::Vat.derive(dec!(23), VatRate::TwentyThree);

        assert_eq!(from_gross, from_net);
        assert_eq!(from_net, from_vat);
    }

    #[test]
    fn derive_from_vat_at_zero_rate_is_undefined() {
        assert_eq!(AmountField::Vat.derive(dec!(10), VatRate::Zero), None);
    }
}
