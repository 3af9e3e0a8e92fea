//! The tri-field converter: three linked amounts, one of which is typed into.
//!
//! Every mutation of the active field's text, and every rate change, runs a
//! full recompute of the two derived fields. Input that does not read as a
//! non-negative amount blanks the derived fields instead of reporting an
//! error.
//!
//! # Example
//!
//! ```
//! use vat_core::{AmountField, Key, TriFieldConverter};
//!
//! let mut converter = TriFieldConverter::new();
//! for key in [Key::Digit('1'), Key::Digit('2'), Key::Digit('3')] {
//!     converter.press(key).unwrap();
//! }
//!
//! assert_eq!(converter.text(AmountField::Net), "100,00");
//! assert_eq!(converter.text(AmountField::Vat), "23,00");
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{Conversion, format_amount, parse_amount};
use crate::{AmountField, DecimalSeparator, Key, VatRate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConverterError {
    /// Only '0'..='9' can be appended as digits.
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldTexts {
    net: String,
    gross: String,
    vat: String,
}

impl FieldTexts {
    fn get(
        &self,
        field: AmountField,
    ) -> &str {
        match field {
            AmountField::Net => &self.net,
            AmountField::Gross => &self.gross,
            AmountField::Vat => &self.vat,
        }
    }

    fn get_mut(
        &mut self,
        field: AmountField,
    ) -> &mut String {
        match field {
            AmountField::Net => &mut self.net,
            AmountField::Gross => &mut self.gross,
            AmountField::Vat => &mut self.vat,
        }
    }
}

/// Calculator state: the three field texts, the selected rate and which
/// field is being typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriFieldConverter {
    texts: FieldTexts,
    rate: VatRate,
    active: AmountField,
    separator: DecimalSeparator,
}

impl Default for TriFieldConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TriFieldConverter {
    /// Empty fields, Gross active, 23% rate, comma separator.
    pub fn new() -> Self {
        Self {
            texts: FieldTexts::default(),
            rate: VatRate::default(),
            active: AmountField::default(),
            separator: DecimalSeparator::default(),
        }
    }

    pub fn with_rate(
        mut self,
        rate: VatRate,
    ) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_active(
        mut self,
        active: AmountField,
    ) -> Self {
        self.active = active;
        self
    }

    pub fn with_separator(
        mut self,
        separator: DecimalSeparator,
    ) -> Self {
        self.separator = separator;
        self
    }

    pub fn rate(&self) -> VatRate {
        self.rate
    }

    pub fn active(&self) -> AmountField {
        self.active
    }

    pub fn separator(&self) -> DecimalSeparator {
        self.separator
    }

    /// Current display text of `field`.
    pub fn text(
        &self,
        field: AmountField,
    ) -> &str {
        self.texts.get(field)
    }

    /// Value of `field` as read from its text, or `None` when empty or invalid.
    pub fn value(
        &self,
        field: AmountField,
    ) -> Option<Decimal> {
        parse_amount(self.texts.get(field), self.separator)
    }

    pub fn set_rate(
        &mut self,
        rate: VatRate,
    ) {
        debug!(%rate, "rate selected");
        self.rate = rate;
        self.recompute();
    }

    /// Moves keypad input to `field`. No text changes.
    pub fn set_active(
        &mut self,
        field: AmountField,
    ) {
        debug!(%field, "active field selected");
        self.active = field;
    }

    pub fn append_digit(
        &mut self,
        digit: char,
    ) -> Result<(), ConverterError> {
        if !digit.is_ascii_digit() {
            warn!(%digit, "rejected non-digit keypad input");
            return Err(ConverterError::NotADigit(digit));
        }

        self.texts.get_mut(self.active).push(digit);
        self.recompute();
        Ok(())
    }

    /// Appends the decimal separator unless the active text already has one.
    /// An empty text becomes `"0"` followed by the separator.
    pub fn append_separator(&mut self) {
        let separator = self.separator.as_char();
        let text = self.texts.get_mut(self.active);
        if text.contains(separator) {
            return;
        }

        if text.is_empty() {
            text.push('0');
        }
        text.push(separator);
        self.recompute();
    }

    /// Removes the last character of the active text. No-op when empty.
    pub fn backspace(&mut self) {
        if self.texts.get_mut(self.active).pop().is_some() {
            self.recompute();
        }
    }

    /// Empties all three fields.
    pub fn clear(&mut self) {
        self.texts = FieldTexts::default();
    }

    /// Routes a keypad key to the matching operation.
    pub fn press(
        &mut self,
        key: Key,
    ) -> Result<(), ConverterError> {
        match key {
            Key::Digit(d) => self.append_digit(d)?,
            Key::Separator => self.append_separator(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ConverterSnapshot {
        ConverterSnapshot {
            rate: self.rate,
            active: self.active,
            net: self.texts.net.clone(),
            gross: self.texts.gross.clone(),
            vat: self.texts.vat.clone(),
        }
    }

    fn recompute(&mut self) {
        let [first, second] = self.active.others();

        let conversion = self
            .value(self.active)
            .and_then(|value| self.active.derive(value, self.rate));

        let derived = conversion.and_then(|conversion| {
            Some((
                self.formatted(&conversion, first)?,
                self.formatted(&conversion, second)?,
            ))
        });

        match derived {
            Some((first_text, second_text)) => {
                *self.texts.get_mut(first) = first_text;
                *self.texts.get_mut(second) = second_text;
            }
            None => {
                self.texts.get_mut(first).clear();
                self.texts.get_mut(second).clear();
            }
        }

        debug!(
            active = %self.active,
            rate = %self.rate,
            net = %self.texts.net,
            gross = %self.texts.gross,
            vat = %self.texts.vat,
            "recomputed"
        );
    }

    fn formatted(
        &self,
        conversion: &Conversion,
        field: AmountField,
    ) -> Option<String> {
        let value = match field {
            AmountField::Net => conversion.net,
            AmountField::Gross => conversion.gross,
            AmountField::Vat => conversion.vat,
        };
        format_amount(value, self.separator)
    }
}

/// Point-in-time copy of the converter's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterSnapshot {
    pub rate: VatRate,
    pub active: AmountField,
    pub net: String,
    pub gross: String,
    pub vat: String,
}

impl fmt::Display for ConverterSnapshot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let marker = |field: AmountField| if field == self.active { "*" } else { " " };

        writeln!(f, "Rate:         {}", self.rate)?;
        writeln!(f, "{} Gross:      {}", marker(AmountField::Gross), self.gross)?;
        writeln!(f, "{} Net:        {}", marker(AmountField::Net), self.net)?;
        write!(f, "{} VAT amount: {}", marker(AmountField::Vat), self.vat)
    }
}
