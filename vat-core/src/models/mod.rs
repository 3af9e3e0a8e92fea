mod amount_field;
mod decimal_separator;
mod vat_rate;

pub use amount_field::{AmountField, ParseAmountFieldError};
pub use decimal_separator::{DecimalSeparator, ParseDecimalSeparatorError};
pub use vat_rate::{ParseVatRateError, VatRate};
