//! Conversion arithmetic between net, gross and VAT amounts.
//!
//! Everything here is pure `Decimal` arithmetic; display text handling
//! (separators, rounding for display) lives in [`common`].

pub mod common;
pub mod conversion;

pub use common::{format_amount, parse_amount, round_half_up};
pub use conversion::{Conversion, gross_from_net, net_from_gross, net_from_vat};
