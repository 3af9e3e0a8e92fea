//! Net / gross / VAT conversion formulas.
//!
//! | Input | Formulas |
//! |-------|----------|
//! | Gross | `net = gross / (1 + rate)`, `vat = gross - net` |
//! | Net   | `gross = net * (1 + rate)`, `vat = gross - net` |
//! | VAT   | `net = vat / rate`, `gross = net * (1 + rate)` (undefined at 0%) |
//!
//! All arithmetic is checked. Results are kept at full precision; rounding
//! happens only when a value is formatted for display.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vat_core::VatRate;
//! use vat_core::calculations::Conversion;
//!
//! let conversion = Conversion::from_gross(dec!(123), VatRate::TwentyThree).unwrap();
//!
//! assert_eq!(conversion.net, dec!(100));
//! assert_eq!(conversion.vat, dec!(23));
//! ```

use rust_decimal::Decimal;

use crate::VatRate;

/// Net amount contained in a gross amount at `rate` (a fraction, e.g. `0.23`).
pub fn net_from_gross(
    gross: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    gross.checked_div(Decimal::ONE.checked_add(rate)?)
}

/// Gross amount for a net amount at `rate`.
pub fn gross_from_net(
    net: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    net.checked_mul(Decimal::ONE.checked_add(rate)?)
}

/// Net amount on which `vat` is charged at `rate`.
///
/// Returns `None` at a zero rate, where any net amount carries no VAT.
pub fn net_from_vat(
    vat: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    if rate.is_zero() {
        return None;
    }
    vat.checked_div(rate)
}

/// A consistent net/gross/VAT triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub net: Decimal,
    pub gross: Decimal,
    pub vat: Decimal,
}

impl Conversion {
    pub fn from_gross(
        gross: Decimal,
        rate: VatRate,
    ) -> Option<Self> {
        let net = net_from_gross(gross, rate.fraction())?;
        let vat = gross.checked_sub(net)?;
        Some(Self { net, gross, vat })
    }

    pub fn from_net(
        net: Decimal,
        rate: VatRate,
    ) -> Option<Self> {
        let gross = gross_from_net(net, rate.fraction())?;
        let vat = gross.checked_sub(net)?;
        Some(Self { net, gross, vat })
    }

    pub fn from_vat(
        vat: Decimal,
        rate: VatRate,
    ) -> Option<Self> {
        let net = net_from_vat(vat, rate.fraction())?;
        let gross = gross_from_net(net, rate.fraction())?;
        Some(Self { net, gross, vat })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    // =========================================================================
    // formula tests
    // =========================================================================

    #[test]
    fn net_from_gross_divides_by_one_plus_rate() {
        assert_eq!(net_from_gross(dec!(123), dec!(0.23)), Some(dec!(100)));
        assert_eq!(net_from_gross(dec!(108), dec!(0.08)), Some(dec!(100)));
    }

    #[test]
    fn net_from_gross_at_zero_rate_is_identity() {
        assert_eq!(net_from_gross(dec!(42.5), dec!(0)), Some(dec!(42.5)));
    }

    #[test]
    fn gross_from_net_multiplies_by_one_plus_rate() {
        assert_eq!(gross_from_net(dec!(100), dec!(0.05)), Some(dec!(105)));
    }

    #[test]
    fn gross_from_net_reports_overflow() {
        assert_eq!(gross_from_net(Decimal::MAX, dec!(0.23)), None);
    }

    #[test]
    fn net_from_vat_divides_by_rate() {
        assert_eq!(net_from_vat(dec!(23), dec!(0.23)), Some(dec!(100)));
    }

    #[test]
    fn net_from_vat_is_undefined_at_zero_rate() {
        assert_eq!(net_from_vat(dec!(23), dec!(0)), None);
    }

    // =========================================================================
    // Conversion tests
    // =========================================================================

    #[test]
    fn from_gross_parts_sum_to_gross() {
        for rate in VatRate::all() {
            for gross in [dec!(0), dec!(0.01), dec!(10), dec!(99.99), dec!(123456.78)] {
                let c = Conversion::from_gross(gross, *rate).unwrap();

                assert_eq!(round_half_up(c.net + c.vat), gross);
            }
        }
    }

    #[test]
    fn from_net_vat_is_gross_minus_net() {
        for rate in VatRate::all() {
            let c = Conversion::from_net(dec!(250), *rate).unwrap();

            assert_eq!(c.gross, dec!(250) * (Decimal::ONE + rate.fraction()));
            assert_eq!(c.vat, c.gross - dec!(250));
        }
    }

    #[test]
    fn from_vat_recovers_vat_amount() {
        for rate in &VatRate::all()[1..] {
            for vat in [dec!(0.01), dec!(7), dec!(1000.5)] {
                let c = Conversion::from_vat(vat, *rate).unwrap();

                assert_eq!(round_half_up(c.gross - c.net), round_half_up(vat));
            }
        }
    }

    #[test]
    fn from_vat_at_zero_rate_is_none() {
        assert_eq!(Conversion::from_vat(dec!(5), VatRate::Zero), None);
    }

    #[test]
    fn from_gross_zero_is_all_zero() {
        let c = Conversion::from_gross(dec!(0), VatRate::TwentyThree).unwrap();

        assert!(c.net.is_zero());
        assert!(c.vat.is_zero());
    }
}
