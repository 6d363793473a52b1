//! Line and VAT arithmetic (exact decimal).

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use kontor_compliance::{ComplianceError, ComplianceRuleTable};

/// Number of fractional digits carried by currency amounts (cents).
pub const CURRENCY_SCALE: u32 = 2;

/// Invoice calculation/assembly error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceError {
    /// Line quantity was zero or negative.
    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i64),

    /// Line unit price was negative.
    #[error("invalid unit price: {0} (must not be negative)")]
    InvalidUnitPrice(Decimal),

    /// VAT rate was negative.
    #[error("invalid VAT rate: {0} (must not be negative)")]
    InvalidVatRate(Decimal),

    /// An invoice must carry at least one line item.
    #[error("cannot assemble an invoice without line items")]
    EmptyInvoice,

    /// Checked decimal arithmetic overflowed.
    #[error("invoice amount overflow")]
    AmountOverflow,
}

/// Line total = quantity × unit price, exact.
///
/// Inputs with at most [`CURRENCY_SCALE`] fractional digits multiply without
/// any rounding, so `compute_line(q, p)` is `q·p` exactly.
pub fn compute_line(quantity: i64, unit_price: Decimal) -> Result<Decimal, InvoiceError> {
    if quantity <= 0 {
        return Err(InvoiceError::InvalidQuantity(quantity));
    }
    if unit_price < Decimal::ZERO {
        return Err(InvoiceError::InvalidUnitPrice(unit_price));
    }

    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or(InvoiceError::AmountOverflow)
}

/// VAT amount = subtotal × rate / 100, rounded to currency precision.
///
/// Rounding is round-half-to-even (banker's rounding), matching standard
/// accounting practice.
pub fn compute_vat(subtotal: Decimal, rate_percent: Decimal) -> Result<Decimal, InvoiceError> {
    if rate_percent < Decimal::ZERO {
        return Err(InvoiceError::InvalidVatRate(rate_percent));
    }

    let raw = subtotal
        .checked_mul(rate_percent)
        .ok_or(InvoiceError::AmountOverflow)?
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(InvoiceError::AmountOverflow)?;

    Ok(raw.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven))
}

/// VAT calculator carrying the jurisdiction's default rate.
///
/// The default rate comes from the compliance rule table; callers may still
/// override the rate per draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatCalculator {
    default_rate_percent: Decimal,
}

impl VatCalculator {
    pub fn new(default_rate_percent: Decimal) -> Self {
        Self {
            default_rate_percent,
        }
    }

    /// Build a calculator whose default rate is the statutory standard rate.
    pub fn from_rules(rules: &ComplianceRuleTable) -> Result<Self, ComplianceError> {
        let rate = rules.lookup("UST_STANDARD_RATE_PERCENT")?;
        Ok(Self::new(Decimal::from(rate)))
    }

    pub fn default_rate_percent(&self) -> Decimal {
        self.default_rate_percent
    }

    /// VAT for `subtotal` at the default rate.
    pub fn vat_for(&self, subtotal: Decimal) -> Result<Decimal, InvoiceError> {
        compute_vat(subtotal, self.default_rate_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn line_total_is_exact() {
        assert_eq!(compute_line(1, dec("800.00")).unwrap(), dec("800.00"));
        assert_eq!(compute_line(3, dec("0.10")).unwrap(), dec("0.30"));
        assert_eq!(compute_line(7, dec("19.99")).unwrap(), dec("139.93"));
    }

    #[test]
    fn zero_or_negative_quantity_is_rejected() {
        assert_eq!(
            compute_line(0, dec("1.00")).unwrap_err(),
            InvoiceError::InvalidQuantity(0)
        );
        assert_eq!(
            compute_line(-4, dec("1.00")).unwrap_err(),
            InvoiceError::InvalidQuantity(-4)
        );
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let err = compute_line(1, dec("-0.01")).unwrap_err();
        assert_eq!(err, InvoiceError::InvalidUnitPrice(dec("-0.01")));
    }

    #[test]
    fn vat_for_round_subtotal_is_exact() {
        assert_eq!(compute_vat(dec("125.00"), dec("19")).unwrap(), dec("23.75"));
        assert_eq!(compute_vat(dec("950.00"), dec("19")).unwrap(), dec("180.50"));
    }

    #[test]
    fn vat_rounds_half_to_even() {
        // 12.50 * 1% = 0.125 -> 0.12 (2 is even), 17.50 * 1% = 0.175 -> 0.18.
        assert_eq!(compute_vat(dec("12.50"), dec("1")).unwrap(), dec("0.12"));
        assert_eq!(compute_vat(dec("17.50"), dec("1")).unwrap(), dec("0.18"));
    }

    #[test]
    fn vat_on_one_cent_rounds_to_cent() {
        // 0.01 * 19% = 0.0019 -> 0.00.
        assert_eq!(compute_vat(dec("0.01"), dec("19")).unwrap(), dec("0.00"));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = compute_vat(dec("100.00"), dec("-1")).unwrap_err();
        assert_eq!(err, InvoiceError::InvalidVatRate(dec("-1")));
    }

    #[test]
    fn calculator_takes_default_rate_from_rules() {
        let rules = ComplianceRuleTable::german();
        let vat = VatCalculator::from_rules(&rules).unwrap();
        assert_eq!(vat.default_rate_percent(), dec("19"));
        assert_eq!(vat.vat_for(dec("125.00")).unwrap(), dec("23.75"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any positive quantity and non-negative cent price,
        /// the line total equals quantity × price with no rounding drift.
        #[test]
        fn line_total_matches_integer_cents(
            quantity in 1i64..10_000,
            cents in 0i64..10_000_000,
        ) {
            let unit_price = Decimal::new(cents, CURRENCY_SCALE);
            let total = compute_line(quantity, unit_price).unwrap();
            prop_assert_eq!(total, Decimal::new(quantity * cents, CURRENCY_SCALE));
        }

        /// Property: VAT is never negative and never carries more than two
        /// fractional digits.
        #[test]
        fn vat_is_normalized_currency(
            cents in 0i64..100_000_000,
            rate in 0i64..30,
        ) {
            let subtotal = Decimal::new(cents, CURRENCY_SCALE);
            let vat = compute_vat(subtotal, Decimal::from(rate)).unwrap();
            prop_assert!(vat >= Decimal::ZERO);
            prop_assert!(vat.scale() <= CURRENCY_SCALE);
        }
    }
}
