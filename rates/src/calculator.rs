//! The buy/sell conversion calculator behind the rates card.

use thiserror::Error;

use crate::amount::parse_amount;
use crate::amount::ParseAmountError;
use crate::currency::Currency;
use crate::rate_table::RatePair;
use crate::rate_table::RateSide;
use crate::rate_table::RateTable;

/// An error produced when a conversion cannot be carried out.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum ConvertError {
    /// The selected currency has no posted rate. The currency picker is a
    /// closed set, so this indicates a table/markup mismatch.
    #[error("no posted rate for the selected currency")]
    UnknownCurrency,
    /// The amount text failed validation.
    #[error(transparent)]
    Amount(#[from] ParseAmountError),
}

/// The conversion calculator: the posted rate table plus the current
/// currency and side selection.
///
/// Selection state lives here rather than in scattered element reads, so
/// the calculator can be driven and tested without a live page.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    table: RateTable,
    currency: Currency,
    side: RateSide,
}

impl Calculator {
    /// Creates a calculator over `table` with the default selection
    /// (SAR, buy).
    pub fn new(table: RateTable) -> Self {
        Self {
            table,
            currency: Currency::default(),
            side: RateSide::default(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn side(&self) -> RateSide {
        self.side
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn set_side(&mut self, side: RateSide) {
        self.side = side;
    }

    /// The posted pair for the current selection, if the desk quotes it.
    pub fn quote(&self) -> Option<RatePair> {
        self.table.get(self.currency)
    }

    /// Validates `raw` and converts it at the selected rate.
    ///
    /// The table lookup runs first: an unquoted currency short-circuits
    /// before any amount validation, matching the card's display contract.
    pub fn convert(&self, raw: &str) -> Result<f64, ConvertError> {
        let pair = self.quote().ok_or(ConvertError::UnknownCurrency)?;
        let amount = parse_amount(raw)?;
        Ok(amount * pair.rate(self.side))
    }

    /// Restores the default selection (SAR, buy). The table is untouched.
    pub fn reset(&mut self) {
        self.currency = Currency::default();
        self.side = RateSide::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use crate::amount::format_amount;

    use super::*;

    fn calculator() -> Calculator {
        Calculator::new(RateTable::bundled())
    }

    #[test]
    fn starts_on_sar_buy() {
        let calc = calculator();

        assert_eq!(calc.currency(), Currency::SAR);
        assert_eq!(calc.side(), RateSide::Buy);
        assert_eq!(calc.table().len(), 2);
    }

    #[test]
    fn converts_at_the_selected_rate_for_every_selection() {
        for currency in Currency::iter() {
            for side in RateSide::iter() {
                let mut calc = calculator();
                calc.set_currency(currency);
                calc.set_side(side);
                let rate = calc.quote().unwrap().rate(side);

                assert_eq!(calc.convert("2.5"), Ok(2.5 * rate));
            }
        }
    }

    #[test]
    fn sell_ten_usd_totals_15690() {
        let mut calc = calculator();
        calc.set_currency(Currency::USD);
        calc.set_side(RateSide::Sell);

        let total = calc.convert("10").unwrap();

        assert_eq!(format_amount(total), "15690");
    }

    #[test]
    fn buy_one_hundred_sar_totals_41000() {
        let calc = calculator();

        let total = calc.convert("100").unwrap();

        assert_eq!(format_amount(total), "41000");
    }

    #[test]
    fn invalid_amounts_surface_the_validation_error() {
        let calc = calculator();

        assert_eq!(
            calc.convert(""),
            Err(ConvertError::Amount(ParseAmountError::Empty))
        );
        assert_eq!(
            calc.convert("0"),
            Err(ConvertError::Amount(ParseAmountError::NotPositive))
        );
    }

    #[test]
    fn unquoted_currency_short_circuits_before_validation() {
        let mut calc = Calculator::new(RateTable::new());
        calc.set_currency(Currency::USD);

        assert_eq!(calc.quote(), None);
        assert_eq!(calc.convert(""), Err(ConvertError::UnknownCurrency));
    }

    #[test]
    fn reset_restores_the_default_selection() {
        let mut calc = calculator();
        calc.set_currency(Currency::USD);
        calc.set_side(RateSide::Sell);

        calc.reset();

        assert_eq!(calc.currency(), Currency::SAR);
        assert_eq!(calc.side(), RateSide::Buy);
        assert_eq!(calc.quote(), Some(RatePair { buy: 410.0, sell: 413.0 }));
    }
}
