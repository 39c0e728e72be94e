//! Provides the posted buy/sell rate table consumed by the calculator.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;

/// The side of a quote: the desk buying or selling the foreign currency.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RateSide {
    #[default]
    Buy,
    Sell,
}

impl RateSide {
    /// Returns the Arabic label shown next to the active rate.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Buy => "الشراء",
            Self::Sell => "البيع",
        }
    }
}

/// A posted quote pair, in local currency units per unit of foreign currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePair {
    pub buy: f64,
    pub sell: f64,
}

impl RatePair {
    /// Returns the rate for the requested side of the quote.
    pub fn rate(&self, side: RateSide) -> f64 {
        match side {
            RateSide::Buy => self.buy,
            RateSide::Sell => self.sell,
        }
    }
}

/// A map holding the posted rate pair for each quoted currency.
///
/// This struct wraps a `HashMap` to provide a type-safe API for the rate
/// board. The table is fixed at startup; nothing mutates it at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable(HashMap<Currency, RatePair>);

impl RateTable {
    /// Creates a new, empty `RateTable`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// The rate board shipped with the page, used when no configuration
    /// document is available.
    pub fn bundled() -> Self {
        let mut table = Self::new();
        table.insert(Currency::SAR, RatePair { buy: 410.0, sell: 413.0 });
        table.insert(Currency::USD, RatePair { buy: 1558.0, sell: 1569.0 });
        table
    }

    /// Loads a table from a JSON configuration document keyed by currency
    /// code.
    pub fn from_json(doc: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(doc)
    }

    /// Inserts or updates the pair for a currency.
    ///
    /// If the table previously held a pair for the currency, the old pair is
    /// returned.
    pub fn insert(&mut self, currency: Currency, pair: RatePair) -> Option<RatePair> {
        self.0.insert(currency, pair)
    }

    /// Removes the pair for a currency, returning it if it existed.
    pub fn remove(&mut self, currency: Currency) -> Option<RatePair> {
        self.0.remove(&currency)
    }

    /// Retrieves the posted pair for a currency.
    ///
    /// Returns `None` for codes the desk does not quote.
    pub fn get(&self, currency: Currency) -> Option<RatePair> {
        self.0.get(&currency).copied()
    }

    /// Returns an iterator over the quoted currencies and their pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, RatePair)> + '_ {
        self.0.iter().map(|(currency, pair)| (*currency, *pair))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_table_quotes_both_currencies() {
        let table = RateTable::bundled();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Currency::SAR), Some(RatePair { buy: 410.0, sell: 413.0 }));
        assert_eq!(table.get(Currency::USD), Some(RatePair { buy: 1558.0, sell: 1569.0 }));
    }

    #[test]
    fn insert_returns_previous_pair() {
        let mut table = RateTable::new();
        let first = RatePair { buy: 100.0, sell: 101.0 };
        let second = RatePair { buy: 102.0, sell: 103.0 };

        assert_eq!(table.insert(Currency::USD, first), None);
        assert_eq!(table.insert(Currency::USD, second), Some(first));
        assert_eq!(table.get(Currency::USD), Some(second));
    }

    #[test]
    fn pair_selects_rate_by_side() {
        let pair = RatePair { buy: 410.0, sell: 413.0 };

        assert_eq!(pair.rate(RateSide::Buy), 410.0);
        assert_eq!(pair.rate(RateSide::Sell), 413.0);
    }

    #[test]
    fn remove_takes_the_pair_out_of_the_table() {
        let mut table = RateTable::bundled();

        let removed = table.remove(Currency::USD);

        assert_eq!(removed, Some(RatePair { buy: 1558.0, sell: 1569.0 }));
        assert_eq!(table.get(Currency::USD), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn iter_yields_every_quoted_currency() {
        let table = RateTable::bundled();

        let mut quoted: Vec<Currency> = table.iter().map(|(currency, _)| currency).collect();
        quoted.sort_by_key(|currency| currency.code());

        assert_eq!(quoted, vec![Currency::SAR, Currency::USD]);
    }

    #[test]
    fn loads_table_from_json_document() {
        let doc = r#"{ "SAR": { "buy": 410.0, "sell": 413.0 } }"#;

        let table = RateTable::from_json(doc).unwrap();

        assert_eq!(table.get(Currency::SAR), Some(RatePair { buy: 410.0, sell: 413.0 }));
        assert_eq!(table.get(Currency::USD), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RateTable::from_json("{ not json").is_err());
    }

    #[test]
    fn json_round_trip_preserves_the_table() {
        let table = RateTable::bundled();

        let doc = serde_json::to_string(&table).unwrap();
        let reloaded = RateTable::from_json(&doc).unwrap();

        assert_eq!(reloaded, table);
    }
}
