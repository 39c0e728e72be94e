//! Defines the foreign currencies quoted by the exchange desk.

use serde::Deserialize;
use serde::Serialize;

/// A quoted foreign currency, with its code, symbol, and display names.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    SAR, // Saudi Riyal
    USD, // United States Dollar
}

impl Currency {
    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::SAR => "﷼",
            Self::USD => "$",
        }
    }

    /// Returns the English name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SAR => "Saudi Riyal",
            Self::USD => "United States Dollar",
        }
    }

    /// Returns the Arabic name shown in the currency picker.
    pub fn name_ar(&self) -> &'static str {
        match self {
            Self::SAR => "الريال السعودي",
            Self::USD => "الدولار الأمريكي",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn code_matches_variant_name() {
        assert_eq!(Currency::SAR.code(), "SAR");
        assert_eq!(Currency::USD.code(), "USD");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::USD);
        assert_eq!(Currency::from_str("Sar").unwrap(), Currency::SAR);
    }

    #[test]
    fn rejects_unquoted_codes() {
        assert!(Currency::from_str("EUR").is_err());
    }

    #[test]
    fn default_is_sar() {
        assert_eq!(Currency::default(), Currency::SAR);
    }

    #[test]
    fn display_names_and_symbols_are_filled_in() {
        for currency in Currency::iter() {
            assert!(!currency.name().is_empty());
            assert!(!currency.name_ar().is_empty());
            assert!(!currency.symbol().is_empty());
        }
    }
}
