//! The buy/sell conversion card: currency picker, mode radios, amount
//! field, and the computed result.

#![allow(non_snake_case)]

use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

use rates::amount::{sanitize_amount, format_amount, ParseAmountError};
use rates::calculator::{Calculator, ConvertError};
use rates::currency::Currency;
use rates::rate_table::RateSide;

use crate::app_state::AppState;
use crate::components::pico::{Button, ButtonType, Card};
use crate::components::rate_panel::RatePanel;
use crate::locale;

/// The helper line under the amount field: message text plus whether it is
/// an error.
#[derive(Clone, Copy, PartialEq)]
struct Helper {
    text: &'static str,
    is_error: bool,
}

impl Helper {
    const INITIAL: Self = Self {
        text: locale::HELPER_INITIAL,
        is_error: false,
    };
    const READY: Self = Self {
        text: locale::HELPER_READY,
        is_error: false,
    };

    fn for_error(error: ParseAmountError) -> Self {
        let text = match error {
            ParseAmountError::Empty => locale::HELPER_EMPTY,
            ParseAmountError::NotPositive => locale::HELPER_NOT_POSITIVE,
        };
        Self {
            text,
            is_error: true,
        }
    }

    fn class(&self) -> &'static str {
        if self.is_error {
            "calc-help is-error"
        } else {
            "calc-help"
        }
    }
}

#[component]
pub fn CalculatorCard() -> Element {
    let app_state = use_context::<AppState>();

    let mut calculator = use_signal(move || Calculator::new(app_state.rates.clone()));
    let mut amount_str = use_signal(String::new);
    let mut result = use_signal(|| "0".to_string());
    let mut helper = use_signal(|| Helper::INITIAL);

    let mut run_calculation = move || match calculator.read().convert(&amount_str()) {
        Ok(total) => {
            result.set(format_amount(total));
            helper.set(Helper::READY);
        }
        Err(ConvertError::Amount(error)) => {
            result.set("0".to_string());
            helper.set(Helper::for_error(error));
        }
        Err(ConvertError::UnknownCurrency) => {
            // Closed picker set; only reachable if table and markup drift.
            warn!(
                "no posted rate for {}",
                calculator.read().currency().code()
            );
        }
    };

    // Currency and mode changes refresh the panel through the signal, and
    // recalculate only when some amount text is already present.
    let mut recalculate_if_present = move || {
        if !amount_str().trim().is_empty() {
            run_calculation();
        }
    };

    let mut reset_calc = move || {
        calculator.write().reset();
        amount_str.set(String::new());
        result.set("0".to_string());
        helper.set(Helper::INITIAL);
    };

    let selected = calculator.read().currency();
    let side = calculator.read().side();
    let helper_line = helper();

    rsx! {
        Card {
            h3 { "{locale::CALC_HEADING}" }
            RatePanel { calculator }

            label {
                r#for: "currency-select",
                "{locale::CURRENCY_LABEL}"
            }
            select {
                id: "currency-select",
                value: "{selected.code()}",
                onchange: move |evt| {
                    if let Ok(currency) = Currency::from_str(&evt.value()) {
                        calculator.write().set_currency(currency);
                        recalculate_if_present();
                    }
                },
                for currency in Currency::iter() {
                    option {
                        value: "{currency.code()}",
                        selected: currency == selected,
                        "{currency.name_ar()} ({currency.code()})"
                    }
                }
            }

            fieldset {
                class: "mode-radios",
                for mode in RateSide::iter() {
                    label {
                        input {
                            r#type: "radio",
                            name: "rate_side",
                            checked: side == mode,
                            onchange: move |_| {
                                calculator.write().set_side(mode);
                                recalculate_if_present();
                            },
                        }
                        "{mode.label_ar()}"
                    }
                }
            }

            label {
                r#for: "amount-input",
                "{locale::AMOUNT_LABEL}"
            }
            input {
                id: "amount-input",
                r#type: "text",
                inputmode: "decimal",
                placeholder: "0",
                value: "{amount_str}",
                // Strip minus signs at the source; validation still rejects
                // zero and parse failures.
                oninput: move |evt| amount_str.set(sanitize_amount(&evt.value())),
            }
            small {
                class: helper_line.class(),
                "{helper_line.text}"
            }

            div {
                class: "calc-actions",
                Button {
                    on_click: move |_| run_calculation(),
                    "{locale::CALC_BUTTON}"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| reset_calc(),
                    "{locale::RESET_BUTTON}"
                }
            }

            div {
                class: "calc-result",
                span { class: "result-value", "{result}" }
                span { class: "suffix", "{selected.code()}" }
            }
            p {
                class: "rate-label",
                "{locale::RATE_LABEL_PREFIX} {side.label_ar()}"
            }
        }
    }
}
