//! The always-visible summary of the posted rates for the current
//! selection.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use rates::calculator::Calculator;

use crate::locale;

/// Shows the buy rate, sell rate, currency code, and the active rate side.
/// Re-renders whenever the calculator selection changes.
#[component]
pub fn RatePanel(calculator: Signal<Calculator>) -> Element {
    let calc = calculator.read();
    // Nothing posted for the selection; render nothing rather than a
    // half-empty panel. The picker is a closed set, so this is defensive.
    let Some(pair) = calc.quote() else {
        return rsx! {};
    };
    let code = calc.currency().code();
    let side_label = calc.side().label_ar();

    rsx! {
        div {
            class: "rate-panel",
            div {
                class: "rate-cell",
                span { class: "rate-term", "{locale::PANEL_BUY}" }
                strong { "{pair.buy}" }
            }
            div {
                class: "rate-cell",
                span { class: "rate-term", "{locale::PANEL_SELL}" }
                strong { "{pair.sell}" }
            }
            div {
                class: "rate-cell",
                span { class: "rate-term", "{locale::PANEL_CODE}" }
                strong { "{code}" }
            }
            div {
                class: "rate-cell",
                span { class: "rate-term", "{locale::RATE_LABEL_PREFIX}" }
                strong { "{side_label}" }
            }
        }
    }
}
