// The client-side Dioxus application logic: page shell, navigation, digit
// enforcement, and the rates calculator.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use rates::rate_table::RateTable;

mod app_state;
mod components;
pub mod hooks;
mod locale;

use app_state::AppState;
use components::calculator::CalculatorCard;
use components::nav_menu::{NavLink, NavMenu};
use components::pico::Container;
use hooks::use_digit_enforcement::use_digit_enforcement;

/// The rate board bundled with the page.
const BUNDLED_RATES: &str = include_str!("../assets/rates.json");

/// Header links; each targets a section of the single page.
const PAGE_LINKS: [NavLink; 4] = [
    NavLink { href: "#home", label: "الرئيسية" },
    NavLink { href: "#rates", label: "أسعار الصرف" },
    NavLink { href: "#services", label: "خدماتنا" },
    NavLink { href: "#contact", label: "تواصل معنا" },
];

/// Parses the bundled rate board, falling back to the in-code table if the
/// document is malformed.
fn load_rates() -> RateTable {
    RateTable::from_json(BUNDLED_RATES).unwrap_or_else(|error| {
        warn!("bundled rate table is malformed: {error}");
        RateTable::bundled()
    })
}

const PAGE_CSS: &str = r#"
    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: "Tajawal", "Segoe UI", system-ui, sans-serif;
        background-color: #f8fafc;
        color: #0f172a;
    }

    .page { min-height: 100vh; display: flex; flex-direction: column; }

    /* --- HEADER --- */
    .page-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem 1.25rem;
        background-color: #0f3d3e;
        color: #f8fafc;
        position: sticky;
        top: 0;
        z-index: 20;
    }
    .brand { font-weight: 700; font-size: 1.1rem; }

    /* --- NAVIGATION --- */
    .nav-container { position: relative; }
    .nav-toggle {
        display: none;
        background: none;
        border: 1px solid rgba(248, 250, 252, 0.4);
        border-radius: 0.375rem;
        color: inherit;
        font-size: 1.25rem;
        line-height: 1;
        padding: 0.35rem 0.6rem;
        cursor: pointer;
    }
    .nav-menu ul {
        display: flex;
        gap: 1.25rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-menu a { color: inherit; text-decoration: none; }
    .nav-menu a:hover { text-decoration: underline; }
    .menu-backdrop {
        position: fixed;
        top: 0; right: 0; left: 0; bottom: 0;
        z-index: 9;
        background: transparent;
    }

    @media (max-width: 768px) {
        .nav-toggle { display: block; }
        .nav-menu {
            display: none;
            position: absolute;
            top: calc(100% + 0.5rem);
            left: 0;
            min-width: 11rem;
            background-color: #0f3d3e;
            border-radius: 0.5rem;
            box-shadow: 0 10px 25px rgba(15, 23, 42, 0.25);
            padding: 0.5rem 0;
            z-index: 10;
        }
        .nav-menu.is-open { display: block; }
        .nav-menu ul { flex-direction: column; gap: 0; }
        .nav-menu li a { display: block; padding: 0.6rem 1.25rem; }
    }

    /* --- SECTIONS --- */
    main.container { flex: 1; }
    section { padding: 2.5rem 1.25rem; max-width: 60rem; margin: 0 auto; }
    .hero h1 { margin: 0 0 0.5rem; font-size: 1.9rem; }
    .hero p { margin: 0; color: #475569; }

    /* --- RATES / CALCULATOR --- */
    .rates article {
        background: #ffffff;
        border: 1px solid #e2e8f0;
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .rates[data-en-digits] {
        font-variant-numeric: tabular-nums lining-nums;
    }
    .rate-panel {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        margin-bottom: 1.25rem;
    }
    .rate-cell {
        flex: 1 1 8rem;
        background: #f1f5f9;
        border-radius: 0.5rem;
        padding: 0.6rem 0.9rem;
        display: flex;
        flex-direction: column;
        gap: 0.15rem;
    }
    .rate-term { font-size: 0.8rem; color: #64748b; }

    .rates label { display: block; margin: 0.75rem 0 0.25rem; }
    .rates select, .rates input[type="text"] {
        width: 100%;
        padding: 0.5rem 0.75rem;
        border: 1px solid #cbd5f5;
        border-radius: 0.5rem;
        font-size: 1rem;
    }
    .mode-radios {
        display: flex;
        gap: 1.5rem;
        border: none;
        margin: 0.75rem 0 0;
        padding: 0;
    }
    .mode-radios label { display: flex; align-items: center; gap: 0.4rem; margin: 0; }

    .calc-help { display: block; margin-top: 0.4rem; color: #64748b; }
    .calc-help.is-error { color: #b91c1c; }

    .calc-actions { display: flex; gap: 0.75rem; margin-top: 1rem; }
    .calc-actions button {
        padding: 0.55rem 1.4rem;
        border-radius: 0.5rem;
        border: 1px solid #0f3d3e;
        background-color: #0f3d3e;
        color: #f8fafc;
        font-size: 1rem;
        cursor: pointer;
    }
    .calc-actions button.secondary {
        background-color: transparent;
        color: #0f3d3e;
    }

    .calc-result {
        margin-top: 1.25rem;
        display: flex;
        align-items: baseline;
        gap: 0.5rem;
        font-size: 1.6rem;
        font-weight: 700;
    }
    .calc-result .suffix { font-size: 1rem; font-weight: 400; color: #64748b; }
    .rate-label { margin: 0.25rem 0 0; color: #475569; }

    /* --- FOOTER --- */
    .page-footer {
        padding: 1rem 1.25rem;
        background-color: #0f3d3e;
        color: #cbd5e1;
        text-align: center;
    }
"#;

pub fn App() -> Element {
    use_context_provider(|| AppState::new(load_rates()));
    use_digit_enforcement();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style { "{PAGE_CSS}" }
        div {
            class: "page",
            dir: "rtl",
            lang: "ar",
            header {
                id: "home",
                class: "page-header",
                span { class: "brand", "{locale::BRAND}" }
                NavMenu { links: PAGE_LINKS.to_vec() }
            }
            Container {
                Hero {}
                RatesSection {}
                ServicesSection {}
                ContactSection {}
            }
            footer {
                class: "page-footer",
                small { "{locale::FOOTER}" }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "{locale::HERO_TITLE}" }
            p { "{locale::HERO_LEAD}" }
        }
    }
}

#[component]
fn RatesSection() -> Element {
    rsx! {
        section {
            id: "rates",
            class: "rates",
            "data-en-digits": "true",
            h2 { "{locale::RATES_HEADING}" }
            CalculatorCard {}
        }
    }
}

#[component]
fn ServicesSection() -> Element {
    rsx! {
        section {
            id: "services",
            h2 { "{locale::SERVICES_HEADING}" }
            p { "{locale::SERVICES_LEAD}" }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    rsx! {
        section {
            id: "contact",
            h2 { "{locale::CONTACT_HEADING}" }
            p { "{locale::CONTACT_LEAD}" }
        }
    }
}
