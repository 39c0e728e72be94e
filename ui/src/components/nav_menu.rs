//! The mobile navigation menu and its open/closed state.

#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::locale;

/// The menu's single source of truth. The CSS class, `aria-expanded`, and
/// the toggle label are all projected from this value, so the redundant
/// view representations cannot drift apart.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The toggle-button transition: flips between open and closed.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    /// Localized accessible label for the toggle control.
    pub fn toggle_label(self) -> &'static str {
        if self.is_open() {
            locale::NAV_CLOSE_LABEL
        } else {
            locale::NAV_OPEN_LABEL
        }
    }

    /// CSS class list for the menu container.
    pub fn menu_class(self) -> &'static str {
        if self.is_open() {
            "nav-menu is-open"
        } else {
            "nav-menu"
        }
    }
}

/// A link target in the page header.
#[derive(Clone, Copy, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// The header navigation: a hamburger toggle and the link list.
///
/// Closes on outside click (backdrop), on Escape, and when a link is
/// activated. State resets to closed on page reload.
#[component]
pub fn NavMenu(links: Vec<NavLink>) -> Element {
    let mut state = use_signal(NavState::default);

    rsx! {
        div {
            class: "nav-container",
            // Escape reaches here by bubbling from the focused toggle.
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && state().is_open() {
                    state.set(NavState::Closed);
                }
            },
            button {
                class: "nav-toggle",
                "aria-expanded": state().aria_expanded(),
                "aria-label": state().toggle_label(),
                "aria-controls": "primary-nav",
                onclick: move |_| state.set(state().toggled()),
                "≡"
            }
            if state().is_open() {
                // Backdrop to catch clicks outside the toggle and the menu
                div {
                    class: "menu-backdrop",
                    onclick: move |_| state.set(NavState::Closed),
                }
            }
            nav {
                id: "primary-nav",
                class: state().menu_class(),
                ul {
                    for link in links {
                        li {
                            a {
                                href: "{link.href}",
                                onclick: move |_| {
                                    if state().is_open() {
                                        state.set(NavState::Closed);
                                    }
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
