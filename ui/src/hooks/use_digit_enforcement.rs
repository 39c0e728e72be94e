//! Keeps Western digits in regions marked with `data-en-digits`.
//!
//! Locale settings can render Arabic-Indic or Eastern Arabic-Indic glyphs
//! into text the page writes. This hook sweeps the marked regions once on
//! mount and again after every DOM change, rewriting only the text nodes
//! that actually differ so the observer settles instead of cycling on its
//! own writes.

// Conditionally export the correct module based on the target platform.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::fallback::*;

/// # WebAssembly (WASM) Implementation
/// Uses the `web_sys` crate to walk text nodes and watch the document body
/// with a `MutationObserver`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use dioxus::prelude::*;
    use rates::digits::rewrite_digits;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// `NodeFilter.SHOW_TEXT`.
    const SHOW_TEXT: u32 = 0x4;

    pub fn use_digit_enforcement() {
        use_effect(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            // Run once on mount.
            enforce(&document);

            // Re-run after any dynamic change (calculator updates, etc.).
            let observed = document.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::new(
                move |_mutations, _observer| enforce(&observed),
            );
            let Ok(observer) = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref())
            else {
                dioxus_logger::tracing::warn!("digit enforcement observer not available");
                return;
            };
            if let Some(body) = document.body() {
                let init = web_sys::MutationObserverInit::new();
                init.set_child_list(true);
                init.set_subtree(true);
                if observer.observe_with_options(&body, &init).is_err() {
                    dioxus_logger::tracing::warn!("digit enforcement observer failed to attach");
                }
            }
            // The observer lives for the rest of the page's lifetime.
            callback.forget();
        });
    }

    /// Sweeps every region marked for enforcement.
    fn enforce(document: &web_sys::Document) {
        let Ok(regions) = document.query_selector_all("[data-en-digits]") else {
            return;
        };
        for index in 0..regions.length() {
            if let Some(region) = regions.item(index) {
                rewrite_region(document, &region);
            }
        }
    }

    /// Rewrites the text nodes beneath one region. Nodes already in Western
    /// digits are skipped entirely, which is what keeps the observer from
    /// re-triggering on this function's own writes.
    fn rewrite_region(document: &web_sys::Document, region: &web_sys::Node) {
        let Ok(walker) = document.create_tree_walker_with_what_to_show(region, SHOW_TEXT) else {
            return;
        };
        while let Ok(Some(node)) = walker.next_node() {
            if let Some(text) = node.node_value() {
                if let Some(normalized) = rewrite_digits(&text) {
                    node.set_node_value(Some(&normalized));
                }
            }
        }
    }
}

/// # Fallback/Server Implementation
/// Digit glyphs only need enforcement inside a live document.
#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    pub fn use_digit_enforcement() {}
}
