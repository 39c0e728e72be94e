use std::ops::Deref;
use std::sync::Arc;

use rates::rate_table::RateTable;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub rates: RateTable,
}

/// Immutable state shared with every component through the Dioxus context.
/// The rate table is fixed for the page's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(rates: RateTable) -> Self {
        Self(Arc::new(AppStateData { rates }))
    }
}
