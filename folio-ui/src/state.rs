//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page's reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use folio_motion::config::HeroConfig;

/// Shared state for the folio page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the page is still in its loading phase
    pub loading: Signal<bool>,
    /// Why loading failed, if it did
    pub error: Signal<Option<ErrorReport>>,
    /// Hero marquee content and config (None until parsed)
    pub hero: Signal<Option<HeroConfig>>,
}

impl AppState {
    /// Create a new AppState in the loading phase.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error: Signal::new(None),
            hero: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A failure split into its headline and the causes beneath it, outermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub message: String,
    pub causes: Vec<String>,
}

impl ErrorReport {
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let mut chain = err.chain().map(ToString::to_string);
        Self {
            message: chain.next().unwrap_or_default(),
            causes: chain.collect(),
        }
    }
}
