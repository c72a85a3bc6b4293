//! Shared Dioxus components and browser frame loop for the folio hero.
//!
//! This crate provides:
//! - `frame_loop`: `requestAnimationFrame` and DOM measurement via web-sys
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: LoadingIndicator, ScrollingMarquee and friends

pub mod components;
pub mod frame_loop;
pub mod state;
