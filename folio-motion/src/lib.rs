//! Frame-driven animation model for the folio hero.
//!
//! Nothing in this crate touches the DOM. Callers feed timestamps (seconds)
//! from whatever render loop they own and get back plain values to style with.
//!
//! - `content`: marquee blocks and their repetition
//! - `config`: serde-backed marquee and hero configuration
//! - `easing`: cubic-bezier timing curves
//! - `entrance`: the delayed fade + clip-path reveal
//! - `scroller`: the velocity scroller with modular wrap
//!
//! The two animations are independent records: the marquee component runs the
//! entrance, and the scroller component inside it runs the scroll.

pub mod config;
pub mod content;
pub mod easing;
pub mod entrance;
pub mod scroller;
