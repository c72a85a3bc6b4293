//! Reusable Dioxus RSX components for the folio page.

mod error_display;
mod loading_indicator;
mod scrolling_marquee;
mod velocity_scroller;

pub use error_display::ErrorDisplay;
pub use loading_indicator::LoadingIndicator;
pub use scrolling_marquee::ScrollingMarquee;
pub use velocity_scroller::VelocityScroller;
