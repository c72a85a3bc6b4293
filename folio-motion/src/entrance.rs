//! One-shot entrance transition: fade in while a clip-path inset opens from the center.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};

/// Seconds between mount and the start of the reveal.
pub const DEFAULT_DELAY: f64 = 1.1;
/// Seconds the reveal takes once started.
pub const DEFAULT_DURATION: f64 = 0.8;
/// Per-side horizontal inset (percent) while fully hidden.
pub const HIDDEN_INSET: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            duration: DEFAULT_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

/// Lifecycle of a mounted marquee. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Steady,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Entering => "entering",
            Phase::Steady => "steady",
        }
    }
}

/// Visual state of the reveal at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    /// In [0, 1].
    pub opacity: f64,
    /// Percent hidden on each horizontal side, in [0, 50].
    pub clip_inset: f64,
}

impl EntranceFrame {
    pub const HIDDEN: EntranceFrame = EntranceFrame {
        opacity: 0.0,
        clip_inset: HIDDEN_INSET,
    };

    pub const VISIBLE: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        clip_inset: 0.0,
    };

    pub fn clip_path(&self) -> String {
        format!("inset(0% {:.3}% 0% {:.3}%)", self.clip_inset, self.clip_inset)
    }

    /// Inline style for the element being revealed.
    pub fn style(&self) -> String {
        let clip = self.clip_path();
        format!(
            "opacity: {:.4}; clip-path: {clip}; -webkit-clip-path: {clip};",
            self.opacity
        )
    }
}

/// The entrance transition anchored at its mount time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceTransition {
    config: EntranceConfig,
    start_time: f64,
}

impl EntranceTransition {
    pub fn new(config: EntranceConfig, start_time: f64) -> Self {
        Self { config, start_time }
    }

    /// Time at which the transition settles into `Phase::Steady`.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.config.delay.max(0.0) + self.config.duration.max(0.0)
    }

    /// Linear progress in [0, 1], before easing.
    pub fn progress(&self, now: f64) -> f64 {
        let elapsed = now - self.start_time - self.config.delay.max(0.0);
        if elapsed.is_nan() || elapsed < 0.0 {
            return 0.0;
        }
        let duration = self.config.duration;
        if duration <= 0.0 || !duration.is_finite() {
            return 1.0;
        }
        (elapsed / duration).clamp(0.0, 1.0)
    }

    pub fn phase(&self, now: f64) -> Phase {
        if now >= self.end_time() {
            Phase::Steady
        } else {
            Phase::Entering
        }
    }

    pub fn sample(&self, now: f64) -> EntranceFrame {
        let eased = self.config.easing.apply(self.progress(now)).clamp(0.0, 1.0);
        EntranceFrame {
            opacity: eased,
            clip_inset: HIDDEN_INSET * (1.0 - eased),
        }
    }
}
