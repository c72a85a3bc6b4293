//! Marquee and hero configuration, loaded from the embedded JSON fixture.

use crate::content::MarqueeContent;
use crate::entrance::EntranceConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VELOCITY: f64 = 100.0;
pub const DEFAULT_NUM_COPIES: usize = 6;

/// Options for one scrolling marquee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Pixels per second. Negative scrolls rightward.
    pub velocity: f64,
    /// Copies of the content sequence laid end to end.
    pub num_copies: usize,
    /// Class on the outer strip (cosmetic).
    pub class_name: String,
    /// Class on each scrolled block (cosmetic).
    pub scroller_class_name: String,
    pub entrance: EntranceConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            num_copies: DEFAULT_NUM_COPIES,
            class_name: String::new(),
            scroller_class_name: String::new(),
            entrance: EntranceConfig::default(),
        }
    }
}

impl MarqueeConfig {
    /// Folds contract violations into a degenerate but renderable config.
    pub fn sanitized(mut self) -> Self {
        if !self.velocity.is_finite() {
            log::warn!("marquee velocity {} is not finite, using 0", self.velocity);
            self.velocity = 0.0;
        }
        if !self.entrance.delay.is_finite() || self.entrance.delay < 0.0 {
            log::warn!("entrance delay {} is invalid, using 0", self.entrance.delay);
            self.entrance.delay = 0.0;
        }
        if !self.entrance.duration.is_finite() || self.entrance.duration < 0.0 {
            log::warn!(
                "entrance duration {} is invalid, using 0",
                self.entrance.duration
            );
            self.entrance.duration = 0.0;
        }
        if self.num_copies == 0 {
            log::warn!("marquee num_copies is 0, the strip will be empty");
        }
        self
    }
}

/// Everything the hero page needs: the marquee blocks and how to scroll them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub content: MarqueeContent,
    pub marquee: MarqueeConfig,
}

impl HeroConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: HeroConfig =
            serde_json::from_str(json).context("Failed to parse hero marquee config")?;
        log::debug!(
            "Loaded hero config: {} blocks x {} copies at {} px/s",
            config.content.len(),
            config.marquee.num_copies,
            config.marquee.velocity
        );
        Ok(Self {
            content: config.content,
            marquee: config.marquee.sanitized(),
        })
    }
}
