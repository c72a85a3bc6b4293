//! Velocity scroller: an unbounded scroll position advanced per frame,
//! wrapped into one copy width for display.
//!
//! The strip holds `num_copies` identical copies laid end to end. Because
//! every copy is identical, translating by `position mod copy_width` looks
//! exactly like translating by `position`, so the strip never runs out as long
//! as the copies cover the viewport plus one extra copy.

/// Largest frame step (seconds) applied in one `advance`.
///
/// Background tabs get no animation frames, so the first frame back can carry a
/// gap of minutes. Anything slower than 2 fps is treated as such a gap; slow but
/// live frame rates still travel at the configured velocity.
pub const MAX_FRAME_DELTA: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct VelocityScroller {
    velocity: f64,
    position: f64,
    last_time: Option<f64>,
    halted: bool,
}

impl VelocityScroller {
    /// `velocity` is in pixels per second; its sign picks the direction.
    pub fn new(velocity: f64) -> Self {
        let velocity = if velocity.is_finite() {
            velocity
        } else {
            log::warn!("non-finite marquee velocity {velocity}, holding the strip still");
            0.0
        };
        Self {
            velocity,
            position: 0.0,
            last_time: None,
            halted: false,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Distance travelled so far, unwrapped. Grows for positive velocity.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Moves the strip to time `now` (seconds) and returns the new position.
    ///
    /// The first call only anchors the clock.
    pub fn advance(&mut self, now: f64) -> f64 {
        if self.halted || !now.is_finite() {
            return self.position;
        }
        if let Some(last) = self.last_time {
            let dt = (now - last).min(MAX_FRAME_DELTA);
            if dt > 0.0 {
                self.position += self.velocity * dt;
            }
        }
        if self.last_time.map_or(true, |last| now > last) {
            self.last_time = Some(now);
        }
        self.position
    }

    /// Stops all further movement. There is no resume; a remount builds a new scroller.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Horizontal translation in pixels, within `(-copy_width, 0]`.
    pub fn translate_x(&self, copy_width: f64) -> f64 {
        wrap_offset(self.position, copy_width)
    }
}

/// Wraps an unbounded position into `(-copy_width, 0]`.
pub fn wrap_offset(position: f64, copy_width: f64) -> f64 {
    if !copy_width.is_finite() || copy_width <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    let shift = position.rem_euclid(copy_width);
    if shift == 0.0 || shift >= copy_width {
        0.0
    } else {
        -shift
    }
}

/// Inline style for a track translated by `translate_x` pixels.
pub fn track_style(translate_x: f64) -> String {
    format!(
        "display: flex; white-space: nowrap; width: max-content; transform: translate3d({translate_x:.3}px, 0, 0); will-change: transform;"
    )
}

/// Minimum copies for a gapless strip: enough to span the viewport after
/// shifting by up to one full copy.
pub fn copies_needed(viewport_width: f64, copy_width: f64) -> usize {
    if !copy_width.is_finite()
        || copy_width <= 0.0
        || !viewport_width.is_finite()
        || viewport_width <= 0.0
    {
        return 1;
    }
    ((viewport_width / copy_width).ceil() as usize).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(velocity: f64, frames: usize, step: f64) -> Vec<f64> {
        let mut scroller = VelocityScroller::new(velocity);
        (0..frames)
            .map(|i| scroller.advance(i as f64 * step))
            .collect()
    }

    #[test]
    fn test_first_frame_only_anchors() {
        let mut scroller = VelocityScroller::new(80.0);
        assert_eq!(scroller.advance(5.0), 0.0);
        assert_eq!(scroller.advance(5.05), 80.0 * (5.05 - 5.0));
    }

    #[test]
    fn test_positive_velocity_strictly_increases() {
        let positions = run(120.0, 200, 1.0 / 60.0);
        for pair in positions[1..].windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_negative_velocity_strictly_decreases() {
        let positions = run(-45.0, 200, 1.0 / 60.0);
        for pair in positions[1..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_zero_velocity_is_static() {
        let positions = run(0.0, 50, 0.02);
        assert!(positions.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_non_finite_velocity_is_static() {
        let mut scroller = VelocityScroller::new(f64::INFINITY);
        assert_eq!(scroller.velocity(), 0.0);
        scroller.advance(0.0);
        assert_eq!(scroller.advance(1.0), 0.0);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut scroller = VelocityScroller::new(100.0);
        scroller.advance(0.0);
        let after_gap = scroller.advance(30.0);
        assert!((after_gap - 100.0 * MAX_FRAME_DELTA).abs() < 1e-9);
    }

    #[test]
    fn test_slow_frame_rate_keeps_full_speed() {
        let positions = run(100.0, 9, 1.0 / 8.0);
        let travelled = *positions.last().unwrap();
        assert!((travelled - 100.0).abs() < 1e-9, "travelled {travelled}");
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut scroller = VelocityScroller::new(100.0);
        scroller.advance(1.0);
        let p = scroller.advance(1.05);
        assert_eq!(scroller.advance(0.5), p);
        assert!(scroller.advance(1.06) > p);
    }

    #[test]
    fn test_halt_stops_updates() {
        let mut scroller = VelocityScroller::new(60.0);
        scroller.advance(0.0);
        scroller.advance(0.05);
        scroller.halt();
        let frozen = scroller.position();
        for i in 1..20 {
            assert_eq!(scroller.advance(0.05 + i as f64 * 0.016), frozen);
        }
        assert!(scroller.is_halted());
    }

    #[test]
    fn test_wrap_stays_within_one_copy() {
        for i in 0..500 {
            let position = i as f64 * 37.3 - 9000.0;
            let x = wrap_offset(position, 400.0);
            assert!(x <= 0.0 && x > -400.0, "{position} wrapped to {x}");
        }
    }

    #[test]
    fn test_wrap_is_seamless_at_copy_boundary() {
        assert_eq!(wrap_offset(0.0, 250.0), 0.0);
        assert_eq!(wrap_offset(250.0, 250.0), 0.0);
        assert_eq!(wrap_offset(100.0, 250.0), -100.0);
        assert_eq!(wrap_offset(-100.0, 250.0), -150.0);
    }

    #[test]
    fn test_wrap_without_measured_width() {
        assert_eq!(wrap_offset(123.0, 0.0), 0.0);
        assert_eq!(wrap_offset(123.0, -5.0), 0.0);
        assert_eq!(wrap_offset(123.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_track_style() {
        assert!(track_style(-3.25).contains("translate3d(-3.250px, 0, 0)"));
        assert!(track_style(0.0).contains("white-space: nowrap"));
    }

    #[test]
    fn test_copies_needed() {
        assert_eq!(copies_needed(1200.0, 400.0), 4);
        assert_eq!(copies_needed(1000.0, 400.0), 4);
        assert_eq!(copies_needed(300.0, 400.0), 2);
        assert_eq!(copies_needed(1000.0, 0.0), 1);
        assert_eq!(copies_needed(0.0, 400.0), 1);
        assert_eq!(copies_needed(1e300, 1.0), usize::MAX);
    }
}
