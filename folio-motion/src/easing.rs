//! Cubic-bezier timing curves, the same family CSS `transition-timing-function` uses.

use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 50;
const EPSILON: f64 = 1e-7;

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Control points `(x1, y1, x2, y2)`; x values are clamped to [0, 1].
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Control points of the curve. `Linear` is the diagonal bezier.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                (x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2)
            }
        }
    }

    /// Eased value for progress `t`. `t` is clamped to [0, 1] first.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if let Easing::Linear = self {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let x = Polynomial::new(x1, x2);
        let y = Polynomial::new(y1, y2);
        y.sample(x.solve(t))
    }
}

/// One axis of a cubic bezier anchored at 0 and 1, in power form.
struct Polynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl Polynomial {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn sample(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn derivative(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Parameter `s` with `sample(s) == x`. Newton first, bisection when the slope flattens.
    fn solve(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample(s) - x;
            if err.abs() < EPSILON {
                return s;
            }
            let slope = self.derivative(s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = self.sample(s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(7.5), 1.0);
        assert_eq!(Easing::EaseInOut.apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "midpoint was {mid}");

        let early = Easing::EaseInOut.apply(0.2);
        let late = Easing::EaseInOut.apply(0.8);
        assert!((early + late - 1.0).abs() < 1e-4);
        assert!(early < 0.2, "ease-in-out should start slow, got {early}");
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f64 / 100.0);
                assert!(value >= previous - 1e-9, "{easing:?} dipped at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_in_and_out_bias() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_deserialize_from_fixture_spelling() {
        let easing: Easing = serde_json::from_str("\"ease_in_out\"").unwrap();
        assert_eq!(easing, Easing::EaseInOut);

        let custom: Easing = serde_json::from_str(r#"{"cubic_bezier":[0.4,0.0,0.2,1.0]}"#).unwrap();
        assert_eq!(custom, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));
    }
}
