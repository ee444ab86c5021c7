//! Count-up animation for metric figures.

use crate::config::CounterConfig;

/// Formats like `Number.prototype.toFixed(1)`: exact ties round away from
/// zero, where `{:.1}` would round them to even.
pub fn to_fixed_1(x: f64) -> String {
    // a tie at one digit is always an odd multiple of 0.25
    let quarters = x.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (x.abs() * 10.0).ceil().copysign(x);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{x:.1}")
}

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl Counter {
    /// Parses a `data-count` value. Returns `None` for anything that is not a
    /// finite number.
    pub fn parse(raw: &str, start_ms: f64, cfg: &CounterConfig) -> Option<Self> {
        let target: f64 = raw.trim().parse().ok()?;
        target.is_finite().then(|| Self::new(target, start_ms, cfg))
    }

    pub fn new(target: f64, start_ms: f64, cfg: &CounterConfig) -> Self {
        Self {
            target,
            start_ms,
            duration_ms: cfg.duration_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_decimal(&self) -> bool {
        self.target % 1.0 != 0.0
    }

    /// Fraction of the animation elapsed at `now_ms`, in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Text to show at `now_ms`. The last frame shows the exact target.
    pub fn text(&self, now_ms: f64) -> String {
        let decimal = self.is_decimal();
        if self.is_done(now_ms) {
            return if decimal {
                to_fixed_1(self.target)
            } else {
                format!("{}", self.target as i64)
            };
        }
        let current = self.target * ease_out_cubic(self.progress(now_ms));
        if decimal {
            to_fixed_1(current)
        } else {
            format!("{}", current.floor() as i64)
        }
    }
}
