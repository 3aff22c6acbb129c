use crate::foundation::core::TimeMs;
use crate::motion::ease::Ease;

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Animatable visual properties of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualState {
    /// 0 = invisible, 1 = opaque.
    pub opacity: f64,
    /// Horizontal offset in CSS px.
    pub translate_x: f64,
    /// Vertical offset in CSS px.
    pub translate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Replace the opacity.
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Replace the translation.
    pub const fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    /// Replace the scale.
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            translate_x: f64::lerp(&a.translate_x, &b.translate_x, t),
            translate_y: f64::lerp(&a.translate_y, &b.translate_y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// A scheduled interpolation between two values on the logical clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: TimeMs,
    duration_ms: u64,
    ease: Ease,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Tween starting at `start` and lasting `duration_ms`.
    pub fn new(from: T, to: T, start: TimeMs, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration_ms,
            ease,
        }
    }

    /// Start time.
    pub fn start(&self) -> TimeMs {
        self.start
    }

    /// End time.
    pub fn end(&self) -> TimeMs {
        self.start.after(self.duration_ms)
    }

    /// Return `true` once `now` has reached the start time.
    pub fn has_started(&self, now: TimeMs) -> bool {
        now >= self.start
    }

    /// Return `true` once `now` has reached the end time.
    pub fn is_finished(&self, now: TimeMs) -> bool {
        now >= self.end()
    }

    /// Eased progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: TimeMs) -> f64 {
        if now < self.start {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = now.since(self.start) as f64 / self.duration_ms as f64;
        self.ease.apply(t)
    }

    /// Value at `now`: `from` before the start, `to` after the end.
    pub fn sample(&self, now: TimeMs) -> T {
        if now < self.start {
            return self.from.clone();
        }
        if self.is_finished(now) {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.progress(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/tween.rs"]
mod tests;
