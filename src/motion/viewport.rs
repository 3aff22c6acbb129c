use std::collections::BTreeMap;

use crate::foundation::core::{Rect, TimeMs};
use crate::motion::ease::Ease;
use crate::motion::tween::Tween;

/// Default smooth-scroll duration.
pub const SMOOTH_SCROLL_MS: u64 = 600;

/// Handle to a live intersection subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(pub u64);

/// When an observed element counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// In view as soon as it is observed.
    Immediate,
    /// In view once the element's top edge is at least `margin_px` above the viewport bottom.
    TopBeforeBottom {
        /// Distance above the viewport bottom edge.
        margin_px: f64,
    },
    /// In view while at least this fraction of the element is visible.
    Ratio {
        /// Visible fraction in `(0, 1]`.
        fraction: f64,
    },
}

impl Default for Trigger {
    fn default() -> Self {
        Self::TopBeforeBottom { margin_px: 100.0 }
    }
}

impl Trigger {
    /// Evaluate against an element rectangle (document coordinates) and the visible band
    /// `[scroll, scroll + viewport_height)`.
    pub fn is_met(self, element: Rect, scroll: f64, viewport_height: f64) -> bool {
        match self {
            Self::Immediate => true,
            Self::TopBeforeBottom { margin_px } => {
                element.y0 - scroll <= viewport_height - margin_px
            }
            Self::Ratio { fraction } => {
                let top = element.y0.max(scroll);
                let bottom = element.y1.min(scroll + viewport_height);
                let visible = (bottom - top).max(0.0);
                let height = element.height();
                if height <= 0.0 {
                    return element.y0 >= scroll && element.y0 < scroll + viewport_height;
                }
                visible / height >= fraction
            }
        }
    }
}

/// Edge-triggered change of a subscription's in-view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    /// Subscription that changed.
    pub subscription: Subscription,
    /// Observed element id.
    pub target: String,
    /// `true` when the element came into view, `false` when it left.
    pub entering: bool,
}

/// Intersection-observation primitive.
pub trait IntersectionObserver {
    /// Start observing `target`. Returns `None` when no such element exists.
    fn observe(&mut self, target: &str, trigger: Trigger) -> Option<Subscription>;
    /// Stop observing. Returns `false` for unknown or already cancelled subscriptions.
    fn cancel(&mut self, subscription: Subscription) -> bool;
}

/// Read-only document geometry.
pub trait DocumentGeometry {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Viewport height.
    fn viewport_height(&self) -> f64;
    /// Document-space top of the element with this id.
    fn element_top(&self, id: &str) -> Option<f64>;
}

/// Smooth-scroll primitive.
pub trait SmoothScroller {
    /// Animate the scroll offset towards `offset`, starting at `now`.
    fn smooth_scroll_to(&mut self, offset: f64, now: TimeMs);
}

#[derive(Clone, Debug)]
struct Observed {
    target: String,
    trigger: Trigger,
    inside: bool,
}

/// In-process model of a scrolling document: element rectangles, a viewport, intersection
/// subscriptions and an eased smooth scroll.
#[derive(Clone, Debug)]
pub struct Viewport {
    width: f64,
    height: f64,
    scroll: f64,
    elements: BTreeMap<String, Rect>,
    observed: BTreeMap<Subscription, Observed>,
    next_subscription: u64,
    scroll_anim: Option<Tween<f64>>,
    scroll_duration_ms: u64,
    scroll_ease: Ease,
}

impl Viewport {
    /// Empty document shown through a `width` x `height` viewport, scrolled to the top.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll: 0.0,
            elements: BTreeMap::new(),
            observed: BTreeMap::new(),
            next_subscription: 0,
            scroll_anim: None,
            scroll_duration_ms: SMOOTH_SCROLL_MS,
            scroll_ease: Ease::InOutCubic,
        }
    }

    /// Replace the smooth-scroll timing.
    pub fn with_scroll_timing(mut self, duration_ms: u64, ease: Ease) -> Self {
        self.scroll_duration_ms = duration_ms;
        self.scroll_ease = ease;
        self
    }

    /// Add or move an element.
    pub fn set_element(&mut self, id: impl Into<String>, rect: Rect) {
        self.elements.insert(id.into(), rect);
    }

    /// Builder form of [`set_element`](Self::set_element).
    pub fn with_element(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.set_element(id, rect);
        self
    }

    /// Remove an element. Subscriptions to it stay live but never change state again.
    pub fn remove_element(&mut self, id: &str) -> Option<Rect> {
        self.elements.remove(id)
    }

    /// Element rectangle by id.
    pub fn element(&self, id: &str) -> Option<Rect> {
        self.elements.get(id).copied()
    }

    /// Viewport width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Bottom edge of the lowest element.
    pub fn document_height(&self) -> f64 {
        self.elements
            .values()
            .map(|r| r.y1)
            .fold(self.height, f64::max)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.height).max(0.0)
    }

    /// Number of live subscriptions.
    pub fn live_subscriptions(&self) -> usize {
        self.observed.len()
    }

    /// Return `true` while a smooth scroll is running.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_anim.is_some()
    }

    /// Jump to `offset` (clamped to the document) and report crossings.
    ///
    /// A direct scroll interrupts any running smooth scroll.
    pub fn set_scroll(&mut self, offset: f64) -> Vec<Crossing> {
        self.scroll_anim = None;
        self.scroll_to(offset)
    }

    /// Re-evaluate every subscription at the current offset.
    ///
    /// Call after observing to pick up elements that are already in view.
    pub fn refresh(&mut self) -> Vec<Crossing> {
        let mut out = Vec::new();
        for (sub, obs) in &mut self.observed {
            let Some(rect) = self.elements.get(&obs.target) else {
                continue;
            };
            let inside = obs.trigger.is_met(*rect, self.scroll, self.height);
            if inside != obs.inside {
                obs.inside = inside;
                out.push(Crossing {
                    subscription: *sub,
                    target: obs.target.clone(),
                    entering: inside,
                });
            }
        }
        out
    }

    /// Move a running smooth scroll to `now` and report crossings.
    pub fn advance(&mut self, now: TimeMs) -> Vec<Crossing> {
        let Some(anim) = &self.scroll_anim else {
            return Vec::new();
        };
        let offset = anim.sample(now);
        if anim.is_finished(now) {
            self.scroll_anim = None;
        }
        self.scroll_to(offset)
    }

    fn scroll_to(&mut self, offset: f64) -> Vec<Crossing> {
        self.scroll = offset.clamp(0.0, self.max_scroll());
        self.refresh()
    }
}

impl IntersectionObserver for Viewport {
    fn observe(&mut self, target: &str, trigger: Trigger) -> Option<Subscription> {
        if !self.elements.contains_key(target) {
            return None;
        }
        self.next_subscription += 1;
        let sub = Subscription(self.next_subscription);
        self.observed.insert(
            sub,
            Observed {
                target: target.to_string(),
                trigger,
                inside: false,
            },
        );
        Some(sub)
    }

    fn cancel(&mut self, subscription: Subscription) -> bool {
        self.observed.remove(&subscription).is_some()
    }
}

impl DocumentGeometry for Viewport {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).map(|r| r.y0)
    }
}

impl SmoothScroller for Viewport {
    fn smooth_scroll_to(&mut self, offset: f64, now: TimeMs) {
        let target = offset.clamp(0.0, self.max_scroll());
        self.scroll_anim = Some(Tween::new(
            self.scroll,
            target,
            now,
            self.scroll_duration_ms,
            self.scroll_ease,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/viewport.rs"]
mod tests;
