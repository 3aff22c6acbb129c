use crate::foundation::core::TimeMs;
use crate::foundation::error::{FolioError, FolioResult};
use crate::motion::viewport::{DocumentGeometry, SmoothScroller};
use crate::nav::section::{NavConfig, NavEntry, NavSection};

/// Result of a nav click.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    /// The host must suppress the browser's own anchor jump.
    pub prevent_default: bool,
    /// Scroll offset the smooth scroll is heading to.
    pub target_offset: f64,
}

/// Tracks which section is active and mediates click-to-navigate.
///
/// The active section is derived from scroll position and stored only here. Scroll events mark
/// it stale; it is recomputed at most once per animation frame. A click sets it optimistically,
/// and whichever of scroll and click ran last wins.
#[derive(Clone, Debug)]
pub struct ScrollNavController {
    entries: Vec<NavEntry>,
    sections: Vec<NavSection>,
    reference_fraction: f64,
    scroll_offset_px: f64,
    home_threshold_px: f64,
    active: usize,
    dirty: bool,
}

impl ScrollNavController {
    /// Controller for a validated configuration. The first section starts active.
    pub fn new(cfg: &NavConfig) -> FolioResult<Self> {
        cfg.validate()?;
        Ok(Self {
            entries: cfg.entries.clone(),
            sections: cfg.sections(),
            reference_fraction: cfg.reference_fraction,
            scroll_offset_px: cfg.scroll_offset_px,
            home_threshold_px: cfg.home_threshold_px,
            active: 0,
            dirty: false,
        })
    }

    /// Entries in page order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Sections in page order.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Anchor id of the active section.
    pub fn active(&self) -> &str {
        &self.sections[self.active].anchor_id
    }

    /// Entry of the active section.
    pub fn active_entry(&self) -> &NavEntry {
        &self.entries[self.active]
    }

    /// Return `true` while a scroll event has not been folded in yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Note that the scroll offset changed.
    pub fn on_scroll(&mut self) {
        self.dirty = true;
    }

    /// Recompute the active section if a scroll happened since the last frame.
    ///
    /// Returns `true` when the active section changed.
    pub fn on_animation_frame(&mut self, doc: &dyn DocumentGeometry) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        let next = self.derive(doc);
        if next == self.active {
            return false;
        }
        tracing::debug!(
            from = %self.sections[self.active].anchor_id,
            to = %self.sections[next].anchor_id,
            "active section changed"
        );
        self.active = next;
        true
    }

    /// Handle a click on the entry for `anchor_id`.
    ///
    /// Starts a smooth scroll to the anchor (or to the top for the first section) and makes the
    /// entry active immediately. Unknown anchors change nothing.
    pub fn click<V>(&mut self, anchor_id: &str, view: &mut V, now: TimeMs) -> FolioResult<ClickOutcome>
    where
        V: DocumentGeometry + SmoothScroller + ?Sized,
    {
        let anchor_id = anchor_id.strip_prefix('#').unwrap_or(anchor_id);
        let index = self
            .sections
            .iter()
            .position(|s| s.anchor_id == anchor_id)
            .ok_or_else(|| FolioError::validation(format!("unknown nav anchor '{anchor_id}'")))?;

        let target_offset = if index == 0 {
            0.0
        } else {
            let top = view.element_top(anchor_id).ok_or_else(|| {
                FolioError::validation(format!("nav anchor '{anchor_id}' has no element"))
            })?;
            (top - self.scroll_offset_px).max(0.0)
        };

        view.smooth_scroll_to(target_offset, now);
        self.active = index;
        self.dirty = false;
        tracing::debug!(anchor = anchor_id, target_offset, "nav click");
        Ok(ClickOutcome {
            prevent_default: true,
            target_offset,
        })
    }

    fn derive(&self, doc: &dyn DocumentGeometry) -> usize {
        let scroll = doc.scroll_offset();
        if scroll <= self.home_threshold_px {
            return 0;
        }
        let line = scroll + self.reference_fraction * doc.viewport_height();
        let mut best: Option<(usize, f64)> = None;
        for (i, s) in self.sections.iter().enumerate() {
            let Some(top) = doc.element_top(&s.anchor_id) else {
                continue;
            };
            if top <= line && best.is_none_or(|(_, t)| top >= t) {
                best = Some((i, top));
            }
        }
        best.map_or(0, |(i, _)| i)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/controller.rs"]
mod tests;
