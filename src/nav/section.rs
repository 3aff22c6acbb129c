use crate::foundation::error::{FolioError, FolioResult};

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavEntry {
    /// Element id of the section anchor (no leading `#`).
    pub anchor_id: String,
    /// Accessible label.
    pub label: String,
    /// Icon name.
    pub icon: String,
}

impl NavEntry {
    /// Entry from its three parts.
    pub fn new(anchor_id: &str, label: &str, icon: &str) -> Self {
        Self {
            anchor_id: anchor_id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Position of an anchor in the canonical section sequence.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct NavSection {
    /// Order in the page, 0 = first.
    pub order: usize,
    /// Element id of the anchor.
    pub anchor_id: String,
}

/// Navigation configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Entries in page order; the first one is "home".
    pub entries: Vec<NavEntry>,
    /// Reference line as a fraction of the viewport height from its top.
    pub reference_fraction: f64,
    /// Gap left above an anchor after click-to-navigate.
    pub scroll_offset_px: f64,
    /// Scroll offsets at or below this count as "at the top".
    pub home_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            reference_fraction: 0.15,
            scroll_offset_px: 80.0,
            home_threshold_px: 4.0,
        }
    }
}

impl NavConfig {
    /// Check entries and numeric ranges.
    pub fn validate(&self) -> FolioResult<()> {
        if self.entries.is_empty() {
            return Err(FolioError::validation("nav needs at least one entry"));
        }
        for (i, e) in self.entries.iter().enumerate() {
            if e.anchor_id.is_empty() || e.anchor_id.starts_with('#') {
                return Err(FolioError::validation(format!(
                    "nav anchor '{}' must be a bare element id",
                    e.anchor_id
                )));
            }
            if self.entries[..i].iter().any(|p| p.anchor_id == e.anchor_id) {
                return Err(FolioError::validation(format!(
                    "duplicate nav anchor '{}'",
                    e.anchor_id
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.reference_fraction) {
            return Err(FolioError::validation(
                "nav reference_fraction must be within [0, 1]",
            ));
        }
        if !self.scroll_offset_px.is_finite() || !self.home_threshold_px.is_finite() {
            return Err(FolioError::validation("nav offsets must be finite"));
        }
        if self.home_threshold_px < 0.0 {
            return Err(FolioError::validation("nav home_threshold_px must be >= 0"));
        }
        Ok(())
    }

    /// Sections in page order.
    pub fn sections(&self) -> Vec<NavSection> {
        self.entries
            .iter()
            .enumerate()
            .map(|(order, e)| NavSection {
                order,
                anchor_id: e.anchor_id.clone(),
            })
            .collect()
    }
}

/// The portfolio's navigation bar.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("home", "Home", "home"),
        NavEntry::new("about", "About", "user"),
        NavEntry::new("experience", "Experience", "monitor"),
        NavEntry::new("cv", "CV", "book-open"),
        NavEntry::new("projects", "Projects", "briefcase"),
        NavEntry::new("contact", "Contact", "mail"),
    ]
}
