//! Fixed content of the portfolio page: hero headline, showcase grid, logo marquee.

use crate::foundation::core::TimeMs;
use crate::foundation::error::{FolioError, FolioResult};
use crate::motion::ease::Ease;
use crate::motion::orchestrator::{AnimationGroup, AnimationOrchestrator, AnimationTarget};
use crate::motion::tween::VisualState;
use crate::motion::viewport::Trigger;

/// Lines of the hero headline, top to bottom.
pub const HERO_HEADLINE: [&str; 3] = ["The Last Time", "Is NOW", "End of an Era"];

const HEADLINE_DURATION_MS: u64 = 1000;
const HEADLINE_STAGGER_MS: u64 = 200;
const CARD_BASE_DELAY_MS: u64 = 300;
const CARD_DURATION_MS: u64 = 1000;
const SHOWCASE_FADE_MS: u64 = 1500;

/// Element id of the showcase section.
pub const SHOWCASE_SECTION: &str = "work";

/// Element id of headline line `index`.
pub fn headline_line_id(index: usize) -> String {
    format!("hero-line-{index}")
}

fn slid_down() -> VisualState {
    VisualState::REST.with_opacity(0.0).with_translate(0.0, 50.0)
}

/// Headline lines slide up and fade in on mount, 200 ms apart.
pub fn hero_headline_targets() -> Vec<AnimationTarget> {
    (0..HERO_HEADLINE.len())
        .map(|i| {
            AnimationTarget::new(
                headline_line_id(i),
                slid_down(),
                VisualState::REST,
                HEADLINE_DURATION_MS,
            )
            .with_delay(HEADLINE_STAGGER_MS * i as u64)
            .with_trigger(Trigger::Immediate)
            .with_ease(Ease::InOutCubic)
        })
        .collect()
}

/// One card of the showcase grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ShowcaseProject {
    /// Element id of the card.
    pub id: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Longer text; only the featured project has one.
    pub description: Option<&'static str>,
    /// Screenshot path.
    pub image: &'static str,
}

const SHOWCASE: [ShowcaseProject; 3] = [
    ShowcaseProject {
        id: "crumb",
        title: "New Innovative way to make Friends with crumb",
        description: Some(
            "An App built with React Native, Expo, Supabase and TailwindCSS with fast UI",
        ),
        image: "/images/project1.png",
    },
    ShowcaseProject {
        id: "email-organizer",
        title: "Smart Email Organizer",
        description: None,
        image: "/images/project2.png",
    },
    ShowcaseProject {
        id: "careersync",
        title: "CareerSync Resume Matcher",
        description: None,
        image: "/images/project3.png",
    },
];

/// Featured project first, then the list projects.
pub fn showcase_projects() -> &'static [ShowcaseProject] {
    &SHOWCASE
}

/// Cards stagger in as each one scrolls into view; the section fades in on its own crossing.
pub fn showcase_group() -> AnimationGroup {
    AnimationGroup {
        base_delay_ms: CARD_BASE_DELAY_MS,
        members: SHOWCASE
            .iter()
            .map(|p| {
                AnimationTarget::new(p.id, slid_down(), VisualState::REST, CARD_DURATION_MS)
                    .with_trigger(Trigger::TopBeforeBottom { margin_px: 100.0 })
            })
            .collect(),
        container: Some(
            AnimationTarget::new(
                SHOWCASE_SECTION,
                VisualState::REST.with_opacity(0.0),
                VisualState::REST,
                SHOWCASE_FADE_MS,
            )
            .with_trigger(Trigger::TopBeforeBottom { margin_px: 0.0 }),
        ),
    }
}

/// Register every entrance animation of the page.
pub fn register_page_animations(orch: &mut AnimationOrchestrator) -> FolioResult<()> {
    for target in hero_headline_targets() {
        orch.register(target)?;
    }
    orch.register_group(showcase_group())
}

/// Endless horizontal logo strip.
///
/// The icon list is laid out twice back to back and the track scrolls left by one copy's width
/// before wrapping, so the loop has no visible seam.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Marquee {
    /// Icon image paths, one copy.
    pub icons: Vec<String>,
    /// Width of one item.
    pub item_width_px: f64,
    /// Gap after each item.
    pub gap_px: f64,
    /// Track speed.
    pub speed_px_per_s: f64,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            icons: (1..=11)
                .map(|i| format!("/images/logos/company-logo-{i}.png"))
                .collect(),
            item_width_px: 208.0,
            gap_px: 48.0,
            speed_px_per_s: 64.0,
        }
    }
}

impl Marquee {
    /// Rendered items: the icon list twice.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().chain(self.icons.iter()).map(String::as_str)
    }

    /// Width of one copy of the icon list.
    pub fn cycle_width(&self) -> f64 {
        self.icons.len() as f64 * (self.item_width_px + self.gap_px)
    }

    /// Horizontal track offset at `t`, in `(-cycle_width, 0]`.
    pub fn offset_at(&self, t: TimeMs) -> f64 {
        let cycle = self.cycle_width();
        if cycle <= 0.0 {
            return 0.0;
        }
        let travelled = t.0 as f64 / 1000.0 * self.speed_px_per_s;
        let offset = -(travelled % cycle);
        if offset == 0.0 { 0.0 } else { offset }
    }

    /// Check sizes and speed.
    pub fn validate(&self) -> FolioResult<()> {
        let finite = [self.item_width_px, self.gap_px, self.speed_px_per_s]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !finite {
            return Err(FolioError::validation(
                "marquee sizes and speed must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/page/page.rs"]
mod tests;
