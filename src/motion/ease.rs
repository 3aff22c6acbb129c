use std::str::FromStr;

use crate::foundation::error::FolioError;

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    #[default]
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
        }
    }
}

/// Accepts variant names and `powerN` aliases (`power1` quad, `power2` cubic, `power3` quart).
/// A bare `powerN` is the `out` curve.
impl FromStr for Ease {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Linear" | "linear" | "none" => Self::Linear,
            "InQuad" | "power1.in" => Self::InQuad,
            "OutQuad" | "power1.out" | "power1" => Self::OutQuad,
            "InOutQuad" | "power1.inOut" => Self::InOutQuad,
            "InCubic" | "power2.in" => Self::InCubic,
            "OutCubic" | "power2.out" | "power2" => Self::OutCubic,
            "InOutCubic" | "power2.inOut" => Self::InOutCubic,
            "InQuart" | "power3.in" => Self::InQuart,
            "OutQuart" | "power3.out" | "power3" => Self::OutQuart,
            "InOutQuart" | "power3.inOut" => Self::InOutQuart,
            other => return Err(FolioError::validation(format!("unknown ease '{other}'"))),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/ease.rs"]
mod tests;
