use crate::foundation::error::{FolioError, FolioResult};

pub use glam::{Mat4, Quat, Vec3};
pub use kurbo::{Point, Rect};

/// Logical timestamp in milliseconds.
///
/// The engine never reads a wall clock; hosts pass the current time into `tick`/`advance`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Return `self + ms` using saturating arithmetic.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero when `earlier` is in the future).
    pub fn since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> FolioResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let nibble = |c: u8| -> FolioResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| FolioError::validation(format!("invalid hex color '{s}'")))
        };
        let bytes = hex.as_bytes();
        let byte = |i: usize| -> FolioResult<u8> { Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?) };
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::opaque(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(FolioError::validation(format!(
                "hex color '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    /// Format as lowercase hex, omitting alpha when opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Premultiplied RGBA8 bytes, the layout of [`Bitmap`](crate::Bitmap) pixels.
    #[cfg(test)]
    pub(crate) fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// Static placement of a mesh: position, XYZ euler rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3 {
    /// Translation.
    pub position: Vec3,
    /// Euler rotation in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform3 {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform translated to `position`.
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Replace the rotation.
    pub const fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the scale with a per-axis value.
    pub const fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the scale with a uniform value.
    pub const fn scaled_uniform(self, s: f32) -> Self {
        self.scaled(Vec3::splat(s))
    }

    /// Column-major model matrix (`T * R * S`).
    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
