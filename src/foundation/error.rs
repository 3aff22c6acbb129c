/// Convenience result type used across Folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Nothing here is fatal to the page: every variant degrades a visual feature at the call site
/// that handles it.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid user-provided data (descriptors, anchors, config values).
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface for a procedural texture could not be created.
    #[error("texture error: {0}")]
    Texture(String),

    /// The 3D asset failed to load or never resolved.
    #[error("scene unavailable: {0}")]
    SceneUnavailable(String),

    /// Errors while registering or driving entrance animations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while loading or validating configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Texture`] value.
    pub fn texture(msg: impl Into<String>) -> Self {
        Self::Texture(msg.into())
    }

    /// Build a [`FolioError::SceneUnavailable`] value.
    pub fn scene_unavailable(msg: impl Into<String>) -> Self {
        Self::SceneUnavailable(msg.into())
    }

    /// Build a [`FolioError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
