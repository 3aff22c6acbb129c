use std::collections::BTreeMap;

use crate::foundation::hash::{Fingerprint, StableHasher};

/// What a generated screen texture depicts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Dark editor panel with syntax-coloured lines.
    Code,
    /// Card with avatar, name, entries and status lines.
    Profile,
    /// A single centred string on a solid background.
    Label,
}

impl ContentKind {
    /// Lowercase name as used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Profile => "profile",
            Self::Label => "label",
        }
    }
}

/// Immutable value that fully determines a generated bitmap.
///
/// Params are kept in a `BTreeMap` so structurally equal descriptors hash and compare equal
/// regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContentDescriptor {
    /// Content kind.
    pub kind: ContentKind,
    /// String parameters interpreted per kind.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl ContentDescriptor {
    /// Descriptor with no params.
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            params: BTreeMap::new(),
        }
    }

    /// Builder-style param setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Code panel showing `lines`, with `title` in the header bar.
    pub fn code(title: &str, lines: &[&str]) -> Self {
        Self::new(ContentKind::Code)
            .with("title", title)
            .with("text", lines.join("\n"))
    }

    /// Profile card.
    pub fn profile(name: &str, handle: &str, entries: &[&str], status: &[&str]) -> Self {
        Self::new(ContentKind::Profile)
            .with("name", name)
            .with("handle", handle)
            .with("entries", entries.join("\n"))
            .with("status", status.join("\n"))
    }

    /// Centred label with explicit colours (hex strings).
    pub fn label(text: &str, background: &str, foreground: &str) -> Self {
        Self::new(ContentKind::Label)
            .with("text", text)
            .with("background", background)
            .with("foreground", foreground)
    }

    /// Look up a param.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Look up a param, falling back to `default` when absent.
    pub fn param_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.param(key).unwrap_or(default)
    }

    /// Newline-separated param split into lines; absent or empty params yield no lines.
    pub fn lines(&self, key: &str) -> Vec<&str> {
        match self.param(key) {
            Some(v) if !v.is_empty() => v.split('\n').collect(),
            _ => Vec::new(),
        }
    }

    /// Stable fingerprint of kind and params.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = StableHasher::new();
        h.write_str(self.kind.as_str());
        h.write_u32(self.params.len() as u32);
        for (k, v) in &self.params {
            h.write_str(k);
            h.write_str(v);
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/descriptor.rs"]
mod tests;
