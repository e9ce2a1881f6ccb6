//! Opaque image handles
//!
//! A handle is a content reference (data URL or remote URL) that the session
//! core passes through unexamined. Selection state compares handles by value:
//! two selections are the same selection exactly when their handles are equal.

use serde::{Deserialize, Serialize};

/// Opaque reference to image content
///
/// Never decoded or inspected by the session core. Equality is value equality
/// of the underlying reference, which is what selection tracking relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Wrap a content reference
    #[inline]
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// The underlying reference string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageHandle {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ImageHandle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_content() {
        let a = ImageHandle::from("data:image/png;base64,AAAA");
        let b = ImageHandle::new(String::from("data:image/png;base64,AAAA"));
        let c = ImageHandle::from("https://example.com/other.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
