//! Session configuration
//!
//! Startup knobs for a session: the preset clothing catalog, the length of
//! derived display names, and the default generation parameters.

use morph_asset::{Angle, ImageHandle, Pose};
use serde::{Deserialize, Serialize};

/// A catalog entry seeded into the clothing library at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetClothing {
    /// Preview image for the preset
    pub image: ImageHandle,
    /// Display name
    pub name: String,
    /// Description usable as a generation prompt
    pub description: String,
}

impl PresetClothing {
    /// Build a catalog entry
    pub fn new(
        image: impl Into<ImageHandle>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Clothing catalog seeded at startup, first entry frontmost
    pub presets: Vec<PresetClothing>,
    /// Maximum characters of draft text used for a generated asset's name
    pub name_preview_chars: usize,
    /// Pose selected when the session starts
    pub default_pose: Pose,
    /// Angle selected when the session starts
    pub default_angle: Angle,
}

impl SessionConfig {
    /// Configuration with the built-in catalog and standard defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the preset catalog
    #[must_use]
    pub fn with_presets(mut self, presets: Vec<PresetClothing>) -> Self {
        self.presets = presets;
        self
    }

    /// Set the display-name preview length
    #[must_use]
    pub fn with_name_preview_chars(mut self, chars: usize) -> Self {
        self.name_preview_chars = chars;
        self
    }

    /// Set the starting pose
    #[must_use]
    pub fn with_default_pose(mut self, pose: Pose) -> Self {
        self.default_pose = pose;
        self
    }

    /// Set the starting angle
    #[must_use]
    pub fn with_default_angle(mut self, angle: Angle) -> Self {
        self.default_angle = angle;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            presets: builtin_catalog(),
            name_preview_chars: 15,
            default_pose: Pose::Standing,
            default_angle: Angle::Front,
        }
    }
}

/// The built-in clothing catalog
fn builtin_catalog() -> Vec<PresetClothing> {
    vec![
        PresetClothing::new(
            "https://picsum.photos/id/10/400/400",
            "Forest green dress",
            "Forest style green dress",
        ),
        PresetClothing::new(
            "https://picsum.photos/id/20/400/400",
            "Minimalist white tee",
            "Minimalist white t-shirt",
        ),
        PresetClothing::new(
            "https://picsum.photos/id/30/400/400",
            "Vintage denim jacket",
            "Vintage denim jacket",
        ),
        PresetClothing::new(
            "https://picsum.photos/id/40/400/400",
            "Business suit",
            "Business suit",
        ),
    ]
}
