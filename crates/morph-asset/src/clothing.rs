//! Clothing assets
//!
//! A clothing asset enters the library one of three ways: uploaded by the
//! user, seeded from the preset catalog at startup, or produced by the
//! text-to-image pipeline. It is immutable after creation and deletable.

use crate::handle::ImageHandle;
use crate::id::AssetId;
use crate::library::Identified;
use serde::{Deserialize, Serialize};

/// How a clothing asset entered the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingOrigin {
    /// Uploaded directly by the user
    Uploaded,
    /// Seeded from the built-in catalog
    Preset,
    /// Synthesized from a description draft
    Generated,
}

/// A clothing item available for try-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingAsset {
    /// Unique id within the clothing library
    pub id: AssetId,
    /// The clothing image content reference
    pub image: ImageHandle,
    /// How this asset was created
    pub origin: ClothingOrigin,
    /// Short human-readable name, when one exists
    pub display_name: Option<String>,
    /// The description the asset was generated from, for generated assets
    pub source_description: Option<String>,
}

impl ClothingAsset {
    /// A user-uploaded clothing image
    #[must_use]
    pub fn uploaded(image: ImageHandle) -> Self {
        Self {
            id: AssetId::new(),
            image,
            origin: ClothingOrigin::Uploaded,
            display_name: None,
            source_description: None,
        }
    }

    /// A catalog preset
    #[must_use]
    pub fn preset(image: ImageHandle, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: AssetId::new(),
            image,
            origin: ClothingOrigin::Preset,
            display_name: Some(name.into()),
            source_description: Some(description.into()),
        }
    }

    /// A synthesized asset, carrying the exact description it came from
    #[must_use]
    pub fn generated(
        image: ImageHandle,
        display_name: impl Into<String>,
        source_description: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(),
            image,
            origin: ClothingOrigin::Generated,
            display_name: Some(display_name.into()),
            source_description: Some(source_description.into()),
        }
    }
}

impl Identified for ClothingAsset {
    type Id = AssetId;

    fn id(&self) -> AssetId {
        self.id
    }
}
