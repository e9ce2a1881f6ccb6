//! Model photo assets

use crate::handle::ImageHandle;
use crate::id::AssetId;
use crate::library::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model photo uploaded by the user
///
/// Immutable after creation; deleted only by explicit user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAsset {
    /// Unique id within the model library
    pub id: AssetId,
    /// The photo content reference
    pub image: ImageHandle,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl ModelAsset {
    /// Create a new model asset from an uploaded photo
    #[must_use]
    pub fn new(image: ImageHandle) -> Self {
        Self {
            id: AssetId::new(),
            image,
            created_at: Utc::now(),
        }
    }
}

impl Identified for ModelAsset {
    type Id = AssetId;

    fn id(&self) -> AssetId {
        self.id
    }
}
