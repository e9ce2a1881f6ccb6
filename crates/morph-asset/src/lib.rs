//! Asset data model for the StyleMorph session core
//!
//! Pure data layer with no async and no I/O:
//! - Opaque image handles (content references, never decoded here)
//! - Model, clothing, draft and history record types
//! - Generic ordered libraries with front-insertion semantics
//! - Pose and angle parameters with a non-empty angle selection

// Core modules
pub mod clothing;
pub mod draft;
pub mod handle;
pub mod history;
pub mod id;
pub mod library;
pub mod model;
pub mod params;

// Re-exports for convenience
pub use clothing::{ClothingAsset, ClothingOrigin};
pub use draft::ClothingDraft;
pub use handle::ImageHandle;
pub use history::{GenerationRecord, HistoryLedger};
pub use id::{AssetId, DraftId, RecordId};
pub use library::{AssetLibrary, Identified};
pub use model::ModelAsset;
pub use params::{Angle, AngleSelection, Pose};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the asset model
    pub use crate::{
        Angle, AngleSelection, AssetId, AssetLibrary, ClothingAsset, ClothingDraft,
        ClothingOrigin, DraftId, GenerationRecord, HistoryLedger, ImageHandle, ModelAsset, Pose,
        RecordId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
