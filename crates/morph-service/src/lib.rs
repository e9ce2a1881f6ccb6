//! External image-synthesis service boundary
//!
//! The session core treats the generative backend as an opaque collaborator
//! behind [`SynthesisService`]: three async operations that take and return
//! image handles. No encoding, decoding or transport concerns live on this
//! side of the boundary.

pub mod error;

pub use error::ServiceError;

use morph_asset::{Angle, ImageHandle, Pose};

/// The external generative image-synthesis service
///
/// Implementations are injected into the session as `Arc<dyn
/// SynthesisService>`. Every operation is fallible with [`ServiceError`] and
/// carries no retry policy of its own; the caller decides what a failure
/// means.
#[async_trait::async_trait]
pub trait SynthesisService: Send + Sync {
    /// Describe the clothing found in a reference image
    ///
    /// Returns one or more natural-language descriptions.
    async fn analyze_clothing_image(
        &self,
        image: &ImageHandle,
    ) -> Result<Vec<String>, ServiceError>;

    /// Synthesize a clothing image from a description
    async fn generate_clothing_from_text(
        &self,
        description: &str,
    ) -> Result<ImageHandle, ServiceError>;

    /// Compose a try-on result from a model photo and a clothing image
    async fn generate_try_on_result(
        &self,
        model: &ImageHandle,
        clothing: &ImageHandle,
        pose: Pose,
        angle: Angle,
    ) -> Result<ImageHandle, ServiceError>;
}
