//! Session controller
//!
//! [`Session`] owns the state aggregate behind a mutex and exposes every
//! mutation as a named operation. Lock scopes are short and never span an
//! external call: async pipelines read what they need and set their
//! in-flight flag under the lock, await the service with the lock released,
//! then reacquire it to clear the flag and commit (or commit nothing on
//! failure).

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::guard::{self, AssetKind};
use crate::state::{SessionState, Step};
use futures::future;
use morph_asset::{
    Angle, AssetId, ClothingAsset, ClothingDraft, DraftId, GenerationRecord, ImageHandle,
    ModelAsset, Pose, RecordId,
};
use morph_service::SynthesisService;
use parking_lot::Mutex;
use std::sync::Arc;

/// The session controller
///
/// Single owner of all mutable session data. Cheap to share behind an `Arc`;
/// all operations take `&self`.
pub struct Session {
    config: SessionConfig,
    service: Arc<dyn SynthesisService>,
    state: Mutex<SessionState>,
}

impl Session {
    /// Create a session seeded from configuration
    #[must_use]
    pub fn new(config: SessionConfig, service: Arc<dyn SynthesisService>) -> Self {
        let state = SessionState::from_config(&config);
        Self {
            config,
            service,
            state: Mutex::new(state),
        }
    }

    /// Clone of the current state, for rendering and assertions
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }

    /// The configuration the session was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // --- Wizard and parameters ---

    /// Jump to a wizard step
    pub fn set_step(&self, step: Step) {
        self.state.lock().step = step;
    }

    /// Select the pose for the next batch
    pub fn set_pose(&self, pose: Pose) {
        self.state.lock().pose = pose;
    }

    /// Toggle an angle on or off
    ///
    /// Returns `false` when the toggle was refused: the selection must keep
    /// at least one angle.
    pub fn toggle_angle(&self, angle: Angle) -> bool {
        self.state.lock().angles.toggle(angle)
    }

    // --- Model library ---

    /// Add an uploaded model photo and select it
    pub fn upload_model(&self, image: ImageHandle) -> ModelAsset {
        let asset = ModelAsset::new(image.clone());
        let mut state = self.state.lock();
        state.models.insert_front(asset.clone());
        state.selected_model = Some(image);
        tracing::info!(model = %asset.id, "model uploaded and selected");
        asset
    }

    /// Select a model photo by its image handle
    ///
    /// Selecting on step 1 advances the wizard to step 2.
    pub fn select_model(&self, image: ImageHandle) {
        let mut state = self.state.lock();
        state.selected_model = Some(image);
        if state.step == Step::Models {
            state.step = Step::Clothing;
        }
    }

    /// Delete a model photo
    ///
    /// Clears the model selection if the deleted photo was selected.
    pub fn delete_model(&self, id: AssetId) -> Option<ModelAsset> {
        let mut state = self.state.lock();
        let removed = state.models.remove(id)?;
        guard::on_asset_removed(&mut state, AssetKind::Model, &removed.image);
        Some(removed)
    }

    // --- Clothing library ---

    /// Add an uploaded clothing image and select it
    pub fn upload_clothing(&self, image: ImageHandle) -> ClothingAsset {
        let asset = ClothingAsset::uploaded(image.clone());
        let mut state = self.state.lock();
        state.clothing.insert_front(asset.clone());
        state.selected_clothing = Some(image);
        tracing::info!(clothing = %asset.id, "clothing uploaded and selected");
        asset
    }

    /// Select a clothing item by its image handle
    pub fn select_clothing(&self, image: ImageHandle) {
        self.state.lock().selected_clothing = Some(image);
    }

    /// Delete a clothing item
    ///
    /// Clears the clothing selection if the deleted item was selected.
    pub fn delete_clothing(&self, id: AssetId) -> Option<ClothingAsset> {
        let mut state = self.state.lock();
        let removed = state.clothing.remove(id)?;
        guard::on_asset_removed(&mut state, AssetKind::Clothing, &removed.image);
        Some(removed)
    }

    // --- Draft queue ---

    /// Edit a draft's text in place
    ///
    /// Assets already generated from this draft keep the text they were
    /// generated with.
    pub fn update_draft(&self, id: DraftId, text: impl Into<String>) -> Result<(), SessionError> {
        let mut state = self.state.lock();
        let draft = state
            .drafts
            .find_mut(id)
            .ok_or(SessionError::DraftNotFound(id))?;
        draft.text = text.into();
        Ok(())
    }

    /// Delete a draft
    pub fn delete_draft(&self, id: DraftId) -> Option<ClothingDraft> {
        self.state.lock().drafts.remove(id)
    }

    // --- History ---

    /// Delete a history record
    pub fn delete_history(&self, id: RecordId) -> Option<GenerationRecord> {
        self.state.lock().history.remove(id)
    }

    // --- Pipelines ---

    /// Analyze a reference image into clothing description drafts
    ///
    /// On success every returned description becomes a draft; the batch is
    /// prepended to the queue as one unit, batch order preserved. On failure
    /// nothing is committed. The `analyzing` flag covers the call on every
    /// exit path. Concurrent invocations are permitted and may race the
    /// flag.
    pub async fn analyze_reference(
        &self,
        image: ImageHandle,
    ) -> Result<Vec<ClothingDraft>, SessionError> {
        self.state.lock().analyzing = true;
        tracing::info!("analyzing reference image");

        let result = self.service.analyze_clothing_image(&image).await;

        let mut state = self.state.lock();
        state.analyzing = false;
        let descriptions = match result {
            Ok(descriptions) => descriptions,
            Err(error) => {
                tracing::error!(%error, "reference analysis failed");
                return Err(error.into());
            }
        };

        let batch: Vec<ClothingDraft> = descriptions.into_iter().map(ClothingDraft::new).collect();
        state.drafts.insert_front_batch(batch.iter().cloned());
        tracing::info!(drafts = batch.len(), "analysis produced drafts");
        Ok(batch)
    }

    /// Synthesize a clothing asset from a draft
    ///
    /// Rejected synchronously when the draft is blank or unknown, or when
    /// any draft synthesis is already in flight (one outstanding call across
    /// the whole queue, enforced by check-and-set under the lock). The text
    /// is snapshotted at call time; later edits do not alter the produced
    /// asset. On success the asset lands at the front of the clothing
    /// library and becomes the selection.
    pub async fn synthesize_from_draft(
        &self,
        id: DraftId,
    ) -> Result<ClothingAsset, SessionError> {
        let text = {
            let mut state = self.state.lock();
            if state.synthesizing_draft.is_some() {
                return Err(SessionError::SynthesisBusy);
            }
            let draft = state
                .drafts
                .find(id)
                .ok_or(SessionError::DraftNotFound(id))?;
            if draft.is_blank() {
                return Err(SessionError::BlankDraft);
            }
            let text = draft.text.clone();
            state.synthesizing_draft = Some(id);
            text
        };
        tracing::info!(draft = %id, "synthesizing clothing from draft");

        let result = self.service.generate_clothing_from_text(&text).await;

        let mut state = self.state.lock();
        state.synthesizing_draft = None;
        let image = match result {
            Ok(image) => image,
            Err(error) => {
                tracing::error!(%error, draft = %id, "clothing synthesis failed");
                return Err(error.into());
            }
        };

        let asset = ClothingAsset::generated(
            image.clone(),
            preview_name(&text, self.config.name_preview_chars),
            text,
        );
        state.clothing.insert_front(asset.clone());
        state.selected_clothing = Some(image);
        tracing::info!(clothing = %asset.id, "generated clothing added and selected");
        Ok(asset)
    }

    /// Run the try-on fan-out for every selected angle
    ///
    /// One service call per angle, issued concurrently; the operation
    /// suspends until all complete or any fails. All-or-nothing: a single
    /// failure discards every result, including angles that already
    /// succeeded, and commits nothing. On success one record per angle is
    /// prepended to the ledger as a contiguous batch in angle order and the
    /// preview becomes the first angle's result. The stale preview is
    /// cleared before any request is issued.
    pub async fn synthesize_batch(&self) -> Result<Vec<GenerationRecord>, SessionError> {
        let (model, clothing, pose, angles) = {
            let mut state = self.state.lock();
            let model = state
                .selected_model
                .clone()
                .ok_or(SessionError::MissingSelection)?;
            let clothing = state
                .selected_clothing
                .clone()
                .ok_or(SessionError::MissingSelection)?;
            state.batch_in_progress = true;
            state.result_preview = None;
            (model, clothing, state.pose, state.angles.as_slice().to_vec())
        };
        tracing::info!(%pose, angles = angles.len(), "starting try-on batch");

        let calls = angles
            .iter()
            .map(|&angle| self.service.generate_try_on_result(&model, &clothing, pose, angle));
        let outcome = future::try_join_all(calls).await;

        let mut state = self.state.lock();
        state.batch_in_progress = false;
        let images = match outcome {
            Ok(images) => images,
            Err(error) => {
                tracing::error!(%error, "try-on batch failed, discarding all results");
                return Err(error.into());
            }
        };

        let records: Vec<GenerationRecord> = angles
            .into_iter()
            .zip(images)
            .map(|(angle, result)| {
                GenerationRecord::new(model.clone(), clothing.clone(), result, pose, angle)
            })
            .collect();
        state.history.prepend_batch(records.iter().cloned());
        state.result_preview = records.first().map(|record| record.result_image.clone());
        tracing::info!(records = records.len(), "try-on batch committed");
        Ok(records)
    }
}

/// Derive a short display name from draft text
///
/// Truncates on a character boundary and marks the cut with an ellipsis.
fn preview_name(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_name_short_text_untouched() {
        assert_eq!(preview_name("red coat", 15), "red coat");
    }

    #[test]
    fn preview_name_truncates_with_ellipsis() {
        assert_eq!(
            preview_name("a very long clothing description", 15),
            "a very long clo..."
        );
    }

    #[test]
    fn preview_name_is_char_boundary_safe() {
        assert_eq!(preview_name("红色羊毛大衣冬季加厚保暖时尚经典款式", 15).chars().count(), 18);
        assert_eq!(preview_name("红色大衣", 15), "红色大衣");
    }
}
