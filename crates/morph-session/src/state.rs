//! Session state aggregate
//!
//! One struct holds everything the presentation layer reads: the wizard
//! position, both libraries, the draft queue, the ledger, the current
//! selections and preview, generation parameters, and the transient
//! in-flight flags. Selections are image handles, not asset ids — the
//! selection survives exactly as long as some asset carries that handle.

use crate::config::SessionConfig;
use morph_asset::{
    AngleSelection, AssetLibrary, ClothingAsset, ClothingDraft, DraftId, HistoryLedger,
    ImageHandle, ModelAsset, Pose,
};
use serde::{Deserialize, Serialize};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Step 1: pick or upload a model photo
    Models,
    /// Step 2: build and pick clothing
    Clothing,
    /// Step 3: choose parameters and synthesize
    Synthesis,
}

impl Step {
    /// 1-based ordinal as shown in the step navigation
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Step::Models => 1,
            Step::Clothing => 2,
            Step::Synthesis => 3,
        }
    }
}

/// The complete mutable session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current wizard step
    pub step: Step,
    /// Handle of the currently selected model photo
    pub selected_model: Option<ImageHandle>,
    /// Handle of the currently selected clothing image
    pub selected_clothing: Option<ImageHandle>,
    /// Result of the most recent successful batch, first angle's image
    pub result_preview: Option<ImageHandle>,
    /// Selected pose (exactly one)
    pub pose: Pose,
    /// Selected angles (never empty)
    pub angles: AngleSelection,
    /// Uploaded model photos, newest first
    pub models: AssetLibrary<ModelAsset>,
    /// Clothing items, newest first
    pub clothing: AssetLibrary<ClothingAsset>,
    /// Description drafts, newest batch first
    pub drafts: AssetLibrary<ClothingDraft>,
    /// Completed generations
    pub history: HistoryLedger,
    /// A reference-image analysis call is in flight
    pub analyzing: bool,
    /// The draft currently being synthesized, if any
    ///
    /// Doubles as the global gate: while set, every draft submission is
    /// rejected, not just resubmission of this draft.
    pub synthesizing_draft: Option<DraftId>,
    /// A batch try-on fan-out is in flight
    pub batch_in_progress: bool,
}

impl SessionState {
    /// Fresh state seeded from configuration
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut clothing = AssetLibrary::new();
        clothing.insert_front_batch(config.presets.iter().map(|preset| {
            ClothingAsset::preset(preset.image.clone(), &preset.name, &preset.description)
        }));

        Self {
            step: Step::Models,
            selected_model: None,
            selected_clothing: None,
            result_preview: None,
            pose: config.default_pose,
            angles: AngleSelection::single(config.default_angle),
            models: AssetLibrary::new(),
            clothing,
            drafts: AssetLibrary::new(),
            history: HistoryLedger::new(),
            analyzing: false,
            synthesizing_draft: None,
            batch_in_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_asset::ClothingOrigin;

    #[test]
    fn seeded_state_matches_catalog() {
        let config = SessionConfig::default();
        let state = SessionState::from_config(&config);

        assert_eq!(state.step, Step::Models);
        assert_eq!(state.clothing.len(), config.presets.len());
        for (asset, preset) in state.clothing.iter().zip(&config.presets) {
            assert_eq!(asset.origin, ClothingOrigin::Preset);
            assert_eq!(asset.image, preset.image);
            assert_eq!(asset.display_name.as_deref(), Some(preset.name.as_str()));
        }
        assert!(state.models.is_empty());
        assert!(state.drafts.is_empty());
        assert!(state.history.is_empty());
        assert!(!state.analyzing);
        assert!(state.synthesizing_draft.is_none());
        assert!(!state.batch_in_progress);
    }

    #[test]
    fn step_ordinals() {
        assert_eq!(Step::Models.ordinal(), 1);
        assert_eq!(Step::Clothing.ordinal(), 2);
        assert_eq!(Step::Synthesis.ordinal(), 3);
    }
}
