//! Selection guard
//!
//! Every library removal is routed through here so a deleted asset can never
//! remain selected. The comparison is by image handle, not by asset id: the
//! selection is a reference to image content, so it is cleared exactly when
//! the removed asset carried the currently selected handle.

use crate::state::SessionState;
use morph_asset::ImageHandle;

/// Which selection a removed asset is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Model library removal
    Model,
    /// Clothing library removal
    Clothing,
}

/// Clear the matching selection if the removed asset was the selected one
///
/// The wizard silently degrades: the step stays where it is, but the
/// selection backing it becomes `None`, which readers must detect.
pub(crate) fn on_asset_removed(state: &mut SessionState, kind: AssetKind, removed: &ImageHandle) {
    let selection = match kind {
        AssetKind::Model => &mut state.selected_model,
        AssetKind::Clothing => &mut state.selected_clothing,
    };
    if selection.as_ref() == Some(removed) {
        *selection = None;
        tracing::debug!(?kind, "selection cleared by asset removal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn state_with_selection() -> SessionState {
        let mut state = SessionState::from_config(&SessionConfig::default().with_presets(Vec::new()));
        state.selected_model = Some(ImageHandle::from("m://a"));
        state.selected_clothing = Some(ImageHandle::from("c://a"));
        state
    }

    #[test]
    fn clears_only_matching_kind_and_handle() {
        let mut state = state_with_selection();
        on_asset_removed(&mut state, AssetKind::Model, &ImageHandle::from("m://other"));
        assert!(state.selected_model.is_some());

        on_asset_removed(&mut state, AssetKind::Model, &ImageHandle::from("m://a"));
        assert!(state.selected_model.is_none());
        assert!(state.selected_clothing.is_some());
    }

    #[test]
    fn clothing_removal_does_not_touch_model_selection() {
        let mut state = state_with_selection();
        on_asset_removed(&mut state, AssetKind::Clothing, &ImageHandle::from("c://a"));
        assert!(state.selected_clothing.is_none());
        assert!(state.selected_model.is_some());
    }
}
