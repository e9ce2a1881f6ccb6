//! Scripted session simulator
//!
//! Drives a full session against a deterministic in-process service: upload
//! a model, analyze a reference image, synthesize the first draft, toggle
//! angles, run the try-on batch. Used by the `morph-session` binary to
//! demonstrate the pipelines end to end without a real backend.

use crate::config::SessionConfig;
use crate::session::Session;
use morph_asset::{Angle, ImageHandle, Pose};
use morph_service::{ServiceError, SynthesisService};
use serde::Serialize;
use std::sync::Arc;

/// Simulator knobs
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Descriptions produced per reference analysis
    pub drafts_per_analysis: usize,
    /// Angles selected for the batch (1..=4, clamped)
    pub angles: usize,
    /// Fail one angle of the batch to demonstrate all-or-nothing rollback
    pub inject_failure: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            drafts_per_analysis: 3,
            angles: 2,
            inject_failure: false,
        }
    }
}

/// Outcome of a simulated session
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Model photos in the library
    pub models: usize,
    /// Clothing items in the library (presets plus generated)
    pub clothing: usize,
    /// Drafts left in the queue
    pub drafts: usize,
    /// Records committed to history
    pub history: usize,
    /// Preview handle after the batch, if it committed
    pub preview: Option<String>,
    /// Batch error message, when a failure was injected
    pub batch_error: Option<String>,
}

/// Deterministic stand-in for the external synthesis backend
struct StubService {
    drafts_per_analysis: usize,
    failing_angle: Option<Angle>,
}

#[async_trait::async_trait]
impl SynthesisService for StubService {
    async fn analyze_clothing_image(
        &self,
        _image: &ImageHandle,
    ) -> Result<Vec<String>, ServiceError> {
        Ok((1..=self.drafts_per_analysis)
            .map(|n| format!("stub clothing description {n}"))
            .collect())
    }

    async fn generate_clothing_from_text(
        &self,
        description: &str,
    ) -> Result<ImageHandle, ServiceError> {
        let slug: String = description
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        Ok(ImageHandle::new(format!("stub://clothing/{slug}")))
    }

    async fn generate_try_on_result(
        &self,
        _model: &ImageHandle,
        _clothing: &ImageHandle,
        pose: Pose,
        angle: Angle,
    ) -> Result<ImageHandle, ServiceError> {
        if self.failing_angle == Some(angle) {
            return Err(ServiceError::rejected(format!(
                "injected failure for angle {angle}"
            )));
        }
        Ok(ImageHandle::new(format!("stub://tryon/{pose}/{angle}")))
    }
}

/// Run one scripted session and report the resulting state
pub async fn run_simulation(config: SimulatorConfig) -> SimulationReport {
    let angles = config.angles.clamp(1, Angle::ALL.len());
    // The last toggled angle fails; earlier angles succeed and get discarded.
    let failing_angle = config.inject_failure.then(|| Angle::ALL[angles - 1]);

    let service = Arc::new(StubService {
        drafts_per_analysis: config.drafts_per_analysis.max(1),
        failing_angle,
    });
    let session = Session::new(SessionConfig::default(), service);

    session.upload_model(ImageHandle::from("stub://model/upload-1"));

    let drafts = session
        .analyze_reference(ImageHandle::from("stub://reference/upload-1"))
        .await
        .expect("stub analysis cannot fail");
    session
        .synthesize_from_draft(drafts[0].id)
        .await
        .expect("stub clothing synthesis cannot fail");

    for &angle in Angle::ALL.iter().take(angles).skip(1) {
        session.toggle_angle(angle);
    }

    let batch_error = session
        .synthesize_batch()
        .await
        .err()
        .map(|error| error.to_string());

    let state = session.snapshot();
    SimulationReport {
        models: state.models.len(),
        clothing: state.clothing.len(),
        drafts: state.drafts.len(),
        history: state.history.len(),
        preview: state.result_preview.map(|handle| handle.to_string()),
        batch_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clean_run_commits_batch() {
        let report = run_simulation(SimulatorConfig::default()).await;
        assert_eq!(report.models, 1);
        assert_eq!(report.drafts, 3);
        // 4 presets + 1 generated
        assert_eq!(report.clothing, 5);
        assert_eq!(report.history, 2);
        assert!(report.preview.is_some());
        assert!(report.batch_error.is_none());
    }

    #[tokio::test]
    async fn injected_failure_commits_nothing() {
        let report = run_simulation(SimulatorConfig {
            angles: 3,
            inject_failure: true,
            ..SimulatorConfig::default()
        })
        .await;
        assert_eq!(report.history, 0);
        assert!(report.preview.is_none());
        assert!(report.batch_error.is_some());
    }
}
