//! Draft-to-clothing synthesis pipeline

use morph_asset::{ClothingOrigin, DraftId};
use morph_service::ServiceError;
use morph_session::{Session, SessionConfig, SessionError};
use morph_test_utils::{reference_handle, ScriptedService};
use std::sync::Arc;

fn new_session(service: Arc<ScriptedService>) -> Session {
    Session::new(SessionConfig::default().with_presets(Vec::new()), service)
}

/// Run one analysis so the queue holds whatever the test pushed
async fn seed_draft(session: &Session) -> DraftId {
    session.analyze_reference(reference_handle(0)).await.unwrap()[0].id
}

#[tokio::test]
async fn blank_draft_never_reaches_the_service() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("something")]));
    let session = new_session(Arc::clone(&service));
    let draft_id = seed_draft(&session).await;
    session.update_draft(draft_id, "   \n\t").unwrap();

    let result = session.synthesize_from_draft(draft_id).await;

    assert!(matches!(result, Err(SessionError::BlankDraft)));
    assert_eq!(service.clothing_calls(), 0);
    let state = session.snapshot();
    assert!(state.clothing.is_empty());
    assert!(state.synthesizing_draft.is_none());
}

#[tokio::test]
async fn generated_asset_snapshots_draft_text() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("red wool coat")]));
    let session = new_session(Arc::clone(&service));
    let draft_id = seed_draft(&session).await;

    let asset = session.synthesize_from_draft(draft_id).await.unwrap();
    session.update_draft(draft_id, "blue linen shirt").unwrap();

    assert_eq!(asset.origin, ClothingOrigin::Generated);
    assert_eq!(asset.source_description.as_deref(), Some("red wool coat"));
    assert_eq!(asset.display_name.as_deref(), Some("red wool coat"));

    let state = session.snapshot();
    let front = &state.clothing.list()[0];
    assert_eq!(front.source_description.as_deref(), Some("red wool coat"));
    assert_eq!(state.selected_clothing, Some(asset.image));
    assert!(state.synthesizing_draft.is_none());
    // The draft itself is edited but not consumed.
    assert_eq!(state.drafts.find(draft_id).unwrap().text, "blue linen shirt");
}

#[tokio::test]
async fn long_text_gets_truncated_display_name() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from(
        "an extraordinarily detailed clothing description",
    )]));
    let session = new_session(service);
    let draft_id = seed_draft(&session).await;

    let asset = session.synthesize_from_draft(draft_id).await.unwrap();

    assert_eq!(asset.display_name.as_deref(), Some("an extraordinar..."));
    assert_eq!(
        asset.source_description.as_deref(),
        Some("an extraordinarily detailed clothing description")
    );
}

#[tokio::test]
async fn unknown_draft_is_an_error() {
    let service = Arc::new(ScriptedService::new());
    let session = new_session(Arc::clone(&service));

    let result = session.synthesize_from_draft(DraftId::new()).await;

    assert!(matches!(result, Err(SessionError::DraftNotFound(_))));
    assert_eq!(service.clothing_calls(), 0);
}

#[tokio::test]
async fn failure_clears_flag_and_commits_nothing() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("red wool coat")]));
    service.push_clothing(Err(ServiceError::rejected("quota exceeded")));
    let session = new_session(Arc::clone(&service));
    let draft_id = seed_draft(&session).await;

    let result = session.synthesize_from_draft(draft_id).await;

    assert!(matches!(result, Err(SessionError::Service(_))));
    let state = session.snapshot();
    assert!(state.clothing.is_empty());
    assert!(state.selected_clothing.is_none());
    assert!(state.synthesizing_draft.is_none());
}

#[tokio::test]
async fn gate_rejects_second_submission_while_one_is_in_flight() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("first"), String::from("second")]));
    let gate = service.hold_clothing_calls();
    let session = Arc::new(new_session(Arc::clone(&service)));
    let drafts = session.analyze_reference(reference_handle(1)).await.unwrap();
    let (first, second) = (drafts[0].id, drafts[1].id);

    let in_flight = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.synthesize_from_draft(first).await })
    };
    gate.entered.notified().await;

    // The gate is global: a different draft is rejected too.
    let rejected = session.synthesize_from_draft(second).await;
    assert!(matches!(rejected, Err(SessionError::SynthesisBusy)));

    gate.release.notify_one();
    let completed = in_flight.await.unwrap();
    assert!(completed.is_ok());

    // Gate reopens once the call lands.
    gate.release.notify_one();
    let after = session.synthesize_from_draft(second).await;
    assert!(after.is_ok());
    assert_eq!(service.clothing_calls(), 2);
}
