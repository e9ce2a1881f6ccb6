//! Reference-image analysis pipeline

use morph_service::ServiceError;
use morph_session::{Session, SessionConfig, SessionError};
use morph_test_utils::{reference_handle, ScriptedService};
use std::sync::Arc;

fn new_session(service: Arc<ScriptedService>) -> Session {
    Session::new(SessionConfig::default().with_presets(Vec::new()), service)
}

#[tokio::test]
async fn descriptions_become_drafts_in_order_ahead_of_existing() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("older draft")]));
    service.push_analysis(Ok(vec![
        String::from("first"),
        String::from("second"),
        String::from("third"),
    ]));
    let session = new_session(Arc::clone(&service));

    session.analyze_reference(reference_handle(1)).await.unwrap();
    let batch = session.analyze_reference(reference_handle(2)).await.unwrap();
    assert_eq!(batch.len(), 3);

    let state = session.snapshot();
    let texts: Vec<&str> = state.drafts.iter().map(|d| d.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third", "older draft"]);
    assert!(!state.analyzing);
    assert_eq!(service.analyze_calls(), 2);
}

#[tokio::test]
async fn analysis_failure_commits_nothing() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Err(ServiceError::transport("connection reset")));
    let session = new_session(Arc::clone(&service));

    let result = session.analyze_reference(reference_handle(1)).await;

    assert!(matches!(result, Err(SessionError::Service(_))));
    let state = session.snapshot();
    assert!(state.drafts.is_empty());
    assert!(!state.analyzing);
}

#[tokio::test]
async fn draft_timestamps_and_ids_are_distinct() {
    let service = Arc::new(ScriptedService::new());
    service.push_analysis(Ok(vec![String::from("a"), String::from("b")]));
    let session = new_session(service);

    let batch = session.analyze_reference(reference_handle(1)).await.unwrap();
    assert_ne!(batch[0].id, batch[1].id);
}
