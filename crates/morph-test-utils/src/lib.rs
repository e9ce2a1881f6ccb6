//! Testing utilities for the StyleMorph workspace
//!
//! Shared fixtures: a scripted synthesis service with queued responses,
//! per-angle failure injection, call counters and an optional call gate for
//! concurrency tests.

#![allow(missing_docs)]

use morph_asset::{Angle, ImageHandle, Pose};
use morph_service::{ServiceError, SynthesisService};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Rendezvous point for holding a scripted call open mid-flight
///
/// The service signals `entered` when the call starts, then parks until the
/// test signals `release`. Both signals latch, so order of arrival does not
/// matter.
#[derive(Default)]
pub struct CallGate {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted implementation of [`SynthesisService`]
///
/// Responses are taken from per-operation queues; when a queue is empty a
/// deterministic default success is produced. Try-on failures are keyed by
/// angle so concurrent fan-out tests stay deterministic.
#[derive(Default)]
pub struct ScriptedService {
    analyses: Mutex<VecDeque<Result<Vec<String>, ServiceError>>>,
    clothing_results: Mutex<VecDeque<Result<ImageHandle, ServiceError>>>,
    try_on_failures: Mutex<HashMap<Angle, ServiceError>>,
    clothing_gate: Mutex<Option<Arc<CallGate>>>,
    analyze_calls: AtomicUsize,
    clothing_calls: AtomicUsize,
    try_on_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next analysis call
    pub fn push_analysis(&self, outcome: Result<Vec<String>, ServiceError>) {
        self.analyses.lock().push_back(outcome);
    }

    /// Queue the outcome of the next clothing generation call
    pub fn push_clothing(&self, outcome: Result<ImageHandle, ServiceError>) {
        self.clothing_results.lock().push_back(outcome);
    }

    /// Make try-on calls for one angle fail
    pub fn fail_try_on(&self, angle: Angle, error: ServiceError) {
        self.try_on_failures.lock().insert(angle, error);
    }

    /// Hold every clothing generation call open until the gate is released
    pub fn hold_clothing_calls(&self) -> Arc<CallGate> {
        let gate = Arc::new(CallGate::default());
        *self.clothing_gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn clothing_calls(&self) -> usize {
        self.clothing_calls.load(Ordering::SeqCst)
    }

    pub fn try_on_calls(&self) -> usize {
        self.try_on_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SynthesisService for ScriptedService {
    async fn analyze_clothing_image(
        &self,
        _image: &ImageHandle,
    ) -> Result<Vec<String>, ServiceError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        self.analyses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![String::from("scripted description")]))
    }

    async fn generate_clothing_from_text(
        &self,
        _description: &str,
    ) -> Result<ImageHandle, ServiceError> {
        let call = self.clothing_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.clothing_gate.lock().clone();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        self.clothing_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ImageHandle::new(format!("scripted://clothing/{call}"))))
    }

    async fn generate_try_on_result(
        &self,
        _model: &ImageHandle,
        _clothing: &ImageHandle,
        pose: Pose,
        angle: Angle,
    ) -> Result<ImageHandle, ServiceError> {
        self.try_on_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.try_on_failures.lock().get(&angle) {
            return Err(error.clone());
        }
        Ok(ImageHandle::new(format!("scripted://tryon/{pose}/{angle}")))
    }
}

/// Deterministic handle for test model photos
pub fn model_handle(n: usize) -> ImageHandle {
    ImageHandle::new(format!("test://model/{n}"))
}

/// Deterministic handle for test clothing images
pub fn clothing_handle(n: usize) -> ImageHandle {
    ImageHandle::new(format!("test://clothing/{n}"))
}

/// Deterministic handle for test reference images
pub fn reference_handle(n: usize) -> ImageHandle {
    ImageHandle::new(format!("test://reference/{n}"))
}
