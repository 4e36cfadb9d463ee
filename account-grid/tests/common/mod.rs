//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use account_grid::prelude::*;
use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

/// Record source over an [`InMemorySource`] with scripted failures.
///
/// Queued failures are returned before the underlying source is consulted.
/// With a gate set, `submit_edits` signals `entered` and waits for `release`.
#[derive(Default)]
pub struct ScriptedSource {
    inner: InMemorySource,
    fetch_failures: Mutex<VecDeque<RemoteError>>,
    submit_failures: Mutex<VecDeque<RemoteError>>,
    submitted: Mutex<Vec<Vec<FieldEdit>>>,
    fetch_calls: AtomicUsize,
    gate: Option<Gate>,
}

#[derive(Clone, Default)]
pub struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl ScriptedSource {
    pub fn new(records: Vec<SourceRecord>) -> Self {
        Self {
            inner: InMemorySource::new(records),
            ..Self::default()
        }
    }

    pub fn gated(records: Vec<SourceRecord>, gate: Gate) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(records)
        }
    }

    pub fn fail_next_fetch(&self, message: &str) {
        self.fetch_failures
            .lock()
            .unwrap()
            .push_back(RemoteError::new(message));
    }

    pub fn fail_next_submit(&self, message: &str) {
        self.submit_failures
            .lock()
            .unwrap()
            .push_back(RemoteError::new(message));
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Vec<FieldEdit>> {
        self.submitted.lock().unwrap().clone()
    }

    pub async fn records(&self) -> Vec<SourceRecord> {
        self.inner.records().await
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn fetch_rows(&self) -> Result<Vec<SourceRecord>, RemoteError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let failure = self.fetch_failures.lock().unwrap().pop_front();
        match failure {
            Some(err) => Err(err),
            None => self.inner.fetch_rows().await,
        }
    }

    async fn submit_edits(&self, edits: Vec<FieldEdit>) -> Result<Ack, RemoteError> {
        self.submitted.lock().unwrap().push(edits.clone());
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        let failure = self.submit_failures.lock().unwrap().pop_front();
        match failure {
            Some(err) => Err(err),
            None => self.inner.submit_edits(edits).await,
        }
    }
}

/// Notifier that keeps every notification it receives.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// A table over `source` with a recording notifier.
pub fn table(source: Arc<ScriptedSource>, config: TableConfig) -> (AccountTable, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let context = TableContext::shared(source).notifier(notifier.clone());
    (AccountTable::with_config(context, config), notifier)
}

pub fn account(name: &str, owner: &str) -> SourceRecord {
    SourceRecord::new(Uuid::new_v4()).name(name).owner(owner)
}
