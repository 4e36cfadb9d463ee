//! End-to-end tests for the account table.

mod common;

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use account_grid::prelude::*;
use common::{Gate, ScriptedSource, account, table};
use uuid::Uuid;

fn owners(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.owner_name.clone().unwrap_or_default())
        .collect()
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn test_load_keeps_source_order() {
    let source = Arc::new(ScriptedSource::new(vec![
        account("Fabrikam", "Ada"),
        account("Contoso", "Grace"),
    ]));
    let (table, _) = table(source, TableConfig::default());

    let response = table.mount().await.unwrap();

    assert_eq!(response.data().len(), 2);
    let names: Vec<_> = table.rows().into_iter().map(|r| r.name.unwrap()).collect();
    assert_eq!(names, ["Fabrikam", "Contoso"]);
    assert!(table.error().is_none());
}

#[tokio::test]
async fn test_load_failure_clears_rows() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, notifier) = table(source.clone(), TableConfig::no_cache());
    table.mount().await.unwrap();

    source.fail_next_fetch("Session expired");
    let err = table.load().await.unwrap_err();

    assert!(matches!(err, Error::Fetch(_)));
    assert!(table.rows().is_empty());
    assert_eq!(table.error().unwrap().message, "Session expired");
    assert!(notifier.seen().is_empty());

    table.load().await.unwrap();
    assert_eq!(table.rows().len(), 1);
    assert!(table.error().is_none());
}

#[tokio::test]
async fn test_cache_hit_and_invalidate() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, _) = table(source.clone(), TableConfig::default());

    let first = table.load().await.unwrap();
    assert!(first.cache.is_miss());

    let second = table.load().await.unwrap();
    assert!(second.is_cached());
    assert_eq!(second.cached_at(), first.cached_at());
    assert_eq!(source.fetch_calls(), 1);

    table.invalidate().await;
    let third = table.load().await.unwrap();
    assert!(third.cache.is_miss());
    assert_eq!(source.fetch_calls(), 2);

    table.refresh().await.unwrap();
    assert_eq!(source.fetch_calls(), 3);
}

#[tokio::test]
async fn test_very_long_ttl_keeps_caching() {
    for ttl in [Duration::from_secs(10_000_000_000_000), Duration::MAX] {
        let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
        let (table, _) = table(source.clone(), TableConfig::default().with_row_ttl(ttl));

        table.load().await.unwrap();
        let second = table.load().await.unwrap();

        assert!(second.is_cached(), "{ttl:?}");
        assert_eq!(source.fetch_calls(), 1);
    }
}

#[tokio::test]
async fn test_no_cache_always_fetches() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, _) = table(source.clone(), TableConfig::no_cache());

    let response = table.load().await.unwrap();
    table.load().await.unwrap();

    assert_eq!(response.cache, CacheStatus::None);
    assert_eq!(source.fetch_calls(), 2);
}

// =============================================================================
// Sorting
// =============================================================================

#[tokio::test]
async fn test_sort_by_owner_descending() {
    let source = Arc::new(ScriptedSource::new(vec![
        account("One", "B"),
        account("Two", "A"),
        SourceRecord::new(Uuid::new_v4()).name("Three"),
    ]));
    let (table, _) = table(source, TableConfig::default());
    table.mount().await.unwrap();

    let sorted = table.sort(Field::OwnerName, SortDirection::Descending);

    assert_eq!(owners(&sorted), ["B", "A", ""]);
    assert_eq!(table.rows(), sorted);
    assert_eq!(
        table.sort_state(),
        Some(SortState {
            field: Field::OwnerName,
            direction: SortDirection::Descending,
        })
    );
}

#[tokio::test]
async fn test_sort_by_name_parses_host_names() {
    let source = Arc::new(ScriptedSource::new(vec![
        account("One", "B"),
        account("Two", "C"),
        account("Three", "A"),
    ]));
    let (table, _) = table(source, TableConfig::default());
    table.mount().await.unwrap();

    let sorted = table.sort_by_name("OwnerName", "asc").unwrap();
    assert_eq!(owners(&sorted), ["A", "B", "C"]);

    let err = table.sort_by_name("OwnerName", "sideways").unwrap_err();
    assert!(matches!(err, Error::Field(FieldError::InvalidDirection { .. })));
    let err = table.sort_by_name("Fax", "asc").unwrap_err();
    assert!(matches!(err, Error::Field(FieldError::Unknown { .. })));

    table.reset_sort();
    assert_eq!(owners(&table.rows()), ["B", "C", "A"]);
    assert!(table.sort_state().is_none());
}

#[tokio::test]
async fn test_load_resets_sort() {
    let source = Arc::new(ScriptedSource::new(vec![account("One", "B"), account("Two", "A")]));
    let (table, _) = table(source, TableConfig::default());
    table.mount().await.unwrap();

    table.sort(Field::OwnerName, SortDirection::Ascending);
    table.load().await.unwrap();

    assert!(table.sort_state().is_none());
    assert_eq!(owners(&table.rows()), ["B", "A"]);
}

// =============================================================================
// Editing and submitting
// =============================================================================

#[tokio::test]
async fn test_record_edit_round_trip() {
    let id = Uuid::new_v4();
    let source = Arc::new(ScriptedSource::new(vec![SourceRecord::new(id)]));
    let (table, _) = table(source.clone(), TableConfig::default());

    table.record_edit(id, Field::Phone, "555-1234");
    table.record_edit(id, Field::Website, "https://contoso.com");
    table.record_edit(id, Field::Phone, "555-9999");

    let draft = table.draft_for(id).unwrap();
    assert_eq!(draft.get(Field::Phone), Some(&Value::from("555-9999")));
    assert_eq!(draft.get(Field::Website), Some(&Value::from("https://contoso.com")));
    assert!(source.submitted().is_empty());
}

#[tokio::test]
async fn test_submit_success_clears_drafts() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, notifier) = table(source.clone(), TableConfig::default());
    table.mount().await.unwrap();
    let id = table.rows()[0].id;

    table.record_edit(id, Field::Phone, "555-1234");
    let ack = table.submit().await.unwrap();

    assert_eq!(ack.updated, 1);
    assert!(table.drafts().is_empty());
    assert_eq!(table.rows()[0].phone.as_deref(), Some("555-1234"));
    assert_eq!(table.phase(), SubmitPhase::Idle);
    assert_eq!(source.fetch_calls(), 2);

    let note = notifier.last().unwrap();
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(note.title, "Success");
    assert_eq!(note.message, "Account(s) updated");
}

#[tokio::test]
async fn test_submit_failure_preserves_drafts() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, notifier) = table(source.clone(), TableConfig::default());
    table.mount().await.unwrap();
    let id = table.rows()[0].id;

    table.record_edit(id, Field::Phone, "555-1234");
    let before = table.drafts();
    source.fail_next_submit("Validation error");

    let err = table.submit().await.unwrap_err();

    assert!(matches!(err, Error::Submit(_)));
    assert_eq!(table.drafts(), before);
    assert_eq!(
        table.draft_for(id).unwrap().get(Field::Phone),
        Some(&Value::from("555-1234"))
    );
    assert_eq!(table.phase(), SubmitPhase::Idle);

    let note = notifier.last().unwrap();
    assert_eq!(note.severity, Severity::Error);
    assert_eq!(note.title, "Error updating or refreshing records");
    assert_eq!(note.message, "Validation error");
}

#[tokio::test]
async fn test_reload_failure_after_submit() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, notifier) = table(source.clone(), TableConfig::default());
    table.mount().await.unwrap();
    let id = table.rows()[0].id;

    table.record_edit(id, Field::Phone, "555-1234");
    source.fail_next_fetch("Service unavailable");

    let err = table.submit().await.unwrap_err();

    assert!(err.is_committed());
    assert_eq!(err.remote().unwrap().message, "Service unavailable");
    assert_eq!(table.drafts().len(), 1);
    assert!(table.rows().is_empty());
    assert_eq!(table.phase(), SubmitPhase::Idle);
    assert_eq!(
        source.records().await[0].phone.as_deref(),
        Some("555-1234")
    );

    let seen = notifier.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].severity, Severity::Success);
    assert_eq!(seen[1].severity, Severity::Error);
    assert_eq!(seen[1].message, "Service unavailable");
}

#[tokio::test]
async fn test_submit_sends_one_batch() {
    let first = account("Contoso", "Ada");
    let second = account("Fabrikam", "Grace");
    let (a, b) = (first.id, second.id);
    let source = Arc::new(ScriptedSource::new(vec![first, second]));
    let (table, _) = table(source.clone(), TableConfig::default());

    table.record_edit(a, Field::Phone, "555-1234");
    table.record_edit(b, Field::AnnualRevenue, 1000);
    table.record_edit(a, Field::Website, "https://contoso.com");
    table.submit().await.unwrap();

    let batches = source.submitted();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 3);
}

#[tokio::test]
async fn test_second_submit_rejected_while_in_flight() {
    let gate = Gate::default();
    let record = account("Contoso", "Ada");
    let id = record.id;
    let source = Arc::new(ScriptedSource::gated(vec![record], gate.clone()));
    let (table, _) = table(source.clone(), TableConfig::default());
    table.mount().await.unwrap();

    table.record_edit(id, Field::Phone, "555-1234");
    let running = tokio::spawn({
        let table = table.clone();
        async move { table.submit().await }
    });

    gate.entered.notified().await;
    assert!(table.is_submitting());
    assert_eq!(table.submit().await.unwrap_err(), Error::SubmitInFlight);

    table.record_edit(id, Field::Website, "https://contoso.com");
    gate.release.notify_one();
    running.await.unwrap().unwrap();

    assert!(!table.is_submitting());
    assert_eq!(source.submitted().len(), 1);
    let draft = table.draft_for(id).unwrap();
    assert_eq!(draft.get(Field::Phone), None);
    assert_eq!(draft.get(Field::Website), Some(&Value::from("https://contoso.com")));
}

#[tokio::test]
async fn test_cancel_edits() {
    let id = Uuid::new_v4();
    let source = Arc::new(ScriptedSource::new(vec![SourceRecord::new(id)]));
    let (table, _) = table(source.clone(), TableConfig::default());

    table.record_edit(id, Field::Phone, "555-1234");
    table.cancel_edits();

    assert!(table.drafts().is_empty());
    assert_eq!(table.submit().await.unwrap(), Ack::default());
    assert!(source.submitted().is_empty());
}

#[tokio::test]
async fn test_rows_with_drafts_overlays_edits() {
    let source = Arc::new(ScriptedSource::new(vec![account("Contoso", "Ada")]));
    let (table, _) = table(source, TableConfig::default());
    table.mount().await.unwrap();
    let id = table.rows()[0].id;

    table.record_edit(id, Field::OwnerName, "Grace");

    assert_eq!(table.rows()[0].owner_name.as_deref(), Some("Ada"));
    assert_eq!(table.rows_with_drafts()[0].owner_name.as_deref(), Some("Grace"));
}

// =============================================================================
// State listener
// =============================================================================

#[tokio::test]
async fn test_state_listener_sees_every_change() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let sink = phases.clone();
    let source = ScriptedSource::new(vec![account("Contoso", "Ada")]);
    let context = TableContext::new(source).on_state_change(move |state: &TableState| {
        sink.lock().unwrap().push((state.phase, state.rows.len(), state.drafts.len()));
    });
    let table = AccountTable::new(context);

    table.mount().await.unwrap();
    let id = table.rows()[0].id;
    table.record_edit(id, Field::Phone, "555-1234");
    table.submit().await.unwrap();

    let phases = phases.lock().unwrap();
    assert_eq!(phases.first(), Some(&(SubmitPhase::Idle, 1, 0)));
    assert!(phases.contains(&(SubmitPhase::Submitting, 1, 1)));
    assert!(phases.contains(&(SubmitPhase::Reloading, 1, 1)));
    assert_eq!(phases.last(), Some(&(SubmitPhase::Idle, 1, 0)));
}
