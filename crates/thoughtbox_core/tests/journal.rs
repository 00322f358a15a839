use rusqlite::Connection;
use thoughtbox_core::db::{open_db, open_db_in_memory};
use thoughtbox_core::{
    counts_by_mood, max_count, JournalError, JournalService, KvJournalRepository, Mood,
    SqliteKvRepository, ThoughtValidationError,
};
use uuid::Uuid;

fn service(conn: &Connection) -> JournalService<KvJournalRepository<SqliteKvRepository<'_>>> {
    let kv = SqliteKvRepository::try_new(conn).unwrap();
    JournalService::load(KvJournalRepository::new(kv)).unwrap()
}

#[test]
fn fresh_journal_is_empty_with_calm_mood() {
    let conn = open_db_in_memory().unwrap();
    let journal = service(&conn);

    assert!(journal.thoughts().is_empty());
    assert_eq!(journal.mood(), Mood::Calm);
}

#[test]
fn add_prepends_and_grows_store_by_one() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    journal.add("first", Mood::Happy).unwrap();
    let second = journal.add("second", Mood::Creative).unwrap();

    assert_eq!(journal.thoughts().len(), 2);
    assert_eq!(journal.thoughts()[0].id, second.id);
    assert_eq!(journal.thoughts()[0].text, "second");
    assert_eq!(journal.thoughts()[1].text, "first");
}

#[test]
fn add_rejects_whitespace_text_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    journal.add("kept", Mood::Calm).unwrap();

    let err = journal.add("   \t ", Mood::Happy).unwrap_err();
    assert!(matches!(
        err,
        JournalError::Validation(ThoughtValidationError::EmptyText)
    ));
    assert_eq!(journal.thoughts().len(), 1);
    assert_eq!(journal.thoughts()[0].text, "kept");
}

#[test]
fn capture_uses_the_session_mood() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    let defaulted = journal.capture("with default mood").unwrap();
    assert_eq!(defaulted.mood, Mood::Calm);

    journal.set_mood(Mood::Energetic).unwrap();
    let tagged = journal.capture("with session mood").unwrap();
    assert_eq!(tagged.mood, Mood::Energetic);
}

#[test]
fn remove_deletes_exactly_the_matching_thought() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    let keep = journal.add("keep", Mood::Calm).unwrap();
    let target = journal.add("target", Mood::Happy).unwrap();

    assert!(journal.remove(target.id).unwrap());
    assert_eq!(journal.thoughts().len(), 1);
    assert!(journal.thoughts().iter().all(|t| t.id != target.id));
    assert_eq!(journal.thoughts()[0].id, keep.id);
}

#[test]
fn remove_is_idempotent_and_absent_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    let thought = journal.add("once", Mood::Productive).unwrap();

    assert!(journal.remove(thought.id).unwrap());
    assert!(!journal.remove(thought.id).unwrap());
    assert!(!journal.remove(Uuid::new_v4()).unwrap());
    assert!(journal.thoughts().is_empty());
}

#[test]
fn reload_round_trips_order_ids_text_mood_and_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    journal.add("oldest", Mood::Calm).unwrap();
    journal.add("middle", Mood::Happy).unwrap();
    journal.add("newest", Mood::Happy).unwrap();
    journal.set_mood(Mood::Creative).unwrap();
    let before: Vec<_> = journal.thoughts().to_vec();
    drop(journal);

    let reloaded = service(&conn);
    assert_eq!(reloaded.thoughts(), before.as_slice());
    assert_eq!(reloaded.mood(), Mood::Creative);
}

#[test]
fn on_disk_journal_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");

    let conn = open_db(&path).unwrap();
    let mut journal = service(&conn);
    let thought = journal.add("persisted across processes", Mood::Creative).unwrap();
    drop(journal);
    drop(conn);

    let conn = open_db(&path).unwrap();
    let reloaded = service(&conn);
    assert_eq!(reloaded.thoughts().len(), 1);
    assert_eq!(reloaded.thoughts()[0].id, thought.id);
    assert_eq!(reloaded.thoughts()[0].text, "persisted across processes");
    assert_eq!(reloaded.thoughts()[0].created_at, thought.created_at);
}

#[test]
fn persisted_layout_matches_external_contract() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);
    journal.add("layout check", Mood::Happy).unwrap();
    journal.set_mood(Mood::Productive).unwrap();

    let raw_thoughts: String = conn
        .query_row("SELECT value FROM kv WHERE key = 'thoughts';", [], |row| {
            row.get(0)
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw_thoughts).unwrap();
    let record = &parsed.as_array().unwrap()[0];
    assert_eq!(record["text"], "layout check");
    assert_eq!(record["mood"], "happy");
    assert_eq!(record["color"], "#FFD700");
    assert!(record["id"].is_string());
    assert!(record["timestamp"].as_str().unwrap().contains('T'));

    let raw_mood: String = conn
        .query_row(
            "SELECT value FROM kv WHERE key = 'currentMood';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw_mood, "productive");
}

#[test]
fn scenario_add_reject_remove_ends_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    let first = journal.add("Feeling great", Mood::Happy).unwrap();
    assert_eq!(journal.thoughts().len(), 1);
    assert_eq!(journal.thoughts()[0].mood, Mood::Happy);

    assert!(journal.add("", Mood::Calm).is_err());
    assert_eq!(journal.thoughts().len(), 1);

    assert!(journal.remove(first.id).unwrap());
    assert!(journal.thoughts().is_empty());
}

#[test]
fn aggregation_over_journal_thoughts() {
    let conn = open_db_in_memory().unwrap();
    let mut journal = service(&conn);

    journal.add("a", Mood::Happy).unwrap();
    journal.add("b", Mood::Happy).unwrap();
    journal.add("c", Mood::Calm).unwrap();

    let counts = counts_by_mood(journal.thoughts());
    assert_eq!(counts[&Mood::Happy], 2);
    assert_eq!(counts[&Mood::Calm], 1);
    assert_eq!(counts.len(), 2);
    assert_eq!(max_count(&counts), Some(2));
}
