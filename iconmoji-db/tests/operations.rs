use std::cell::RefCell;

use iconmoji_core::MatchedRecord;
use iconmoji_db::*;

fn record(file_name: &str, emoji: &str, description: &str) -> MatchedRecord {
    MatchedRecord {
        file_name: file_name.to_string(),
        emoji: emoji.to_string(),
        emoji_version: "E1.0".to_string(),
        description: description.to_string(),
    }
}

fn sample_records() -> Vec<MatchedRecord> {
    vec![
        record("1f600", "\u{1F600}", "grinning face"),
        record("1f602", "\u{1F602}", "face with tears of joy"),
        record("1f44b-1f3fb", "\u{1F44B}\u{1F3FB}", "waving hand: light skin tone"),
    ]
}

#[derive(Default)]
struct RecordingProgress {
    ticks: RefCell<Vec<(usize, usize, String)>>,
    completed: RefCell<Option<usize>>,
}

impl LoadProgress for RecordingProgress {
    fn on_record(&self, current: usize, total: usize, file_name: &str) {
        self.ticks
            .borrow_mut()
            .push((current, total, file_name.to_string()));
    }

    fn on_complete(&self, total: usize) {
        *self.completed.borrow_mut() = Some(total);
    }
}

#[test]
fn load_inserts_every_record_in_order() {
    let conn = open_memory().unwrap();
    let loaded = load_all(&conn, &sample_records(), None).unwrap();
    assert_eq!(loaded, 3);
    assert_eq!(count_rows(&conn).unwrap(), 3);

    let mut stmt = conn
        .prepare("SELECT file_name FROM emojis ORDER BY rowid")
        .unwrap();
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["1f600", "1f602", "1f44b-1f3fb"]);
}

#[test]
fn load_reports_one_tick_per_record() {
    let conn = open_memory().unwrap();
    let progress = RecordingProgress::default();
    load_all(&conn, &sample_records(), Some(&progress)).unwrap();

    let ticks = progress.ticks.borrow();
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[0], (1, 3, "1f600".to_string()));
    assert_eq!(ticks[2], (3, 3, "1f44b-1f3fb".to_string()));
    assert_eq!(*progress.completed.borrow(), Some(3));
}

#[test]
fn load_with_log_progress() {
    let conn = open_memory().unwrap();
    let loaded = load_all(&conn, &sample_records(), Some(&LogProgress)).unwrap();
    assert_eq!(loaded, 3);
    assert_eq!(count_rows(&conn).unwrap(), 3);
}

#[test]
fn glyphs_and_quotes_round_trip() {
    let conn = open_memory().unwrap();
    let tricky = record(
        "1f469-200d-1f4bb",
        "\u{1F469}\u{200D}\u{1F4BB}",
        "woman's \"technologist\"'); DROP TABLE emojis; --",
    );
    load_all(&conn, &[tricky.clone()], None).unwrap();

    let (emoji, description): (String, String) = conn
        .query_row(
            "SELECT emoji, description FROM emojis WHERE file_name = ?1",
            [&tricky.file_name],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(emoji, tricky.emoji);
    assert_eq!(description, tricky.description);
}

#[test]
fn description_words_are_searchable() {
    let conn = open_memory().unwrap();
    load_all(&conn, &sample_records(), None).unwrap();

    let found: String = conn
        .query_row(
            "SELECT file_name FROM emojis WHERE emojis MATCH ?1",
            ["tears"],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(found, "1f602");

    let waving: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM emojis WHERE description MATCH ?1",
            ["skin"],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(waving, 1);
}

#[test]
fn failed_load_leaves_no_rows() {
    let conn = open_memory().unwrap();
    // A plain table enforces the key, so the second insert fails
    conn.execute_batch("DROP TABLE emojis;").unwrap();
    conn.execute_batch(
        "CREATE TABLE emojis (file_name TEXT PRIMARY KEY, emoji TEXT, emoji_version TEXT, description TEXT);",
    )
    .unwrap();

    let records = vec![
        record("1f600", "\u{1F600}", "grinning face"),
        record("1f600", "\u{1F600}", "grinning face again"),
    ];
    let err = load_all(&conn, &records, None).unwrap_err();
    match err {
        LoadError::Insert { file_name, .. } => assert_eq!(file_name, "1f600"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(count_rows(&conn).unwrap(), 0);
}

#[test]
fn empty_load_is_fine() {
    let conn = open_memory().unwrap();
    assert_eq!(load_all(&conn, &[], Some(&SilentProgress)).unwrap(), 0);
    assert_eq!(count_rows(&conn).unwrap(), 0);
}
