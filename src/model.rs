use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use tracing::debug;

/// A single logged activity, saved as a row of the habit_tracker table.
///
/// Category and status are kept as the text the caller supplied: the store
/// does not check them against the known labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub task: String,
    pub status: String,
    pub notes: String,
}

/// Open the store at the given path, creating the file and the table if they
/// do not exist yet.
pub fn open_store(store_path: &Path) -> Result<Connection> {
    debug!(path = %store_path.display(), "opening store");
    let db = Connection::open(store_path)
        .with_context(|| format!("Failed to open store {}.", store_path.display()))?;
    init_store(&db)?;
    Ok(db)
}

/// Initialize the store. Safe to run on every start.
pub fn init_store(db: &Connection) -> Result<()> {
    db.execute(
        "CREATE TABLE if not exists habit_tracker (
                  id              INTEGER PRIMARY KEY AUTOINCREMENT,
                  date            TEXT,
                  category        TEXT,
                  task            TEXT,
                  status          TEXT,
                  notes           TEXT
                  )",
        [],
    )
    .context("Failed to create habit_tracker table.")?;
    Ok(())
}

/// Append an entry dated today (local time). Returns the id the store
/// assigned to it.
pub fn add_entry(
    db: &Connection,
    category: &str,
    task: &str,
    status: &str,
    notes: &str,
) -> Result<i64> {
    db.execute(
        "INSERT INTO habit_tracker (date, category, task, status, notes) VALUES(DATE('now', 'localtime'), ?1, ?2, ?3, ?4)",
        params![category, task, status, notes],
    )
    .context("Failed to insert entry to database.")?;
    let id = db.last_insert_rowid();
    debug!(id, category, status, "entry inserted");
    Ok(id)
}

/// All entries, newest date first. Entries sharing a date come most
/// recently inserted first.
pub fn entries_newest_first(db: &Connection) -> Result<Vec<Entry>> {
    query_entries(
        db,
        "SELECT id, date, category, task, status, notes FROM habit_tracker ORDER BY date DESC, id DESC",
    )
}

/// All entries in the order they were inserted.
pub fn entries(db: &Connection) -> Result<Vec<Entry>> {
    query_entries(
        db,
        "SELECT id, date, category, task, status, notes FROM habit_tracker ORDER BY id",
    )
}

/// The (date, category) pair of every entry, in insertion order.
pub fn date_categories(db: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = db
        .prepare("SELECT date, category FROM habit_tracker ORDER BY id")
        .context("Failed to fetch entries from database.")?;
    let mapped_rows = stmt
        .query_map([], |row| Ok((text_at(row, 0)?, text_at(row, 1)?)))
        .context("Failed to fetch entries from database.")?;

    let mut pairs = Vec::new();
    for pair in mapped_rows {
        pairs.push(pair.context("Failed to read entry from database.")?);
    }
    Ok(pairs)
}

fn query_entries(db: &Connection, sql: &str) -> Result<Vec<Entry>> {
    let mut stmt = db
        .prepare(sql)
        .context("Failed to fetch entries from database.")?;
    let mapped_rows = stmt
        .query_map([], |row| entry_from_row(row))
        .context("Failed to fetch entries from database.")?;

    let mut entries = Vec::new();
    for entry in mapped_rows {
        entries.push(entry.context("Failed to read entry from database.")?);
    }
    debug!(count = entries.len(), "entries fetched");
    Ok(entries)
}

/// Return an entry from a row in this order: [id, date, category, task,
/// status, notes]
pub fn entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        date: text_at(row, 1)?,
        category: text_at(row, 2)?,
        task: text_at(row, 3)?,
        status: text_at(row, 4)?,
        notes: text_at(row, 5)?,
    })
}

// Columns are nullable when the file was edited by hand.
fn text_at(row: &Row, index: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(index)?.unwrap_or_default())
}
