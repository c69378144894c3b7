use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::model::{self, Entry};

/// UTF-8 byte order mark. Spreadsheet tools need it to read accented
/// characters correctly.
pub const BOM: &str = "\u{feff}";

pub const HEADER: [&str; 6] = ["id", "date", "category", "task", "status", "notes"];

pub const MIME_TYPE: &str = "text/csv";

/// Write every entry, in insertion order, to the csv file at the given path,
/// overwriting it. The exported entries are returned.
pub fn export(db: &Connection, csv_path: &Path) -> Result<Vec<Entry>> {
    let entries = model::entries(db)?;
    fs::write(csv_path, csv_bytes(&entries))
        .with_context(|| format!("Failed to write csv file {}.", csv_path.display()))?;
    info!(path = %csv_path.display(), count = entries.len(), "entries exported");
    Ok(entries)
}

/// The csv document for the given entries, BOM included.
pub fn csv_bytes(entries: &[Entry]) -> Vec<u8> {
    let mut csv = String::from(BOM);
    csv.push_str(&to_csv(entries));
    csv.into_bytes()
}

/// The csv document for the given entries, one line per entry after the
/// header. Every line ends with a newline.
pub fn to_csv(entries: &[Entry]) -> String {
    let mut csv = HEADER.join(",");
    csv.push('\n');
    for entry in entries {
        let id = entry.id.to_string();
        let line = [
            id.as_str(),
            entry.date.as_str(),
            entry.category.as_str(),
            entry.task.as_str(),
            entry.status.as_str(),
            entry.notes.as_str(),
        ]
        .iter()
        .map(|field| csv_escape(field))
        .collect::<Vec<_>>()
        .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

/// Quote a field only when it holds a separator, a quote or a line break.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
