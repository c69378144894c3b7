use anyhow::{Context, Result};
use prettytable::Table;
use rusqlite::Connection;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::export;
use crate::labels::{Category, Status};
use crate::model::{self, Entry};
use crate::progress::{self, Summary};

const NOTES_WIDTH: usize = 40;

pub fn init(store_path: &Path) -> Result<()> {
    // the store is initialized when opened.
    println!("Store ready at {}.", store_path.display());
    Ok(())
}

pub fn add(db: &Connection, category: Category, task: &str, status: Status, notes: &str) -> Result<()> {
    let id = model::add_entry(db, category.label(), task, status.label(), notes)?;
    println!("Entry added successfully! (#{})", id);
    Ok(())
}

pub fn list(db: &Connection, as_table: bool) -> Result<()> {
    let entries = model::entries_newest_first(db)?;
    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    if as_table {
        entries_table(&entries).printstd();
    } else {
        for entry in &entries {
            println!("{}", entry_line(entry));
        }
    }
    Ok(())
}

pub fn export(db: &Connection, csv_path: &Path, to_stdout: bool) -> Result<()> {
    let entries = export::export(db, csv_path)?;
    if to_stdout {
        debug!(mime = export::MIME_TYPE, "writing csv to stdout");
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(&export::csv_bytes(&entries))
            .context("Failed to write csv to the standard output.")?;
        handle.flush().context("Failed to write csv to the standard output.")?;
    } else {
        println!(
            "Data exported successfully to {} ({} entries).",
            csv_path.display(),
            entries.len()
        );
    }
    Ok(())
}

pub fn plot(db: &Connection, chart_path: &Path) -> Result<()> {
    match progress::plot(db, chart_path)? {
        None => println!("No data to display."),
        Some(summary) => {
            println!("{}", progress::TITLE);
            summary_table(&summary).printstd();
            println!("Chart written to {}.", chart_path.display());
        }
    }
    Ok(())
}

/// `[date] category: task (Status: status) - notes`
pub fn entry_line(entry: &Entry) -> String {
    format!(
        "[{}] {}: {} (Status: {}) - {}",
        entry.date, entry.category, entry.task, entry.status, entry.notes
    )
}

fn entries_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["id", "date", "category", "task", "status", "notes"]);
    for entry in entries {
        table.add_row(row![
            entry.id,
            entry.date,
            entry.category,
            entry.task,
            entry.status,
            textwrap::fill(&entry.notes, NOTES_WIDTH)
        ]);
    }
    table
}

fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.add_row(row!["date", "category", "entries"]);
    for (date, category, count) in summary.counts() {
        table.add_row(row![date.format("%Y-%m-%d"), category, count]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::{insert_dated, memory_store};

    fn coffee_chat() -> Entry {
        Entry {
            id: 1,
            date: "2024-01-01".to_string(),
            category: "Networking".to_string(),
            task: "Coffee chat".to_string(),
            status: "Completed".to_string(),
            notes: "went well".to_string(),
        }
    }

    #[test]
    fn formats_entry_line() {
        assert_eq!(
            entry_line(&coffee_chat()),
            "[2024-01-01] Networking: Coffee chat (Status: Completed) - went well"
        );
    }

    #[test]
    fn table_has_a_row_per_entry() {
        let table = entries_table(&[coffee_chat()]);
        assert_eq!(table.len(), 2);
        assert!(table.to_string().contains("Coffee chat"));
    }

    #[test]
    fn summary_table_lists_groups() {
        let db = memory_store();
        insert_dated(&db, "2024-01-01", "Networking", "", "Pending", "");
        insert_dated(&db, "2024-01-01", "Networking", "", "Pending", "");
        let pairs = model::date_categories(&db).unwrap();
        let summary = progress::summarize(&pairs).unwrap().unwrap();

        let table = summary_table(&summary);
        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("2024-01-01"));
        assert!(rendered.contains("Networking"));
    }

    #[test]
    fn add_stores_labels() {
        let db = memory_store();
        add(&db, Category::InterviewPrep, "Mock interview", Status::InProgress, "").unwrap();

        let entry = &model::entries(&db).unwrap()[0];
        assert_eq!(entry.category, "Interview Prep");
        assert_eq!(entry.status, "In Progress");
    }
}
