use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "job_search_tracker.db";
pub const CSV_FILE_NAME: &str = "job_search_tracker.csv";
pub const CHART_FILE_NAME: &str = "job_search_progress.svg";

/// Where the store lives and where exports land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
}

impl Config {
    /// Build the configuration from the command line values, falling back
    /// to the platform data directory for the store and to the current
    /// directory for the exported files.
    pub fn resolve(
        store_path: Option<PathBuf>,
        csv_path: Option<PathBuf>,
        chart_path: Option<PathBuf>,
    ) -> Result<Self> {
        let store_path = match store_path {
            Some(path) => path,
            None => default_store_file()?,
        };
        Ok(Config {
            store_path,
            csv_path: csv_path.unwrap_or_else(|| PathBuf::from(CSV_FILE_NAME)),
            chart_path: chart_path.unwrap_or_else(|| PathBuf::from(CHART_FILE_NAME)),
        })
    }
}

/// `{data_dir}/job_search_tracker.db`, creating the data directory if needed.
fn default_store_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "gozque", "jobtrack")
        .ok_or_else(|| anyhow!("Failed to find a data directory for the store."))?;
    store_file_in(dirs.data_dir())
}

fn store_file_in(root_dir: &Path) -> Result<PathBuf> {
    if !root_dir.exists() {
        fs::create_dir_all(root_dir)
            .with_context(|| format!("Failed to create directory {}.", root_dir.display()))?;
    }
    Ok(root_dir.join(STORE_FILE_NAME))
}
