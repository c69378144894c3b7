use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::model;

pub const TITLE: &str = "Job Search Progress Over Time";

const CHART_SIZE: (u32, u32) = (1000, 500);

/// Number of entries logged for one category, per date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub category: String,
    /// (date, count) points, date ascending.
    pub points: Vec<(NaiveDate, u32)>,
}

/// Entry counts grouped by category. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub series: Vec<Series>,
}

impl Summary {
    pub fn first_date(&self) -> NaiveDate {
        self.dates().min().unwrap_or(NaiveDate::MIN)
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates().max().unwrap_or(NaiveDate::MIN)
    }

    pub fn max_count(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|series| series.points.iter().map(|(_, count)| *count))
            .max()
            .unwrap_or(0)
    }

    /// Every (date, category, count) group, by date then category.
    pub fn counts(&self) -> Vec<(NaiveDate, &str, u32)> {
        let mut counts: Vec<(NaiveDate, &str, u32)> = self
            .series
            .iter()
            .flat_map(|series| {
                series
                    .points
                    .iter()
                    .map(move |(date, count)| (*date, series.category.as_str(), *count))
            })
            .collect();
        counts.sort();
        counts
    }

    fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.series
            .iter()
            .flat_map(|series| series.points.iter().map(|(date, _)| *date))
    }
}

/// Count entries per (date, category). Returns None when there is nothing
/// to count.
pub fn summarize(pairs: &[(String, String)]) -> Result<Option<Summary>> {
    if pairs.is_empty() {
        return Ok(None);
    }

    let mut groups: BTreeMap<(NaiveDate, &str), u32> = BTreeMap::new();
    for (date, category) in pairs {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid entry date '{}'.", date))?;
        *groups.entry((day, category.as_str())).or_insert(0) += 1;
    }

    // groups are ordered by date, so points are pushed in date order and
    // series appear in the order their category is first seen.
    let mut series: Vec<Series> = Vec::new();
    for ((day, category), count) in groups {
        match series.iter_mut().find(|s| s.category == category) {
            Some(existing) => existing.points.push((day, count)),
            None => series.push(Series {
                category: category.to_string(),
                points: vec![(day, count)],
            }),
        }
    }

    debug!(series = series.len(), "entries summarized");
    Ok(Some(Summary { series }))
}

/// Draw one line per category, with a marker at each point, into an svg
/// file.
pub fn render_chart(summary: &Summary, chart_path: &Path) -> Result<()> {
    let first = summary.first_date();
    let span = (summary.last_date() - first).num_days();
    let format_day = |offset: &i64| (first + Duration::days(*offset)).format("%Y-%m-%d").to_string();

    let root = SVGBackend::new(chart_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).context("Failed to draw chart background.")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(-1i64..span + 1, 0u32..summary.max_count() + 1)
        .context("Failed to build chart.")?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Entries Logged")
        .x_labels((span as usize + 3).min(10))
        .x_label_formatter(&format_day)
        .draw()
        .context("Failed to draw chart axes.")?;

    for (index, series) in summary.series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let points = series
            .points
            .iter()
            .map(|(date, count)| ((*date - first).num_days(), *count));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)).point_size(4))
            .with_context(|| format!("Failed to draw series for {}.", series.category))?
            .label(series.category.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .context("Failed to draw chart legend.")?;

    root.present()
        .with_context(|| format!("Failed to write chart {}.", chart_path.display()))?;
    info!(path = %chart_path.display(), "chart rendered");
    Ok(())
}

/// Summarize the store and render the chart. Returns None, without drawing
/// anything, when the store is empty.
pub fn plot(db: &Connection, chart_path: &Path) -> Result<Option<Summary>> {
    let pairs = model::date_categories(db)?;
    let summary = match summarize(&pairs)? {
        Some(summary) => summary,
        None => return Ok(None),
    };
    render_chart(&summary, chart_path)?;
    Ok(Some(summary))
}
