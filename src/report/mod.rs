//! Exploratory report over an anime table.
//!
//! [`EdaReport::build`] computes every view once; the console and HTML
//! renderers both read the same [`sections::Section`] tables so shared
//! figures are formatted identically.

pub mod console;
pub mod dataset;
pub mod format;
pub mod html;
pub mod ratings;
pub mod sections;
pub mod views;

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::Result;
pub use dataset::{AnimeDataset, ColumnInfo, MissingCount};
pub use ratings::RatingSummary;
use views::{CorrelationView, DescriptiveStats, GroupStats, HistogramBucket, RankedAnime};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdaReport {
    pub generated_at: String,
    pub source: String,
    pub total_rows: usize,
    pub popularity_floor: i64,
    pub columns: Vec<ColumnInfo>,
    pub missing: Vec<MissingCount>,
    pub stats: DescriptiveStats,
    pub by_type: Vec<GroupStats>,
    pub top_rated: Vec<RankedAnime>,
    pub top_popular: Vec<RankedAnime>,
    pub longest: Vec<RankedAnime>,
    pub by_genre: Vec<GroupStats>,
    pub correlation: CorrelationView,
    pub rating_histogram: Vec<HistogramBucket>,
    pub ratings: Option<RatingSummary>,
}

impl EdaReport {
    pub fn build(
        dataset: &AnimeDataset,
        ratings: Option<RatingSummary>,
        settings: &ReportConfig,
        generated_at: impl Into<String>,
    ) -> Result<Self> {
        let frame = &dataset.frame;

        Ok(Self {
            generated_at: generated_at.into(),
            source: dataset.source.display().to_string(),
            total_rows: frame.height(),
            popularity_floor: settings.popularity_floor,
            columns: dataset.columns.clone(),
            missing: dataset.missing.clone(),
            stats: views::descriptive_stats(frame)?,
            by_type: views::by_type(frame)?,
            top_rated: views::top_rated(frame, settings.popularity_floor, settings.top_n)?,
            top_popular: views::top_popular(frame, settings.top_n)?,
            longest: views::longest(frame, settings.top_n)?,
            by_genre: views::by_genre(frame, settings.genre_limit)?,
            correlation: views::correlation(
                frame,
                settings.popularity_floor,
                settings.pickup_count,
                settings.scatter_limit,
            )?,
            rating_histogram: views::rating_histogram(frame)?,
            ratings,
        })
    }
}
