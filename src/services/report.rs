//! Report generation: load, compute once, render in the requested modes.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::config::{Config, ReportConfig};
use crate::constants::files;
use crate::error::{EdaError, Result};
use crate::report::console::render_console;
use crate::report::html::render_html;
use crate::report::{AnimeDataset, EdaReport, RatingSummary};
use crate::table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    #[default]
    Console,
    Html,
    Both,
}

impl ReportMode {
    #[must_use]
    pub const fn renders_console(self) -> bool {
        matches!(self, Self::Console | Self::Both)
    }

    #[must_use]
    pub const fn renders_html(self) -> bool {
        matches!(self, Self::Html | Self::Both)
    }
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub mode: ReportMode,
    pub data: PathBuf,
    pub ratings: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl ReportRequest {
    /// Request with every location taken from the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: ReportMode::default(),
            data: config.paths.processed_anime(),
            ratings: None,
            output_dir: PathBuf::from(&config.paths.reports_dir),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlArtifacts {
    pub timestamped: PathBuf,
    pub latest: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub report: EdaReport,
    pub html: Option<HtmlArtifacts>,
}

/// Writes the page under a timestamped name and under the fixed alias.
pub fn write_html(report: &EdaReport, dir: &Path, stamp: &str) -> Result<HtmlArtifacts> {
    let page = render_html(report);
    let artifacts = HtmlArtifacts {
        timestamped: dir.join(format!("{}{stamp}.html", files::REPORT_PREFIX)),
        latest: dir.join(files::REPORT_LATEST),
    };

    table::commit(vec![
        table::stage_text(&artifacts.timestamped, &page)?,
        table::stage_text(&artifacts.latest, &page)?,
    ])?;
    info!("Saved {}", artifacts.timestamped.display());
    info!("Updated {}", artifacts.latest.display());
    Ok(artifacts)
}

/// Builds the report as of `now` and renders it; console output goes to `out`.
#[instrument(skip_all, fields(data = %request.data.display(), mode = ?request.mode))]
pub fn generate<W: Write>(
    request: &ReportRequest,
    settings: &ReportConfig,
    now: DateTime<Local>,
    out: &mut W,
) -> Result<ReportOutcome> {
    let dataset = AnimeDataset::load(&request.data)?;
    let ratings = request
        .ratings
        .as_deref()
        .map(RatingSummary::load)
        .transpose()?;

    let report = EdaReport::build(
        &dataset,
        ratings,
        settings,
        now.format("%Y-%m-%d %H:%M:%S").to_string(),
    )?;
    info!(rows = report.total_rows, "Report computed");

    if request.mode.renders_console() {
        render_console(&report, out).map_err(|e| EdaError::io(Path::new("<stdout>"), e))?;
        out.flush().map_err(|e| EdaError::io(Path::new("<stdout>"), e))?;
    }

    let html = if request.mode.renders_html() {
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        Some(write_html(&report, &request.output_dir, &stamp)?)
    } else {
        None
    };

    Ok(ReportOutcome { report, html })
}

pub fn run<W: Write>(
    request: &ReportRequest,
    settings: &ReportConfig,
    out: &mut W,
) -> Result<ReportOutcome> {
    generate(request, settings, Local::now(), out)
}
