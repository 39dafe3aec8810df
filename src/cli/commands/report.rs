//! Report command handler

use anyhow::Context;
use std::path::PathBuf;

use crate::config::Config;
use crate::services::report;
use crate::services::{ReportMode, ReportRequest};

pub fn cmd_report(
    config: &Config,
    mode: ReportMode,
    output_dir: Option<PathBuf>,
    data: Option<PathBuf>,
    ratings: Option<PathBuf>,
) -> anyhow::Result<()> {
    let defaults = ReportRequest::from_config(config);
    let request = ReportRequest {
        mode,
        data: data.unwrap_or(defaults.data),
        ratings,
        output_dir: output_dir.unwrap_or(defaults.output_dir),
    };

    let outcome = {
        let mut out = std::io::stdout().lock();
        report::run(&request, &config.report, &mut out)
            .with_context(|| format!("Report on {} failed", request.data.display()))?
    };

    if let Some(html) = outcome.html {
        println!("✓ HTML report: {}", html.timestamped.display());
        println!("  Latest:      {}", html.latest.display());
    }

    Ok(())
}
