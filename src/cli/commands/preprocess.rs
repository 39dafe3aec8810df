//! Preprocess command handler

use anyhow::Context;

use crate::config::Config;
use crate::services::PreprocessPaths;
use crate::services::preprocess;

pub fn cmd_preprocess(config: &Config) -> anyhow::Result<()> {
    let paths = PreprocessPaths::from_config(config);
    let summary = preprocess::run(&paths, &config.preprocess)
        .with_context(|| format!("Preprocessing into {} failed", paths.output_dir.display()))?;

    println!("Preprocessing complete");
    println!("{:-<60}", "");
    println!(
        "Anime:    {} in, {} incomplete, {} without ratings, {} kept",
        summary.anime_rows_in,
        summary.anime_incomplete_dropped,
        summary.anime_unrated_dropped,
        summary.anime_rows_out
    );
    println!(
        "Ratings:  {} in, {} unrated (-1), {} unknown anime, {} kept",
        summary.rating_rows_in,
        summary.rating_unrated_dropped,
        summary.rating_orphans_dropped,
        summary.rating_rows_out
    );
    println!(
        "Encoded:  {} users, {} anime",
        summary.distinct_users, summary.distinct_anime
    );
    println!();
    for path in [
        paths.processed_anime(),
        paths.processed_rating(),
        paths.anime_id_map(),
        paths.user_id_map(),
    ] {
        println!("  {}", path.display());
    }

    Ok(())
}
