//! Cleaning and re-encoding of the raw anime and rating tables.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::config::{Config, PreprocessConfig};
use crate::constants::{columns, files};
use crate::domain::IdMap;
use crate::error::Result;
use crate::models::{Anime, RawAnime, RawRating, Rating};
use crate::parser::episodes::parse_episodes;
use crate::table;

/// Locations of the raw inputs and the directory receiving the outputs.
#[derive(Debug, Clone)]
pub struct PreprocessPaths {
    pub raw_anime: PathBuf,
    pub raw_rating: PathBuf,
    pub output_dir: PathBuf,
}

impl PreprocessPaths {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            raw_anime: config.paths.raw_anime(),
            raw_rating: config.paths.raw_rating(),
            output_dir: PathBuf::from(&config.paths.processed_dir),
        }
    }

    #[must_use]
    pub fn processed_anime(&self) -> PathBuf {
        self.output_dir.join(files::PROCESSED_ANIME)
    }

    #[must_use]
    pub fn processed_rating(&self) -> PathBuf {
        self.output_dir.join(files::PROCESSED_RATING)
    }

    #[must_use]
    pub fn anime_id_map(&self) -> PathBuf {
        self.output_dir.join(files::ANIME_ID_MAP)
    }

    #[must_use]
    pub fn user_id_map(&self) -> PathBuf {
        self.output_dir.join(files::USER_ID_MAP)
    }
}

/// Row counts observed at each filtering step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessSummary {
    pub anime_rows_in: usize,
    pub anime_incomplete_dropped: usize,
    pub anime_unrated_dropped: usize,
    pub anime_rows_out: usize,
    pub rating_rows_in: usize,
    pub rating_unrated_dropped: usize,
    pub rating_orphans_dropped: usize,
    pub rating_rows_out: usize,
    pub distinct_users: usize,
    pub distinct_anime: usize,
}

/// Fully transformed tables, ready to be persisted.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub anime: Vec<Anime>,
    pub ratings: Vec<Rating>,
    pub anime_ids: IdMap,
    pub user_ids: IdMap,
    pub summary: PreprocessSummary,
}

/// Anime record after decoding and filtering, before re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanAnime {
    pub anime_id: i64,
    pub name: String,
    pub genre: String,
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub rating: f64,
    pub members: i64,
}

fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decodes HTML entities, parses episode counts and drops records lacking a
/// genre or a rating.
///
/// Episode parsing runs on every record, so malformed input fails the run
/// even on rows that would later be dropped.
pub fn clean_anime(raw: Vec<RawAnime>) -> Result<Vec<CleanAnime>> {
    let mut cleaned = Vec::with_capacity(raw.len());

    for record in raw {
        let location = format!("anime_id {}", record.anime_id);
        let episodes = match record.episodes.as_deref() {
            Some(token) => parse_episodes(token, &location)?,
            None => None,
        };

        let (Some(genre), Some(rating)) = (record.genre, record.rating.filter(|r| r.is_finite()))
        else {
            continue;
        };

        cleaned.push(CleanAnime {
            anime_id: record.anime_id,
            name: decode_entities(&record.name),
            genre: decode_entities(&genre),
            kind: record.kind,
            episodes,
            rating,
            members: record.members,
        });
    }

    Ok(cleaned)
}

/// Drops unrated (`-1`) rows, then rows whose anime is not in `valid_anime`.
///
/// Returns the kept rows with the two drop counts.
pub fn clean_ratings(
    raw: Vec<RawRating>,
    valid_anime: &BTreeSet<i64>,
) -> (Vec<RawRating>, usize, usize) {
    let before = raw.len();
    let rated: Vec<RawRating> = raw.into_iter().filter(|r| !r.is_unrated()).collect();
    let unrated = before - rated.len();

    let before = rated.len();
    let kept: Vec<RawRating> = rated
        .into_iter()
        .filter(|r| valid_anime.contains(&r.anime_id))
        .collect();
    let orphans = before - kept.len();

    (kept, unrated, orphans)
}

/// Runs every transformation step in memory.
pub fn preprocess(
    raw_anime: Vec<RawAnime>,
    raw_ratings: Vec<RawRating>,
    options: &PreprocessConfig,
) -> Result<Preprocessed> {
    let mut summary = PreprocessSummary {
        anime_rows_in: raw_anime.len(),
        rating_rows_in: raw_ratings.len(),
        ..PreprocessSummary::default()
    };

    let cleaned = clean_anime(raw_anime)?;
    summary.anime_incomplete_dropped = summary.anime_rows_in - cleaned.len();
    info!(
        dropped = summary.anime_incomplete_dropped,
        kept = cleaned.len(),
        "Dropped anime rows with missing rating/genre"
    );

    let valid_anime: BTreeSet<i64> = cleaned.iter().map(|a| a.anime_id).collect();
    let (ratings, unrated, orphans) = clean_ratings(raw_ratings, &valid_anime);
    summary.rating_unrated_dropped = unrated;
    summary.rating_orphans_dropped = orphans;
    info!(unrated, orphans, kept = ratings.len(), "Cleaned ratings");

    let anime_ids = if options.drop_unrated_anime {
        IdMap::from_ids(ratings.iter().map(|r| r.anime_id))
    } else {
        IdMap::from_ids(valid_anime.iter().copied())
    };
    let user_ids = IdMap::from_ids(ratings.iter().map(|r| r.user_id));

    let anime: Vec<Anime> = cleaned
        .into_iter()
        .filter_map(|a| {
            let anime_idx = anime_ids.encode(a.anime_id)?;
            Some(Anime {
                anime_id: a.anime_id,
                name: a.name,
                genre: a.genre,
                kind: a.kind,
                episodes: a.episodes,
                rating: a.rating,
                members: a.members,
                anime_idx,
            })
        })
        .collect();
    summary.anime_unrated_dropped =
        summary.anime_rows_in - summary.anime_incomplete_dropped - anime.len();

    let ratings: Vec<Rating> = ratings
        .into_iter()
        .filter_map(|r| {
            Some(Rating {
                user_id: r.user_id,
                anime_id: r.anime_id,
                rating: r.rating,
                user_idx: user_ids.encode(r.user_id)?,
                anime_idx: anime_ids.encode(r.anime_id)?,
            })
        })
        .collect();

    summary.anime_rows_out = anime.len();
    summary.rating_rows_out = ratings.len();
    summary.distinct_users = user_ids.len();
    summary.distinct_anime = anime_ids.len();

    Ok(Preprocessed {
        anime,
        ratings,
        anime_ids,
        user_ids,
        summary,
    })
}

/// Writes the four output tables. Each file is published atomically.
pub fn write_outputs(output: &Preprocessed, paths: &PreprocessPaths) -> Result<()> {
    let targets = [
        paths.processed_anime(),
        paths.processed_rating(),
        paths.anime_id_map(),
        paths.user_id_map(),
    ];

    // nothing is published until all four files are fully written
    let staged = vec![
        table::stage_rows(&targets[0], &output.anime)?,
        table::stage_rows(&targets[1], &output.ratings)?,
        output
            .anime_ids
            .stage(&targets[2], columns::ANIME_ID, columns::ANIME_IDX)?,
        output
            .user_ids
            .stage(&targets[3], columns::USER_ID, columns::USER_IDX)?,
    ];
    table::commit(staged)?;

    for target in &targets {
        info!("Saved {}", target.display());
    }
    Ok(())
}

pub fn load_raw_anime(path: &Path) -> Result<Vec<RawAnime>> {
    table::read_rows(path, columns::RAW_ANIME)
}

pub fn load_raw_ratings(path: &Path) -> Result<Vec<RawRating>> {
    table::read_rows(path, columns::RAW_RATING)
}

/// Reads the raw tables, transforms them and persists the results.
#[instrument(skip_all, fields(output_dir = %paths.output_dir.display()))]
pub fn run(paths: &PreprocessPaths, options: &PreprocessConfig) -> Result<PreprocessSummary> {
    info!("Loading {}", paths.raw_anime.display());
    let raw_anime = load_raw_anime(&paths.raw_anime)?;
    info!(rows = raw_anime.len(), "Loaded anime table");

    info!("Loading {}", paths.raw_rating.display());
    let raw_ratings = load_raw_ratings(&paths.raw_rating)?;
    info!(rows = raw_ratings.len(), "Loaded rating table");

    let output = preprocess(raw_anime, raw_ratings, options)?;
    write_outputs(&output, paths)?;

    let summary = output.summary;
    info!(
        anime = summary.anime_rows_out,
        ratings = summary.rating_rows_out,
        users = summary.distinct_users,
        distinct_anime = summary.distinct_anime,
        "Preprocessing complete"
    );
    Ok(summary)
}
