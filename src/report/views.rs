//! Aggregate views over the anime frame.
//!
//! Every ranking sorts on secondary keys and then on name, so the same input
//! always yields the same report.

use polars::prelude::*;
use serde::Serialize;

use crate::constants::columns::{EPISODES, GENRE, MEMBERS, NAME, RATING, TYPE};
use crate::error::Result;

/// Label used for rows without a `type`.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Rounds half away from zero to `places` decimals.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Mean, spread and five-number summary of one column; nulls excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    /// Rounds the derived figures; min and max are observed values and stay
    /// as they are.
    #[must_use]
    pub fn rounded(self, mean_places: i32, quantile_places: i32) -> Self {
        let r = |v: Option<f64>, places| v.map(|v| round_to(v, places));
        Self {
            mean: r(self.mean, mean_places),
            std: r(self.std, mean_places),
            q1: r(self.q1, quantile_places),
            median: r(self.median, quantile_places),
            q3: r(self.q3, quantile_places),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub n: usize,
}

impl LinearFit {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub rating: Summary,
    pub members: Summary,
    pub episodes: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub count: usize,
    pub avg_rating: Option<f64>,
    pub avg_members: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAnime {
    pub rank: usize,
    pub name: String,
    pub kind: String,
    pub episodes: Option<f64>,
    pub rating: Option<f64>,
    pub members: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub lower: i64,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidualPick {
    pub name: String,
    pub kind: String,
    pub rating: f64,
    pub members: i64,
    pub residual: f64,
}

/// Rating against log10(members).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationView {
    pub pearson: Option<f64>,
    pub fit: Option<LinearFit>,
    pub scatter: Vec<ScatterPoint>,
    /// Largest absolute residuals first
    pub largest_residuals: Vec<ResidualPick>,
    /// Most negative residuals: less popular than their rating predicts
    pub underperformers: Vec<ResidualPick>,
    /// Most positive residuals: more popular than their rating predicts
    pub overperformers: Vec<ResidualPick>,
    /// Closest to the fitted line
    pub conformers: Vec<ResidualPick>,
}

fn kind_label() -> Expr {
    col(TYPE).fill_null(lit(UNKNOWN_TYPE))
}

fn limit(n: usize) -> IdxSize {
    IdxSize::try_from(n).unwrap_or(IdxSize::MAX)
}

/// Sort options with one direction per key; nulls always sink.
fn order<const N: usize>(descending: [bool; N]) -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending_multi(descending)
        .with_nulls_last(true)
}

fn count_of(value: Option<i64>) -> usize {
    value.and_then(|v| usize::try_from(v).ok()).unwrap_or(0)
}

/// First value of a single-row float column; NaN reads as missing.
fn scalar(frame: &DataFrame, name: &str) -> Result<Option<f64>> {
    Ok(frame
        .column(name)?
        .f64()?
        .get(0)
        .filter(|v| v.is_finite()))
}

fn summarize(frame: &DataFrame, column: &str) -> Result<Summary> {
    let x = || col(column).cast(DataType::Float64);
    let quantile = |q: f64| x().quantile(lit(q), QuantileMethod::Linear);

    let out = frame
        .clone()
        .lazy()
        .select([
            x().count().cast(DataType::Int64).alias("count"),
            x().mean().alias("mean"),
            x().std(1).alias("std"),
            x().min().alias("min"),
            quantile(0.25).alias("q1"),
            quantile(0.5).alias("median"),
            quantile(0.75).alias("q3"),
            x().max().alias("max"),
        ])
        .collect()?;

    Ok(Summary {
        count: count_of(out.column("count")?.i64()?.get(0)),
        mean: scalar(&out, "mean")?,
        std: scalar(&out, "std")?,
        min: scalar(&out, "min")?,
        q1: scalar(&out, "q1")?,
        median: scalar(&out, "median")?,
        q3: scalar(&out, "q3")?,
        max: scalar(&out, "max")?,
    })
}

pub fn descriptive_stats(frame: &DataFrame) -> Result<DescriptiveStats> {
    Ok(DescriptiveStats {
        count: frame.height(),
        rating: summarize(frame, RATING)?.rounded(3, 3),
        members: summarize(frame, MEMBERS)?.rounded(0, 0),
        episodes: summarize(frame, EPISODES)?.rounded(2, 0),
    })
}

fn group_aggs() -> [Expr; 3] {
    [
        len().cast(DataType::Int64).alias("count"),
        col(RATING).mean().alias("avg_rating"),
        col(MEMBERS).cast(DataType::Float64).mean().alias("avg_members"),
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn groups(out: &DataFrame) -> Result<Vec<GroupStats>> {
    let keys = out.column("key")?.str()?;
    let counts = out.column("count")?.i64()?;
    let ratings = out.column("avg_rating")?.f64()?;
    let members = out.column("avg_members")?.f64()?;

    Ok(keys
        .into_iter()
        .zip(counts)
        .zip(ratings)
        .zip(members)
        .map(|(((key, count), rating), members)| GroupStats {
            key: key.unwrap_or(UNKNOWN_TYPE).to_string(),
            count: count_of(count),
            avg_rating: rating.map(|v| round_to(v, 2)),
            avg_members: members.map(|v| v.round() as i64),
        })
        .collect())
}

/// Count, mean rating and mean members per `type`, largest group first.
pub fn by_type(frame: &DataFrame) -> Result<Vec<GroupStats>> {
    let out = frame
        .clone()
        .lazy()
        .group_by([kind_label().alias("key")])
        .agg(group_aggs())
        .sort_by_exprs([col("count"), col("key")], order([true, false]))
        .collect()?;
    groups(&out)
}

/// Per-genre statistics; a row counts once toward each genre it lists.
pub fn by_genre(frame: &DataFrame, top: usize) -> Result<Vec<GroupStats>> {
    let listed = frame
        .clone()
        .lazy()
        .filter(col(GENRE).is_not_null())
        .select([
            col(GENRE).str().split(lit(",")),
            col(RATING),
            col(MEMBERS),
        ])
        .collect()?
        .explode([GENRE])?;

    let out = listed
        .lazy()
        .with_column(col(GENRE).str().strip_chars(lit(" ")))
        .filter(col(GENRE).is_not_null().and(col(GENRE).neq(lit(""))))
        .group_by([col(GENRE).alias("key")])
        .agg(group_aggs())
        .sort_by_exprs([col("count"), col("key")], order([true, false]))
        .limit(limit(top))
        .collect()?;
    groups(&out)
}

fn ranked(out: &DataFrame) -> Result<Vec<RankedAnime>> {
    let names = out.column(NAME)?.str()?;
    let kinds = out.column(TYPE)?.str()?;
    let episodes = out.column(EPISODES)?.f64()?;
    let ratings = out.column(RATING)?.f64()?;
    let members = out.column(MEMBERS)?.i64()?;

    Ok(names
        .into_iter()
        .zip(kinds)
        .zip(episodes)
        .zip(ratings)
        .zip(members)
        .enumerate()
        .map(|(i, ((((name, kind), episodes), rating), members))| RankedAnime {
            rank: i + 1,
            name: name.unwrap_or_default().to_string(),
            kind: kind.unwrap_or(UNKNOWN_TYPE).to_string(),
            episodes,
            rating,
            members,
        })
        .collect())
}

fn ranking(
    frame: &DataFrame,
    keep: Expr,
    by: [&str; 3],
    descending: [bool; 3],
    n: usize,
) -> Result<Vec<RankedAnime>> {
    let out = frame
        .clone()
        .lazy()
        .filter(keep)
        .sort_by_exprs(by.map(col), order(descending))
        .limit(limit(n))
        .collect()?;
    ranked(&out)
}

/// Highest rated rows among those with at least `floor` members.
pub fn top_rated(frame: &DataFrame, floor: i64, n: usize) -> Result<Vec<RankedAnime>> {
    let keep = col(RATING)
        .is_not_null()
        .and(col(MEMBERS).gt_eq(lit(floor)));
    ranking(frame, keep, [RATING, MEMBERS, NAME], [true, true, false], n)
}

pub fn top_popular(frame: &DataFrame, n: usize) -> Result<Vec<RankedAnime>> {
    let keep = col(MEMBERS).is_not_null();
    ranking(frame, keep, [MEMBERS, RATING, NAME], [true, true, false], n)
}

/// Rows with the most episodes; unknown counts are not ranked.
pub fn longest(frame: &DataFrame, n: usize) -> Result<Vec<RankedAnime>> {
    let keep = col(EPISODES).is_not_null();
    ranking(frame, keep, [EPISODES, MEMBERS, NAME], [true, true, false], n)
}

/// Count of rows per integer rating bucket `[k, k+1)`.
pub fn rating_histogram(frame: &DataFrame) -> Result<Vec<HistogramBucket>> {
    let out = frame
        .clone()
        .lazy()
        .filter(col(RATING).is_not_null())
        .group_by([col(RATING).floor().cast(DataType::Int64).alias("lower")])
        .agg([len().cast(DataType::Int64).alias("count")])
        .sort_by_exprs([col("lower")], SortMultipleOptions::default())
        .collect()?;

    let lowers = out.column("lower")?.i64()?;
    let counts = out.column("count")?.i64()?;
    Ok(lowers
        .into_iter()
        .zip(counts)
        .filter_map(|(lower, count)| {
            let lower = lower?;
            Some(HistogramBucket {
                lower,
                label: format!("{lower}-{}", lower + 1),
                count: count_of(count),
            })
        })
        .collect())
}

/// Least squares fit of `y` on `x` plus the Pearson coefficient.
fn fit_line(points: LazyFrame) -> Result<Option<(LinearFit, Option<f64>)>> {
    let dx = col("x") - col("x").mean();
    let dy = col("y") - col("y").mean();

    let out = points
        .select([
            len().cast(DataType::Int64).alias("n"),
            col("x").mean().alias("mean_x"),
            col("y").mean().alias("mean_y"),
            (dx.clone() * dy.clone()).sum().alias("sxy"),
            (dx.clone() * dx).sum().alias("sxx"),
            (dy.clone() * dy).sum().alias("syy"),
        ])
        .collect()?;

    let n = count_of(out.column("n")?.i64()?.get(0));
    let (Some(mean_x), Some(mean_y), Some(sxy), Some(sxx), Some(syy)) = (
        scalar(&out, "mean_x")?,
        scalar(&out, "mean_y")?,
        scalar(&out, "sxy")?,
        scalar(&out, "sxx")?,
        scalar(&out, "syy")?,
    ) else {
        return Ok(None);
    };
    if n < 2 || sxx <= 0.0 {
        return Ok(None);
    }

    let slope = sxy / sxx;
    let fit = LinearFit {
        slope,
        intercept: slope.mul_add(-mean_x, mean_y),
        n,
    };
    let pearson = (syy > 0.0).then(|| sxy / (sxx * syy).sqrt());
    Ok(Some((fit, pearson)))
}

/// Deterministic sample of at most `limit` items, evenly strided.
fn stride_sample<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    if items.len() <= limit {
        return items.to_vec();
    }
    (0..limit)
        .map(|i| items[i * items.len() / limit].clone())
        .collect()
}

fn scatter_points(sorted: &DataFrame, scatter_limit: usize) -> Result<Vec<ScatterPoint>> {
    let xs = sorted.column("x")?.f64()?;
    let members = sorted.column(MEMBERS)?.i64()?;
    let names = sorted.column(NAME)?.str()?;

    let all: Vec<ScatterPoint> = xs
        .into_iter()
        .zip(members)
        .zip(names)
        .filter_map(|((x, y), label)| {
            Some(ScatterPoint {
                x: x?,
                y: y?,
                label: label.unwrap_or_default().to_string(),
            })
        })
        .collect();
    Ok(stride_sample(&all, scatter_limit))
}

fn residual_picks(out: &DataFrame) -> Result<Vec<ResidualPick>> {
    let names = out.column(NAME)?.str()?;
    let kinds = out.column(TYPE)?.str()?;
    let xs = out.column("x")?.f64()?;
    let members = out.column(MEMBERS)?.i64()?;
    let residuals = out.column("residual")?.f64()?;

    Ok(names
        .into_iter()
        .zip(kinds)
        .zip(xs)
        .zip(members)
        .zip(residuals)
        .filter_map(|((((name, kind), rating), members), residual)| {
            Some(ResidualPick {
                name: name.unwrap_or_default().to_string(),
                kind: kind.unwrap_or(UNKNOWN_TYPE).to_string(),
                rating: rating?,
                members: members?,
                residual: residual?,
            })
        })
        .collect())
}

/// Correlation between rating and log10(members).
///
/// The overall fit and coefficient use every row with a rating and positive
/// members. Residual picks only consider rows meeting the popularity `floor`,
/// against a fit recomputed on that subset.
pub fn correlation(
    frame: &DataFrame,
    floor: i64,
    pickups: usize,
    scatter_limit: usize,
) -> Result<CorrelationView> {
    let usable = frame
        .clone()
        .lazy()
        .filter(col(RATING).is_not_null().and(col(MEMBERS).gt(lit(0))))
        .select([
            col(NAME),
            kind_label().alias(TYPE),
            col(RATING).alias("x"),
            col(MEMBERS),
            col(MEMBERS).cast(DataType::Float64).log(10.0).alias("y"),
        ])
        .sort_by_exprs([col("x"), col(MEMBERS), col(NAME)], order([false; 3]));

    let overall = fit_line(usable.clone())?;
    let fit = overall.map(|(f, _)| LinearFit {
        slope: round_to(f.slope, 4),
        intercept: round_to(f.intercept, 4),
        n: f.n,
    });
    let pearson = overall.and_then(|(_, r)| r).map(|r| round_to(r, 4));
    let scatter = scatter_points(&usable.clone().collect()?, scatter_limit)?;

    let floor_rows = usable.filter(col(MEMBERS).gt_eq(lit(floor)));
    let residuals = match fit_line(floor_rows.clone())? {
        Some((floor_fit, _)) => {
            let predicted = lit(floor_fit.slope) * col("x") + lit(floor_fit.intercept);
            floor_rows
                .with_column((col("y") - predicted).round(4).alias("residual"))
                .collect()?
        }
        None => DataFrame::empty(),
    };

    let pick = |by: Expr, descending: bool| -> Result<Vec<ResidualPick>> {
        if residuals.height() == 0 {
            return Ok(Vec::new());
        }
        let out = residuals
            .clone()
            .lazy()
            .sort_by_exprs([by, col(NAME)], order([descending, false]))
            .limit(limit(pickups))
            .collect()?;
        residual_picks(&out)
    };

    Ok(CorrelationView {
        pearson,
        fit,
        scatter,
        largest_residuals: pick(col("residual").abs(), true)?,
        underperformers: pick(col("residual"), false)?,
        overperformers: pick(col("residual"), true)?,
        conformers: pick(col("residual").abs(), false)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        name: &[&str],
        genre: &[Option<&str>],
        kind: &[Option<&str>],
        episodes: &[Option<f64>],
        rating: &[Option<f64>],
        members: &[Option<i64>],
    ) -> DataFrame {
        DataFrame::new(vec![
            Series::new(NAME.into(), name).into(),
            Series::new(GENRE.into(), genre).into(),
            Series::new(TYPE.into(), kind).into(),
            Series::new(EPISODES.into(), episodes).into(),
            Series::new(RATING.into(), rating).into(),
            Series::new(MEMBERS.into(), members).into(),
        ])
        .unwrap()
    }

    /// (name, genre, rating, members) rows, all TV with twelve episodes.
    fn frame(rows: &[(&str, &str, f64, i64)]) -> DataFrame {
        let names: Vec<&str> = rows.iter().map(|r| r.0).collect();
        let genres: Vec<Option<&str>> = rows.iter().map(|r| Some(r.1)).collect();
        let ratings: Vec<Option<f64>> = rows.iter().map(|r| Some(r.2)).collect();
        let members: Vec<Option<i64>> = rows.iter().map(|r| Some(r.3)).collect();
        build(
            &names,
            &genres,
            &vec![Some("TV"); rows.len()],
            &vec![Some(12.0); rows.len()],
            &ratings,
            &members,
        )
    }

    #[test]
    fn test_top_rated_respects_floor() {
        let df = frame(&[
            ("Niche", "Drama", 9.9, 500),
            ("Popular", "Action", 8.0, 50_000),
            ("Solid", "Action", 7.0, 2_000),
        ]);

        let top = top_rated(&df, 1000, 10).unwrap();
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Popular", "Solid"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].kind, "TV");
    }

    #[test]
    fn test_rating_ties_break_on_members_then_name() {
        let df = frame(&[
            ("Beta", "Action", 8.0, 2_000),
            ("Alpha", "Action", 8.0, 2_000),
            ("Gamma", "Action", 8.0, 9_000),
        ]);

        let names: Vec<_> = top_rated(&df, 0, 10)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_genre_explodes_lists() {
        let df = frame(&[
            ("A", "Action, Comedy", 8.0, 100),
            ("B", "Comedy", 6.0, 300),
        ]);

        let genres = by_genre(&df, 20).unwrap();
        assert_eq!(genres[0].key, "Comedy");
        assert_eq!(genres[0].count, 2);
        assert_eq!(genres[0].avg_rating, Some(7.0));
        assert_eq!(genres[0].avg_members, Some(200));
        assert_eq!(genres[1].key, "Action");
        assert_eq!(genres[1].count, 1);
    }

    #[test]
    fn test_genre_limit() {
        let df = frame(&[("A", "Action, Comedy, Drama", 8.0, 100)]);
        assert_eq!(by_genre(&df, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_by_type_groups_missing_type() {
        let df = build(
            &["A", "B", "M"],
            &[Some("Action"), Some("Action"), Some("Drama")],
            &[Some("TV"), Some("TV"), None],
            &[Some(12.0), Some(12.0), Some(1.0)],
            &[Some(8.0), Some(6.0), Some(9.0)],
            &[Some(100), Some(100), Some(10)],
        );

        let types = by_type(&df).unwrap();
        assert_eq!(types[0].key, "TV");
        assert_eq!(types[0].count, 2);
        assert_eq!(types[0].avg_rating, Some(7.0));
        assert_eq!(types[1].key, UNKNOWN_TYPE);
    }

    #[test]
    fn test_longest_skips_unknown_episodes() {
        let df = build(
            &["Unknown", "Long", "Short"],
            &[Some("Action"); 3],
            &[Some("TV"); 3],
            &[None, Some(1787.0), Some(12.0)],
            &[Some(8.0), Some(7.0), Some(7.0)],
            &[Some(100); 3],
        );

        let names: Vec<_> = longest(&df, 10)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Long", "Short"]);
    }

    #[test]
    fn test_histogram_buckets() {
        let df = frame(&[
            ("A", "Action", 8.2, 1),
            ("B", "Action", 8.9, 1),
            ("C", "Action", 6.0, 1),
        ]);

        let hist = rating_histogram(&df).unwrap();
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0].label, "6-7");
        assert_eq!(hist[1].lower, 8);
        assert_eq!(hist[1].count, 2);
    }

    #[test]
    fn test_correlation_residuals() {
        // flat trend at 10k members with one far more popular outlier
        let df = frame(&[
            ("A", "Action", 6.0, 10_000),
            ("B", "Action", 7.0, 10_000),
            ("C", "Action", 8.0, 10_000),
            ("D", "Action", 9.0, 10_000),
            ("Buzz", "Comedy", 7.5, 1_000_000),
        ]);

        let view = correlation(&df, 1000, 2, 2000).unwrap();
        assert_eq!(view.scatter.len(), 5);
        assert_eq!(view.scatter[0].label, "A");
        let fit = view.fit.unwrap();
        assert_eq!(fit.n, 5);
        assert!(fit.slope.abs() < 1e-9);
        assert!((fit.intercept - 4.4).abs() < 1e-9);

        assert_eq!(view.largest_residuals.len(), 2);
        assert_eq!(view.largest_residuals[0].name, "Buzz");
        assert!((view.largest_residuals[0].residual - 1.6).abs() < 1e-9);
        assert_eq!(view.overperformers[0].name, "Buzz");
        assert_eq!(view.underperformers[0].name, "A");
        assert!((view.underperformers[0].residual + 0.4).abs() < 1e-9);
        assert_eq!(view.conformers[0].name, "A");
    }

    #[test]
    fn test_perfect_line_has_unit_pearson() {
        let df = frame(&[
            ("A", "Action", 6.0, 10),
            ("B", "Action", 7.0, 100),
            ("C", "Action", 8.0, 1_000),
        ]);

        let view = correlation(&df, 0, 3, 10).unwrap();
        assert_eq!(view.pearson, Some(1.0));
        let fit = view.fit.unwrap();
        assert!((fit.slope - 1.0).abs() < 1e-9);
        assert!((fit.intercept + 5.0).abs() < 1e-9);
        assert!(view.conformers.iter().all(|p| p.residual.abs() < 1e-9));
    }

    #[test]
    fn test_scatter_sample_is_deterministic() {
        let rows: Vec<(String, f64, i64)> = (0..50)
            .map(|i| (format!("A{i}"), f64::from(i) / 10.0, 100 + i64::from(i)))
            .collect();
        let borrowed: Vec<(&str, &str, f64, i64)> = rows
            .iter()
            .map(|(name, rating, members)| (name.as_str(), "Action", *rating, *members))
            .collect();
        let df = frame(&borrowed);

        let a = correlation(&df, 1000, 5, 10).unwrap();
        let b = correlation(&df, 1000, 5, 10).unwrap();
        assert_eq!(a.scatter.len(), 10);
        assert_eq!(a.scatter, b.scatter);
        assert!(a.largest_residuals.is_empty());
    }

    #[test]
    fn test_descriptive_stats() {
        let df = frame(&[("A", "Action", 6.0, 100), ("B", "Action", 8.0, 300)]);

        let stats = descriptive_stats(&df).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.rating.count, 2);
        assert_eq!(stats.rating.mean, Some(7.0));
        assert_eq!(stats.members.median, Some(200.0));
        assert_eq!(stats.members.q1, Some(150.0));
        assert_eq!(stats.episodes.max, Some(12.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(8.456, 2), 8.46);
        assert_eq!(round_to(-0.123_46, 4), -0.1235);
    }
}
