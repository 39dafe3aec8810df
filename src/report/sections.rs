//! Tabular layout of an [`EdaReport`], shared by every renderer.

use crate::report::EdaReport;
use crate::report::format::{
    MISSING, fixed, opt_count, opt_fixed, opt_thousands, signed, thousands,
};
use crate::report::views::{GroupStats, RankedAnime, ResidualPick, Summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub caption: Option<String>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Column rendered with emphasis in HTML
    pub highlight: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable anchor, also used to attach charts
    pub id: &'static str,
    pub title: String,
    pub tables: Vec<TableView>,
}

impl Section {
    fn single(id: &'static str, title: impl Into<String>, table: TableView) -> Self {
        Self {
            id,
            title: title.into(),
            tables: vec![table],
        }
    }
}

fn table(
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    highlight: Option<usize>,
) -> TableView {
    TableView {
        caption: None,
        headers,
        rows,
        highlight,
    }
}

fn group_rows(groups: &[GroupStats]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| {
            vec![
                g.key.clone(),
                thousands(i64::try_from(g.count).unwrap_or(i64::MAX)),
                opt_fixed(g.avg_rating, 2),
                opt_thousands(g.avg_members),
            ]
        })
        .collect()
}

fn ranked_rows(ranked: &[RankedAnime], with_episodes: bool) -> Vec<Vec<String>> {
    ranked
        .iter()
        .map(|r| {
            let mut row = vec![r.rank.to_string(), r.name.clone(), r.kind.clone()];
            if with_episodes {
                row.push(opt_count(r.episodes));
            }
            row.push(opt_fixed(r.rating, 2));
            row.push(opt_thousands(r.members));
            row
        })
        .collect()
}

fn residual_table(caption: &str, picks: &[ResidualPick]) -> TableView {
    TableView {
        caption: Some(caption.to_string()),
        headers: vec!["Name", "Type", "Rating", "Members", "Residual"],
        rows: picks
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.kind.clone(),
                    fixed(p.rating, 2),
                    thousands(p.members),
                    signed(p.residual, 3),
                ]
            })
            .collect(),
        highlight: Some(4),
    }
}

fn stats_rows(rating: &Summary, members: &Summary, episodes: &Summary) -> Vec<Vec<String>> {
    let row = |label: &str, r: String, m: String, e: String| vec![label.to_string(), r, m, e];
    vec![
        row(
            "count",
            rating.count.to_string(),
            members.count.to_string(),
            episodes.count.to_string(),
        ),
        row(
            "mean",
            opt_fixed(rating.mean, 3),
            opt_count(members.mean),
            opt_fixed(episodes.mean, 2),
        ),
        row(
            "std",
            rating.std.map_or_else(|| MISSING.to_string(), |s| format!("±{s:.3}")),
            MISSING.to_string(),
            MISSING.to_string(),
        ),
        row(
            "min",
            opt_fixed(rating.min, 2),
            opt_count(members.min),
            opt_count(episodes.min),
        ),
        row(
            "Q1 (25%)",
            opt_fixed(rating.q1, 3),
            opt_count(members.q1),
            opt_count(episodes.q1),
        ),
        row(
            "median",
            opt_fixed(rating.median, 3),
            opt_count(members.median),
            opt_count(episodes.median),
        ),
        row(
            "Q3 (75%)",
            opt_fixed(rating.q3, 3),
            opt_count(members.q3),
            opt_count(episodes.q3),
        ),
        row(
            "max",
            opt_fixed(rating.max, 2),
            opt_count(members.max),
            opt_count(episodes.max),
        ),
    ]
}

impl EdaReport {
    /// Every view as titled tables, in report order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let floor = thousands(self.popularity_floor);
        let corr = &self.correlation;

        let mut sections = vec![
            Section::single(
                "columns",
                "1. Column Types",
                table(
                    vec!["Column", "Type"],
                    self.columns
                        .iter()
                        .map(|c| vec![c.column.clone(), c.data_type.clone()])
                        .collect(),
                    None,
                ),
            ),
            Section::single(
                "missing",
                "2. Missing Values",
                table(
                    vec!["Column", "Null count"],
                    self.missing
                        .iter()
                        .map(|m| vec![m.column.clone(), m.null_count.to_string()])
                        .collect(),
                    Some(1),
                ),
            ),
            Section::single(
                "stats",
                "3. Descriptive Statistics",
                table(
                    vec!["Metric", "Rating", "Members", "Episodes"],
                    stats_rows(&self.stats.rating, &self.stats.members, &self.stats.episodes),
                    None,
                ),
            ),
            Section::single(
                "types",
                "4. Type Distribution",
                table(
                    vec!["Type", "Count", "Avg Rating", "Avg Members"],
                    group_rows(&self.by_type),
                    Some(1),
                ),
            ),
            Section::single(
                "top-rated",
                format!("5. Top {} Highest Rated (members >= {floor})", self.top_rated.len()),
                table(
                    vec!["#", "Name", "Type", "Rating", "Members"],
                    ranked_rows(&self.top_rated, false),
                    Some(3),
                ),
            ),
            Section::single(
                "top-popular",
                format!("6. Top {} Most Popular (by members)", self.top_popular.len()),
                table(
                    vec!["#", "Name", "Type", "Rating", "Members"],
                    ranked_rows(&self.top_popular, false),
                    Some(4),
                ),
            ),
            Section::single(
                "longest",
                format!("7. Top {} Longest Running", self.longest.len()),
                table(
                    vec!["#", "Name", "Type", "Episodes", "Rating", "Members"],
                    ranked_rows(&self.longest, true),
                    Some(3),
                ),
            ),
            Section::single(
                "genres",
                format!("8. Top {} Genres", self.by_genre.len()),
                table(
                    vec!["Genre", "Count", "Avg Rating", "Avg Members"],
                    group_rows(&self.by_genre),
                    Some(1),
                ),
            ),
        ];

        let fit_rows = vec![
            vec![
                "Pearson r (rating, log10 members)".to_string(),
                opt_fixed(corr.pearson, 4),
            ],
            vec![
                "Slope".to_string(),
                corr.fit
                    .map_or_else(|| MISSING.to_string(), |f| signed(f.slope, 4)),
            ],
            vec![
                "Intercept".to_string(),
                corr.fit
                    .map_or_else(|| MISSING.to_string(), |f| fixed(f.intercept, 4)),
            ],
            vec![
                "Points".to_string(),
                corr.fit.map_or_else(
                    || "0".to_string(),
                    |f| thousands(i64::try_from(f.n).unwrap_or(i64::MAX)),
                ),
            ],
        ];

        sections.push(Section {
            id: "correlation",
            title: "9. Rating x Members Correlation".to_string(),
            tables: vec![
                table(vec!["Metric", "Value"], fit_rows, Some(1)),
                residual_table("Largest residuals", &corr.largest_residuals),
                residual_table(
                    "Less popular than rating predicts (hidden gems)",
                    &corr.underperformers,
                ),
                residual_table(
                    "More popular than rating predicts (buzz titles)",
                    &corr.overperformers,
                ),
                residual_table("Closest to the trend", &corr.conformers),
            ],
        });

        sections.push(Section::single(
            "histogram",
            "Rating Distribution",
            table(
                vec!["Range", "Count"],
                self.rating_histogram
                    .iter()
                    .map(|h| {
                        vec![
                            h.label.clone(),
                            thousands(i64::try_from(h.count).unwrap_or(i64::MAX)),
                        ]
                    })
                    .collect(),
                None,
            ),
        ));

        if let Some(r) = &self.ratings {
            let count = |n: usize| thousands(i64::try_from(n).unwrap_or(i64::MAX));
            sections.push(Section::single(
                "ratings",
                "Rating Table",
                table(
                    vec!["Metric", "Value"],
                    vec![
                        vec!["Rows".to_string(), count(r.rows)],
                        vec!["Unrated (-1)".to_string(), count(r.unrated)],
                        vec!["Distinct users".to_string(), count(r.distinct_users)],
                        vec!["Distinct anime".to_string(), count(r.distinct_anime)],
                        vec!["Mean rating".to_string(), opt_fixed(r.mean_rating, 3)],
                    ],
                    Some(1),
                ),
            ));
        }

        sections
    }
}
