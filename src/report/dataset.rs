//! Anime table as seen by the report: a typed frame plus per-column metadata.

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::columns;
use crate::error::{EdaError, Result};
use crate::table;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub column: String,
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub null_count: usize,
}

/// `frame` holds the report columns only: `name`, `genre`, `type` as text,
/// `episodes` and `rating` as doubles, `members` as a 64-bit integer. Values
/// that do not cast are null.
#[derive(Debug, Clone)]
pub struct AnimeDataset {
    pub source: PathBuf,
    pub columns: Vec<ColumnInfo>,
    pub missing: Vec<MissingCount>,
    pub frame: DataFrame,
}

/// SQL-style name for a column type.
fn sql_type(dtype: &DataType) -> String {
    match dtype {
        DataType::Int64 => "BIGINT".to_string(),
        DataType::Float64 => "DOUBLE".to_string(),
        DataType::String => "VARCHAR".to_string(),
        DataType::Boolean => "BOOLEAN".to_string(),
        other => other.to_string().to_uppercase(),
    }
}

impl AnimeDataset {
    /// Loads a raw or processed anime table.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| EdaError::io(path, e))?;
        let raw = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()?;

        let dataset = Self::from_frame(raw, path)?;
        debug!(path = %path.display(), rows = dataset.frame.height(), "Loaded anime dataset");
        Ok(dataset)
    }

    /// Applies the report casts to an already loaded frame; `source` is used
    /// for error messages and the report header.
    pub fn from_frame(raw: DataFrame, source: &Path) -> Result<Self> {
        let names = raw.get_column_names();
        table::require_fields(
            names.iter().map(|n| n.as_str()),
            source,
            columns::REPORT_ANIME,
        )?;

        let typed = raw
            .lazy()
            .with_columns(
                columns::CAST_DOUBLE
                    .iter()
                    .map(|c| col(*c).cast(DataType::Float64))
                    .collect::<Vec<_>>(),
            )
            .collect()?;

        let (column_info, missing): (Vec<_>, Vec<_>) = typed
            .get_columns()
            .iter()
            .map(|c| {
                let column = c.name().to_string();
                (
                    ColumnInfo {
                        column: column.clone(),
                        data_type: sql_type(c.dtype()),
                    },
                    MissingCount {
                        column,
                        null_count: c.null_count(),
                    },
                )
            })
            .unzip();

        let frame = typed
            .lazy()
            .select([
                col(columns::NAME).cast(DataType::String),
                col(columns::GENRE).cast(DataType::String),
                col(columns::TYPE).cast(DataType::String),
                col(columns::EPISODES),
                col(columns::RATING),
                col(columns::MEMBERS).cast(DataType::Int64),
            ])
            .collect()?;

        Ok(Self {
            source: source.to_path_buf(),
            columns: column_info,
            missing,
            frame,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> DataFrame {
        DataFrame::new(vec![
            Series::new("anime_id".into(), &[1i64, 2]).into(),
            Series::new("name".into(), &["A", "B"]).into(),
            Series::new("genre".into(), &[Some("Action, Comedy"), None]).into(),
            Series::new("type".into(), &["TV", "Movie"]).into(),
            Series::new("episodes".into(), &["Unknown", "1"]).into(),
            Series::new("rating".into(), &[Some(8.5), None]).into(),
            Series::new("members".into(), &[1200i64, 300]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_raw_table_try_cast() {
        let ds = AnimeDataset::from_frame(raw(), Path::new("anime.csv")).unwrap();

        assert_eq!(ds.frame.height(), 2);
        let episodes: Vec<Option<f64>> = ds
            .frame
            .column("episodes")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(episodes, vec![None, Some(1.0)]);
        assert_eq!(ds.frame.column("genre").unwrap().str().unwrap().get(1), None);

        let types: Vec<_> = ds.columns.iter().map(|c| c.data_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["BIGINT", "VARCHAR", "VARCHAR", "VARCHAR", "DOUBLE", "DOUBLE", "BIGINT"]
        );

        let nulls: Vec<_> = ds.missing.iter().map(|m| m.null_count).collect();
        assert_eq!(nulls, vec![0, 0, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_load_reads_csv_with_unknown_episodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anime.csv");
        std::fs::write(
            &path,
            "anime_id,name,genre,type,episodes,rating,members\n\
             1,A,\"Action, Comedy\",TV,Unknown,8.5,1200\n\
             2,B,,Movie,1,,300\n",
        )
        .unwrap();

        let ds = AnimeDataset::load(&path).unwrap();
        assert_eq!(ds.source, path);
        assert_eq!(ds.frame.height(), 2);
        assert_eq!(
            ds.frame.column("genre").unwrap().str().unwrap().get(0),
            Some("Action, Comedy")
        );
        let nulls: Vec<_> = ds.missing.iter().map(|m| m.null_count).collect();
        assert_eq!(nulls, vec![0, 0, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let frame = raw().drop("rating").unwrap();
        let err = AnimeDataset::from_frame(frame, Path::new("anime.csv")).unwrap_err();
        match err {
            EdaError::Schema { missing, .. } => assert_eq!(missing, vec!["rating"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AnimeDataset::load(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, EdaError::FileNotFound { .. }));
    }
}
