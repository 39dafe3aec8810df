use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::constants::columns;
use crate::error::{EdaError, Result};
use crate::models::RawRating;
use crate::report::views::round_to;
use crate::table;

/// Overview of a raw or processed rating table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub rows: usize,
    pub unrated: usize,
    pub distinct_users: usize,
    pub distinct_anime: usize,
    /// Mean over rated rows only
    pub mean_rating: Option<f64>,
}

impl RatingSummary {
    pub fn of(ratings: impl IntoIterator<Item = RawRating>) -> Self {
        let mut users = HashSet::new();
        let mut anime = HashSet::new();
        let (mut rows, mut unrated, mut sum, mut rated) = (0usize, 0usize, 0i64, 0usize);

        for r in ratings {
            rows += 1;
            users.insert(r.user_id);
            anime.insert(r.anime_id);
            if r.is_unrated() {
                unrated += 1;
            } else {
                sum += i64::from(r.rating);
                rated += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let mean_rating = (rated > 0).then(|| round_to(sum as f64 / rated as f64, 3));

        Self {
            rows,
            unrated,
            distinct_users: users.len(),
            distinct_anime: anime.len(),
            mean_rating,
        }
    }

    /// Streams the table without holding every row in memory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = table::open_reader(path)?;
        let headers = table::read_headers(&mut reader, path, columns::RAW_RATING)?;

        let mut failure = None;
        let summary = Self::of(
            reader
                .deserialize::<RawRating>()
                .map_while(|row| match row {
                    Ok(rating) => Some(rating),
                    Err(e) => {
                        failure = Some(EdaError::csv(path, Some(&headers), e));
                        None
                    }
                }),
        );

        match failure {
            Some(err) => Err(err),
            None => Ok(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rating.csv");
        std::fs::write(
            &path,
            "user_id,anime_id,rating\n1,20,-1\n1,24,8\n2,20,6\n3,79,-1\n",
        )
        .unwrap();

        let summary = RatingSummary::load(&path).unwrap();
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.unrated, 2);
        assert_eq!(summary.distinct_users, 3);
        assert_eq!(summary.distinct_anime, 3);
        assert_eq!(summary.mean_rating, Some(7.0));
    }

    #[test]
    fn test_bad_row_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rating.csv");
        std::fs::write(&path, "user_id,anime_id,rating\n1,20,x\n").unwrap();

        assert!(matches!(
            RatingSummary::load(&path),
            Err(EdaError::Parse { .. })
        ));
    }
}
