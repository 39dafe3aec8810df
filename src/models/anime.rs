use serde::{Deserialize, Serialize};

/// Row of the raw `anime.csv` table.
///
/// `episodes` stays textual here; it is parsed during preprocessing so the
/// `Unknown` token can be told apart from malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnime {
    pub anime_id: i64,
    pub name: String,
    pub genre: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<String>,
    pub rating: Option<f64>,
    pub members: i64,
}

/// Row of the processed anime table.
///
/// Field order is the column order of `anime_processed.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub anime_id: i64,
    pub name: String,
    pub genre: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<u32>,
    pub rating: f64,
    pub members: i64,
    pub anime_idx: u32,
}

impl Anime {
    /// Trimmed, non-empty genres of this record.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_genres(&self.genre)
    }
}

/// Splits a comma-separated genre list, trimming each entry.
pub fn split_genres(genre: &str) -> impl Iterator<Item = &str> {
    genre.split(',').map(str::trim).filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_genres() {
        let genres: Vec<_> = split_genres("Action, Comedy,,  Drama ").collect();
        assert_eq!(genres, vec!["Action", "Comedy", "Drama"]);
    }
}
