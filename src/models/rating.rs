use serde::{Deserialize, Serialize};

use crate::constants::UNRATED_SENTINEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRating {
    pub user_id: i64,
    pub anime_id: i64,
    pub rating: i32,
}

impl RawRating {
    #[must_use]
    pub const fn is_unrated(&self) -> bool {
        self.rating == UNRATED_SENTINEL
    }
}

/// Row of the processed rating table: original ids kept next to their dense
/// re-encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: i64,
    pub anime_id: i64,
    pub rating: i32,
    pub user_idx: u32,
    pub anime_idx: u32,
}
