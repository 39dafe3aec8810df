pub const UNKNOWN_EPISODES: &str = "Unknown";

pub const UNRATED_SENTINEL: i32 = -1;

pub mod files {

    pub const RAW_ANIME: &str = "anime.csv";

    pub const RAW_RATING: &str = "rating.csv";

    pub const PROCESSED_ANIME: &str = "anime_processed.csv";

    pub const PROCESSED_RATING: &str = "rating_processed.csv";

    pub const ANIME_ID_MAP: &str = "anime_id_map.csv";

    pub const USER_ID_MAP: &str = "user_id_map.csv";

    pub const REPORT_PREFIX: &str = "anime_eda_";

    pub const REPORT_LATEST: &str = "anime_eda_latest.html";
}

pub mod columns {

    pub const ANIME_ID: &str = "anime_id";

    pub const ANIME_IDX: &str = "anime_idx";

    pub const USER_ID: &str = "user_id";

    pub const USER_IDX: &str = "user_idx";

    pub const NAME: &str = "name";

    pub const GENRE: &str = "genre";

    pub const TYPE: &str = "type";

    pub const EPISODES: &str = "episodes";

    pub const RATING: &str = "rating";

    pub const MEMBERS: &str = "members";

    pub const RAW_ANIME: &[&str] = &[ANIME_ID, NAME, GENRE, TYPE, EPISODES, RATING, MEMBERS];

    pub const RAW_RATING: &[&str] = &[USER_ID, ANIME_ID, RATING];

    /// Columns the report views read; `anime_id` is optional there.
    pub const REPORT_ANIME: &[&str] = &[NAME, GENRE, TYPE, EPISODES, RATING, MEMBERS];

    /// Columns the report view casts to DOUBLE, nulling anything unparseable.
    pub const CAST_DOUBLE: &[&str] = &[EPISODES, RATING];
}

pub mod defaults {

    pub const POPULARITY_FLOOR: i64 = 1000;

    pub const TOP_N: usize = 10;

    pub const GENRE_LIMIT: usize = 20;

    pub const PICKUP_COUNT: usize = 5;

    pub const SCATTER_LIMIT: usize = 2000;
}
