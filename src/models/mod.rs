pub mod anime;
pub mod rating;

pub use anime::{Anime, RawAnime};
pub use rating::{RawRating, Rating};
