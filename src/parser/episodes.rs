use crate::constants::UNKNOWN_EPISODES;
use crate::error::{EdaError, Result};

/// Parses the raw `episodes` token into an episode count.
///
/// `Unknown` and an empty field map to `None`; any other token must be a
/// non-negative integer.
pub fn parse_episodes(token: &str, location: &str) -> Result<Option<u32>> {
    let token = token.trim();

    if token.is_empty() || token == UNKNOWN_EPISODES {
        return Ok(None);
    }

    token
        .parse::<u32>()
        .map(Some)
        .map_err(|_| EdaError::parse("episodes", token, location))
}
