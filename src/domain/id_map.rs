use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{EdaError, Result};
use crate::table::{self, Staged};

/// Dense re-encoding of sparse external ids onto `0..N`.
///
/// Distinct ids are sorted ascending and numbered in that order, so the map
/// depends only on the set of ids given, never on their input order.
///
/// # Examples
///
/// ```rust
/// use anime_eda::domain::IdMap;
///
/// let map = IdMap::from_ids([40, 7, 40, 12]);
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.encode(7), Some(0));
/// assert_eq!(map.encode(40), Some(2));
/// assert_eq!(map.decode(1), Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    forward: BTreeMap<i64, u32>,
    reverse: Vec<i64>,
}

impl IdMap {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let distinct: BTreeSet<i64> = ids.into_iter().collect();
        let reverse: Vec<i64> = distinct.into_iter().collect();
        let forward = reverse
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, Self::dense(idx)))
            .collect();

        Self { forward, reverse }
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn dense(idx: usize) -> u32 {
        idx as u32
    }

    #[must_use]
    pub fn encode(&self, id: i64) -> Option<u32> {
        self.forward.get(&id).copied()
    }

    #[must_use]
    pub fn decode(&self, idx: u32) -> Option<i64> {
        self.reverse.get(idx as usize).copied()
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.forward.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// `(original id, dense id)` pairs in dense-id order.
    pub fn entries(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.reverse
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, Self::dense(idx)))
    }

    /// Persists the map as a two-column CSV (`id_column,idx_column`).
    pub fn save(&self, path: &Path, id_column: &str, idx_column: &str) -> Result<()> {
        table::commit(vec![self.stage(path, id_column, idx_column)?])
    }

    /// Writes the map to a temporary file next to `path` without publishing
    /// it; see [`table::commit`].
    pub fn stage(&self, path: &Path, id_column: &str, idx_column: &str) -> Result<Staged> {
        table::stage_records(
            path,
            &[id_column, idx_column],
            self.entries()
                .map(|(id, idx)| [id.to_string(), idx.to_string()]),
        )
    }

    /// Loads a map written by [`IdMap::save`], checking that it is a
    /// bijection onto `0..N`.
    pub fn load(path: &Path, id_column: &str, idx_column: &str) -> Result<Self> {
        let mut reader = table::open_reader(path)?;
        let headers = table::read_headers(&mut reader, path, &[id_column, idx_column])?;
        let id_pos = column_index(&headers, id_column);
        let idx_pos = column_index(&headers, idx_column);

        let mut pairs: Vec<(u32, i64)> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| EdaError::csv(path, Some(&headers), e))?;
            let line = record
                .position()
                .map_or_else(String::new, |p| format!("line {}", p.line()));
            let id = field(&record, id_pos)
                .parse::<i64>()
                .map_err(|_| EdaError::parse(id_column, field(&record, id_pos), &line))?;
            let idx = field(&record, idx_pos)
                .parse::<u32>()
                .map_err(|_| EdaError::parse(idx_column, field(&record, idx_pos), &line))?;
            pairs.push((idx, id));
        }

        pairs.sort_unstable();
        let dense = pairs
            .iter()
            .enumerate()
            .all(|(pos, (idx, _))| *idx as usize == pos);
        let ascending = pairs.windows(2).all(|w| w[0].1 < w[1].1);
        if !dense || !ascending {
            return Err(EdaError::parse(
                idx_column,
                "non-dense mapping",
                path.display().to_string(),
            ));
        }

        let map = Self::from_ids(pairs.into_iter().map(|(_, id)| id));
        Ok(map)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> usize {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .unwrap_or_default()
}

fn field(record: &csv::StringRecord, pos: usize) -> &str {
    record.get(pos).unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_is_dense_and_sorted() {
        let map = IdMap::from_ids([30, 10, 20, 10]);
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries, vec![(10, 0), (20, 1), (30, 2)]);
    }

    #[test]
    fn test_from_ids_ignores_input_order() {
        let a = IdMap::from_ids([5, 3, 9, 1]);
        let b = IdMap::from_ids([9, 1, 5, 3, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_ids() {
        let map = IdMap::from_ids([1, 2]);
        assert_eq!(map.encode(3), None);
        assert_eq!(map.decode(2), None);
        assert!(!map.contains(3));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anime_id_map.csv");
        let map = IdMap::from_ids([32281, 5114, 28977]);

        map.save(&path, "anime_id", "anime_idx").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "anime_id,anime_idx\n5114,0\n28977,1\n32281,2\n");

        let loaded = IdMap::load(&path, "anime_id", "anime_idx").unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_load_rejects_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_id_map.csv");
        std::fs::write(&path, "user_id,user_idx\n1,0\n2,2\n").unwrap();

        assert!(IdMap::load(&path, "user_id", "user_idx").is_err());
    }
}
