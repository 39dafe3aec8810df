//! CSV table I/O: header validation, typed reads and staged atomic writes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{EdaError, Result};

/// Opens a CSV file with headers, failing with [`EdaError::FileNotFound`]
/// when it does not exist.
pub fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    let file = std::fs::File::open(path).map_err(|e| EdaError::io(path, e))?;
    Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(file))
}

/// Reads and validates the header row against the required column names.
pub fn read_headers(
    reader: &mut csv::Reader<std::fs::File>,
    path: &Path,
    required: &[&str],
) -> Result<csv::StringRecord> {
    let headers = reader
        .headers()
        .map_err(|e| EdaError::csv(path, None, e))?
        .clone();
    require_columns(&headers, path, required)?;
    Ok(headers)
}

pub fn require_columns(headers: &csv::StringRecord, path: &Path, required: &[&str]) -> Result<()> {
    require_fields(headers.iter().map(str::trim), path, required)
}

/// Fails with [`EdaError::Schema`] listing every `required` name absent from
/// `fields`.
pub fn require_fields<'a, I>(fields: I, path: &Path, required: &[&str]) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = fields.into_iter().collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !present.contains(col))
        .map(|col| (*col).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EdaError::Schema {
            path: path.to_path_buf(),
            missing,
        })
    }
}

/// Reads every row of `path` into `T`, after checking that `required` columns
/// exist.
pub fn read_rows<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path, required)?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| EdaError::csv(path, Some(&headers), e))?;

    debug!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// A fully written temporary file waiting to be renamed onto its target.
///
/// Dropping it without calling [`commit`] removes the temporary file and
/// leaves the target untouched.
#[derive(Debug)]
pub struct Staged {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl Staged {
    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Serializes `rows` to CSV in a temporary sibling of `path`.
pub fn stage_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<Staged> {
    stage(path, |out| {
        let mut writer = csv::Writer::from_writer(out);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })
}

/// Stages a header-first CSV built from raw string records.
pub fn stage_records<I, R>(path: &Path, headers: &[&str], records: I) -> Result<Staged>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    stage(path, |out| {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(headers)?;
        for record in records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    })
}

pub fn stage_text(path: &Path, content: &str) -> Result<Staged> {
    stage(path, |out| {
        out.write_all(content.as_bytes())?;
        Ok(())
    })
}

fn stage<F>(path: &Path, fill: F) -> Result<Staged>
where
    F: FnOnce(&mut NamedTempFile) -> std::result::Result<(), csv::Error>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| EdaError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| EdaError::io(dir, e))?;
    fill(&mut tmp).map_err(|e| EdaError::csv(path, None, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| EdaError::io(tmp.path(), e))?;

    Ok(Staged {
        tmp,
        target: path.to_path_buf(),
    })
}

/// Renames every staged file onto its target.
///
/// Targets are checked up front, so a target that cannot be replaced fails
/// the whole batch before any file is renamed.
pub fn commit(staged: Vec<Staged>) -> Result<()> {
    if let Some(blocked) = staged.iter().find(|s| s.target.is_dir()) {
        return Err(EdaError::Io {
            path: blocked.target.clone(),
            source: std::io::Error::other("target is a directory"),
        });
    }

    for Staged { tmp, target } in staged {
        tmp.persist(&target).map_err(|e| EdaError::Io {
            path: target.clone(),
            source: e.error,
        })?;
        debug!(path = %target.display(), "Wrote file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: i64,
        label: Option<String>,
    }

    #[test]
    fn test_write_then_read_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let rows = vec![
            Row {
                id: 1,
                label: Some("a".to_string()),
            },
            Row { id: 2, label: None },
        ];

        commit(vec![stage_rows(&path, &rows).unwrap()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,label\n1,a\n2,\n");

        let back: Vec<Row> = read_rows(&path, &["id", "label"]).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows::<Row>(&dir.path().join("absent.csv"), &["id"]).unwrap_err();
        assert!(matches!(err, EdaError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        std::fs::write(&path, "id\n1\n").unwrap();

        let err = read_rows::<Row>(&path, &["id", "label"]).unwrap_err();
        match err {
            EdaError::Schema { missing, .. } => assert_eq!(missing, vec!["label"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_number_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        std::fs::write(&path, "id,label\nx,a\n").unwrap();

        let err = read_rows::<Row>(&path, &["id"]).unwrap_err();
        assert!(matches!(err, EdaError::Parse { ref column, .. } if column == "id"));
    }

    #[test]
    fn test_dropped_stage_publishes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let staged = stage_text(&path, "pending").unwrap();
        assert_eq!(staged.target(), path);
        drop(staged);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_blocked_target_fails_whole_batch() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "old").unwrap();
        std::fs::create_dir(&second).unwrap();

        let staged = vec![
            stage_text(&first, "new").unwrap(),
            stage_text(&second, "new").unwrap(),
        ];
        let err = commit(staged).unwrap_err();

        assert!(matches!(err, EdaError::Io { ref path, .. } if *path == second));
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "old");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        commit(vec![stage_text(&path, "hello").unwrap()]).unwrap();
        commit(vec![stage_text(&path, "again").unwrap()]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "again");
    }
}
