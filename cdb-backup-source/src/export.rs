//! Result file export.
//!
//! Writes the record list (not the aggregate identifier) to a path as pretty
//! JSON. The caller decides whether a failure here matters; the lookup treats
//! it as best-effort.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::lookup::BackupRecord;
use crate::utils::errors::Result;

pub fn write_records(path: &Path, records: &[BackupRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), count = records.len(), "wrote result output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::LookupError;

    fn record(backup_id: i64) -> BackupRecord {
        BackupRecord {
            time: "2026-08-01 03:00:00".to_string(),
            finish_time: "2026-08-01 03:05:00".to_string(),
            size: 2048,
            backup_id,
            backup_model: "physical".to_string(),
            intranet_url: "https://intranet.example/b".to_string(),
            internet_url: "https://internet.example/b".to_string(),
            creator: "root".to_string(),
        }
    }

    #[test]
    fn test_write_records_round_trip() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("out.json");

        write_records(&path, &[record(1), record(2)])?;

        let content = fs::read_to_string(&path)?;
        let parsed: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["backup_id"], 2);
        assert_eq!(parsed[0]["backup_model"], "physical");
        Ok(())
    }

    #[test]
    fn test_write_records_empty_list() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("empty.json");

        write_records(&path, &[])?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_write_records_unwritable_path() {
        let err = write_records(Path::new("/nonexistent-dir/deep/out.json"), &[record(1)])
            .unwrap_err();
        assert!(matches!(err, LookupError::Io(_)));
    }
}
