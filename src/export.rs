//! JSON export of the current view.
//!
//! Format contract: UTF-8, pretty-printed, a single array of facility
//! records, saved as `air-pollution-data-<YYYY-MM-DD>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::ExportError;
use crate::types::FacilityRecord;

pub fn export_filename(date: NaiveDate) -> String {
    format!("air-pollution-data-{}.json", date.format("%Y-%m-%d"))
}

pub fn to_json(records: &[FacilityRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_json(json: &str) -> Result<Vec<FacilityRecord>, ExportError> {
    Ok(serde_json::from_str(json)?)
}

/// Write `records` into `dir` under the dated export name and return the path.
pub fn write_export(
    dir: &Path,
    records: &[FacilityRecord],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename(date));
    let body = to_json(records)?;
    fs::write(&path, body).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), records = records.len(), "exported facility view");
    Ok(path)
}

/// Today's date in UTC, as used for export names.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::rng::FacilityRng;

    fn sample() -> Vec<FacilityRecord> {
        generate(25, &mut FacilityRng::from_seed_u64(8)).unwrap()
    }

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_filename(date), "air-pollution-data-2024-03-07.json");
    }

    #[test]
    fn json_round_trips() {
        let records = sample();
        let json = to_json(&records).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains('\n'));
        assert!(json.contains("\"complianceScore\""));
        assert_eq!(from_json(&json).unwrap(), records);
    }

    #[test]
    fn empty_view_exports_empty_array() {
        let json = to_json(&[]).unwrap();
        assert_eq!(json, "[]");
        assert!(from_json(&json).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(from_json("{\"id\": 1}"), Err(ExportError::Json(_))));
    }

    #[test]
    fn writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let records = sample();
        let path = write_export(dir.path(), &records, date).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("air-pollution-data-2025-01-31.json")
        );
        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_json(&body).unwrap(), records);
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_export(&missing, &sample(), today()).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
