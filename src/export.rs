use std::path::Path;

use crate::error::WorkerError;
use crate::position::aggregate::PositionRecord;

/// Writes the aggregated position to `path` as CSV.
///
/// Creates or truncates the target file, writes a `LocalTime,Volume` header
/// and one row per record in the order supplied. `Decimal` rendering is
/// locale-independent (decimal point, no grouping), so the output is
/// byte-identical across host environments.
///
/// Any I/O failure is reported as [`WorkerError::Export`] carrying the
/// target file name; nothing is swallowed here.
pub fn write_csv(records: &[PositionRecord], path: &Path) -> Result<(), WorkerError> {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut writer = csv::Writer::from_path(path).map_err(|source| WorkerError::Export {
        file: file.clone(),
        source,
    })?;

    for record in records {
        writer.serialize(record).map_err(|source| WorkerError::Export {
            file: file.clone(),
            source,
        })?;
    }

    writer.flush().map_err(|source| WorkerError::Export {
        file: file.clone(),
        source: source.into(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn record(local_time: &str, volume: &str) -> PositionRecord {
        PositionRecord {
            local_time: local_time.into(),
            volume: volume.parse::<Decimal>().unwrap(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_supplied_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PowerPosition_20240301_0930.csv");

        let records = vec![record("23:00", "15.123"), record("22:00", "-3.5")];
        write_csv(&records, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "LocalTime,Volume\n23:00,15.123\n22:00,-3.5\n");
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&[record("23:00", "1"), record("00:00", "2")], &path).unwrap();
        write_csv(&[record("23:00", "9.999")], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "LocalTime,Volume\n23:00,9.999\n");
    }

    #[test]
    fn unwritable_path_reports_a_named_export_failure() {
        let path = Path::new("/no/such/folder/PowerPosition_20240301_0930.csv");
        let err = write_csv(&[record("23:00", "1")], path).unwrap_err();

        match err {
            WorkerError::Export { file, .. } => {
                assert_eq!(file, "PowerPosition_20240301_0930.csv");
            }
            other => panic!("expected export error, got {other:?}"),
        }
    }
}
