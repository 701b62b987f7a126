//! Merged set as a DataFrame.

use std::fs::File;
use std::path::Path;

use attend_model::{AttendanceSet, COL_ATTENDEE_ID, COL_CATEGORY, COL_CHECKIN_TIME, COL_NO_SHOW};
use polars::prelude::{
    Column, CsvWriter, DataFrame, DataType, IntoColumn, NamedFrom, PolarsResult, SerWriter,
    Series, TimeUnit,
};
use tracing::info;

use crate::error::{ExportError, Result};

/// Builds `{attendee_id, category, checkin_time, no_show}` from the merged set.
///
/// `checkin_time` is a millisecond datetime column, null for no-shows.
pub fn attendance_frame(set: &AttendanceSet) -> PolarsResult<DataFrame> {
    let ids: Vec<&str> = set.iter().map(|r| r.attendee_id().as_str()).collect();
    let categories: Vec<&str> = set.iter().map(|r| r.category()).collect();
    let millis: Vec<Option<i64>> = set
        .iter()
        .map(|r| r.checkin_time().map(|t| t.and_utc().timestamp_millis()))
        .collect();
    let no_shows: Vec<bool> = set.iter().map(|r| r.no_show()).collect();

    let checkin_time = Series::new(COL_CHECKIN_TIME.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    let columns: Vec<Column> = vec![
        Series::new(COL_ATTENDEE_ID.into(), ids).into_column(),
        Series::new(COL_CATEGORY.into(), categories).into_column(),
        checkin_time.into_column(),
        Series::new(COL_NO_SHOW.into(), no_shows).into_column(),
    ];
    DataFrame::new(columns)
}

/// Writes the merged set to `path` as CSV with a header row.
pub fn write_attendance_csv(set: &AttendanceSet, path: &Path) -> Result<()> {
    let mut df = attendance_frame(set)?;
    let mut file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    info!(path = %path.display(), rows = df.height(), "wrote attendance export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use attend_common::string_column_values;
    use attend_model::{AttendeeId, AttendeeRecord};
    use chrono::NaiveDate;

    fn sample() -> AttendanceSet {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        AttendanceSet::new(vec![
            AttendeeRecord::new(AttendeeId::new("A1").unwrap(), "student", Some(time)),
            AttendeeRecord::new(AttendeeId::new("A2").unwrap(), "guest", None),
        ])
    }

    #[test]
    fn frame_has_canonical_columns() {
        let df = attendance_frame(&sample()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![COL_ATTENDEE_ID, COL_CATEGORY, COL_CHECKIN_TIME, COL_NO_SHOW]
        );
        assert_eq!(df.height(), 2);
        assert_eq!(
            df.column(COL_CHECKIN_TIME).unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column(COL_CHECKIN_TIME).unwrap().null_count(), 1);
        let ids = string_column_values(&df, COL_ATTENDEE_ID).unwrap();
        assert_eq!(ids, vec![Some("A1".to_string()), Some("A2".to_string())]);
    }

    #[test]
    fn empty_set_gives_empty_frame() {
        let df = attendance_frame(&AttendanceSet::default()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn writes_csv_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        write_attendance_csv(&sample(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("attendee_id,category,checkin_time,no_show")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("A1,student,2024-05-01"));
        assert!(first.ends_with("false"));
        assert_eq!(lines.next(), Some("A2,guest,,true"));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let err = write_attendance_csv(&sample(), Path::new("/no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
