//! Polars helper functions.
//!
//! This module provides helpers for pulling plain Rust values out of Polars
//! frames, plus the trimming rules applied to every header label and cell.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, PolarsResult};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use attend_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("A1")), "A1");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Normalizes a header label: trims whitespace and a leading UTF-8 BOM.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Normalizes a cell value, returning `None` when nothing is left.
pub fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads a column as normalized text values, one entry per row.
///
/// Blank cells and nulls both come back as `None`.
pub fn string_column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    if let Ok(series) = column
        .cast(&DataType::String)
        .map(Column::take_materialized_series)
    {
        let chunked = series.str()?;
        return Ok(chunked.iter().map(|v| v.and_then(normalize_cell)).collect());
    }
    (0..column.len())
        .map(|idx| {
            column
                .get(idx)
                .map(|value| normalize_cell(&any_to_string(value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Attendee_ID "), "Attendee_ID");
        assert_eq!(normalize_label("\u{feff}ID"), "ID");
        assert_eq!(normalize_label("Checkin"), "Checkin");
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell(""), None);
        assert_eq!(normalize_cell("   "), None);
        assert_eq!(normalize_cell(" A1 "), Some("A1".to_string()));
    }

    #[test]
    fn test_string_column_values_from_strings() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), &["A1", " ", "A3 "]).into_column(),
        ])
        .unwrap();
        let values = string_column_values(&df, "id").unwrap();
        assert_eq!(
            values,
            vec![Some("A1".to_string()), None, Some("A3".to_string())]
        );
    }

    #[test]
    fn test_string_column_values_from_integers() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), &[Some(101i64), None, Some(103)]).into_column(),
        ])
        .unwrap();
        let values = string_column_values(&df, "id").unwrap();
        assert_eq!(
            values,
            vec![Some("101".to_string()), None, Some("103".to_string())]
        );
    }

    #[test]
    fn test_string_column_values_missing_column() {
        let df = DataFrame::new(vec![Series::new("id".into(), &["A1"]).into_column()]).unwrap();
        assert!(string_column_values(&df, "category").is_err());
    }
}
