//! Record loading.
//!
//! Reads registration and check-in sources through the normalizer and
//! projects them onto the canonical record shapes. Missing and empty files
//! degrade to empty record sets with a warning unless the options make them
//! fatal; a source without an identifier column always fails.

use std::path::Path;

use attend_common::{parse_or_null, string_column_values};
use attend_model::{
    AttendeeId, CATEGORY_UNKNOWN, COL_ATTENDEE_ID, COL_CATEGORY, COL_CHECKIN_TIME, CheckinRecord,
    ColumnRole, LoadOptions, LoadWarning, MissingSourceMode, RegistrationRecord,
};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use crate::csv::{SourceStatus, read_csv_frame, source_status};
use crate::error::{IngestError, Result};
use crate::normalize::{NormalizedFrame, normalize_columns};

/// Records from one source plus the warnings raised while loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub warnings: Vec<LoadWarning>,
}

impl<T> Loaded<T> {
    fn unavailable(warning: LoadWarning) -> Self {
        Self {
            records: Vec::new(),
            warnings: vec![warning],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Both logical record sets for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSources {
    pub registrations: Vec<RegistrationRecord>,
    pub checkins: Vec<CheckinRecord>,
    pub warnings: Vec<LoadWarning>,
}

enum Source {
    Table(DataFrame),
    Unavailable(LoadWarning),
}

fn open_source(path: &Path, options: &LoadOptions) -> Result<Source> {
    match source_status(path)? {
        SourceStatus::Present => Ok(Source::Table(read_csv_frame(path)?)),
        SourceStatus::Missing => match options.missing_source {
            MissingSourceMode::Fail => Err(IngestError::SourceNotFound {
                path: path.to_path_buf(),
            }),
            MissingSourceMode::Degrade => {
                let warning = LoadWarning::SourceNotFound {
                    path: path.to_path_buf(),
                };
                warn!(%warning, "using empty record set");
                Ok(Source::Unavailable(warning))
            }
        },
        SourceStatus::Empty => {
            let warning = LoadWarning::EmptySource {
                path: path.to_path_buf(),
            };
            warn!(%warning, "using empty record set");
            Ok(Source::Unavailable(warning))
        }
    }
}

/// Loads a registration source projected to `{attendee_id, category}`.
///
/// When the source has no category column every record gets
/// [`CATEGORY_UNKNOWN`]; blank category cells stay `None` for the cleaner.
pub fn load_registration_data(
    path: &Path,
    options: &LoadOptions,
) -> Result<Loaded<RegistrationRecord>> {
    let span = info_span!("load_registration", path = %path.display());
    let _guard = span.enter();
    match open_source(path, options)? {
        Source::Unavailable(warning) => Ok(Loaded::unavailable(warning)),
        Source::Table(df) => {
            let normalized = normalize_columns(&df)?;
            registrations_from(&normalized, path)
        }
    }
}

/// Loads a check-in source projected to `{attendee_id, checkin_time}`.
///
/// Timestamps go through [`parse_or_null`]; values it rejects become null
/// and are reported as [`LoadWarning::UnparseableTimestamp`].
pub fn load_checkin_data(path: &Path, options: &LoadOptions) -> Result<Loaded<CheckinRecord>> {
    let span = info_span!("load_checkin", path = %path.display());
    let _guard = span.enter();
    match open_source(path, options)? {
        Source::Unavailable(warning) => Ok(Loaded::unavailable(warning)),
        Source::Table(df) => {
            let normalized = normalize_columns(&df)?;
            checkins_from(&normalized, path, BlankIds::Report)
        }
    }
}

/// Loads both record sets for an event.
///
/// With a check-in path the two files load independently. Without one the
/// registration file is read once: if it carries a check-in column both
/// sets come from it, otherwise every registered attendee gets a check-in
/// record with no time.
pub fn load_event_data(
    registration: &Path,
    checkin: Option<&Path>,
    options: &LoadOptions,
) -> Result<EventSources> {
    if let Some(checkin) = checkin {
        let registrations = load_registration_data(registration, options)?;
        let checkins = load_checkin_data(checkin, options)?;
        let mut warnings = registrations.warnings;
        warnings.extend(checkins.warnings);
        return Ok(EventSources {
            registrations: registrations.records,
            checkins: checkins.records,
            warnings,
        });
    }

    let span = info_span!("load_combined", path = %registration.display());
    let _guard = span.enter();
    let normalized = match open_source(registration, options)? {
        Source::Unavailable(warning) => {
            return Ok(EventSources {
                warnings: vec![warning],
                ..EventSources::default()
            });
        }
        Source::Table(df) => normalize_columns(&df)?,
    };

    let registrations = registrations_from(&normalized, registration)?;
    let checkins = if normalized.mapping.has(ColumnRole::CheckinTime) {
        // Blank ids were already reported by the registration projection.
        checkins_from(&normalized, registration, BlankIds::Skip)?
    } else {
        let records: Vec<CheckinRecord> = registrations
            .records
            .iter()
            .map(|record| CheckinRecord::new(record.attendee_id.clone(), None))
            .collect();
        debug!(
            records = records.len(),
            "no check-in column; every attendee has an empty check-in"
        );
        Loaded {
            records,
            warnings: column_warning(&normalized, ColumnRole::CheckinTime),
        }
    };

    let mut warnings = registrations.warnings;
    warnings.extend(checkins.warnings);
    Ok(EventSources {
        registrations: registrations.records,
        checkins: checkins.records,
        warnings,
    })
}

fn registrations_from(
    normalized: &NormalizedFrame,
    path: &Path,
) -> Result<Loaded<RegistrationRecord>> {
    let frame = &normalized.frame;
    let ids = string_column_values(frame, COL_ATTENDEE_ID)?;
    let categories = if normalized.mapping.has(ColumnRole::Category) {
        string_column_values(frame, COL_CATEGORY)?
    } else {
        vec![Some(CATEGORY_UNKNOWN.to_string()); ids.len()]
    };

    let mut warnings = column_warning(normalized, ColumnRole::Category);
    let mut records = Vec::with_capacity(ids.len());
    for (row, (id, category)) in ids.into_iter().zip(categories).enumerate() {
        if let Some(attendee_id) = attendee_id(id, path, row, BlankIds::Report, &mut warnings) {
            records.push(RegistrationRecord::new(attendee_id, category));
        }
    }

    info!(
        path = %path.display(),
        records = records.len(),
        "loaded registration records"
    );
    Ok(Loaded { records, warnings })
}

fn checkins_from(
    normalized: &NormalizedFrame,
    path: &Path,
    blank_ids: BlankIds,
) -> Result<Loaded<CheckinRecord>> {
    let frame = &normalized.frame;
    let ids = string_column_values(frame, COL_ATTENDEE_ID)?;
    let times = if normalized.mapping.has(ColumnRole::CheckinTime) {
        string_column_values(frame, COL_CHECKIN_TIME)?
    } else {
        vec![None; ids.len()]
    };

    let mut warnings = column_warning(normalized, ColumnRole::CheckinTime);
    let mut unparseable = 0usize;
    let mut records = Vec::with_capacity(ids.len());
    for (row, (id, raw_time)) in ids.into_iter().zip(times).enumerate() {
        let Some(attendee_id) = attendee_id(id, path, row, blank_ids, &mut warnings) else {
            continue;
        };
        let checkin_time = match raw_time {
            Some(raw) => {
                let parsed = parse_or_null(&raw);
                if parsed.is_none() {
                    unparseable += 1;
                    debug!(attendee_id = %attendee_id, value = %raw, "unparseable check-in time");
                    warnings.push(LoadWarning::UnparseableTimestamp {
                        attendee_id: attendee_id.clone(),
                        value: raw,
                    });
                }
                parsed
            }
            None => None,
        };
        records.push(CheckinRecord::new(attendee_id, checkin_time));
    }

    if unparseable > 0 {
        warn!(
            path = %path.display(),
            count = unparseable,
            "unparseable check-in times treated as no-shows"
        );
    }
    info!(
        path = %path.display(),
        records = records.len(),
        "loaded check-in records"
    );
    Ok(Loaded { records, warnings })
}

/// The missing-column warning relevant to one projection, logged once.
fn column_warning(normalized: &NormalizedFrame, role: ColumnRole) -> Vec<LoadWarning> {
    let warning = normalized.warning_for(role).cloned();
    if let Some(warning) = &warning {
        warn!(%warning, "using default values");
    }
    warning.into_iter().collect()
}

/// Whether a projection reports rows with a blank identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlankIds {
    Report,
    /// Another projection of the same table already reported them.
    Skip,
}

/// Builds the identifier for a data row, recording a warning when it is blank.
fn attendee_id(
    value: Option<String>,
    path: &Path,
    row: usize,
    blank_ids: BlankIds,
    warnings: &mut Vec<LoadWarning>,
) -> Option<AttendeeId> {
    match value.map(AttendeeId::new) {
        Some(Ok(id)) => Some(id),
        _ => {
            if blank_ids == BlankIds::Report {
                let warning = LoadWarning::BlankIdentifier {
                    path: path.to_path_buf(),
                    row: row + 1,
                };
                warn!(%warning, "skipping row");
                warnings.push(warning);
            }
            None
        }
    }
}
