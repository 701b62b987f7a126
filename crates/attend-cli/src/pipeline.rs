//! Event processing pipeline with explicit stages.
//!
//! 1. **Load**: Read the registration and check-in sources
//! 2. **Clean**: Deduplicate each side and default missing categories
//! 3. **Merge**: Left join check-ins onto registrations, derive no-shows
//! 4. **Metrics**: Compute the event summary
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use attend_ingest::{EventSources, load_event_data};
use attend_metrics::EventSummary;
use attend_model::{AttendanceSet, LoadOptions, LoadWarning};
use attend_transform::{clean_checkin, clean_registration, merge};

/// Everything one report run produces.
#[derive(Debug)]
pub struct EventReport {
    pub set: AttendanceSet,
    pub summary: EventSummary,
    pub warnings: Vec<LoadWarning>,
}

/// Stage 1: load both record sets.
pub fn load(
    registration: &Path,
    checkin: Option<&Path>,
    options: &LoadOptions,
) -> Result<EventSources> {
    load_event_data(registration, checkin, options)
        .with_context(|| format!("load event data from {}", registration.display()))
}

/// Stages 2 and 3: clean both sides and merge them.
pub fn reconcile(sources: EventSources) -> AttendanceSet {
    let registrations = clean_registration(sources.registrations);
    let checkins = clean_checkin(sources.checkins);
    merge(&registrations, &checkins)
}

/// Runs every stage for one event.
pub fn run_pipeline(
    registration: &Path,
    checkin: Option<&Path>,
    options: &LoadOptions,
) -> Result<EventReport> {
    let span = info_span!("event", registration = %registration.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut sources = load(registration, checkin, options)?;
    let warnings = std::mem::take(&mut sources.warnings);
    let set = reconcile(sources);
    let summary = EventSummary::from_set(&set);

    info!(
        attendees = set.len(),
        attended = summary.attendance.attended,
        warnings = warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "event processed"
    );
    Ok(EventReport {
        set,
        summary,
        warnings,
    })
}
