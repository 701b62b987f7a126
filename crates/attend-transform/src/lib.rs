//! Cleaning and merging of event record sets.
//!
//! - [`clean_registration`] / [`clean_checkin`]: idempotent per-source cleanup
//! - [`merge`]: left join on attendee identity with no-show derivation

pub mod clean;
pub mod dedupe;
pub mod merge;

pub use clean::{clean_checkin, clean_registration};
pub use dedupe::dedupe_by_key;
pub use merge::merge;
