//! CSV reading utilities.

mod reader;

pub use reader::{SourceStatus, read_csv_frame, source_status};
