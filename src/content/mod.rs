//! Card content records and their sanitation rules.

/// Validated content record and raw JSON form.
pub mod record;
