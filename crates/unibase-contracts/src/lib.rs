//! Shared, version-pinned protocol identifiers.
//!
//! These constants are the single source of truth for the schema/version strings
//! that appear in the machine-readable output of the `unibase` command.

pub const UNIBASE_TRANSCODE_REPORT_SCHEMA_VERSION: &str = "unibase.transcode.report@0.1.0";
pub const UNIBASE_TRUNCATE_REPORT_SCHEMA_VERSION: &str = "unibase.truncate.report@0.1.0";
pub const UNIBASE_INSPECT_REPORT_SCHEMA_VERSION: &str = "unibase.inspect.report@0.1.0";
pub const UNIBASE_ERROR_REPORT_SCHEMA_VERSION: &str = "unibase.error.report@0.1.0";
