//! ID prefix constants.
//!
//! IDs are generated by the database as `{prefix}-{8 hex chars}`.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_USAGE: &str = "use";

/// Every prefix in use, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_PROJECT, PREFIX_USAGE];

/// Format a prefixed ID from a prefix and its random part.
#[must_use]
pub fn format_id(prefix: &str, random: &str) -> String {
    format!("{prefix}-{random}")
}

/// Split a prefixed ID into `(prefix, random)`. Returns `None` if there is no dash.
#[must_use]
pub fn parse_id(id: &str) -> Option<(&str, &str)> {
    id.split_once('-')
}
