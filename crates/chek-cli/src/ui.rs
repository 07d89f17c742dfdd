//! Terminal styling for table output, settled once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// Narrower terminals fall back to unconstrained column widths.
const MIN_TABLE_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Resolve table styling from the global flags and the process environment.
pub fn init(flags: &GlobalFlags) {
    let options = resolve(flags, std::io::stdout().is_terminal(), |key| {
        std::env::var(key).ok()
    });
    let _ = TABLE_OPTIONS.set(options);
}

/// Table styling for this run; plain and unconstrained before `init`.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

/// Gap highlighting only makes sense for a human reading a table on a
/// terminal. `CHEK_NO_COLOR` and `NO_COLOR` both switch it off, and
/// `CHEK_TABLE_WIDTH` takes precedence over `COLUMNS`.
fn resolve(
    flags: &GlobalFlags,
    stdout_is_tty: bool,
    env: impl Fn(&str) -> Option<String>,
) -> TableOptions {
    let color = stdout_is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && env("CHEK_NO_COLOR").is_none()
        && env("NO_COLOR").is_none();

    let max_width = ["CHEK_TABLE_WIDTH", "COLUMNS"]
        .into_iter()
        .find_map(|key| env(key).and_then(|value| value.trim().parse::<usize>().ok()))
        .filter(|width| *width >= MIN_TABLE_WIDTH);

    TableOptions { max_width, color }
}
