// Rust guideline compliant 2026-02-06

//! Color scheme resolution for Daag.
//!
//! Derives a deterministic status-to-color mapping from the statuses
//! present in the record set and the optional override list parsed from
//! the `[COLORS]:` directive.

use crate::models::Record;
use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Fill color used when the directive supplies fewer colors than statuses.
///
/// For a list of supported X11 colors see:
/// <https://graphviz.org/doc/info/colors.html#x11>
pub const DEFAULT_COLOR: &str = "lightgrey";

/// Mapping from status to display color, one entry per distinct non-empty
/// status. Iteration order is ascending by status.
pub type ColorScheme = BTreeMap<String, String>;

/// Resolves the color scheme for a record set.
///
/// The distinct non-empty statuses are sorted ascending, the override list
/// is padded with `default_color` until it matches the status count, and
/// statuses are paired with colors positionally. Excess override colors
/// are ignored. No attempt is made to semantically match colors to
/// statuses; position is the only contract.
///
/// # Arguments
///
/// * `records` - The parsed record set
/// * `overrides` - Colors from the `[COLORS]:` directive, in directive order
/// * `default_color` - Fill color for statuses past the end of `overrides`
///
/// # Returns
///
/// The resolved color scheme.
///
/// # Errors
///
/// Returns `Error::MissingStatus` if no record carries a non-empty status.
pub fn resolve_color_scheme(
    records: &[Record],
    overrides: &[String],
    default_color: &str,
) -> Result<ColorScheme> {
    let statuses: BTreeSet<&str> = records
        .iter()
        .filter(|record| !record.status.is_empty())
        .map(|record| record.status.as_str())
        .collect();

    if statuses.is_empty() {
        return Err(Error::MissingStatus);
    }

    let mut colors: Vec<&str> = overrides.iter().map(String::as_str).collect();
    while colors.len() < statuses.len() {
        colors.push(default_color);
    }

    Ok(statuses
        .into_iter()
        .zip(colors)
        .map(|(status, color)| (status.to_string(), color.to_string()))
        .collect())
}
