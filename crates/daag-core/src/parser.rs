// Rust guideline compliant 2026-02-06

//! Parser module for the Daag database format.
//!
//! This module turns the raw database text into records and the optional
//! color override list. Record lines hold six fields separated by commas;
//! the two blocking fields may each be a bare identifier or a bracketed
//! list, so they are parsed left to right with `parse_list_field`.

use crate::models::{
    Field, Record, CLOSE_LIST_DELIM, COLOR_DIRECTIVE, COMMENT_PREFIX, FIELD_SEPARATOR,
    OPEN_LIST_DELIM,
};
use crate::{Error, Result};
use std::path::Path;

/// A parsed ticket database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    /// Records in file order.
    pub records: Vec<Record>,
    /// Colors from the first `[COLORS]:` directive, in directive order.
    /// Empty when the database has no directive.
    pub color_overrides: Vec<String>,
}

impl Database {
    /// Parses the full database text.
    ///
    /// Empty lines and lines whose first character is `#` are skipped.
    /// Every `[COLORS]:` line is excluded from record parsing; only the
    /// first one contributes the override color list. Every other line is
    /// parsed as a record.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw database file contents
    ///
    /// # Returns
    ///
    /// The parsed database on success.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedRecord` for the first record line that does
    /// not decompose into the expected field structure. Parsing does not
    /// skip malformed lines and continue.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = Vec::new();
        let mut color_overrides: Option<Vec<String>> = None;

        for line in text.lines() {
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if let Some(rest) = line.strip_prefix(COLOR_DIRECTIVE) {
                if color_overrides.is_none() {
                    color_overrides = Some(parse_color_directive(rest));
                }
                continue;
            }
            records.push(parse_record(line)?);
        }

        Ok(Self {
            records,
            color_overrides: color_overrides.unwrap_or_default(),
        })
    }

    /// Reads and parses a database file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the database file
    ///
    /// # Errors
    ///
    /// Returns storage errors from `read_text` and parse errors from
    /// `parse`, unchanged.
    pub fn load(path: &Path) -> Result<Self> {
        let text = crate::storage::read_text(path)?;
        Self::parse(&text)
    }
}

/// Parses the remainder of a `[COLORS]:` directive into the override list.
///
/// The remainder is trimmed, split on `,`, and each entry is trimmed of
/// surrounding whitespace.
fn parse_color_directive(rest: &str) -> Vec<String> {
    rest.trim()
        .split(FIELD_SEPARATOR)
        .map(|color| color.trim().to_string())
        .collect()
}

/// Parses one record line into a `Record`.
///
/// The line is split on `,` with a maximum of 3 splits to obtain the title,
/// component, and type; the remainder holds the last three logical fields.
/// `parse_list_field` is applied twice for `blocked` and `blocks`, and the
/// final remainder is taken verbatim as the status.
///
/// # Arguments
///
/// * `line` - One non-comment, non-blank, non-directive database line
///
/// # Returns
///
/// The parsed record on success.
///
/// # Errors
///
/// Returns `Error::MalformedRecord` if fewer than four top-level fields are
/// present, or if either blocking field fails to parse.
pub fn parse_record(line: &str) -> Result<Record> {
    let mut parts = line.splitn(4, FIELD_SEPARATOR);
    let (Some(title), Some(component), Some(kind), Some(rest)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::MalformedRecord(line.to_string()));
    };

    let (blocked, rest) = parse_list_field(rest)?;
    let (blocks, status) = parse_list_field(rest)?;

    Ok(Record {
        title: title.to_string(),
        component: component.to_string(),
        kind: kind.to_string(),
        blocked,
        blocks,
        status: status.to_string(),
    })
}

/// Parses one list-or-scalar field from the front of a line fragment.
///
/// A fragment opening with `[` is a list running through the first `]`;
/// the character after the `]` must be a field separator, which is consumed
/// and discarded. Any other fragment is split on its first `,` into a
/// scalar and the remainder.
///
/// Single left-to-right pass; all delimiters are ASCII, so byte indexing
/// cannot split a character.
///
/// # Arguments
///
/// * `fragment` - The unconsumed tail of a record line
///
/// # Returns
///
/// The parsed field and the unconsumed remainder.
///
/// # Errors
///
/// Returns `Error::MalformedRecord` naming the fragment if no `]` follows
/// an opening `[`, or if the required separator is absent.
pub fn parse_list_field(fragment: &str) -> Result<(Field, &str)> {
    if fragment.starts_with(OPEN_LIST_DELIM) {
        let Some(close) = fragment.find(CLOSE_LIST_DELIM) else {
            return Err(Error::MalformedRecord(fragment.to_string()));
        };
        let inner = &fragment[OPEN_LIST_DELIM.len_utf8()..close];
        let rest = &fragment[close + CLOSE_LIST_DELIM.len_utf8()..];
        let Some(remainder) = rest.strip_prefix(FIELD_SEPARATOR) else {
            return Err(Error::MalformedRecord(fragment.to_string()));
        };
        let items = inner
            .split(FIELD_SEPARATOR)
            .map(str::to_string)
            .collect();
        Ok((Field::List(items), remainder))
    } else {
        match fragment.split_once(FIELD_SEPARATOR) {
            Some((scalar, remainder)) => Ok((Field::Scalar(scalar.to_string()), remainder)),
            None => Err(Error::MalformedRecord(fragment.to_string())),
        }
    }
}
