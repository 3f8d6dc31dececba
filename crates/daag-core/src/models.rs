// Rust guideline compliant 2026-02-06

//! Core data models and database delimiters for Daag.

use serde::{Deserialize, Serialize};

/// Database entry delimiter indicating a list beginning.
pub const OPEN_LIST_DELIM: char = '[';
/// Database entry delimiter indicating a list ending.
pub const CLOSE_LIST_DELIM: char = ']';
/// Separator between fields on a record line and between list items.
pub const FIELD_SEPARATOR: char = ',';
/// Database entry prefix indicating the color scheme directive.
pub const COLOR_DIRECTIVE: &str = "[COLORS]:";
/// First character of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// A "blocked"/"blocks" field: a single identifier or a bracketed list.
///
/// The empty field is represented as `Scalar("")`. Consumers must handle
/// both shapes; `identifiers` flattens them for edge production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// A single identifier, possibly empty.
    Scalar(String),
    /// An ordered list of identifiers parsed from `[a,b,...]`.
    List(Vec<String>),
}

impl Default for Field {
    fn default() -> Self {
        Self::Scalar(String::new())
    }
}

impl Field {
    /// Returns the identifiers this field contributes edges for.
    ///
    /// An empty scalar contributes nothing; a non-empty scalar contributes
    /// itself; a list contributes every item in list order.
    pub fn identifiers(&self) -> &[String] {
        match self {
            Self::Scalar(id) if id.is_empty() => &[],
            Self::Scalar(id) => std::slice::from_ref(id),
            Self::List(items) => items,
        }
    }

    /// Returns true if the field contributes no identifiers.
    pub fn is_empty(&self) -> bool {
        self.identifiers().is_empty()
    }
}

/// One parsed line of the ticket database.
///
/// Title uniqueness is not enforced and self-referential blocking entries
/// are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Uniquely identifying ticket name (e.g., DAAG-1).
    pub title: String,
    /// Major project component/epic (e.g., config, wheel). May be empty.
    pub component: String,
    /// Type of ticket (e.g., prod, devops, research). May be empty.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tickets that block this one, AKA "blocked by".
    pub blocked: Field,
    /// Tickets blocked by this one.
    pub blocks: Field,
    /// Current ticket status (e.g., Open, IP, Closed). May be empty.
    pub status: String,
}

impl Record {
    /// Builds the display label for this record's graph node.
    ///
    /// The label is the title, followed by the component on its own line
    /// when non-empty, followed by the type on its own line when non-empty.
    pub fn label(&self) -> String {
        let mut label = self.title.clone();
        if !self.component.is_empty() {
            label.push('\n');
            label.push_str(&self.component);
        }
        if !self.kind.is_empty() {
            label.push('\n');
            label.push_str(&self.kind);
        }
        label
    }
}
