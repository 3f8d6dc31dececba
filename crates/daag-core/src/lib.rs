// Rust guideline compliant 2026-02-06

//! Daag Core Library
//!
//! This crate provides the foundational components for the Daag ticket grapher:
//! - Data models (Record, Field) and parsing delimiters
//! - Database parsing (record lines, color directive, comment handling)
//! - Color scheme resolution (status to color mapping)
//! - Graph model building (nodes, edges, colors)
//! - Database file retrieval
//! - Configuration and selector enums (engine, format)
//! - Error types and result handling

pub mod colors;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod parser;
pub mod storage;

pub use colors::{resolve_color_scheme, ColorScheme, DEFAULT_COLOR};
pub use config::{Config, Engine, GraphFormat};
pub use error::{Error, Result};
pub use graph::{build_graph_model, GraphEdge, GraphModel, GraphNode};
pub use models::{Field, Record};
pub use parser::Database;
pub use storage::read_text;
