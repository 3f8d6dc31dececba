// Rust guideline compliant 2026-02-06

//! Rendering module for the Daag CLI.
//!
//! Generates Graphviz DOT source from a graph model, runs the layout
//! engine binary over it, and opens the result in the system viewer. The
//! core stays rendering-agnostic; everything Graphviz-shaped lives here.

use anyhow::Context;
use daag_core::{Engine, GraphFormat, GraphModel};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Escapes a string for use inside a double-quoted DOT identifier.
fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Generates DOT source for a graph model.
///
/// One node statement per model node (with `style=filled` only when the
/// node carries a color) followed by one edge statement per model edge,
/// both in model order. Graphviz auto-creates edge endpoints that have no
/// node statement.
pub fn dot_source(model: &GraphModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", dot_escape(&model.name)));

    for node in &model.nodes {
        if node.color.is_empty() {
            out.push_str(&format!(
                "  \"{}\" [label=\"{}\"];\n",
                dot_escape(&node.id),
                dot_escape(&node.label)
            ));
        } else {
            out.push_str(&format!(
                "  \"{}\" [label=\"{}\", style=filled, fillcolor=\"{}\"];\n",
                dot_escape(&node.id),
                dot_escape(&node.label),
                dot_escape(&node.color)
            ));
        }
    }

    if !model.nodes.is_empty() && !model.edges.is_empty() {
        out.push('\n');
    }

    for edge in &model.edges {
        out.push_str(&format!(
            "  \"{}\" -> \"{}\";\n",
            dot_escape(&edge.from),
            dot_escape(&edge.to)
        ));
    }

    out.push_str("}\n");
    out
}

/// Derives the graph name from the database path.
///
/// The name is the file stem up to the first `.`, falling back to `daag`
/// when the path yields no usable stem.
pub fn graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.split('.').next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "daag".to_string())
}

/// Renders a graph model to an image file.
///
/// Writes `<name> (<engine>).gv` into `out_dir`, then runs the engine
/// binary over it to produce `<name> (<engine>).gv.<format>`.
///
/// # Arguments
///
/// * `model` - The graph model to render
/// * `engine` - Layout engine to invoke
/// * `format` - Output file format
/// * `out_dir` - Directory for the source and rendered files
///
/// # Returns
///
/// Path of the rendered file on success.
///
/// # Errors
///
/// Returns an error if the source file cannot be written, the engine
/// binary cannot be started, or the engine exits with a failure.
pub fn render(
    model: &GraphModel,
    engine: Engine,
    format: GraphFormat,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let basename = format!("{} ({})", model.name, engine);
    let source_path = out_dir.join(format!("{}.gv", basename));
    std::fs::write(&source_path, dot_source(model))
        .with_context(|| format!("failed to write {}", source_path.display()))?;

    let output_path = out_dir.join(format!("{}.gv.{}", basename, format));
    let output = Command::new(engine.as_str())
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(&output_path)
        .arg(&source_path)
        .output()
        .with_context(|| format!("failed to run `{}`; is Graphviz installed?", engine))?;

    if !output.status.success() {
        anyhow::bail!(
            "`{}` failed ({}): {}",
            engine,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(output_path)
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(all(unix, not(target_os = "macos")))]
const OPENER: &str = "xdg-open";

/// Opens a rendered file with the system viewer, without waiting for it.
///
/// # Errors
///
/// Returns an error if the viewer process cannot be spawned.
pub fn view(path: &Path) -> anyhow::Result<()> {
    #[cfg(windows)]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(not(windows))]
    let mut command = Command::new(OPENER);

    command
        .arg(path)
        .spawn()
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(())
}
