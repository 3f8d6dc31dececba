// Rust guideline compliant 2026-02-06

//! Daag CLI Application
//!
//! Command-line interface for rendering ticket blocking graphs.

use clap::Parser;
use daag_cli::{output, render};
use daag_core::{build_graph_model, resolve_color_scheme, Config, Database};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "daag",
    version,
    about = "DAAG: render ticket blocking graphs with Graphviz",
    long_about = "DAAG parses a line-oriented ticket database describing work items and their blocking relationships, and renders the resulting directed graph with Graphviz.",
    after_help = "Examples:\n  daag --database tickets.db\n  daag -d tickets.db --engine neato --format pdf\n  daag -d tickets.db --emit-dot\n  daag -d tickets.db --json\n"
)]
struct Cli {
    /// Filename of the input database
    #[arg(short, long)]
    database: PathBuf,

    /// Layout engine used to build the graph
    #[arg(long, value_parser = ["dot", "neato", "sfdp", "fdp"])]
    engine: Option<String>,

    /// File format for the rendered graph
    #[arg(long, value_parser = ["png", "pdf"])]
    format: Option<String>,

    /// Directory to write the graph source and rendered file into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the graph model as JSON instead of rendering
    #[arg(long)]
    json: bool,

    /// Print the Graphviz source instead of rendering
    #[arg(long)]
    emit_dot: bool,

    /// Open the rendered graph with the system viewer
    #[arg(long)]
    view: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("{}", output::format_error(&error));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.database.as_os_str().is_empty() {
        anyhow::bail!("--database entry may not be blank");
    }

    let config = Config::load(Path::new("."))?;
    let engine = match cli.engine.as_deref() {
        Some(value) => value.parse()?,
        None => config.engine,
    };
    let format = match cli.format.as_deref() {
        Some(value) => value.parse()?,
        None => config.format,
    };

    let database = Database::load(&cli.database)?;
    let scheme = resolve_color_scheme(
        &database.records,
        &database.color_overrides,
        &config.default_color,
    )?;
    let name = render::graph_name(&cli.database);
    let model = build_graph_model(&name, &database.records, &scheme);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }
    if cli.emit_dot {
        print!("{}", render::dot_source(&model));
        return Ok(());
    }

    let rendered = render::render(&model, engine, format, &cli.output_dir)?;
    println!("Rendered {}", rendered.display());

    if cli.view {
        render::view(&rendered)?;
    }

    Ok(())
}
