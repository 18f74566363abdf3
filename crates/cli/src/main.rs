use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cpp_scout::commands::scan_command;
use scout_core::render::RenderOptions;

/// Heuristic C++ source analyzer.
///
/// Approximates the functions, classes, includes, and type names of one
/// source file with regular expressions. No preprocessor, no real parser;
/// results are a review aid, not ground truth.
#[derive(Parser, Debug)]
#[command(
    name = "cpp-scout",
    version,
    about = "Heuristic C++ source analyzer",
    long_about = None
)]
struct Cli {
    /// C++ source file to analyze.
    file: PathBuf,

    /// Show the function listing only.
    #[arg(short = 'f', long)]
    functions: bool,

    /// Show the class listing only.
    #[arg(short = 'c', long)]
    classes: bool,

    /// Show the type listing only.
    #[arg(short = 't', long)]
    types: bool,

    /// Show the function summary grouped by return type only.
    #[arg(short = 's', long)]
    summary: bool,

    /// Print bare names, one per line, instead of decorated listings.
    #[arg(short = 'n', long)]
    names_only: bool,

    /// Emit the full report as JSON instead of text.
    #[arg(short = 'j', long)]
    json: bool,

    /// Sort listings alphabetically instead of source order.
    #[arg(long)]
    sort: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let render = RenderOptions {
        functions: cli.functions,
        classes: cli.classes,
        types: cli.types,
        summary: cli.summary,
        names_only: cli.names_only,
        sort: cli.sort,
    };

    scan_command(&cli.file, cli.json, &render)
}
