use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cpp_scout::commands::bundle_command;
use scout_core::bundle::BundleOptions;

/// Concatenate a source tree into one flat text file.
///
/// Walks the directory recursively and writes every recognized source file
/// into the output as a framed block, ready to paste into a review tool.
#[derive(Parser, Debug)]
#[command(
    name = "cpp-bundle",
    version,
    about = "Bundle a source tree into one reviewable text file",
    long_about = None
)]
struct Cli {
    /// Directory to scan for source files.
    directory: PathBuf,

    /// Output text file receiving the framed contents.
    output: PathBuf,

    /// Also bundle Markdown files (.md, .markdown).
    #[arg(long = "include-md", visible_alias = "markdown")]
    include_md: bool,

    /// Also bundle MDC rule files (.mdc).
    #[arg(long = "include-mdc")]
    include_mdc: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = BundleOptions {
        include_markdown: cli.include_md,
        include_mdc: cli.include_mdc,
    };

    bundle_command(&cli.directory, &cli.output, &options)
}
