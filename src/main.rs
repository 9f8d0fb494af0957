use std::path::PathBuf;

use clap::Parser;

mod build;
mod commands;
mod config;
mod logging;

/// Render a markdown document to an HTML page with highlighted code blocks.
///
/// The page is written to standard output.
#[derive(Parser)]
#[command(version, about)]
struct RenderArgs {
    /// The markdown document to render
    #[arg(short, long, default_value = "./example.md")]
    input: PathBuf,

    /// The page template, using the `content` and `style` placeholders
    #[arg(short, long, default_value = "./template.html")]
    template: PathBuf,

    /// The path to the configuration file (defaults to `mdpage.yaml` if present)
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    logging::init();

    let args = RenderArgs::parse();
    commands::render::run(&args)
}
