mod input;
mod logging;
mod model;
mod pipeline;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::InputError;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_series::run_stage2;
use crate::pipeline::stage3_render::{Stage3Input, run_stage3};
use crate::render::RenderError;
use crate::render::style::TextRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "embedplot",
    version,
    about = "Chart MultiHashEmbed vs. MultiEmbed evaluation results"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot results between MultiHashEmbed vs. MultiEmbed
    MainResults(MainResultsArgs),
    /// Does nothing.
    Hi,
}

#[derive(Args, Debug, Clone)]
struct MainResultsArgs {
    /// Path to metrics file for spacy vectors
    metrics_spacy_path: PathBuf,
    /// Path to metrics file for null vectors
    metrics_null_path: PathBuf,
    /// Path to save the file (include extension)
    output_path: Option<PathBuf>,
    /// Open the figure in the default image viewer
    #[arg(short = 'S', long)]
    show: bool,
    /// Program that opens the figure for --show instead of the platform default
    #[arg(long, value_name = "PROGRAM")]
    viewer: Option<PathBuf>,
    /// Render text in a LaTeX-style serif font
    #[arg(short = 't', long = "latex", visible_aliases = ["tex", "use-tex"])]
    use_tex: bool,
    /// Chart sub-title
    #[arg(short = 's', long, default_value = "with static vectors")]
    subtitle: String,
    /// Print per-dataset scores
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone)]
struct RunConfig {
    with_vectors_path: PathBuf,
    without_vectors_path: PathBuf,
    output_path: Option<PathBuf>,
    show: bool,
    viewer: Option<PathBuf>,
    text: TextRenderer,
    subtitle: String,
    verbose: bool,
}

impl From<MainResultsArgs> for RunConfig {
    fn from(args: MainResultsArgs) -> Self {
        RunConfig {
            with_vectors_path: args.metrics_spacy_path,
            without_vectors_path: args.metrics_null_path,
            output_path: args.output_path,
            show: args.show,
            viewer: args.viewer,
            text: if args.use_tex {
                TextRenderer::Tex
            } else {
                TextRenderer::Plain
            },
            subtitle: args.subtitle,
            verbose: args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::MainResults(args) => {
            let config = RunConfig::from(args);
            logging::init(config.verbose);
            run_main_results(&config)?;
            Ok(())
        }
        Command::Hi => Ok(()),
    }
}

fn run_main_results(config: &RunConfig) -> Result<Option<PathBuf>, CliError> {
    tracing::info!("Plotting MultiHashEmbed vs. MultiEmbed");

    let stage1 = run_stage1(&config.with_vectors_path, &config.without_vectors_path)?;
    let stage2 = run_stage2(&stage1)?;

    let written = run_stage3(&Stage3Input {
        with_vectors: &stage2.with_vectors,
        without_vectors: &stage2.without_vectors,
        subtitle: &config.subtitle,
        output_path: config.output_path.as_deref(),
        show: config.show,
        viewer: config.viewer.as_deref(),
        text: config.text,
    })?;
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
