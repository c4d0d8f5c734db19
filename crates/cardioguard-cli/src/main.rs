use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use cardioguard_cli::config::OutputFormat;
use cardioguard_cli::resolve::AssessOptions;

mod commands;

#[derive(Parser)]
#[command(name = "cardioguard", version, about = "Heart-disease risk assessment")]
struct Cli {
    /// Config file (defaults to the per-user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess one set of clinical parameters.
    Assess {
        /// JSON file with the parameters, or `-` for stdin.
        #[arg(short, long)]
        input: PathBuf,
        /// Use this probability instead of running the model.
        #[arg(long, conflicts_with = "model")]
        probability: Option<f64>,
        /// Model artifact; overrides the configured one.
        #[arg(long)]
        model: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Tera template for markdown output.
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// List the input fields with their ranges and defaults.
    Fields,
    /// Print the default form values as JSON.
    Defaults,
    /// Write a config file pointing at a model artifact.
    Init {
        #[arg(long)]
        model: PathBuf,
        #[arg(long)]
        template: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Replace an existing config.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => cardioguard_cli::config::default_config_path()?,
    };

    match cli.command {
        Command::Assess {
            input,
            probability,
            model,
            format,
            template,
        } => commands::assess(
            &config_path,
            &input,
            AssessOptions {
                probability,
                model,
                format,
                template,
            },
        ),
        Command::Fields => commands::fields(),
        Command::Defaults => commands::defaults(),
        Command::Init {
            model,
            template,
            format,
            force,
        } => commands::init(&config_path, model, template, format, force),
    }
}
