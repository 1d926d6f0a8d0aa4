//! CLI for faststart.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use faststart_core::config;

pub use args::RenderArgs;
use commands::{run_locate, run_predict, run_process, run_suffix};

/// Top-level CLI for faststart.
#[derive(Debug, Parser)]
#[command(name = "faststart")]
#[command(
    about = "faststart: find rendered MP4/MOV files and write fast-start copies",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the path the renderer will write the video to.
    Predict {
        #[command(flatten)]
        render: RenderArgs,

        /// Print the full naming plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Find the rendered video (predicted path, then fallbacks).
    Locate {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Run a post-render job: validate, locate, write the fast-start companion.
    Process {
        #[command(flatten)]
        render: RenderArgs,

        /// Companion suffix for this run (overrides config.toml).
        #[arg(long, allow_hyphen_values = true)]
        suffix: Option<String>,
    },

    /// Print the sanitized form of a suffix.
    Suffix {
        /// Raw suffix, e.g. "-faststart".
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Predict { render, json } => run_predict(&render.to_settings()?, json)?,
            CliCommand::Locate { render } => run_locate(&render.to_settings()?)?,
            CliCommand::Process { render, suffix } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_process(&render.to_settings()?, &cfg, suffix.as_deref())?;
            }
            CliCommand::Suffix { raw } => run_suffix(&raw)?,
        }

        Ok(())
    }
}
