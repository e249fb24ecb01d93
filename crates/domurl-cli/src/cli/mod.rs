//! CLI for domurl.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use domurl_core::config::{self, DomurlConfig, OutputFormat};
use domurl_core::Url;

use commands::{
    run_completions, run_decode, run_edit, run_encode, run_man, run_normalize, run_parse,
    QueryEdits,
};

/// Top-level CLI for domurl.
#[derive(Debug, Parser)]
#[command(name = "domurl")]
#[command(about = "domurl: inspect, resolve and rewrite URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// The URL to work on and how to resolve it.
#[derive(Debug, Clone, Args)]
pub struct Target {
    /// URL or relative reference. Empty means the base itself.
    #[arg(default_value = "")]
    pub url: String,

    /// Base for relative references (default: config `base_url`, then the current directory).
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Keep relative references as written instead of resolving them.
    #[arg(long)]
    pub no_transform: bool,
}

impl Target {
    pub fn resolve(&self, cfg: &DomurlConfig) -> Url {
        let base = cfg.base_provider(self.base.as_deref());
        Url::parse_with(
            &self.url,
            base.as_ref(),
            cfg.parse_options(self.no_transform),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show every component of a URL.
    Parse {
        #[command(flatten)]
        target: Target,

        /// Output format (default: config `output`, then text).
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Print the canonical form of a URL.
    Normalize {
        #[command(flatten)]
        target: Target,
    },

    /// Rewrite query parameters and print the resulting URL.
    Edit {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        edits: QueryEdits,
    },

    /// Percent-decode text (`+` is a space; malformed escapes are kept).
    Decode {
        text: String,
    },

    /// Percent-encode text as a query component.
    Encode {
        text: String,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Parse { target, format } => {
                let cfg = load_config()?;
                run_parse(&cfg, &target, format.map(OutputFormat::from))?;
            }
            CliCommand::Normalize { target } => run_normalize(&load_config()?, &target)?,
            CliCommand::Edit { target, edits } => run_edit(&load_config()?, &target, &edits)?,
            CliCommand::Decode { text } => run_decode(&text),
            CliCommand::Encode { text } => run_encode(&text),
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

fn load_config() -> Result<DomurlConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
