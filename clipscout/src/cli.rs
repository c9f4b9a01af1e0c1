//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use clipscout_detect::config::{
    DEFAULT_MAX_CLIPS, DEFAULT_MAX_DURATION, DEFAULT_MIN_DURATION, DetectionConfig,
};
use clipscout_detect::error::ConfigError;
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "clipscout")]
#[command(about = "Highlight clip detection for long-form video")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect highlight clips and write them as JSON
    Detect(crate::detect::Args),

    /// Inspect the extracted signals without running selection
    Signals(crate::signals::Args),
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Detect(args) => crate::detect::execute(args.try_into()?),
        Commands::Signals(args) => crate::signals::execute(args.try_into()?),
    }
}

/// Detection tuning shared by subcommands.
#[derive(clap::Args, Clone, Debug)]
pub struct TuningArgs {
    /// Minimum clip duration in seconds
    #[arg(long, default_value_t = DEFAULT_MIN_DURATION)]
    pub min_duration: f32,

    /// Maximum clip duration in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION)]
    pub max_duration: f32,

    /// Maximum number of clips to return
    #[arg(long, default_value_t = DEFAULT_MAX_CLIPS)]
    pub max_clips: usize,

    /// Weight of the audio loudness signal
    #[arg(long, default_value_t = 0.4)]
    pub energy_weight: f32,

    /// Weight of the keyword density signal
    #[arg(long, default_value_t = 0.3)]
    pub keyword_weight: f32,

    /// Weight of the scene change signal
    #[arg(long, default_value_t = 0.3)]
    pub scene_weight: f32,

    /// Comma-separated keywords replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

impl TuningArgs {
    /// Build a validated detection config from the tuning flags.
    pub fn into_config(self) -> Result<DetectionConfig, ConfigError> {
        let mut config = DetectionConfig {
            min_duration: self.min_duration,
            max_duration: self.max_duration,
            max_clips: self.max_clips,
            energy_weight: self.energy_weight,
            keyword_weight: self.keyword_weight,
            scene_weight: self.scene_weight,
            ..Default::default()
        };

        if !self.keywords.is_empty() {
            config.keywords = self.keywords;
        }

        config.validated()
    }
}
