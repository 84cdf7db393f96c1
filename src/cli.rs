use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nereus UNSEEN analysis of extreme seasonal sea-surface temperatures.
#[derive(Parser)]
#[command(
    name = "nereus",
    version,
    about = "UNSEEN analysis of extreme seasonal sea-surface temperatures"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Risk of the focus event and stronger variants, with bootstrap CI.
    Strength(StrengthArgs),
    /// Risk of the focus event as the climate pivot moves through time.
    Time(TimeArgs),
    /// Bootstrapped moments of the pooled distribution.
    Moments(MomentsArgs),
}

/// Arguments for the `strength` subcommand.
#[derive(clap::Args)]
pub struct StrengthArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override bootstrap seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `time` subcommand.
#[derive(clap::Args)]
pub struct TimeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override bootstrap seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `moments` subcommand.
#[derive(clap::Args)]
pub struct MomentsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override bootstrap seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
