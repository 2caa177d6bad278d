use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lingo_progress::ProgressEngine;
use lingo_progress::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "lingo-progress")]
#[command(about = "XP, level, streak and milestone calculator for language learners")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lingo/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the XP an activity is worth
    Xp {
        /// Activity kind (translation, grammar, vocabulary, pronunciation, writing, quiz, cultural)
        kind: String,

        /// Use the attempt reward instead of the success reward
        #[arg(long)]
        failed: bool,
    },

    /// Show the level for an XP total
    Level {
        /// Total XP
        xp: u64,
    },

    /// Apply an activity to a progress snapshot and print the updated record
    Apply {
        /// Progress snapshot JSON file ("-" for stdin)
        #[arg(short, long)]
        progress: PathBuf,

        /// Activity kind
        #[arg(short, long)]
        kind: String,

        /// The activity was attempted but not passed
        #[arg(long)]
        failed: bool,

        /// Activity time as RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Lesson completed by this activity
        #[arg(long)]
        lesson: Option<String>,
    },

    /// Show the milestone the learner is closest to
    Milestone {
        /// Progress snapshot JSON file ("-" for stdin)
        #[arg(short, long)]
        progress: PathBuf,

        /// Show every ladder instead of only the closest one
        #[arg(long)]
        all: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let load_engine = || -> Result<ProgressEngine> { Ok(Config::load(config_path)?.engine()?) };

    match cli.command {
        Commands::Xp { kind, failed } => {
            cli::xp::xp_command(&load_engine()?, &kind, !failed)?;
        }
        Commands::Level { xp } => {
            cli::xp::level_command(xp)?;
        }
        Commands::Apply {
            progress,
            kind,
            failed,
            now,
            lesson,
        } => {
            let engine = load_engine()?;
            cli::apply::apply_command(&engine, &progress, kind, !failed, now.as_deref(), lesson)?;
        }
        Commands::Milestone { progress, all } => {
            cli::milestone::milestone_command(&load_engine()?, &progress, all)?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config_path, force)?;
        }
    }

    Ok(())
}
