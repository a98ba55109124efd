use crate::cli::Output;
use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod config;
pub mod run;
pub mod version;

#[derive(Parser)]
#[command(
    name = "threadrun",
    version = env!("CARGO_PKG_VERSION"),
    about = "Spawn a fixed set of worker threads and wait for all of them",
    long_about = "threadrun starts a configured number of worker threads. Each worker \
                  prints a status line per round, sleeps, and finally reports that it \
                  finished; the main thread joins every worker before exiting."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, env = "THREADRUN_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the workers (default)
    Run(run::RunArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.quiet);

        match self.command {
            Some(Commands::Run(args)) => run::execute(args, self.config.as_deref(), &output),
            Some(Commands::Config(args)) => config::execute(args, self.config.as_deref()),
            Some(Commands::Version(args)) => version::execute(args, &output),
            None => run::execute(run::RunArgs::default(), self.config.as_deref(), &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stderr only; stdout carries the progress lines
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}
