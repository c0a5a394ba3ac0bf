//! noughts CLI - play noughts and crosses against a person or the computer

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Noughts and crosses with a minimax opponent", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `noughts=trace`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play(noughts::cli::commands::play::PlayArgs),

    /// Play computer-vs-computer games and report the results
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => noughts::cli::commands::play::execute(Default::default()),
        Some(Commands::Play(args)) => noughts::cli::commands::play::execute(args),
        Some(Commands::Simulate(args)) => noughts::cli::commands::simulate::execute(args),
    }
}
