//! Butter Labs CLI - The landing page, in a terminal
//!
//! Usage:
//!   butter                              - Start interactive mode
//!   butter estimate -a 50 -s 35000 -c 10000
//!   butter estimate --watch             - Re-estimate lines from stdin
//!   butter accents                      - List demo accents
//!   butter demo --accent scottish       - Run the recognition demo
//!   butter waveform --frames 20         - Draw the waveform animation
//!   butter contact --name .. --email .. --message ..

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{AccentsCommand, ContactCommand, DemoCommand, EstimateCommand, WaveformCommand};
use cli::context::Context;
use cli::interactive::InteractiveCli;

#[derive(Parser)]
#[command(name = "butter")]
#[command(about = "Butter Labs - AI customer service that understands every accent")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (YAML or JSON)
    #[arg(long, global = true, env = "BUTTER_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate savings and ROI
    Estimate(EstimateCommand),
    /// List the accents the demo knows
    Accents(AccentsCommand),
    /// Run the accent recognition demo
    Demo(DemoCommand),
    /// Draw the audio waveform animation
    Waveform(WaveformCommand),
    /// Send the contact form
    Contact(ContactCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context::load(cli.config.as_deref(), cli.json)?;

    match cli.command {
        Some(Commands::Estimate(cmd)) => cmd.run(&ctx).await,
        Some(Commands::Accents(cmd)) => cmd.run(&ctx),
        Some(Commands::Demo(cmd)) => cmd.run(&ctx).await,
        Some(Commands::Waveform(cmd)) => cmd.run(&ctx).await,
        Some(Commands::Contact(cmd)) => cmd.run(&ctx),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(ctx);
            interactive.run().await
        }
    }
}
