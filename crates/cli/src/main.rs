//! BreatheEasy CLI: the main entry point.
//!
//! Commands:
//! - `onboard`: write the default config and data directories
//! - `chat`: interactive or single-message chat with a persona agent
//! - `serve`: start the browser chat UI and JSON API
//! - `experiment`: run a batch of persona/parameter experiments
//! - `personas`: list the available personas

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "breatheeasy",
    about = "BreatheEasy: ReAct customer-support agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directories
    Onboard,

    /// Chat with a persona agent
    Chat {
        /// Persona key (see `breatheeasy personas`)
        #[arg(short, long)]
        persona: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(short, long)]
        temperature: Option<f32>,

        /// Maximum Act/Observe cycles per message
        #[arg(long)]
        max_iterations: Option<u32>,

        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Write the run log to this JSON file on exit
        #[arg(long)]
        save_logs: Option<PathBuf>,
    },

    /// Start the HTTP chat UI
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run an experiment suite
    Experiment {
        /// Override the output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Suite::Comprehensive)]
        suite: Suite,
    },

    /// List the available personas
    Personas,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Suite {
    /// All five experiment sets
    Comprehensive,
    /// Persona comparison only
    Personas,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run()?,
        Commands::Chat {
            persona,
            model,
            temperature,
            max_iterations,
            message,
            save_logs,
        } => {
            let options = commands::chat::ChatOptions {
                persona,
                model,
                temperature,
                max_iterations,
                message,
                save_logs,
            };
            commands::chat::run(options).await?
        }
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Experiment { output_dir, suite } => {
            commands::experiment::run(output_dir, suite).await?
        }
        Commands::Personas => commands::personas::run(),
    }

    Ok(())
}
