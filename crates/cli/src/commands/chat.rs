//! `breatheeasy chat`: interactive or single-message chat.

use anyhow::Context;
use breatheeasy_agent::{AgentSpec, ReactAgent};
use breatheeasy_core::error::Error;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{load_config, runtime};

pub struct ChatOptions {
    pub persona: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_iterations: Option<u32>,
    pub message: Option<String>,
    pub save_logs: Option<PathBuf>,
}

pub async fn run(options: ChatOptions) -> anyhow::Result<()> {
    let config = load_config()?;
    let runtime = runtime(&config)?;

    let mut spec = AgentSpec::from_config(&config);
    if let Some(persona) = options.persona {
        spec = spec.with_persona(persona);
    }
    if let Some(model) = options.model {
        spec = spec.with_model(model);
    }
    if let Some(temperature) = options.temperature {
        spec = spec.with_temperature(temperature);
    }
    if let Some(max_iterations) = options.max_iterations {
        spec = spec.with_max_iterations(max_iterations);
    }

    let agent = spec
        .build(&runtime.personas, runtime.provider, runtime.tools)
        .context("Error creating agent")?;

    if let Some(message) = options.message {
        // Single message mode
        eprint!("  Thinking...");
        let reply = agent.run(&message).await;
        eprint!("\r              \r");
        match reply {
            Ok(response) => println!("{response}"),
            Err(e) => eprintln!("{}", apology(&e)),
        }
    } else {
        interactive(&agent).await?;
    }

    if let Some(path) = options.save_logs {
        agent
            .run_log()
            .save_json(&path)
            .await
            .with_context(|| format!("Failed to save logs to {}", path.display()))?;
        println!("  Logs saved to {}", path.display());
    }

    Ok(())
}

async fn interactive(agent: &ReactAgent) -> anyhow::Result<()> {
    let config = agent.config();
    println!();
    println!("  BreatheEasy Support Agent: interactive mode");
    println!();
    println!("  Persona:     {}", config.persona_name);
    println!("  Model:       {}", config.model);
    println!("  Temperature: {}", config.temperature);
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "exit" | "quit") {
            break;
        }

        eprint!("  ...");
        let reply = agent.run(message).await;
        eprint!("\r     \r");
        match reply {
            Ok(response) => {
                println!();
                for line in response.lines() {
                    println!("  Assistant > {line}");
                }
                println!();
            }
            Err(e) => {
                eprintln!("  {}", apology(&e));
                println!();
            }
        }
    }

    println!();
    println!("  Goodbye!");
    println!();
    Ok(())
}

/// User-facing text for a failed run.
fn apology(error: &Error) -> String {
    match error {
        Error::Provider(e) => {
            format!("Sorry, I couldn't reach the assistant service ({e}). Please try again.")
        }
        other => format!("Sorry, something went wrong: {other}"),
    }
}
