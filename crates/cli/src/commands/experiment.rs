//! `breatheeasy experiment`: run a batch of experiments.

use anyhow::Context;
use breatheeasy_agent::AgentSpec;
use breatheeasy_experiments::{ExperimentRunner, suite};
use std::path::PathBuf;

use super::{load_config, runtime};
use crate::Suite;

pub async fn run(output_dir: Option<PathBuf>, which: Suite) -> anyhow::Result<()> {
    let config = load_config()?;
    let runtime = runtime(&config)?;
    let output_dir = output_dir.unwrap_or_else(|| config.experiments.output_dir.clone());

    let mut runner = ExperimentRunner::new(
        &output_dir,
        runtime.provider,
        runtime.tools,
        runtime.personas,
    )
    .with_base_spec(AgentSpec::from_config(&config));

    let specs = match which {
        Suite::Comprehensive => suite::comprehensive_suite(),
        Suite::Personas => suite::persona_comparison(),
    };
    suite::enqueue(&mut runner, specs);

    println!("\n  Running {} experiments...\n", runner.experiments().len());
    let results = runner.run_all().await.context("Experiment run failed")?;
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        tracing::warn!(failed, "Some experiments could not build their agent");
    }

    println!();
    println!(
        "  {:<4} {:<20} {:<12} {:>5} {:>5} {:>8} {:>9} {:>9}",
        "ID", "Persona", "Model", "Temp", "TopP", "Success", "Avg iter", "Avg secs"
    );
    for row in runner.comparison() {
        println!(
            "  {:<4} {:<20} {:<12} {:>5} {:>5} {:>4}/{:<3} {:>9.2} {:>9.2}",
            row.experiment_id,
            row.persona,
            row.model,
            row.temperature,
            row.top_p,
            row.successful,
            row.total_queries,
            row.avg_iterations,
            row.avg_duration_secs
        );
    }
    println!("\n  Results saved in '{}'\n", output_dir.display());

    Ok(())
}
