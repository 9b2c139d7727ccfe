//! Predefined experiment suites.

use crate::runner::{ExperimentRunner, ExperimentSpec};

/// Queries shared by every experiment in the comprehensive suite.
pub const SUITE_QUERIES: [&str; 5] = [
    "What services do you offer?",
    "I have severe allergies to dust and pet dander. Can you help?",
    "What cleaning products do you use? I'm concerned about chemicals.",
    "Do you service the Downtown area?",
    "I'd like to book a deep cleaning. My name is John Smith, email john@example.com",
];

/// Same settings, three personas.
pub fn persona_comparison() -> Vec<ExperimentSpec> {
    ["friendly_zero_shot", "expert_zero_shot", "cautious_zero_shot"]
        .into_iter()
        .map(ExperimentSpec::new)
        .collect()
}

/// One persona, three prompt styles.
pub fn prompt_styles() -> Vec<ExperimentSpec> {
    ["zero_shot", "few_shot", "cot"]
        .into_iter()
        .map(|style| ExperimentSpec::new(format!("friendly_{style}")))
        .collect()
}

pub fn temperatures() -> Vec<ExperimentSpec> {
    [0.3, 0.7, 1.0]
        .into_iter()
        .map(|t| ExperimentSpec::new("friendly_zero_shot").with_temperature(t))
        .collect()
}

pub fn models() -> Vec<ExperimentSpec> {
    ["gpt-4o-mini", "gpt-4o"]
        .into_iter()
        .map(|m| ExperimentSpec::new("friendly_cot").with_model(m))
        .collect()
}

pub fn top_p_values() -> Vec<ExperimentSpec> {
    [0.5, 0.9, 1.0]
        .into_iter()
        .map(|p| ExperimentSpec::new("expert_zero_shot").with_top_p(p))
        .collect()
}

/// All five experiment sets, in order, with the shared suite queries.
pub fn comprehensive_suite() -> Vec<ExperimentSpec> {
    [
        persona_comparison(),
        prompt_styles(),
        temperatures(),
        models(),
        top_p_values(),
    ]
    .into_iter()
    .flatten()
    .map(|spec| spec.with_queries(SUITE_QUERIES))
    .collect()
}

/// Queue every spec on `runner`.
pub fn enqueue(runner: &mut ExperimentRunner, specs: Vec<ExperimentSpec>) {
    for spec in specs {
        runner.add_experiment(spec);
    }
}
