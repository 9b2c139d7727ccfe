//! Experiment runner: one agent per configuration, a fixed query list each.

use breatheeasy_agent::{AgentSpec, LogEntry};
use breatheeasy_core::error::{Error, Result, StorageError};
use breatheeasy_core::provider::Provider;
use breatheeasy_core::tool::ToolRegistry;
use breatheeasy_personas::PersonaRegistry;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::table::{self, ComparisonRow};

pub const SUMMARY_FILE: &str = "experiment_summary.json";
pub const TABLE_FILE: &str = "comparison_table.csv";

/// Queries used when an experiment names none.
pub const DEFAULT_QUERIES: [&str; 5] = [
    "What services do you offer?",
    "I have severe allergies. Can you help me?",
    "What cleaning products do you use?",
    "Do you service the Downtown area?",
    "I'd like to schedule a deep cleaning for my home",
];

/// One configuration under test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSpec {
    /// Assigned by [`ExperimentRunner::add_experiment`].
    pub id: u32,
    pub persona_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub max_iterations: u32,
    pub queries: Vec<String>,
}

impl ExperimentSpec {
    pub fn new(persona_key: impl Into<String>) -> Self {
        Self {
            id: 0,
            persona_key: persona_key.into(),
            model: "gpt-4o-mini".into(),
            temperature: 0.7,
            max_tokens: 1000,
            top_p: 1.0,
            max_iterations: 5,
            queries: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_queries<S: Into<String>>(mut self, queries: impl IntoIterator<Item = S>) -> Self {
        self.queries = queries.into_iter().map(Into::into).collect();
        self
    }

    fn agent_spec(&self, base: &AgentSpec) -> AgentSpec {
        base.clone()
            .with_persona(&self.persona_key)
            .with_model(&self.model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_top_p(self.top_p)
            .with_max_iterations(self.max_iterations)
    }

    fn file_name(&self) -> String {
        format!("experiment_{}_{}.json", self.id, self.persona_key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub query_number: usize,
    pub query: String,
    pub response: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentResult {
    pub experiment_id: u32,
    pub persona_key: String,
    /// Display name; `None` when the persona could not be resolved.
    pub persona_name: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub max_iterations: u32,
    pub timestamp: DateTime<Utc>,
    pub query_results: Vec<QueryResult>,
    pub agent_logs: Vec<LogEntry>,
    /// Why the agent could not be built, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExperimentResult {
    fn new(spec: &ExperimentSpec) -> Self {
        Self {
            experiment_id: spec.id,
            persona_key: spec.persona_key.clone(),
            persona_name: None,
            model: spec.model.clone(),
            temperature: spec.temperature,
            max_tokens: spec.max_tokens,
            top_p: spec.top_p,
            max_iterations: spec.max_iterations,
            timestamp: Utc::now(),
            query_results: Vec::new(),
            agent_logs: Vec::new(),
            error: None,
        }
    }
}

pub struct ExperimentRunner {
    output_dir: PathBuf,
    provider: Arc<dyn Provider>,
    tools: Arc<ToolRegistry>,
    personas: PersonaRegistry,
    /// Supplies settings experiments do not vary (policy, call timeout).
    base: AgentSpec,
    experiments: Vec<ExperimentSpec>,
    results: Vec<ExperimentResult>,
}

impl ExperimentRunner {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
        personas: PersonaRegistry,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            provider,
            tools,
            personas,
            base: AgentSpec::default(),
            experiments: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn with_base_spec(mut self, base: AgentSpec) -> Self {
        self.base = base;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Queue an experiment, returning its sequential id (from 1).
    pub fn add_experiment(&mut self, mut spec: ExperimentSpec) -> u32 {
        spec.id = self.experiments.len() as u32 + 1;
        if spec.queries.is_empty() {
            spec.queries = DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect();
        }
        info!(
            id = spec.id,
            persona = %spec.persona_key,
            model = %spec.model,
            temperature = spec.temperature,
            "Experiment added"
        );
        let id = spec.id;
        self.experiments.push(spec);
        id
    }

    pub fn experiments(&self) -> &[ExperimentSpec] {
        &self.experiments
    }

    pub fn results(&self) -> &[ExperimentResult] {
        &self.results
    }

    /// Run every queued experiment, then write the summary and table.
    ///
    /// Model failures are recorded per query and an unknown persona is
    /// recorded on its experiment; only file I/O aborts the batch.
    pub async fn run_all(&mut self) -> Result<&[ExperimentResult]> {
        create_dir(&self.output_dir).await?;
        info!(total = self.experiments.len(), "Starting experiment suite");

        self.results.clear();
        for spec in &self.experiments {
            let result = self.run_one(spec).await;
            let path = self.output_dir.join(spec.file_name());
            write_json(&path, &result).await?;
            info!(id = spec.id, path = %path.display(), "Experiment complete");
            self.results.push(result);
        }

        self.save_summary().await?;
        Ok(&self.results)
    }

    async fn run_one(&self, spec: &ExperimentSpec) -> ExperimentResult {
        let mut result = ExperimentResult::new(spec);

        let agent = match spec.agent_spec(&self.base).build(
            &self.personas,
            Arc::clone(&self.provider),
            Arc::clone(&self.tools),
        ) {
            Ok(agent) => agent,
            Err(e) => {
                error!(id = spec.id, persona = %spec.persona_key, error = %e, "Could not build agent");
                result.error = Some(e.to_string());
                return result;
            }
        };
        result.persona_name = Some(agent.config().persona_name.clone());

        for (i, query) in spec.queries.iter().enumerate() {
            let query_result = match agent.run(query).await {
                Ok(response) => QueryResult {
                    query_number: i + 1,
                    query: query.clone(),
                    response: Some(response),
                    success: true,
                    error: None,
                },
                Err(e) => {
                    warn!(id = spec.id, query = i + 1, error = %e, "Query failed");
                    QueryResult {
                        query_number: i + 1,
                        query: query.clone(),
                        response: None,
                        success: false,
                        error: Some(e.to_string()),
                    }
                }
            };
            result.query_results.push(query_result);
        }

        result.agent_logs = agent.logs().await;
        result
    }

    pub fn comparison(&self) -> Vec<ComparisonRow> {
        self.results.iter().map(ComparisonRow::from_result).collect()
    }

    async fn save_summary(&self) -> Result<()> {
        write_json(&self.output_dir.join(SUMMARY_FILE), &self.results).await?;

        let csv = table::to_csv(&self.comparison());
        let path = self.output_dir.join(TABLE_FILE);
        tokio::fs::write(&path, csv)
            .await
            .map_err(|e| io_error(&path, e))?;
        info!(path = %path.display(), "Comparison table saved");
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> Error {
    Error::Storage(StorageError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

async fn create_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| io_error(dir, e))
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use breatheeasy_core::error::ProviderError;
    use breatheeasy_core::message::Message;
    use breatheeasy_core::provider::{ProviderRequest, ProviderResponse};
    use breatheeasy_tools::CustomerRecords;

    /// Answers directly, except that any request mentioning "fail" errors.
    struct ScriptedProvider;

    #[async_trait::async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            let user = &request.messages[1].content;
            if user.contains("fail") {
                return Err(ProviderError::Network("unreachable".into()));
            }
            let text = if request.messages.len() == 2 {
                "I would say we can help."
            } else {
                "We can help with that!"
            };
            Ok(ProviderResponse {
                message: Message::assistant(text),
                usage: None,
                model: request.model,
            })
        }
    }

    fn runner(dir: &Path) -> ExperimentRunner {
        let tools = Arc::new(breatheeasy_tools::default_registry(Arc::new(
            CustomerRecords::in_memory(),
        )));
        ExperimentRunner::new(dir, Arc::new(ScriptedProvider), tools, PersonaRegistry::builtin())
    }

    #[test]
    fn ids_are_sequential_and_default_queries_fill_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = runner(dir.path());

        assert_eq!(runner.add_experiment(ExperimentSpec::new("friendly_zero_shot")), 1);
        assert_eq!(
            runner.add_experiment(
                ExperimentSpec::new("expert_cot").with_queries(["Only one question?"])
            ),
            2
        );

        let experiments = runner.experiments();
        assert_eq!(experiments[0].queries.len(), DEFAULT_QUERIES.len());
        assert_eq!(experiments[1].queries, vec!["Only one question?"]);
        assert_eq!(experiments[1].model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn run_all_writes_every_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        let mut runner = runner(&out);
        runner.add_experiment(
            ExperimentSpec::new("cautious_zero_shot")
                .with_temperature(0.3)
                .with_queries(["Do you service Eastbridge?", "please fail now"]),
        );
        runner.add_experiment(ExperimentSpec::new("friendly_cot").with_model("gpt-4o"));

        let results = runner.run_all().await.unwrap();
        assert_eq!(results.len(), 2);

        let first = &results[0];
        assert_eq!(first.persona_name.as_deref(), Some("Cautious Service Guide (Zero-Shot)"));
        assert!(first.query_results[0].success);
        assert_eq!(
            first.query_results[0].response.as_deref(),
            Some("We can help with that!")
        );
        assert!(!first.query_results[1].success);
        assert!(first.query_results[1].error.as_deref().unwrap().contains("unreachable"));
        // the failed query leaves no log entry
        assert_eq!(first.agent_logs.len(), 1);

        assert!(out.join("experiment_1_cautious_zero_shot.json").exists());
        assert!(out.join("experiment_2_friendly_cot.json").exists());

        let summary: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(SUMMARY_FILE)).unwrap())
                .unwrap();
        assert_eq!(summary.as_array().unwrap().len(), 2);
        assert_eq!(summary[1]["model"], "gpt-4o");

        let csv = std::fs::read_to_string(out.join(TABLE_FILE)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,cautious_zero_shot,gpt-4o-mini,0.3,1,2,1,0,"));
        assert!(lines[2].starts_with("2,friendly_cot,gpt-4o,0.7,1,5,5,0,"));
    }

    #[tokio::test]
    async fn unknown_persona_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = runner(dir.path());
        runner.add_experiment(ExperimentSpec::new("pirate_zero_shot"));
        runner.add_experiment(ExperimentSpec::new("expert_zero_shot").with_queries(["hi"]));

        let results = runner.run_all().await.unwrap();
        assert!(results[0].error.as_deref().unwrap().contains("pirate_zero_shot"));
        assert!(results[0].query_results.is_empty());
        assert!(results[0].persona_name.is_none());
        assert!(results[1].error.is_none());

        let rows = runner.comparison();
        assert_eq!(rows[0].total_queries, 0);
        assert_eq!(rows[0].avg_iterations, 0.0);
        assert_eq!(rows[1].successful, 1);
    }
}
