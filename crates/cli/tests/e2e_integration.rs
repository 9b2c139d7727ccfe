//! End-to-end tests for the BreatheEasy support agent.
//!
//! These wire the real tools, personas, agent loop, experiment runner and
//! HTTP gateway together around a scripted model provider.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use breatheeasy_agent::{AgentSpec, LogEntry};
use breatheeasy_core::error::ProviderError;
use breatheeasy_core::message::Message;
use breatheeasy_core::provider::{Provider, ProviderRequest, ProviderResponse};
use breatheeasy_core::tool::{ToolInvocation, ToolName, ToolRegistry};
use breatheeasy_experiments::{ExperimentRunner, ExperimentSpec};
use breatheeasy_gateway::api_v1::ApiV1State;
use breatheeasy_personas::PersonaRegistry;
use breatheeasy_tools::CustomerRecords;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ── Mock Provider ────────────────────────────────────────────────────────

/// Returns scripted replies in order, then repeats `fallback`.
struct ScriptedProvider {
    script: Mutex<VecDeque<String>>,
    fallback: String,
    calls: Mutex<usize>,
}

impl ScriptedProvider {
    fn new(script: &[&str], fallback: &str) -> Self {
        Self {
            script: Mutex::new(script.iter().map(|s| s.to_string()).collect()),
            fallback: fallback.to_string(),
            calls: Mutex::new(0),
        }
    }

    /// Every call answers directly, so each run takes two calls.
    fn direct() -> Self {
        Self::new(&[], "I would say yes, we can help with that.")
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        *self.calls.lock().unwrap() += 1;
        let text = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(ProviderResponse {
            message: Message::assistant(text),
            usage: None,
            model: request.model,
        })
    }
}

fn file_records(dir: &std::path::Path) -> Arc<CustomerRecords> {
    Arc::new(
        CustomerRecords::open(dir.join("leads.json"), dir.join("feedback.json")).unwrap(),
    )
}

fn registry(records: Arc<CustomerRecords>) -> Arc<ToolRegistry> {
    Arc::new(breatheeasy_tools::default_registry(records))
}

// ── Agent loop ───────────────────────────────────────────────────────────

#[tokio::test]
async fn persona_agent_checks_availability_and_saves_logs() {
    let dir = tempfile::tempdir().unwrap();
    let tools = registry(file_records(dir.path()));
    let personas = PersonaRegistry::with_tools(&tools.definitions());
    let provider = Arc::new(ScriptedProvider::new(
        &[
            "I need to check availability in Eastbridge.",
            "Eastbridge is covered, so I can tell them yes.",
            "Good news: we proudly serve Eastbridge!",
        ],
        "unused",
    ));

    let agent = AgentSpec::default()
        .with_persona("cautious_zero_shot")
        .with_max_iterations(1)
        .build(&personas, provider.clone(), tools)
        .unwrap();

    let answer = agent.run("Do you service Eastbridge?").await.unwrap();
    assert_eq!(answer, "Good news: we proudly serve Eastbridge!");
    assert_eq!(provider.calls(), 3);

    let path = dir.path().join("logs").join("chat_logs.json");
    agent.run_log().save_json(&path).await.unwrap();

    let saved: Vec<LogEntry> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].iterations, 1);
    assert_eq!(saved[0].actions[0].tool, ToolName::CheckAvailability);
    assert!(saved[0].persona.starts_with("Cautious"));
    assert!(saved[0].observations[0].contains("check_availability"));
}

#[tokio::test]
async fn unknown_persona_is_rejected() {
    let tools = registry(Arc::new(CustomerRecords::in_memory()));
    let result = AgentSpec::default().with_persona("grumpy_zero_shot").build(
        &PersonaRegistry::builtin(),
        Arc::new(ScriptedProvider::direct()),
        tools,
    );
    assert!(result.is_err());
}

// ── Tools and records ────────────────────────────────────────────────────

#[tokio::test]
async fn recorded_leads_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let tools = registry(file_records(dir.path()));

    let lead = ToolInvocation::new(ToolName::RecordCustomerInterest)
        .with_arg("name", "John Smith")
        .with_arg("email", "john@example.com")
        .with_arg("message", "Deep cleaning please");
    let result = tools.execute(&lead).await.unwrap();
    assert!(result.output.contains("John Smith"));

    let reopened = file_records(dir.path());
    let leads = reopened.leads.snapshot().await;
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "john@example.com");
}

// ── Experiments ──────────────────────────────────────────────────────────

#[tokio::test]
async fn experiment_batch_writes_summary_and_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results");
    let tools = registry(Arc::new(CustomerRecords::in_memory()));
    let provider = Arc::new(ScriptedProvider::direct());

    let mut runner = ExperimentRunner::new(&out, provider, tools, PersonaRegistry::builtin());
    runner.add_experiment(
        ExperimentSpec::new("friendly_zero_shot").with_queries(["Do you service Downtown?"]),
    );
    runner.add_experiment(
        ExperimentSpec::new("expert_cot")
            .with_temperature(0.3)
            .with_queries(["What products do you use?", "How much is a deep clean?"]),
    );

    let results = runner.run_all().await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.error.is_none()));
    assert_eq!(results[1].agent_logs.len(), 2);

    let rows = runner.comparison();
    assert_eq!(rows[1].successful, 2);
    assert!(out.join(breatheeasy_experiments::runner::SUMMARY_FILE).exists());
    let csv =
        std::fs::read_to_string(out.join(breatheeasy_experiments::runner::TABLE_FILE)).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

// ── Gateway ──────────────────────────────────────────────────────────────

async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn gateway_create_chat_and_logs() {
    let tools = registry(Arc::new(CustomerRecords::in_memory()));
    let personas = PersonaRegistry::with_tools(&tools.definitions());
    let state = Arc::new(ApiV1State::new(
        Arc::new(ScriptedProvider::direct()),
        tools,
        personas,
        AgentSpec::default(),
    ));
    let app = breatheeasy_gateway::build_router(state);

    let (status, _) = send(app.clone(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, personas) = send(app.clone(), "GET", "/v1/personas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(personas.as_array().unwrap().len(), 9);

    let (status, created) = send(
        app.clone(),
        "POST",
        "/v1/agents",
        Some(serde_json::json!({"persona": "friendly_cot", "temperature": 0.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["agent_id"].as_str().unwrap().to_string();

    let (status, reply) = send(
        app.clone(),
        "POST",
        &format!("/v1/agents/{id}/chat"),
        Some(serde_json::json!({"message": "Hello there"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["response"], "I would say yes, we can help with that.");

    let (status, logs) = send(app, "GET", &format!("/v1/agents/{id}/logs"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logs.as_array().unwrap().len(), 1);
    assert_eq!(logs[0]["user_message"], "Hello there");
}
