//! HTTP API v1 for the chat UI.
//!
//! Endpoints:
//!
//! - `GET  /v1/personas`          List personas
//! - `GET  /v1/models`            Models the provider offers
//! - `POST /v1/agents`            Create an agent from a persona
//! - `POST /v1/agents/{id}/chat`  Send a message, get the final answer
//! - `GET  /v1/agents/{id}/logs`  The agent's run log

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use breatheeasy_agent::{AgentSpec, LogEntry, ReactAgent};
use breatheeasy_core::error::Error;
use breatheeasy_core::provider::Provider;
use breatheeasy_core::tool::ToolRegistry;
use breatheeasy_personas::{PersonaRegistry, PersonaSummary};

// ── State ─────────────────────────────────────────────────────────────────

/// Maximum number of live agents before the oldest is evicted.
pub const MAX_AGENTS: usize = 100;

pub struct AgentSlot {
    pub agent: Arc<ReactAgent>,
    /// Creation order; the smallest is evicted first.
    sequence: u64,
}

/// Shared state for the v1 API.
///
/// Every agent shares the provider and the tool registry (and with it the
/// customer-record store); each owns its own run log.
pub struct ApiV1State {
    pub provider: Arc<dyn Provider>,
    pub tools: Arc<ToolRegistry>,
    pub personas: PersonaRegistry,
    /// Parameters used when a create request leaves them out.
    pub defaults: AgentSpec,
    pub agents: RwLock<HashMap<String, AgentSlot>>,
    next_sequence: AtomicU64,
}

impl ApiV1State {
    pub fn new(
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
        personas: PersonaRegistry,
        defaults: AgentSpec,
    ) -> Self {
        Self {
            provider,
            tools,
            personas,
            defaults,
            agents: RwLock::new(HashMap::new()),
            next_sequence: AtomicU64::new(0),
        }
    }

    async fn agent(&self, id: &str) -> Option<Arc<ReactAgent>> {
        self.agents
            .read()
            .await
            .get(id)
            .map(|slot| Arc::clone(&slot.agent))
    }
}

pub type SharedApiState = Arc<ApiV1State>;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/personas", get(list_personas_handler))
        .route("/models", get(list_models_handler))
        .route("/agents", post(create_agent_handler))
        .route("/agents/{id}/chat", post(chat_handler))
        .route("/agents/{id}/logs", get(logs_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateAgentRequest {
    pub persona: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub max_iterations: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAgentResponse {
    pub agent_id: String,
    pub persona: String,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn list_personas_handler(State(state): State<SharedApiState>) -> Json<Vec<PersonaSummary>> {
    Json(state.personas.list())
}

async fn list_models_handler(
    State(state): State<SharedApiState>,
) -> Result<Json<ModelsResponse>, ApiError> {
    let models = state.provider.list_models().await.map_err(|e| {
        warn!(provider = state.provider.name(), error = %e, "Could not list models");
        api_error(
            StatusCode::BAD_GATEWAY,
            "Sorry, I couldn't reach the assistant service to list models.",
        )
    })?;
    Ok(Json(ModelsResponse { models }))
}

async fn create_agent_handler(
    State(state): State<SharedApiState>,
    Json(payload): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<CreateAgentResponse>), ApiError> {
    let mut spec = state.defaults.clone().with_persona(&payload.persona);
    if let Some(model) = payload.model {
        spec = spec.with_model(model);
    }
    if let Some(temperature) = payload.temperature {
        spec = spec.with_temperature(temperature);
    }
    if let Some(top_p) = payload.top_p {
        spec = spec.with_top_p(top_p);
    }
    if let Some(max_tokens) = payload.max_tokens {
        spec = spec.with_max_tokens(max_tokens);
    }
    if let Some(max_iterations) = payload.max_iterations {
        spec = spec.with_max_iterations(max_iterations);
    }

    let agent = spec
        .build(
            &state.personas,
            Arc::clone(&state.provider),
            Arc::clone(&state.tools),
        )
        .map_err(|e| {
            warn!(persona = %payload.persona, error = %e, "Agent creation rejected");
            api_error(StatusCode::BAD_REQUEST, format!("Error creating agent: {e}"))
        })?;

    let id = uuid::Uuid::new_v4().to_string();
    let config = agent.config();
    let response = CreateAgentResponse {
        agent_id: id.clone(),
        persona: config.persona_name.clone(),
        model: config.model.clone(),
        temperature: config.temperature,
    };

    let mut agents = state.agents.write().await;

    // Evict oldest agent if at capacity
    if agents.len() >= MAX_AGENTS
        && let Some(oldest_key) = agents
            .iter()
            .min_by_key(|(_, slot)| slot.sequence)
            .map(|(k, _)| k.clone())
    {
        agents.remove(&oldest_key);
    }

    agents.insert(
        id.clone(),
        AgentSlot {
            agent: Arc::new(agent),
            sequence: state.next_sequence.fetch_add(1, Ordering::Relaxed),
        },
    );

    info!(agent_id = %id, persona = %response.persona, model = %response.model, "Agent created");
    Ok((StatusCode::CREATED, Json(response)))
}

async fn chat_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let agent = state.agent(&id).await.ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            "Please create an agent first by selecting a persona.",
        )
    })?;

    info!(agent_id = %id, message_len = payload.message.len(), "v1/chat request");

    match agent.run(&payload.message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(Error::Provider(e)) => {
            error!(agent_id = %id, error = %e, "Model service call failed");
            Err(api_error(
                StatusCode::BAD_GATEWAY,
                format!(
                    "Sorry, I couldn't reach the assistant service ({e}). Please try again or create a new agent."
                ),
            ))
        }
        Err(e) => {
            error!(agent_id = %id, error = %e, "Agent run failed");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Sorry, something went wrong while answering. Please try again.",
            ))
        }
    }
}

async fn logs_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<LogEntry>>, StatusCode> {
    let agent = state.agent(&id).await.ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(agent.logs().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use breatheeasy_core::error::ProviderError;
    use breatheeasy_core::message::Message;
    use breatheeasy_core::provider::{ProviderRequest, ProviderResponse};
    use breatheeasy_tools::CustomerRecords;
    use http_body_util::BodyExt;
    use std::sync::atomic::AtomicUsize;
    use tower::ServiceExt;

    /// Alternates "I would say so." (a Think) with "Yes, we can help!" (a Respond).
    struct DirectAnswerProvider {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Provider for DirectAnswerProvider {
        fn name(&self) -> &str {
            "direct"
        }

        async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
            Ok(vec!["mock-small".into(), "mock-large".into()])
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let text = if call % 2 == 0 {
                "I would say so."
            } else {
                "Yes, we can help!"
            };
            Ok(ProviderResponse {
                message: Message::assistant(text),
                usage: None,
                model: "mock".into(),
            })
        }
    }

    struct DownProvider;

    #[async_trait::async_trait]
    impl Provider for DownProvider {
        fn name(&self) -> &str {
            "down"
        }

        async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
            Err(ProviderError::Network("connection refused".into()))
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::Network("connection refused".into()))
        }
    }

    fn state_with(provider: Arc<dyn Provider>) -> SharedApiState {
        let tools = Arc::new(breatheeasy_tools::default_registry(Arc::new(
            CustomerRecords::in_memory(),
        )));
        Arc::new(ApiV1State::new(
            provider,
            tools,
            PersonaRegistry::builtin(),
            AgentSpec::default(),
        ))
    }

    fn test_state() -> SharedApiState {
        state_with(Arc::new(DirectAnswerProvider {
            calls: AtomicUsize::new(0),
        }))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_agent(state: &SharedApiState, body: serde_json::Value) -> String {
        let response = v1_router(state.clone())
            .oneshot(json_request("POST", "/agents", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["agent_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn lists_nine_personas() {
        let response = v1_router(test_state())
            .oneshot(Request::builder().uri("/personas").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let personas = body_json(response).await;
        assert_eq!(personas.as_array().unwrap().len(), 9);
        assert_eq!(personas[0]["key"], "friendly_zero_shot");
    }

    #[tokio::test]
    async fn lists_provider_models() {
        let response = v1_router(test_state())
            .oneshot(Request::builder().uri("/models").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["models"], serde_json::json!(["mock-small", "mock-large"]));
    }

    #[tokio::test]
    async fn model_listing_failure_is_bad_gateway() {
        let response = v1_router(state_with(Arc::new(DownProvider)))
            .oneshot(Request::builder().uri("/models").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .starts_with("Sorry"));
    }

    #[tokio::test]
    async fn create_agent_applies_overrides() {
        let state = test_state();
        let response = v1_router(state.clone())
            .oneshot(json_request(
                "POST",
                "/agents",
                serde_json::json!({"persona": "expert_cot", "temperature": 0.3, "model": "gpt-4o"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["persona"], "Professional Health Expert (Chain-of-Thought)");
        assert_eq!(body["model"], "gpt-4o");
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(state.agents.read().await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_persona_is_bad_request() {
        let response = v1_router(test_state())
            .oneshot(json_request(
                "POST",
                "/agents",
                serde_json::json!({"persona": "pirate_zero_shot"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("pirate_zero_shot"));
    }

    #[tokio::test]
    async fn invalid_parameters_are_bad_request() {
        let response = v1_router(test_state())
            .oneshot(json_request(
                "POST",
                "/agents",
                serde_json::json!({"persona": "friendly_zero_shot", "temperature": 2.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_then_read_logs() {
        let state = test_state();
        let id = create_agent(&state, serde_json::json!({"persona": "friendly_few_shot"})).await;

        let response = v1_router(state.clone())
            .oneshot(json_request(
                "POST",
                &format!("/agents/{id}/chat"),
                serde_json::json!({"message": "Do you service the downtown area?"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["response"], "Yes, we can help!");

        let response = v1_router(state)
            .oneshot(
                Request::builder()
                    .uri(format!("/agents/{id}/logs"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let logs = body_json(response).await;
        assert_eq!(logs.as_array().unwrap().len(), 1);
        assert_eq!(logs[0]["user_message"], "Do you service the downtown area?");
        assert_eq!(logs[0]["iterations"], 0);
    }

    #[tokio::test]
    async fn unknown_agent_is_not_found() {
        let router = v1_router(test_state());
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/agents/nope/chat",
                serde_json::json!({"message": "hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router
            .oneshot(Request::builder().uri("/agents/nope/logs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn model_failure_is_bad_gateway_with_apology() {
        let state = state_with(Arc::new(DownProvider));
        let id = create_agent(&state, serde_json::json!({"persona": "cautious_zero_shot"})).await;

        let response = v1_router(state.clone())
            .oneshot(json_request(
                "POST",
                &format!("/agents/{id}/chat"),
                serde_json::json!({"message": "hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Sorry"));

        let agent = state.agent(&id).await.unwrap();
        assert!(agent.logs().await.is_empty());
    }

    #[tokio::test]
    async fn oldest_agent_is_evicted_at_capacity() {
        let state = test_state();
        let first = create_agent(&state, serde_json::json!({"persona": "friendly_zero_shot"})).await;
        for _ in 1..MAX_AGENTS {
            create_agent(&state, serde_json::json!({"persona": "friendly_zero_shot"})).await;
        }
        assert_eq!(state.agents.read().await.len(), MAX_AGENTS);
        assert!(state.agent(&first).await.is_some());

        create_agent(&state, serde_json::json!({"persona": "friendly_zero_shot"})).await;
        assert_eq!(state.agents.read().await.len(), MAX_AGENTS);
        assert!(state.agent(&first).await.is_none());
    }
}
