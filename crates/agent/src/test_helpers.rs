//! Shared test doubles for loop tests.

use breatheeasy_core::error::{ProviderError, ToolError};
use breatheeasy_core::message::Message;
use breatheeasy_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolRegistry, ToolResult};
use std::sync::Mutex;
use std::time::Duration;

/// A mock provider that returns a sequence of scripted responses.
///
/// Each call to `complete` returns the next response and records the
/// request. Once the script is exhausted every call fails with an
/// `ApiError`, which lets tests exercise a failing Respond step.
pub struct SequentialMockProvider {
    responses: Vec<ProviderResponse>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl SequentialMockProvider {
    pub fn new(responses: Vec<ProviderResponse>) -> Self {
        Self {
            responses,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| make_text_response(t)).collect())
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for SequentialMockProvider {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let call = requests.len();
        requests.push(request);

        self.responses
            .get(call)
            .cloned()
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 500,
                message: format!(
                    "no more scripted responses (call #{call}, have {})",
                    self.responses.len()
                ),
            })
    }
}

/// Create a simple text response.
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}

/// Always rate-limited.
pub struct FailingProvider;

#[async_trait::async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::RateLimited {
            retry_after_secs: 5,
        })
    }
}

/// Answers after `delay`.
pub struct SlowProvider {
    delay: Duration,
}

impl SlowProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Provider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(make_text_response("eventually"))
    }
}

/// A tool that always fails with `reason`.
pub struct FailingTool {
    name: ToolName,
    reason: String,
}

impl FailingTool {
    pub fn new(name: ToolName, reason: &str) -> Self {
        Self {
            name,
            reason: reason.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for FailingTool {
    fn tool_name(&self) -> ToolName {
        self.name
    }

    fn description(&self) -> &str {
        "Always fails"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        Err(ToolError::ExecutionFailed {
            tool_name: self.name.to_string(),
            reason: self.reason.clone(),
        })
    }
}

/// A registry holding only `tool`.
pub fn tools_with(tool: impl Tool + 'static) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(tool));
    registry
}
