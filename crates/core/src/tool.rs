//! Tool trait: the abstraction over the five business operations.
//!
//! Tools take a flat string→string argument map and either return a
//! stringifiable result or raise a recoverable [`ToolError`].

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat argument mapping passed to a tool.
pub type ToolArguments = BTreeMap<String, String>;

/// The five known tool names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    SearchServices,
    CheckAvailability,
    GetProductInfo,
    RecordCustomerInterest,
    RecordFeedback,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        ToolName::SearchServices,
        ToolName::CheckAvailability,
        ToolName::GetProductInfo,
        ToolName::RecordCustomerInterest,
        ToolName::RecordFeedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchServices => "search_services",
            ToolName::CheckAvailability => "check_availability",
            ToolName::GetProductInfo => "get_product_info",
            ToolName::RecordCustomerInterest => "record_customer_interest",
            ToolName::RecordFeedback => "record_feedback",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to execute one tool, as produced by the action parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub tool: ToolName,
    pub arguments: ToolArguments,
}

impl ToolInvocation {
    pub fn new(tool: ToolName) -> Self {
        Self {
            tool,
            arguments: ToolArguments::new(),
        }
    }

    /// Builder: add one argument.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).map(String::as_str)
    }
}

/// Tool metadata rendered into persona prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool's parameters
    pub parameters: serde_json::Value,
}

/// The result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the tool executed successfully
    pub success: bool,

    /// The stringified output fed back as an observation
    pub output: String,

    /// Optional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResult {
    /// Wrap a JSON payload, pretty-printed as the output text.
    pub fn json(data: serde_json::Value) -> Self {
        let output = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
        Self {
            success: true,
            output,
            data: Some(data),
        }
    }
}

/// The core Tool trait.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Which of the five known operations this is.
    fn tool_name(&self) -> ToolName;

    /// The wire name (e.g., "search_services").
    fn name(&self) -> &str {
        self.tool_name().as_str()
    }

    /// A description of what this tool does (rendered into prompts).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, arguments: &ToolArguments)
    -> std::result::Result<ToolResult, ToolError>;

    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// The tool dispatcher.
///
/// Registration order is preserved so prompts list tools deterministically.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.tool_name();
        if let Some(slot) = self.tools.iter_mut().find(|t| t.tool_name() == name) {
            *slot = tool;
        } else {
            self.tools.push(tool);
        }
    }

    /// Get a tool by name.
    pub fn get(&self, name: ToolName) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.tool_name() == name)
            .map(|t| t.as_ref())
    }

    /// All tool definitions, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.to_definition()).collect()
    }

    /// Dispatch an invocation to its tool.
    pub async fn execute(
        &self,
        invocation: &ToolInvocation,
    ) -> std::result::Result<ToolResult, ToolError> {
        let tool = self
            .get(invocation.tool)
            .ok_or_else(|| ToolError::NotFound(invocation.tool.to_string()))?;
        tool.execute(&invocation.arguments).await
    }

    /// List all registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
