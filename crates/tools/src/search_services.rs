//! Service search: substring match over the service catalog.

use crate::catalog::{SERVICES, Service};
use async_trait::async_trait;
use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolResult};

pub struct SearchServicesTool;

#[async_trait]
impl Tool for SearchServicesTool {
    fn tool_name(&self) -> ToolName {
        ToolName::SearchServices
    }

    fn description(&self) -> &str {
        "Search for BreatheEasy cleaning services based on customer needs. Use this when the customer asks about what services are available, specific cleaning types, or wants to know what BreatheEasy offers."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query describing what the customer needs (e.g., 'allergen cleaning', 'move out', 'regular maintenance')"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        let query = arguments
            .get("query")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;

        let matches = search(query);
        let data = serde_json::to_value(&matches)
            .map_err(|e| ToolError::ExecutionFailed {
                tool_name: self.name().into(),
                reason: e.to_string(),
            })?;
        Ok(ToolResult::json(data))
    }
}

/// Services whose text contains `query`; every service when none match.
pub fn search(query: &str) -> Vec<&'static Service> {
    let needle = query.to_lowercase();
    let matches: Vec<&Service> = SERVICES
        .iter()
        .filter(|s| s.search_text().contains(&needle))
        .collect();

    if matches.is_empty() {
        SERVICES.iter().collect()
    } else {
        matches
    }
}
