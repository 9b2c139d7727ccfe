//! Records questions the agent could not answer.

use crate::required_arg;
use crate::storage::{CustomerRecords, Feedback, record_timestamp};
use async_trait::async_trait;
use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolResult};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordFeedbackTool {
    records: Arc<CustomerRecords>,
}

impl RecordFeedbackTool {
    pub fn new(records: Arc<CustomerRecords>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl Tool for RecordFeedbackTool {
    fn tool_name(&self) -> ToolName {
        ToolName::RecordFeedback
    }

    fn description(&self) -> &str {
        "Record customer questions or feedback that cannot be answered with available information. Use this as a last resort when you genuinely don't know the answer and none of the other tools can help."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The question or feedback that could not be answered"
                }
            },
            "required": ["question"]
        })
    }

    async fn execute(&self, arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        let question = required_arg(arguments, "question")?;

        let entry = Feedback {
            timestamp: record_timestamp(),
            question: question.to_string(),
        };
        info!(question = %entry.question, timestamp = %entry.timestamp, "Unanswered question recorded");

        if let Err(e) = self.records.feedback.append(entry).await {
            warn!(error = %e, "Feedback kept in memory but could not be saved");
        }

        Ok(ToolResult::json(serde_json::json!({
            "status": "recorded",
            "message": "Your question has been recorded and will be reviewed by our team. We'll get back to you with an answer soon!",
            "contact_for_urgent": "For urgent matters, please call (555) 123-EASY",
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_question() {
        let records = Arc::new(CustomerRecords::in_memory());
        let tool = RecordFeedbackTool::new(Arc::clone(&records));

        let args = ToolArguments::from([(
            "question".to_string(),
            "Do you clean swimming pools?".to_string(),
        )]);
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(result.data.unwrap()["status"], "recorded");
        let stored = records.feedback.snapshot().await;
        assert_eq!(stored[0].question, "Do you clean swimming pools?");
    }

    #[tokio::test]
    async fn missing_question_is_invalid() {
        let records = Arc::new(CustomerRecords::in_memory());
        let tool = RecordFeedbackTool::new(records);
        let err = tool.execute(&ToolArguments::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
