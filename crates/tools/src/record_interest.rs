//! Lead capture: records a customer's contact details and interest.

use crate::required_arg;
use crate::storage::{CustomerRecords, Lead, record_timestamp};
use async_trait::async_trait;
use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolResult};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordInterestTool {
    records: Arc<CustomerRecords>,
}

impl RecordInterestTool {
    pub fn new(records: Arc<CustomerRecords>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl Tool for RecordInterestTool {
    fn tool_name(&self) -> ToolName {
        ToolName::RecordCustomerInterest
    }

    fn description(&self) -> &str {
        "Record customer contact information and interest in services. Use this when a customer wants to schedule a service, request a quote, or leave their details for follow-up. Always collect name, email, and details about what they need."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Customer's full name"
                },
                "email": {
                    "type": "string",
                    "description": "Customer's email address"
                },
                "message": {
                    "type": "string",
                    "description": "Details about their interest, service needed, or specific requirements"
                }
            },
            "required": ["name", "email", "message"]
        })
    }

    async fn execute(&self, arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        let name = required_arg(arguments, "name")?;
        let email = required_arg(arguments, "email")?;
        let message = required_arg(arguments, "message")?;

        let lead = Lead {
            timestamp: record_timestamp(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        info!(name = %lead.name, email = %lead.email, timestamp = %lead.timestamp, "New customer lead recorded");

        if let Err(e) = self.records.leads.append(lead).await {
            warn!(error = %e, "Lead kept in memory but could not be saved");
        }

        Ok(ToolResult::json(serde_json::json!({
            "status": "success",
            "message": format!(
                "Thank you {name}! Your information has been recorded. We'll contact you at {email} shortly."
            ),
            "next_steps": "Our team will reach out within 24 hours to discuss your needs and schedule a service.",
        })))
    }
}
