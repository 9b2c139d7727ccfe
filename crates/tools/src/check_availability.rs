//! Service-area availability check.

use crate::catalog::{SERVICE_AREAS, contact_block};
use async_trait::async_trait;
use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{Tool, ToolArguments, ToolName, ToolResult};

pub struct CheckAvailabilityTool;

#[async_trait]
impl Tool for CheckAvailabilityTool {
    fn tool_name(&self) -> ToolName {
        ToolName::CheckAvailability
    }

    fn description(&self) -> &str {
        "Check if BreatheEasy services are available in a specific location or area. Use this when customer asks about service coverage or availability in their neighborhood."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The location or area name to check (e.g., 'Downtown', 'Northside', 'Eastbridge')"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, arguments: &ToolArguments) -> Result<ToolResult, ToolError> {
        let location = arguments
            .get("location")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'location' argument".into()))?;

        Ok(ToolResult::json(availability(location)))
    }
}

/// First service area matching `location` in either direction.
pub fn matching_area(location: &str) -> Option<&'static str> {
    let location = location.to_lowercase();
    SERVICE_AREAS.iter().copied().find(|area| {
        let area = area.to_lowercase();
        area.contains(&location) || location.contains(&area)
    })
}

fn availability(location: &str) -> serde_json::Value {
    match matching_area(location) {
        Some(area) => serde_json::json!({
            "available": true,
            "area": area,
            "message": format!("Yes! We provide services in {area}. Contact us to schedule."),
            "contact": contact_block(),
        }),
        None => serde_json::json!({
            "available": false,
            "message": format!(
                "We don't currently service {location}, but we're expanding! Please leave your contact info and we'll notify you when we reach your area."
            ),
            "nearby_areas": &SERVICE_AREAS[..3],
        }),
    }
}
