//! Business tools for the BreatheEasy agent.
//!
//! Three read-only lookups over the static catalog (services, service
//! areas, products) and two recorders that append to the shared
//! [`CustomerRecords`] store.

pub mod catalog;
pub mod check_availability;
pub mod product_info;
pub mod record_feedback;
pub mod record_interest;
pub mod search_services;
pub mod storage;

pub use storage::{CustomerRecords, Feedback, Lead, RecordLog};

use breatheeasy_core::error::ToolError;
use breatheeasy_core::tool::{ToolArguments, ToolDefinition, ToolRegistry};
use std::sync::Arc;

/// Create a registry with all five tools, recording into `records`.
pub fn default_registry(records: Arc<CustomerRecords>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(search_services::SearchServicesTool));
    registry.register(Box::new(check_availability::CheckAvailabilityTool));
    registry.register(Box::new(product_info::ProductInfoTool));
    registry.register(Box::new(record_interest::RecordInterestTool::new(
        Arc::clone(&records),
    )));
    registry.register(Box::new(record_feedback::RecordFeedbackTool::new(records)));
    registry
}

/// Definitions of the five tools, in registry order.
pub fn definitions() -> Vec<ToolDefinition> {
    default_registry(Arc::new(CustomerRecords::in_memory())).definitions()
}

/// A non-blank argument value.
pub(crate) fn required_arg<'a>(args: &'a ToolArguments, key: &str) -> Result<&'a str, ToolError> {
    args.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{key}' argument")))
}
