//! Action parser: turns free-text reasoning into a tool invocation.
//!
//! Matching is case-insensitive substring search, evaluated in a fixed
//! priority order where the first matching rule wins. The recording tools
//! need structured name/email data that cannot be pulled from prose, so
//! reasoning aimed at them yields `None`.

use breatheeasy_core::tool::{ToolInvocation, ToolName};

/// Area names recognized in reasoning text, in scan order.
pub const KNOWN_AREAS: [&str; 8] = [
    "downtown",
    "northside",
    "westend",
    "eastbridge",
    "southgate",
    "riverside",
    "hilltop",
    "lakeside",
];

const DEFAULT_QUERY: &str = "all services";
const DEFAULT_LOCATION: &str = "downtown";
const DEFAULT_CATEGORY: &str = "all";

/// The invocation used when reasoning names no parseable action.
pub fn default_action() -> ToolInvocation {
    search_services(DEFAULT_QUERY)
}

fn search_services(query: &str) -> ToolInvocation {
    ToolInvocation::new(ToolName::SearchServices).with_arg("query", query)
}

fn has_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Parse the most recent reasoning string into a tool invocation.
pub fn parse_action(reasoning: &str) -> Option<ToolInvocation> {
    let text = reasoning.to_lowercase();

    if text.contains("search") && has_any(&text, &["service", "cleaning"]) {
        return Some(search_services(service_query(&text)));
    }

    if text.contains("check") && has_any(&text, &["availability", "location", "area"]) {
        let location = KNOWN_AREAS
            .iter()
            .copied()
            .find(|area| text.contains(area))
            .unwrap_or(DEFAULT_LOCATION);
        return Some(
            ToolInvocation::new(ToolName::CheckAvailability).with_arg("location", location),
        );
    }

    if has_any(&text, &["product", "ingredient", "chemical"]) {
        return Some(
            ToolInvocation::new(ToolName::GetProductInfo)
                .with_arg("product_category", product_category(&text)),
        );
    }

    if text.contains("record") && has_any(&text, &["interest", "lead", "contact"]) {
        return None;
    }

    if text.contains("record") && text.contains("feedback") {
        return None;
    }

    Some(default_action())
}

fn service_query(text: &str) -> &'static str {
    if has_any(text, &["allergen", "allergy"]) {
        "allergen"
    } else if text.contains("move") {
        "move"
    } else if has_any(text, &["maintenance", "regular"]) {
        "regular maintenance"
    } else if text.contains("deep clean") {
        "deep cleaning"
    } else {
        DEFAULT_QUERY
    }
}

fn product_category(text: &str) -> &'static str {
    if text.contains("bathroom") {
        "bathroom"
    } else if text.contains("floor") {
        "floor"
    } else if has_any(text, &["glass", "window"]) {
        "glass"
    } else if has_any(text, &["all-purpose", "all purpose"]) {
        "all_purpose"
    } else {
        DEFAULT_CATEGORY
    }
}
