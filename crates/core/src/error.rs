//! Error types for the BreatheEasy domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all BreatheEasy operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Language-model service errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Persona errors ---
    #[error("Persona error: {0}")]
    Persona(#[from] PersonaError),

    // --- Customer record storage ---
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures of the hosted language-model service.
///
/// These are never recovered inside the reasoning loop: they abort the
/// current run and reach the caller of `run()`.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures raised by a tool invocation.
///
/// The loop controller converts these into observation strings; they never
/// surface to the caller of `run()`.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool execution failed: {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum PersonaError {
    #[error("Unknown persona: {key}. Available: {}", available.join(", "))]
    Unknown { key: String, available: Vec<String> },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O failure on {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Failed to serialize records: {0}")]
    Serialization(String),
}
