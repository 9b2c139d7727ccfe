//! # BreatheEasy Core
//!
//! Domain types, traits, and error definitions for the BreatheEasy support
//! agent. This crate has **zero framework dependencies**: it defines the
//! domain model that the provider, tool, persona and agent crates implement
//! against.
//!
//! ## Seams
//!
//! - [`Provider`]: the language-model service (one completion per call)
//! - [`Tool`] / [`ToolRegistry`]: the business tool dispatcher
//! - [`RunConfig`]: the immutable per-agent run configuration

pub mod agent;
pub mod error;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use agent::RunConfig;
pub use error::{Error, PersonaError, ProviderError, Result, StorageError, ToolError};
pub use message::{Conversation, ConversationId, Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use tool::{
    Tool, ToolArguments, ToolDefinition, ToolInvocation, ToolName, ToolRegistry, ToolResult,
};
