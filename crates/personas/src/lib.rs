//! Persona store for the BreatheEasy agent.
//!
//! Three voices (friendly advisor, health expert, cautious guide) each come
//! in three prompt styles, giving nine persona keys such as
//! `friendly_few_shot` or `expert_cot`. Every system prompt embeds the
//! business context and a short listing of the available tools.

pub mod prompts;

use breatheeasy_core::error::PersonaError;
use breatheeasy_core::tool::ToolDefinition;
use serde::Serialize;

/// Characters of each tool description shown in prompts.
const TOOL_DESCRIPTION_PREVIEW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKind {
    Friendly,
    Expert,
    Cautious,
}

impl PersonaKind {
    pub const ALL: [PersonaKind; 3] = [PersonaKind::Friendly, PersonaKind::Expert, PersonaKind::Cautious];

    fn key_prefix(self) -> &'static str {
        match self {
            PersonaKind::Friendly => "friendly",
            PersonaKind::Expert => "expert",
            PersonaKind::Cautious => "cautious",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PersonaKind::Friendly => "Friendly Wellness Advisor",
            PersonaKind::Expert => "Professional Health Expert",
            PersonaKind::Cautious => "Cautious Service Guide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    ZeroShot,
    FewShot,
    ChainOfThought,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 3] = [
        PromptStyle::ZeroShot,
        PromptStyle::FewShot,
        PromptStyle::ChainOfThought,
    ];

    fn key_suffix(self) -> &'static str {
        match self {
            PromptStyle::ZeroShot => "zero_shot",
            PromptStyle::FewShot => "few_shot",
            PromptStyle::ChainOfThought => "cot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptStyle::ZeroShot => "Zero-Shot",
            PromptStyle::FewShot => "Few-Shot",
            PromptStyle::ChainOfThought => "Chain-of-Thought",
        }
    }
}

/// A named voice plus its rendered system prompt.
#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub key: String,
    pub name: String,
    pub description: &'static str,
    pub kind: PersonaKind,
    pub style: PromptStyle,
    #[serde(skip)]
    pub system_prompt: String,
}

/// Key, display name, and description, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaSummary {
    pub key: String,
    pub name: String,
    pub description: String,
}

fn description(kind: PersonaKind, style: PromptStyle) -> &'static str {
    use PersonaKind::*;
    use PromptStyle::*;
    match (kind, style) {
        (Friendly, ZeroShot) => "Warm, empathetic advisor with zero-shot prompting",
        (Friendly, FewShot) => "Warm, empathetic advisor with few-shot examples",
        (Friendly, ChainOfThought) => "Warm advisor with explicit chain-of-thought reasoning",
        (Expert, ZeroShot) => "Technical, scientific expert with zero-shot prompting",
        (Expert, FewShot) => "Technical expert with few-shot examples",
        (Expert, ChainOfThought) => "Scientific expert with systematic reasoning",
        (Cautious, ZeroShot) => "Careful, thorough guide with zero-shot prompting",
        (Cautious, FewShot) => "Careful guide with few-shot examples",
        (Cautious, ChainOfThought) => "Deliberate guide with careful reasoning",
    }
}

fn template(kind: PersonaKind, style: PromptStyle) -> String {
    let (zero_shot, examples, cot) = match kind {
        PersonaKind::Friendly => (
            prompts::FRIENDLY_ZERO_SHOT,
            prompts::FRIENDLY_EXAMPLES,
            prompts::FRIENDLY_COT,
        ),
        PersonaKind::Expert => (
            prompts::EXPERT_ZERO_SHOT,
            prompts::EXPERT_EXAMPLES,
            prompts::EXPERT_COT,
        ),
        PersonaKind::Cautious => (
            prompts::CAUTIOUS_ZERO_SHOT,
            prompts::CAUTIOUS_EXAMPLES,
            prompts::CAUTIOUS_COT,
        ),
    };
    match style {
        PromptStyle::ZeroShot => zero_shot.to_string(),
        PromptStyle::FewShot => format!("{zero_shot}{examples}"),
        PromptStyle::ChainOfThought => cot.to_string(),
    }
}

/// Render the tool listing embedded in every prompt.
pub fn tool_instructions(tools: &[ToolDefinition]) -> String {
    let mut out = String::from("\n\nAVAILABLE TOOLS:\n");
    for tool in tools {
        let preview: String = tool.description.chars().take(TOOL_DESCRIPTION_PREVIEW).collect();
        out.push_str(&format!("- {}: {}...\n", tool.name, preview));
    }
    out
}

/// The static persona registry, in listing order.
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// All nine personas, prompts listing the five business tools.
    pub fn builtin() -> Self {
        Self::with_tools(&breatheeasy_tools::definitions())
    }

    /// All nine personas, prompts listing `tools`.
    pub fn with_tools(tools: &[ToolDefinition]) -> Self {
        let tools = tool_instructions(tools);
        let personas = PersonaKind::ALL
            .into_iter()
            .flat_map(|kind| PromptStyle::ALL.into_iter().map(move |style| (kind, style)))
            .map(|(kind, style)| Persona {
                key: format!("{}_{}", kind.key_prefix(), style.key_suffix()),
                name: format!("{} ({})", kind.title(), style.label()),
                description: description(kind, style),
                kind,
                style,
                system_prompt: template(kind, style)
                    .replace("{business}", prompts::BUSINESS_CONTEXT)
                    .replace("{tools}", &tools),
            })
            .collect();
        Self { personas }
    }

    /// Find a persona by key.
    pub fn lookup(&self, key: &str) -> Result<&Persona, PersonaError> {
        self.personas
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| PersonaError::Unknown {
                key: key.to_string(),
                available: self.keys().into_iter().map(String::from).collect(),
            })
    }

    pub fn keys(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.key.as_str()).collect()
    }

    pub fn list(&self) -> Vec<PersonaSummary> {
        self.personas
            .iter()
            .map(|p| PersonaSummary {
                key: p.key.clone(),
                name: p.name.clone(),
                description: p.description.to_string(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
