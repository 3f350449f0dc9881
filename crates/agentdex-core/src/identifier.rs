// Identifier validation
//
// An agent is addressed either by its name (case-insensitive) or by its
// numeric id. Malformed input is a client error and is reported separately
// from a well-formed identifier that matches nothing.

use std::fmt;
use thiserror::Error;

/// A validated identifier for a single agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentIdentifier {
    Name(String),
    Id(i64),
}

impl AgentIdentifier {
    /// Validate a raw name path segment.
    pub fn name(raw: &str) -> Result<Self, InvalidIdentifier> {
        parse_agent_name(raw).map(AgentIdentifier::Name)
    }

    /// Validate a raw id path segment.
    pub fn id(raw: &str) -> Result<Self, InvalidIdentifier> {
        parse_agent_id(raw).map(AgentIdentifier::Id)
    }
}

impl fmt::Display for AgentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentIdentifier::Name(name) => write!(f, "name={}", name),
            AgentIdentifier::Id(id) => write!(f, "id={}", id),
        }
    }
}

/// Rejected identifier input. The messages are returned to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("Agent name is required")]
    MissingName,

    #[error("Agent ID is required")]
    MissingId,

    #[error("Invalid agent ID format")]
    MalformedId(String),
}

/// Trim and validate an agent name.
pub fn parse_agent_name(raw: &str) -> Result<String, InvalidIdentifier> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InvalidIdentifier::MissingName);
    }
    Ok(name.to_string())
}

/// Parse an agent id as a base-10 integer.
///
/// Surrounding whitespace is ignored; anything else that isn't an optional
/// sign followed by digits (`"12abc"`, `"1.5"`, `"0x10"`) is rejected.
pub fn parse_agent_id(raw: &str) -> Result<i64, InvalidIdentifier> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidIdentifier::MissingId);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InvalidIdentifier::MalformedId(raw.to_string()))
}

/// Case-insensitive exact name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
