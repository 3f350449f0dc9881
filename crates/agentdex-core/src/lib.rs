// Agentdex core
//
// DB-agnostic domain types for the agent catalog:
// - Agent entity with its nested abilities, gallery and story
// - Identifier validation (name or numeric id)
// - Lookup error taxonomy shared by storage and API layers
// - Projection extractor producing the narrow response views

pub mod agent;
pub mod error;
pub mod identifier;
pub mod projection;

pub use agent::{
    Ability, Agent, AgentStory, AgentsDocument, Background, Conflict, CurrentRole, Relationship,
    Traits, ValiantProtocol,
};
pub use error::{LookupError, Result};
pub use identifier::{names_match, parse_agent_id, parse_agent_name, AgentIdentifier, InvalidIdentifier};
pub use projection::{
    project, AgentIdProfileIcon, AgentIdProfileImage, AgentProfileIcon, AgentProfileImage,
    AgentProjection, AgentView,
};
