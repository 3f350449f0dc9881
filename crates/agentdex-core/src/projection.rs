// Projection extractor
//
// Narrow views over a resolved agent. Field values are copied verbatim.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Which view of an agent a route returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentView {
    Full,
    NameAndImage,
    NameAndIcon,
    IdNameAndImage,
    IdNameAndIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AgentProfileImage {
    #[cfg_attr(feature = "openapi", schema(example = "Brimstone"))]
    pub name: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AgentProfileIcon {
    #[cfg_attr(feature = "openapi", schema(example = "Brimstone"))]
    pub name: String,
    pub profile_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AgentIdProfileImage {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub agent_id: i64,
    pub name: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AgentIdProfileIcon {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub agent_id: i64,
    pub name: String,
    pub profile_icon: String,
}

/// A projected agent, serialized as just the projected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentProjection {
    Full(Box<Agent>),
    NameAndImage(AgentProfileImage),
    NameAndIcon(AgentProfileIcon),
    IdNameAndImage(AgentIdProfileImage),
    IdNameAndIcon(AgentIdProfileIcon),
}

impl AgentProjection {
    pub fn view(&self) -> AgentView {
        match self {
            AgentProjection::Full(_) => AgentView::Full,
            AgentProjection::NameAndImage(_) => AgentView::NameAndImage,
            AgentProjection::NameAndIcon(_) => AgentView::NameAndIcon,
            AgentProjection::IdNameAndImage(_) => AgentView::IdNameAndImage,
            AgentProjection::IdNameAndIcon(_) => AgentView::IdNameAndIcon,
        }
    }
}

impl From<&Agent> for AgentProfileImage {
    fn from(agent: &Agent) -> Self {
        Self {
            name: agent.name.clone(),
            profile_image: agent.profile_image.clone(),
        }
    }
}

impl From<&Agent> for AgentProfileIcon {
    fn from(agent: &Agent) -> Self {
        Self {
            name: agent.name.clone(),
            profile_icon: agent.profile_icon.clone(),
        }
    }
}

impl From<&Agent> for AgentIdProfileImage {
    fn from(agent: &Agent) -> Self {
        Self {
            agent_id: agent.agent_id,
            name: agent.name.clone(),
            profile_image: agent.profile_image.clone(),
        }
    }
}

impl From<&Agent> for AgentIdProfileIcon {
    fn from(agent: &Agent) -> Self {
        Self {
            agent_id: agent.agent_id,
            name: agent.name.clone(),
            profile_icon: agent.profile_icon.clone(),
        }
    }
}

/// Extract the requested view from an agent.
pub fn project(agent: Agent, view: AgentView) -> AgentProjection {
    match view {
        AgentView::Full => AgentProjection::Full(Box::new(agent)),
        AgentView::NameAndImage => AgentProjection::NameAndImage((&agent).into()),
        AgentView::NameAndIcon => AgentProjection::NameAndIcon((&agent).into()),
        AgentView::IdNameAndImage => AgentProjection::IdNameAndImage((&agent).into()),
        AgentView::IdNameAndIcon => AgentProjection::IdNameAndIcon((&agent).into()),
    }
}
