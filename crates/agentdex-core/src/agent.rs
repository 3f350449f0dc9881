// Agent domain types
//
// The Agent entity and everything nested under it. Top-level fields are
// snake_case on the wire; story fields are camelCase.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A playable agent in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Agent {
    /// Unique numeric identifier.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub agent_id: i64,
    /// Unique name, compared case-insensitively on lookup.
    #[cfg_attr(feature = "openapi", schema(example = "Brimstone"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Controller"))]
    pub role: String,
    pub role_icon: String,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    pub origin: String,
    pub release_patch: String,
    pub profile_icon: String,
    pub profile_image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub story: AgentStory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Ability {
    pub icon: String,
    pub name: String,
    pub description: String,
    /// Ability slot, e.g. "Basic", "Signature" or "Ultimate".
    pub category: String,
    /// Credit cost, for purchasable abilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Ultimate points required, for ultimates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// Narrative background of an agent.
///
/// Besides the common sections every agent carries, stories may hold
/// agent-specific sections (an arsenal description, a list of gadgets, ...).
/// Those land in `extra` and are written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentStory {
    pub agent: String,
    pub origin: String,
    pub background: Background,
    pub valiant_protocol: ValiantProtocol,
    pub conflicts: Vec<Conflict>,
    pub current_role: CurrentRole,
    pub traits: Traits,
    pub summary: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    pub former_profession: String,
    pub military_service: String,
    pub corporate_service: String,
    pub key_relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub name: String,
    pub relationship: String,
    pub impact: String,
}

/// The agent's part in the Valiant Protocol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValiantProtocol {
    pub role: String,
    pub co_founders: Vec<String>,
    pub leadership_style: String,
    pub notable_event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conflict {
    pub name: String,
    pub location: String,
    pub threat: String,
    pub opposing_force: String,
    pub action_taken: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentRole {
    pub position: String,
    pub duties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Traits {
    pub strengths: Vec<String>,
    pub values: Vec<String>,
}

/// Shape of a bundled agents file: `{"agents": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentsDocument {
    pub agents: Vec<Agent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn agent_json() -> Value {
        json!({
            "agent_id": 1,
            "name": "Brimstone",
            "role": "Controller",
            "role_icon": "https://cdn.example.com/roles/controller.png",
            "abilities": [
                {
                    "icon": "https://cdn.example.com/brimstone/incendiary.png",
                    "name": "Incendiary",
                    "description": "Launches an incendiary grenade.",
                    "category": "Basic",
                    "price": 250
                },
                {
                    "icon": "https://cdn.example.com/brimstone/orbital-strike.png",
                    "name": "Orbital Strike",
                    "description": "Calls down a lasting orbital strike.",
                    "category": "Ultimate",
                    "points": 7
                }
            ],
            "origin": "United States",
            "release_patch": "Beta",
            "profile_icon": "https://cdn.example.com/brimstone/icon.png",
            "profile_image": "https://cdn.example.com/brimstone/full.png",
            "gallery": ["https://cdn.example.com/brimstone/g1.png"],
            "story": {
                "agent": "Brimstone",
                "origin": "United States",
                "background": {
                    "formerProfession": "Firefighter",
                    "militaryService": "US Army",
                    "corporateService": "Kingdom Corporation",
                    "keyRelationships": [
                        {"name": "Viper", "relationship": "Old friend", "impact": "Trusted ally"}
                    ]
                },
                "valiantProtocol": {
                    "role": "Commander",
                    "coFounders": ["Viper"],
                    "leadershipStyle": "Steady",
                    "notableEvent": "First Light"
                },
                "conflicts": [],
                "currentRole": {"position": "Leader", "duties": ["Coordinate missions"]},
                "traits": {"strengths": ["Tactics"], "values": ["Loyalty"]},
                "summary": "Veteran commander.",
                "orbitalArsenal": {"satellite": "Kingdom orbital platform"}
            }
        })
    }

    #[test]
    fn test_agent_deserializes_nested_fields() {
        let agent: Agent = serde_json::from_value(agent_json()).unwrap();

        assert_eq!(agent.agent_id, 1);
        assert_eq!(agent.abilities.len(), 2);
        assert_eq!(agent.abilities[0].price, Some(250));
        assert_eq!(agent.abilities[0].points, None);
        assert_eq!(agent.abilities[1].points, Some(7));
        assert_eq!(agent.story.background.former_profession, "Firefighter");
        assert_eq!(agent.story.valiant_protocol.co_founders, vec!["Viper"]);
        assert_eq!(agent.story.current_role.duties.len(), 1);
    }

    #[test]
    fn test_story_keeps_agent_specific_sections() {
        let agent: Agent = serde_json::from_value(agent_json()).unwrap();

        assert_eq!(
            agent.story.extra.get("orbitalArsenal"),
            Some(&json!({"satellite": "Kingdom orbital platform"}))
        );

        let out = serde_json::to_value(&agent).unwrap();
        assert_eq!(out, agent_json());
    }

    #[test]
    fn test_missing_optional_ability_fields_are_omitted() {
        let agent: Agent = serde_json::from_value(agent_json()).unwrap();
        let out = serde_json::to_value(&agent.abilities[0]).unwrap();

        assert!(out.get("points").is_none());
        assert_eq!(out["price"], 250);
    }

    #[test]
    fn test_partial_story_uses_defaults() {
        let mut value = agent_json();
        value["story"] = json!({"agent": "Brimstone", "summary": "Short."});

        let agent: Agent = serde_json::from_value(value).unwrap();
        assert_eq!(agent.story.summary, "Short.");
        assert!(agent.story.conflicts.is_empty());
        assert!(agent.story.extra.is_empty());
    }
}
