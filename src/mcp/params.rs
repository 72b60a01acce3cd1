//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Entity types supported by MCP tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Kaiten space.
    Space,
}

/// Parameters for the `get` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetParams {
    /// The type of entity to fetch.
    pub entity: EntityType,
    /// The entity ID.
    pub id: u64,
}

/// Parameters for the `list` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListParams {
    /// The type of entity to list.
    pub entity: EntityType,
}

/// Parameters for the `create` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateParams {
    /// The type of entity to create.
    pub entity: EntityType,
    /// Title of the new entity.
    #[serde(default)]
    pub title: Option<String>,
    /// External ID of the new entity.
    #[serde(default)]
    pub external_id: Option<u64>,
}

/// Parameters for the `update` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateParams {
    /// The type of entity to update.
    pub entity: EntityType,
    /// The entity ID.
    pub id: u64,
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New external ID.
    #[serde(default)]
    pub external_id: Option<u64>,
    /// Card types allowed in the space.
    #[serde(default)]
    pub allowed_card_type_ids: Option<Vec<String>>,
}

/// Parameters for the `remove` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveParams {
    /// The type of entity to remove.
    pub entity: EntityType,
    /// The entity ID.
    pub id: u64,
}
