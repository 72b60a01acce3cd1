//! MCP Server handler for Kaiten API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    mcp::{CreateParams, EntityType, GetParams, ListParams, RemoveParams, UpdateParams},
    Create, CreateSpaceParams, Get, KaitenClient, KaitenError, List, Remove, Space, Update,
    UpdateSpaceParams,
};

/// Kaiten MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to interact
/// with the Kaiten API through the Model Context Protocol.
///
/// # Tools
///
/// - `get` - Fetch a single entity by ID
/// - `list` - List all entities of a type
/// - `create` - Create an entity
/// - `update` - Partially update an entity
/// - `remove` - Delete an entity
#[derive(Clone)]
pub struct KaitenServer {
    client: Arc<KaitenClient>,
}

impl KaitenServer {
    /// Create a new KaitenServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is incomplete.
    pub fn from_env() -> crate::Result<Self> {
        let client = KaitenClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new KaitenServer with an existing client.
    pub fn new(client: KaitenClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert KaitenError to McpError.
    fn to_mcp_error(err: KaitenError) -> McpError {
        if err.is_not_found() {
            return McpError::resource_not_found(err.to_string(), None);
        }
        match &err {
            KaitenError::ConfigMissing(msg) => McpError::invalid_params(msg.clone(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    /// Render a value as pretty-printed JSON tool output.
    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `get` tool.
    pub async fn handle_get(&self, params: GetParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Space => {
                let space = Space::get(&self.client, params.id)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::json_result(&space.data)
            }
        }
    }

    /// Handle the `list` tool.
    pub async fn handle_list(&self, params: ListParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Space => {
                let spaces = Space::list(&self.client)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::json_result(&spaces.data)
            }
        }
    }

    /// Handle the `create` tool.
    pub async fn handle_create(&self, params: CreateParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Space => {
                let create_params = CreateSpaceParams {
                    title: params.title,
                    external_id: params.external_id,
                };
                let space = Space::create(&self.client, create_params)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::json_result(&space.data)
            }
        }
    }

    /// Handle the `update` tool.
    pub async fn handle_update(&self, params: UpdateParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Space => {
                let update_params = UpdateSpaceParams {
                    title: params.title,
                    external_id: params.external_id,
                    allowed_card_type_ids: params.allowed_card_type_ids,
                };
                let space = Space::update(&self.client, params.id, update_params)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::json_result(&space.data)
            }
        }
    }

    /// Handle the `remove` tool.
    pub async fn handle_remove(&self, params: RemoveParams) -> Result<CallToolResult, McpError> {
        match params.entity {
            EntityType::Space => {
                Space::remove(&self.client, params.id)
                    .await
                    .map_err(Self::to_mcp_error)?;
                Self::json_result(&serde_json::json!({ "removed": params.id }))
            }
        }
    }
}

impl ServerHandler for KaitenServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "kaitenapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some("Kaiten API MCP Server - Read and manage spaces.".to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "get",
                "Fetch a single Kaiten entity by numeric ID. Supports: space.",
                Self::schema::<GetParams>(),
            ),
            Tool::new(
                "list",
                "List all Kaiten entities of a type visible to the token. Supports: space.",
                Self::schema::<ListParams>(),
            ),
            Tool::new(
                "create",
                "Create a Kaiten entity. Space accepts: title, external_id.",
                Self::schema::<CreateParams>(),
            ),
            Tool::new(
                "update",
                "Partially update a Kaiten entity. Only provided fields change. \
                 Space accepts: title, external_id, allowed_card_type_ids.",
                Self::schema::<UpdateParams>(),
            ),
            Tool::new(
                "remove",
                "Delete a Kaiten entity by numeric ID.",
                Self::schema::<RemoveParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        fn parse<T: serde::de::DeserializeOwned>(args: serde_json::Value) -> Result<T, McpError> {
            serde_json::from_value(args).map_err(|e| McpError::invalid_params(e.to_string(), None))
        }

        match request.name.as_ref() {
            "get" => self.handle_get(parse(args)?).await,
            "list" => self.handle_list(parse(args)?).await,
            "create" => self.handle_create(parse(args)?).await,
            "update" => self.handle_update(parse(args)?).await,
            "remove" => self.handle_remove(parse(args)?).await,
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
