//! Pokédex MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes catalog lookups and the favorites list for LLM interaction.
//!
//! Configuration is read from the RON file named by `POKEDEX_CONFIG`, falling
//! back to the defaults. Logs go to stderr; stdout carries the protocol.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use pokedex_client::mcp_interface::*;
use pokedex_client::{
    ClientConfig, ClientError, FavoriteEntry, FavoritesStore, FileStore, PokedexService,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "POKEDEX_CONFIG";

#[derive(Debug, Clone)]
pub struct PokedexMcpService {
    tool_router: ToolRouter<PokedexMcpService>,
    pokedex: PokedexService,
    favorites: Arc<FavoritesStore<FileStore>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Name or National Dex number of the Pokemon, e.g. 'pikachu' or '25'")]
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPokemonRequest {
    #[schemars(description = "Number of entries to skip (default 0)")]
    pub offset: Option<u32>,
    #[schemars(description = "Number of entries to return (default 20)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonByTypeRequest {
    #[schemars(description = "Type name, e.g. 'fire'")]
    pub type_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EncountersRequest {
    #[schemars(description = "National Dex number of the Pokemon")]
    pub id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFavoriteRequest {
    #[schemars(description = "Name or National Dex number of the Pokemon to save")]
    pub query: String,
    #[schemars(description = "Optional personal note stored with the favorite")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFavoriteRequest {
    #[schemars(description = "National Dex number of the favorite to remove")]
    pub id: u32,
}

fn tool_error(context: &str, e: ClientError) -> McpError {
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(format!("{}: {}", context, e)),
        data: None,
    }
}

fn text(body: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

#[tool_router]
impl PokedexMcpService {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let favorites = FavoritesStore::new(FileStore::new(config.favorites_path.clone()));
        Ok(Self {
            tool_router: Self::tool_router(),
            pokedex: PokedexService::new(config)?,
            favorites: Arc::new(favorites),
        })
    }

    #[tool(description = "Look up full details of a Pokemon by name or number")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        // Unknown names are an answer, not a protocol failure.
        let body = match self.pokedex.fetch_entity(&request.query).await {
            Ok(record) => format_entity(&record),
            Err(e) => format_error(&e),
        };
        text(body)
    }

    #[tool(description = "List one page of the Pokedex")]
    async fn list_pokemon(
        &self,
        Parameters(request): Parameters<ListPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let offset = request.offset.unwrap_or(0);
        let limit = request.limit.unwrap_or(20).clamp(1, 100);
        let records = self
            .pokedex
            .fetch_collection(offset, limit)
            .await
            .map_err(|e| tool_error("Error listing Pokemon", e))?;
        text(format_collection(&records))
    }

    #[tool(description = "List every Pokemon type")]
    async fn list_types(&self) -> Result<CallToolResult, McpError> {
        let tags = self
            .pokedex
            .fetch_tag_list()
            .await
            .map_err(|e| tool_error("Error listing types", e))?;
        text(format_tags(&tags))
    }

    #[tool(description = "List the first Pokemon of a given type")]
    async fn pokemon_by_type(
        &self,
        Parameters(request): Parameters<PokemonByTypeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let body = match self.pokedex.fetch_by_category(&request.type_name).await {
            Ok(records) => format_collection(&records),
            Err(e) => format_error(&e),
        };
        text(body)
    }

    #[tool(description = "Show where a Pokemon can be encountered in the wild")]
    async fn pokemon_encounters(
        &self,
        Parameters(request): Parameters<EncountersRequest>,
    ) -> Result<CallToolResult, McpError> {
        let encounters = self.pokedex.fetch_encounters(request.id).await;
        text(format_encounters(&format!("#{}", request.id), &encounters))
    }

    #[tool(description = "List saved favorite Pokemon")]
    async fn list_favorites(&self) -> Result<CallToolResult, McpError> {
        let favorites = self
            .favorites
            .list()
            .await
            .map_err(|e| tool_error("Error reading favorites", e))?;
        text(format_favorites(&favorites))
    }

    #[tool(description = "Save a Pokemon to the favorites list")]
    async fn add_favorite(
        &self,
        Parameters(request): Parameters<AddFavoriteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let record = match self.pokedex.fetch_entity(&request.query).await {
            Ok(record) => record,
            Err(e) => return text(format_error(&e)),
        };
        let entry = FavoriteEntry::from_entity(&record, request.notes.unwrap_or_default());
        let favorites = self
            .favorites
            .add(entry)
            .await
            .map_err(|e| tool_error("Error saving favorite", e))?;
        text(format_favorites(&favorites))
    }

    #[tool(description = "Remove a Pokemon from the favorites list")]
    async fn remove_favorite(
        &self,
        Parameters(request): Parameters<RemoveFavoriteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let favorites = self
            .favorites
            .remove(request.id)
            .await
            .map_err(|e| tool_error("Error removing favorite", e))?;
        text(format_favorites(&favorites))
    }
}

#[tool_handler]
impl ServerHandler for PokedexMcpService {}

fn load_config() -> Result<ClientConfig, ClientError> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => ClientConfig::load(Path::new(&path)),
        Err(_) => Ok(ClientConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Pokedex MCP Server starting...");

    let config = load_config().map_err(|e| {
        error!(error = %e, "failed to load configuration");
        e
    })?;
    let service = PokedexMcpService::new(config)?;
    let transport = (stdin(), stdout());

    info!("Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    info!("Server running, waiting for shutdown...");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "Pokedex MCP Server exiting");
    Ok(())
}
