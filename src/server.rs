//! MCP server exposing the component catalog and demo search as tools

use crate::demo::parse_batch;
use crate::{AntDocs, Config, DocsError};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchComponentRequest {
    /// The name of the component to search for, e.g. "Button"
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchComponentsRequest {
    /// Comma-separated list of component names, e.g. "Button,Table"
    pub names: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComponentsByCategoryRequest {
    /// The category to filter components by, e.g. "General", "Feedback", "Navigation"
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchComponentDemosRequest {
    /// Comma-separated list of 'Component:Scenario' pairs, e.g. "Button:download,Table:pagination".
    /// The scenario may be omitted to get the component's first demo.
    pub query: String,
}

#[derive(Clone)]
pub struct AntDocsMcpServer {
    docs: Arc<AntDocs>,
    tool_router: ToolRouter<AntDocsMcpServer>,
}

#[tool_router]
impl AntDocsMcpServer {
    pub fn new(docs: AntDocs) -> Self {
        Self {
            docs: Arc::new(docs),
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, DocsError> {
        Ok(Self::new(AntDocs::from_config(config)?))
    }

    #[tool(description = "Search for an Ant Design Blazor component by name")]
    async fn search_component(
        &self,
        Parameters(SearchComponentRequest { name }): Parameters<SearchComponentRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result("search_component", self.docs.search_component(&name).await)
    }

    #[tool(description = "Search for multiple Ant Design Blazor components by a comma-separated list of names")]
    async fn search_components(
        &self,
        Parameters(SearchComponentsRequest { names }): Parameters<SearchComponentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result("search_components", self.docs.search_components(&names).await)
    }

    #[tool(description = "List all available Ant Design Blazor components")]
    async fn list_components(&self) -> Result<CallToolResult, McpError> {
        text_result("list_components", self.docs.list_components().await)
    }

    #[tool(description = "Get the Ant Design Blazor components in a category")]
    async fn get_components_by_category(
        &self,
        Parameters(ComponentsByCategoryRequest { category }): Parameters<ComponentsByCategoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(
            "get_components_by_category",
            self.docs.components_by_category(&category).await,
        )
    }

    #[tool(
        description = "Find the best-matching runnable demo for each 'Component:Scenario' pair and return its Razor source"
    )]
    async fn search_component_demos(
        &self,
        Parameters(SearchComponentDemosRequest { query }): Parameters<SearchComponentDemosRequest>,
    ) -> Result<CallToolResult, McpError> {
        validate_demo_query(&query)?;
        text_result("search_component_demos", self.docs.search_demos(&query).await)
    }

    #[tool(description = "List all available demos with their component, scenario, and description")]
    async fn list_all_demos(&self) -> Result<CallToolResult, McpError> {
        text_result("list_all_demos", self.docs.list_all_demos().await)
    }
}

#[tool_handler]
impl ServerHandler for AntDocsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server provides Ant Design Blazor component documentation and runnable demos. \
                 Use 'search_component' or 'search_components' for component details, 'list_components' and \
                 'get_components_by_category' to browse, and 'search_component_demos' with 'Component:Scenario' \
                 pairs to get demo source code."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Reject a demo query that yields no 'Component:Scenario' pair at all
fn validate_demo_query(query: &str) -> Result<(), McpError> {
    if parse_batch(query).is_empty() {
        return Err(McpError::invalid_params(
            "query must contain at least one component name",
            Some(json!({ "query": query })),
        ));
    }
    Ok(())
}

fn text_result(tool: &str, result: crate::Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            tracing::error!(tool, error = %e, "tool call failed");
            Err(McpError::internal_error(
                format!("{} failed: {}", tool, e),
                Some(json!({
                    "tool": tool,
                    "error": e.to_string()
                })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FileCatalogSource;
    use crate::HashEmbedder;

    fn server() -> AntDocsMcpServer {
        let docs = AntDocs::new(
            Arc::new(FileCatalogSource::new("/definitely/not/here/components.json")),
            Arc::new(HashEmbedder::default()),
        );
        AntDocsMcpServer::new(docs)
    }

    #[test]
    fn test_registers_all_tools() {
        let server = server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "get_components_by_category",
                "list_all_demos",
                "list_components",
                "search_component",
                "search_component_demos",
                "search_components",
            ]
        );
    }

    #[test]
    fn test_advertises_tools() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_demo_query_needs_a_component() {
        for query in ["", "   ", ",", " , ", ",,"] {
            let err = validate_demo_query(query).unwrap_err();
            assert!(err.message.contains("at least one component"), "{:?}", query);
        }
        assert!(validate_demo_query("Button").is_ok());
        assert!(validate_demo_query(" , Button:icon").is_ok());
    }

    #[test]
    fn test_library_errors_become_internal_errors() {
        let err = text_result(
            "list_all_demos",
            Err(DocsError::MalformedCatalog("expected an array".to_string())),
        )
        .unwrap_err();
        assert!(err.message.contains("list_all_demos failed"));
    }
}
