//! MCP (Model Context Protocol) server for page-topics.
//!
//! Exposes topic extraction and page classification as MCP tools so that AI
//! assistants (Claude Desktop, Cursor, etc.) can invoke them over stdio
//! JSON-RPC.
//!
//! Start with: `page-topics --mcp`

use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
    service::RequestContext,
    tool, tool_router, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::ops;
use crate::pipeline::ExtractOptions;

// ── Parameter structs ───────────────────────────────────────────────────────
// `JsonSchema` is required by rmcp so that the tool's input schema is
// auto-generated for the AI client.

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractTopicsParams {
    /// A page document `{url, content?, error?, status_code?}`, a bare content
    /// bundle (`title`, `headings`, `paragraphs`, ... plus optional `url`), or
    /// an array of either.
    pub page: serde_json::Value,
    /// Page URL, used when the document has no `url` field.
    #[serde(default)]
    pub url: Option<String>,
    /// Number of topics to return (default: 8).
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Also mine semantic CSS class and id names (default: false).
    #[serde(default)]
    pub include_css_topics: bool,
    /// Jaccard similarity at or above which two topics are duplicates (default: 0.8).
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClassifyPageParams {
    /// A page document or bare content bundle, or an array of either.
    pub page: serde_json::Value,
}

// ── Default helpers ─────────────────────────────────────────────────────────

fn default_top_k() -> usize {
    8
}

fn default_threshold() -> f64 {
    0.8
}

// ── Shared helpers ──────────────────────────────────────────────────────────

fn json_text(v: &serde_json::Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

fn fill_url(doc: &mut serde_json::Value, url: &str) {
    match doc {
        serde_json::Value::Array(docs) => docs.iter_mut().for_each(|d| fill_url(d, url)),
        serde_json::Value::Object(obj) => {
            obj.entry("url")
                .or_insert_with(|| serde_json::Value::String(url.to_string()));
        }
        _ => {}
    }
}

// ── MCP Server ──────────────────────────────────────────────────────────────

/// The MCP server struct. Holds only the auto-generated tool router.
#[derive(Clone)]
pub struct PageTopicsMcp {
    #[allow(dead_code)] // accessed at runtime by the #[tool_router] macro
    tool_router: ToolRouter<Self>,
}

impl Default for PageTopicsMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PageTopicsMcp {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    // ── extract_topics ──────────────────────────────────────────────────

    #[tool(
        name = "extract_topics",
        description = "Extract ranked, de-duplicated topical phrases (1-3 words) from a page's extracted content. Returns {url, page_type, topics: [{text, score, sources}]} per page, or {url, error, status_code, topics: []} when the page document carries a fetch error."
    )]
    async fn extract_topics(
        &self,
        params: Parameters<ExtractTopicsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = tokio::task::spawn_blocking(move || {
            let mut page = p.page;
            if let Some(url) = p.url.as_deref() {
                fill_url(&mut page, url);
            }
            let opts = ExtractOptions {
                top_k: p.top_k,
                include_css_topics: p.include_css_topics,
                similarity_threshold: p.similarity_threshold,
            };
            ops::op_extract(&page, &opts)
        })
        .await
        .map_err(|e| McpError::internal_error(format!("task join error: {e}"), None))?
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json_text(
            &result,
        ))]))
    }

    // ── classify_page ───────────────────────────────────────────────────

    #[tool(
        name = "classify_page",
        description = "Classify a page as product, news, article, or other from its title, first heading and leading paragraphs. Returns {url, page_type}."
    )]
    async fn classify_page(
        &self,
        params: Parameters<ClassifyPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = tokio::task::spawn_blocking(move || ops::op_classify(&p.page))
            .await
            .map_err(|e| McpError::internal_error(format!("task join error: {e}"), None))?
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json_text(
            &result,
        ))]))
    }
}

impl ServerHandler for PageTopicsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Topical phrase extraction for web pages. Tools: extract_topics, classify_page. \
                 Pass a page document (or a bare content bundle with title, headings, \
                 paragraphs, specs, ...) produced by your fetcher/extractor."
                    .into(),
            ),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: None }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "page-topics".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Page Topics".into()),
                description: Some(
                    "Ranked, de-duplicated topical phrases from extracted web page content".into(),
                ),
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: Default::default(),
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let tool_context = ToolCallContext::new(self, request, context);
        async move { self.tool_router.call(tool_context).await }
    }

    fn get_tool(&self, name: &str) -> Option<Tool> {
        self.tool_router.get(name).cloned()
    }
}

// ── Entry point ─────────────────────────────────────────────────────────────

/// Start the MCP server on stdio. Called from `cli.rs` when `--mcp` is passed.
pub async fn serve_stdio() -> Result<(), Box<dyn std::error::Error>> {
    let server = PageTopicsMcp::new();
    let transport = rmcp::transport::io::stdio();
    info!("serving MCP on stdio");
    let service = server.serve(transport).await.inspect_err(|e| {
        eprintln!("MCP serve error: {e}");
    })?;
    service.waiting().await?;
    Ok(())
}
