use clap::{Parser, Subcommand};
use nu_plugin_page_topics::error::Result;
use nu_plugin_page_topics::logging::init_tracing;
use nu_plugin_page_topics::ops;
use nu_plugin_page_topics::pipeline::ExtractOptions;
use serde_json::Value;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "page-topics",
    version,
    about = "Ranked, de-duplicated topical phrases from extracted web page content"
)]
struct Cli {
    /// Start as an MCP (Model Context Protocol) server on stdio.
    /// AI assistants (Claude Desktop, Cursor, etc.) connect via JSON-RPC.
    #[cfg(feature = "mcp")]
    #[arg(long, exclusive = true)]
    mcp: bool,

    /// Log at debug level unless PAGE_TOPICS_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract topics from a page document (or an array of them)
    Extract {
        /// Read the document from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Page URL, used when the document has no url field
        #[arg(short, long)]
        url: Option<String>,
        /// Number of topics to return
        #[arg(short = 'k', long, default_value_t = 8)]
        top_k: usize,
        /// Also mine semantic CSS class and id names
        #[arg(long)]
        css_topics: bool,
        /// Jaccard similarity that marks two topics as duplicates
        #[arg(short, long, default_value_t = 0.8)]
        threshold: f64,
    },
    /// Classify a page document as product, news, article, or other
    Classify {
        /// Read the document from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // ── MCP server mode ─────────────────────────────────────────────────
    #[cfg(feature = "mcp")]
    if cli.mcp {
        let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
        rt.block_on(async {
            if let Err(e) = nu_plugin_page_topics::mcp::serve_stdio().await {
                eprintln!("MCP server error: {e}");
                std::process::exit(1);
            }
        });
        return;
    }

    // ── Normal subcommand dispatch ──────────────────────────────────────
    let command = cli.command.unwrap_or_else(|| {
        eprintln!("No subcommand provided. Run `page-topics --help` for usage.");
        std::process::exit(1);
    });

    let result = match command {
        Commands::Extract {
            input,
            url,
            top_k,
            css_topics,
            threshold,
        } => cmd_extract(
            input,
            url.as_deref(),
            ExtractOptions {
                top_k,
                include_css_topics: css_topics,
                similarity_threshold: threshold,
            },
        ),
        Commands::Classify { input } => cmd_classify(input),
    };

    match result {
        Ok(out) => print_json(&out),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_document(path: Option<PathBuf>) -> Result<Value> {
    let buf = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&buf)?)
}

fn fill_url(doc: &mut Value, url: &str) {
    match doc {
        Value::Array(docs) => docs.iter_mut().for_each(|d| fill_url(d, url)),
        Value::Object(obj) => {
            obj.entry("url")
                .or_insert_with(|| Value::String(url.to_string()));
        }
        _ => {}
    }
}

fn print_json(val: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(val).unwrap_or_else(|_| "null".into())
    );
}

// ── Subcommand implementations ──────────────────────────────────────────────

fn cmd_extract(input: Option<PathBuf>, url: Option<&str>, opts: ExtractOptions) -> Result<Value> {
    let mut doc = read_document(input)?;
    if let Some(url) = url {
        fill_url(&mut doc, url);
    }
    ops::op_extract(&doc, &opts)
}

fn cmd_classify(input: Option<PathBuf>) -> Result<Value> {
    let doc = read_document(input)?;
    ops::op_classify(&doc)
}
