//! Command-line access to the Ant Design Blazor docs catalog

use antd_docs::config::default_catalog_url;
use antd_docs::{AntDocs, CatalogLocation, Config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "antd-docs",
    version,
    about = "Ant Design Blazor component docs and demo search",
    long_about = r#"
Ant Design Blazor component docs and demo search

Looks up components and finds the best-matching runnable demo for a scenario
description, using the published Ant Design Blazor docs catalog.

Examples:
  antd-docs search -n Button,Table        # Component details
  antd-docs category -c Feedback          # Components in a category
  antd-docs demo -q "Button:download, Table:pagination"
  antd-docs demo-list                     # Every demo with its description
"#
)]
struct Args {
    /// Catalog URL or local JSON file (overrides --locale)
    #[arg(long, global = true, env = "ANTD_DOCS_CATALOG")]
    catalog: Option<String>,

    /// Docs locale used to build the default catalog URL, e.g. en-US or zh-CN
    #[arg(long, global = true, env = "ANTD_DOCS_LOCALE")]
    locale: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for components by name
    Search {
        /// The name of the component to search for; comma-separate several names
        #[arg(short, long)]
        name: String,
    },
    /// List all available components
    List,
    /// Get component information by category
    Category {
        /// The category to filter components by, e.g. General, Feedback, Navigation
        #[arg(short, long)]
        category: String,
    },
    /// Search for component demos by component name and scenario
    Demo {
        /// Comma-separated list of 'Component:Scenario' pairs, e.g. Button:download,Table:pagination
        #[arg(short, long)]
        query: String,
    },
    /// List all available demos with their component, scenario, and description
    #[command(name = "demo-list")]
    DemoList,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    let mut config = Config::from_env()?;
    if let Some(locale) = &args.locale {
        config.catalog = CatalogLocation::Remote(default_catalog_url(locale));
    }
    if let Some(catalog) = &args.catalog {
        config.catalog = catalog.parse()?;
    }

    let docs = AntDocs::from_config(&config)?;

    let output = match &args.command {
        Command::Search { name } => docs.search_components(name).await?,
        Command::List => docs.list_components().await?,
        Command::Category { category } => docs.components_by_category(category).await?,
        Command::Demo { query } => docs.search_demos(query).await?,
        Command::DemoList => docs.list_all_demos().await?,
    };

    Ok(output)
}
