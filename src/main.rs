//! Socialize CLI
//!
//! Usage:
//!   socialize [OPTIONS] --url <URL>
//!   socialize [OPTIONS] --content <FILE> [--id <ID>]
//!
//! Options:
//!   -n, --networks <KEYS>  Comma-separated network keys
//!   -c, --config <FILE>    Configuration file (TOML format)
//!   -f, --format <FORMAT>  Output format: html or json
//!   -l, --list             List available networks
//!   -h, --help             Print help

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use socialize::{HtmlOptions, InMemoryContent, ShareConfig, ShareContext, Socialize};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Parser)]
#[command(name = "socialize")]
#[command(about = "Build social network sharing links")]
struct Cli {
    /// URL of the page to share
    #[arg(short, long)]
    url: Option<String>,

    /// Page title
    #[arg(short, long)]
    title: Option<String>,

    /// Page excerpt
    #[arg(short, long)]
    excerpt: Option<String>,

    /// Content file (TOML format) to read page details from
    #[arg(long)]
    content: Option<PathBuf>,

    /// Content item to share (defaults to the file's current item)
    #[arg(long, requires = "content")]
    id: Option<String>,

    /// Comma-separated network keys (defaults to the configured selection)
    #[arg(short, long, value_delimiter = ',')]
    networks: Option<Vec<String>>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Use icons instead of network names
    #[arg(long)]
    icons: bool,

    /// Inline icon files (implies --icons)
    #[arg(long)]
    embed: bool,

    /// Show network names after icons
    #[arg(long)]
    captions: bool,

    /// Add brand colours as CSS custom properties
    #[arg(long)]
    colors: bool,

    /// List available networks and aliases
    #[arg(short, long)]
    list: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match ShareConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ShareConfig::default(),
    };

    let socialize = match Socialize::with_config(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.list {
        print_networks(&socialize);
        return;
    }

    let mut context = match build_context(&cli, &socialize) {
        Ok(c) => c,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    if let Some(networks) = &cli.networks {
        context.select_networks(networks);
    }

    let icons = cli.icons || cli.embed;
    let output = match cli.format {
        Format::Html => {
            let options = HtmlOptions::new()
                .with_icons(icons)
                .with_embed_icon(cli.embed)
                .with_captions(cli.captions)
                .with_brand_colors(cli.colors);
            context.render_html(&options).map_err(|e| e.to_string())
        }
        Format::Json => context
            .render_links(icons)
            .map_err(|e| e.to_string())
            .and_then(|links| serde_json::to_string_pretty(&links).map_err(|e| e.to_string())),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the context from the content file, then apply explicit fields on top
fn build_context<'a>(cli: &Cli, socialize: &'a Socialize) -> Result<ShareContext<'a>, String> {
    let mut context = match &cli.content {
        Some(path) => {
            let source = InMemoryContent::from_file(path)
                .map_err(|e| format!("reading content '{}': {}", path.display(), e))?;
            let result = match &cli.id {
                Some(id) => socialize.context_for(&source, id),
                None => socialize.current_context(&source),
            };
            result.map_err(|e| e.to_string())?
        }
        None => socialize.context(),
    };

    if let Some(url) = &cli.url {
        context.set_url(url.as_str());
    }
    if let Some(title) = &cli.title {
        context.set_title(title.as_str());
    }
    if let Some(excerpt) = &cli.excerpt {
        context.set_excerpt(excerpt.as_str());
    }
    Ok(context)
}

fn print_networks(socialize: &Socialize) {
    let registry = socialize.registry();
    let width = registry
        .definitions()
        .map(|def| def.key.len())
        .max()
        .unwrap_or(0);

    println!("NETWORKS");
    println!("--------");
    for def in registry.definitions() {
        println!("{:width$}  {:<12} {}", def.key, def.name, def.template, width = width);
    }

    let aliases: Vec<_> = registry.aliases().collect();
    if !aliases.is_empty() {
        println!();
        println!("ALIASES");
        println!("-------");
        for (alias, target) in aliases {
            println!("{:width$}  -> {}", alias, target, width = width);
        }
    }
}
