//! Command-line interface for miniwiki
//! Renders a page of wiki markup to HTML, or dumps its tree in another format.
//!
//! Usage:
//!   miniwiki [`<path>`] [--format `<format>`] [--config `<file>`]   - Render a page (stdin when no path or `-`)
//!   miniwiki --list-formats                                     - List all available formats

use std::io::Read;

use clap::{Arg, ArgAction, Command};
use miniwiki::wiki::config::{Loader, WikiConfig};
use miniwiki::wiki::formats::FormatRegistry;
use miniwiki::wiki::processor::Processor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let matches = Command::new("miniwiki")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render wiki markup to HTML and other formats")
        .arg(
            Arg::new("path")
                .help("Path to the markup file ('-' or omitted reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: output.format from config, normally 'html')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    setup_logging();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());
    let path = matches.get_one::<String>("path").map(String::as_str);
    handle_render_command(&config, path, &format);
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&String>) -> WikiConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_markup(path: Option<&str>) -> std::io::Result<String> {
    match path {
        None | Some("-") => {
            let mut markup = String::new();
            std::io::stdin().read_to_string(&mut markup)?;
            Ok(markup)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle the render command
fn handle_render_command(config: &WikiConfig, path: Option<&str>, format: &str) {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let markup = read_markup(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.unwrap_or("stdin"), e);
        std::process::exit(1);
    });

    let processor = Processor::new(config.parser.clone());
    let doc = processor.parse(&markup).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let output = registry.serialize(&doc, format).unwrap_or_else(|e| {
        eprintln!("Error formatting document: {}", e);
        std::process::exit(1);
    });

    println!("{}", output.trim_end_matches('\n'));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
