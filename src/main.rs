//! Responsive SVG CLI
//!
//! Usage:
//!   responsive-svg [OPTIONS] <URI>
//!
//! Loads a YAML mapping table, registers theme directories, and prints the
//! generated markup for a URI of the form `path-or-id[#fragment]`. Render
//! failures follow the library policy: a warning on stderr and empty
//! output, with a zero exit code.

use std::path::PathBuf;

use clap::Parser;

use responsive_svg::{FsAssetReader, MappingTable, RenderOptions, SvgRenderer, ThemeRegistry};

#[derive(Parser)]
#[command(name = "responsive-svg")]
#[command(about = "Generate responsive SVG markup for a URI")]
struct Cli {
    /// URI of the form path-or-id[#fragment]
    uri: String,

    /// YAML mapping table file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory asset paths are resolved against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Theme directory registration as NAME=PATH (repeatable)
    #[arg(short, long, value_name = "NAME=PATH")]
    theme: Vec<String>,

    /// Emit the raw sprite-sheet passthrough instead of responsive markup
    #[arg(long)]
    source: bool,

    /// Offset added to the viewBox width
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,

    /// Offset added to the viewBox height
    #[arg(long, default_value_t = 0.0)]
    offset_y: f64,

    /// Explicit width override
    #[arg(long)]
    width: Option<f64>,

    /// Explicit height override
    #[arg(long)]
    height: Option<f64>,

    /// Extra CSS classes for the wrapper, space separated
    #[arg(long, default_value = "")]
    class: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Load mapping table
    let mappings = match &cli.config {
        Some(path) => match MappingTable::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Error loading mapping config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => MappingTable::new(),
    };

    // Register theme directories
    let mut themes = ThemeRegistry::new();
    for spec in &cli.theme {
        match spec.split_once('=') {
            Some((name, path)) if !name.is_empty() => themes.register(name, path),
            _ => {
                eprintln!("Invalid theme registration '{spec}', expected NAME=PATH");
                std::process::exit(1);
            }
        }
    }

    let renderer = SvgRenderer::new(FsAssetReader::new(&cli.root))
        .with_mappings(mappings)
        .with_themes(themes);

    let markup = if cli.source {
        renderer.responsive_source_svg(&cli.uri)
    } else {
        let mut options = RenderOptions::new()
            .with_offset_x(cli.offset_x)
            .with_offset_y(cli.offset_y)
            .with_class(cli.class.clone());
        if let Some(width) = cli.width {
            options = options.with_width(width);
        }
        if let Some(height) = cli.height {
            options = options.with_height(height);
        }
        renderer.responsive_svg(&cli.uri, &options)
    };

    println!("{markup}");
}
