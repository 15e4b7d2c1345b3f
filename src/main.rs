use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kryon_core::SizedItem;
use kryon_layout::{HorizontalListLayout, LayoutEngine, LayoutResult};
use serde::Serialize;
use tracing::{debug, info};

mod scene;

use scene::Scene;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Tree,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Runs the horizontal list layout over a scene file", long_about = None)]
struct Args {
    /// Path to the scene (.json) file
    #[arg(value_name = "FILE")]
    scene: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "tree")]
    format: Format,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Explicit viewport width, overrides the scene constraints
    #[arg(long)]
    width: Option<f32>,

    /// Explicit viewport height, overrides the scene constraints
    #[arg(long)]
    height: Option<f32>,

    /// Requested column count
    #[arg(long)]
    columns: Option<u32>,

    /// Gap between items
    #[arg(long)]
    gap: Option<f32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    result: LayoutResult,
    items: Vec<JsonItem<'a>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if args.debug {
                    tracing::Level::DEBUG
                } else {
                    tracing::Level::INFO
                }
                .into(),
            ),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Loading scene: {}", args.scene.display());
    let mut scene = Scene::load(&args.scene)?;

    if let Some(width) = args.width {
        scene.constraints.width = Some(width);
    }
    if let Some(height) = args.height {
        scene.constraints.height = Some(height);
    }

    let layout = HorizontalListLayout::with_config(scene.config.clone())
        .context("Invalid layout configuration")?;
    layout.subscribe(|| debug!("Layout invalidated"));

    if let Some(columns) = args.columns {
        layout
            .set_requested_column_count(Some(columns))
            .context("Invalid --columns value")?;
    }
    if let Some(gap) = args.gap {
        layout.set_gap(gap);
    }

    let mut items = scene.build_items();
    let result = layout
        .layout(&mut items, &scene.constraints)
        .context("Layout failed")?;

    let output_text = match args.format {
        Format::Tree => generate_tree_output(&result, &items),
        Format::Json => generate_json_output(&result, &items)?,
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file.display()))?;
        info!("Output written to: {}", output_file.display());
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn generate_tree_output(result: &LayoutResult, items: &[SizedItem]) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "HorizontalList viewport:({},{}) content:({},{})",
        result.viewport_width, result.viewport_height, result.content_width, result.content_height
    );

    for (i, item) in items.iter().enumerate() {
        let branch = if i + 1 == items.len() { "└── " } else { "├── " };
        let _ = writeln!(
            output,
            "{}{} pos:({},{}) size:({},{})",
            branch, item.id, item.position.x, item.position.y, item.size.x, item.size.y
        );
    }

    if result.scrolls_horizontally() {
        output.push_str("(content overflows viewport horizontally)\n");
    }
    output
}

fn generate_json_output(result: &LayoutResult, items: &[SizedItem]) -> Result<String> {
    let output = JsonOutput {
        result: *result,
        items: items
            .iter()
            .map(|item| JsonItem {
                id: &item.id,
                x: item.position.x,
                y: item.position.y,
                width: item.size.x,
                height: item.size.y,
            })
            .collect(),
    };
    let mut text = serde_json::to_string_pretty(&output).context("Failed to serialize layout")?;
    text.push('\n');
    Ok(text)
}
