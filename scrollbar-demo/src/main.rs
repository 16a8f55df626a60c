use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scrollbar_config::{ScrollbarConfig, ScrollbarConfigSource};
use scrollbar_demo::{DemoScreen, session};
use scrollbar_model::Rect;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "scrollbar-demo",
    about = "Drive the scrollbar carousel demo screen headlessly"
)]
struct Cli {
    /// Screen width in points
    #[arg(long, default_value_t = 390.0)]
    width: f64,
    /// Screen height in points
    #[arg(long, default_value_t = 844.0)]
    height: f64,
    /// Resize the screen to this width halfway through the session
    #[arg(long)]
    resize_to: Option<f64>,
    /// Items in each carousel
    #[arg(long, default_value_t = 7)]
    items: usize,
    /// Carousel settings file (TOML or JSON). Defaults to
    /// $SCROLLBAR_CONFIG_PATH, $SCROLLBAR_CONFIG_JSON or ./scrollbar.toml
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: Option<PathBuf>) -> Result<ScrollbarConfig> {
    let (config, source) = match path {
        Some(path) => {
            let config = ScrollbarConfig::load_from_file(&path)?;
            (config, ScrollbarConfigSource::File(path))
        }
        None => ScrollbarConfig::load_from_env()?,
    };
    tracing::info!(?source, carousels = config.carousels.len(), "loaded scrollbar config");
    config.validate();
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let mut screen = DemoScreen::new(&config, cli.items);
    let bounds = Rect::new(0.0, 0.0, cli.width, cli.height);
    let report = session::run(&mut screen, bounds, cli.resize_to);

    match cli.format {
        OutputFormat::Text => {
            for step in &report.steps {
                println!("== {}", step.action);
                print!("{}", step.summary);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize session report")?;
            println!("{json}");
        }
    }

    Ok(())
}
