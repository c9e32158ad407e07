use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use simplelog::{Config, WriteLogger};

use xycut::panic_handler::initialize_panic_handler;
use xycut::selection::{highlight_rects, word_at_point};
use xycut::settings::load_settings;
use xycut::{JsonDocument, PageTextStore, Point, SelectionSession, TextSource};

/// Select text on extracted PDF pages the way a drag gesture would
#[derive(Parser, Debug)]
#[command(name = "xycut", version, about)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text selected by dragging from one point to another
    Select {
        /// JSON document with extracted words and blocks per page
        #[arg(long)]
        document: PathBuf,
        /// Page number (0-indexed)
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Press point in device pixels, as `x,y`
        #[arg(long)]
        from: CliPoint,
        /// Release point in device pixels, as `x,y`
        #[arg(long)]
        to: CliPoint,
        /// Device pixels per document point
        #[arg(long)]
        zoom: Option<f32>,
        /// Print highlight rectangles as JSON instead of text
        #[arg(long)]
        highlights: bool,
    },
    /// Print the word under a point
    Word {
        #[arg(long)]
        document: PathBuf,
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Pointer position in device pixels, as `x,y`
        #[arg(long)]
        at: CliPoint,
        #[arg(long)]
        zoom: Option<f32>,
    },
}

#[derive(Clone, Copy, Debug)]
struct CliPoint(Point);

impl FromStr for CliPoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((x, y)) = s.split_once(',') else {
            bail!("expected `x,y`, got {s:?}");
        };
        let x: f32 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
        let y: f32 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
        Ok(Self(Point::new(x, y)))
    }
}

fn main() -> Result<()> {
    initialize_panic_handler();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref());
    let level = match &cli.log_level {
        Some(level) => level
            .parse()
            .with_context(|| format!("Unknown log level {level:?}"))?,
        None => settings.level_filter(),
    };
    if let Some(log_file) = &cli.log_file {
        WriteLogger::init(
            level,
            Config::default(),
            File::create(log_file)
                .with_context(|| format!("Failed to create log file {log_file:?}"))?,
        )?;
    }

    info!("Starting xycut");
    debug!("Settings: {settings:?}");

    match cli.command {
        Command::Select {
            document,
            page,
            from,
            to,
            zoom,
            highlights,
        } => {
            let doc = JsonDocument::load(&document)?;
            let mut store = PageTextStore::new(doc.page_count());
            let text = store.get_or_index(page, &doc)?;

            let zoom = zoom.unwrap_or(settings.zoom);
            let mut session = SelectionSession::new(text, zoom)?;
            session.press(from.0)?;
            let selection = session.release(to.0)?;

            if highlights {
                let rects = highlight_rects(&selection.words, zoom)?;
                println!("{}", serde_json::to_string_pretty(&rects)?);
            } else {
                println!("{}", selection.text());
            }
        }
        Command::Word {
            document,
            page,
            at,
            zoom,
        } => {
            let doc = JsonDocument::load(&document)?;
            let mut store = PageTextStore::new(doc.page_count());
            let text = store.get_or_index(page, &doc)?;

            let zoom = zoom.unwrap_or(settings.zoom);
            if let Some(index) = word_at_point(&text.words, at.0, zoom)? {
                println!("{}", text.words[index].text);
            }
        }
    }

    info!("Shutting down xycut");
    Ok(())
}
