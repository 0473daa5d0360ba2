// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timeframe project*
//!
//! Lays out a timeline described by a JSON config and writes it out as SVG (or
//! as the draw commands themselves, as JSON)
//!

use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValue};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::io::Read;
use std::path::PathBuf;
use timeframe_core::{Timeline, TimelineConfig};
use timeframe_renderer::{Colour, DrawCommand, Engine, SvgCanvas, TimelineStyles};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Timeframe entry point
fn main() {
    let args = Cli::parse();

    // Setup logging (to stderr, so that stdout only ever holds the output)
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("timeframe")
        .build();
    let level = match args.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    if !(args.width.is_finite() && args.width > 0.0) {
        eprintln!("CLI Error: invalid width `{}`", args.width);
        let _ = Cli::command().print_long_help();
        std::process::exit(1);
    }

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Read, lay out, and write the timeline
fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Read the config
    let json = match &args.input {
        Some(path) => {
            debug!("reading timeline config from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            debug!("reading timeline config from stdin");
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            json
        }
    };
    let timeline = Timeline::from_config(TimelineConfig::from_json(&json)?)?;
    info!(
        "loaded timeline with {} categories",
        timeline.categories().len()
    );

    // Setup the engine
    let mut engine = Engine::new(args.width);
    if let Some(hex) = &args.colour {
        engine.set_styles(TimelineStyles::with_ink(Colour::from_hex(hex.as_str())?));
    }

    // Lay out & render
    let output = match args.format {
        Format::Svg => {
            let mut canvas = SvgCanvas::for_layout_params(engine.layout_params());
            engine.draw(&timeline, &mut canvas)?;
            canvas.finish()
        }
        Format::Json => {
            let commands: Vec<DrawCommand> = engine.layout(&timeline)?;
            serde_json::to_string_pretty(&commands)?
        }
    };

    // Write
    match &args.output {
        Some(path) => {
            std::fs::write(path, output)?;
            info!("wrote {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Timeframe CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lay out a timeline and draw it",
    after_help = "The timeline config is JSON, e.g.\n\n  \
        {\"range\": {\"start\": \"1960-01-01\", \"end\": \"1980-01-01\"}, \"categories\": []}"
)]
pub struct Cli {
    /// Path to the timeline config (read from stdin if not given)
    pub input: Option<PathBuf>,

    /// The width of the drawing surface
    #[arg(long, default_value_t = timeframe_renderer::DEFAULT_OUTER_WIDTH)]
    pub width: f64,

    /// What to write
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Hex colour to draw everything in (e.g. `#336699`)
    #[arg(long)]
    pub colour: Option<String>,

    /// Where to write the output (stdout if not given)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log what's happening
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Json,
}

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Svg, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Format::Svg => Some(PossibleValue::new("svg").help("An SVG document")),
            Format::Json => {
                Some(PossibleValue::new("json").help("The laid out draw commands as JSON"))
            }
        }
    }
}
