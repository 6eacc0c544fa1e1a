//! Check hardware decode support for every known video codec.
//!
//! Run with: cargo run -- [--describe] [--interactive] [--json] [--no-color]
//!
//! In interactive mode an empty line (or `t`) flips every label between
//! FourCC tag and description; `q` quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vt_decode_check::catalog::Catalog;
use vt_decode_check::config::{CheckConfig, OutputFormat};
use vt_decode_check::presentation::{CodecListView, DisplayMode};
use vt_decode_check::probe::SupportProber;
use vt_decode_check::report::{render_json, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "vt-decode-check")]
#[command(about = "Report which video codecs this machine decodes in hardware")]
struct Args {
    /// Start with codec descriptions instead of FourCC tags
    #[arg(short, long)]
    describe: bool,

    /// Keep the list open and toggle labels on each empty line
    #[arg(short, long)]
    interactive: bool,

    /// Print a JSON report and exit
    #[arg(long)]
    json: bool,

    /// Do not color the status glyphs
    #[arg(long)]
    no_color: bool,
}

impl From<Args> for CheckConfig {
    fn from(args: Args) -> Self {
        let mode = if args.describe {
            DisplayMode::ShowDescription
        } else {
            DisplayMode::ShowRawTag
        };
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        CheckConfig::new()
            .initial_mode(mode)
            .format(format)
            .color(!args.no_color)
            .interactive(args.interactive)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = CheckConfig::from(Args::parse());

    let mut prober = SupportProber::host();
    let catalog = Catalog::builtin(&mut prober);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.format == OutputFormat::Json {
        writeln!(out, "{}", render_json(&catalog)?)?;
        return Ok(());
    }

    let renderer = TextRenderer::new(config.color);
    let mut view = CodecListView::new(&catalog, config.initial_mode);
    write!(out, "{}", renderer.render(&view.rows()))?;
    out.flush()?;

    if !config.wants_toggle_loop() {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line?.trim() {
            "q" | "quit" => break,
            "" | "t" => {
                let mode = view.toggle();
                tracing::debug!(?mode, "display mode toggled");
                write!(out, "\n{}", renderer.render(&view.rows()))?;
                out.flush()?;
            }
            other => {
                writeln!(out, "unknown command {:?} (empty line or t toggles, q quits)", other)?;
            }
        }
    }

    Ok(())
}
