//! Calculadora - a keypad calculator
//!
//! Display, running equation line and a 5x4 button grid. All of the
//! arithmetic lives in `calccore`.

mod app;

use std::path::PathBuf;

use app::CalculadoraApp;
use calccore::CalcConfig;
use clap::Parser;
use eframe::NativeOptions;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const WINDOW_SIZE: [f32; 2] = [340.0, 470.0];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file to use instead of the per-user one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every keypad action
    #[arg(long)]
    debug: bool,
}

fn setup_logging(debug: bool, default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("info,calculadora=debug,calccore=debug")
        } else {
            EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });

    fmt::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => CalcConfig::load_from(path),
        None => CalcConfig::load(),
    };
    let config = loaded.as_ref().cloned().unwrap_or_default();
    setup_logging(args.debug, &config.log_filter);
    if let Err(e) = &loaded {
        warn!("{}, using default settings", e);
    }
    info!(precision = config.precision, "starting calculadora");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_title("Calculadora"),
        ..Default::default()
    };

    eframe::run_native(
        "calculadora",
        options,
        Box::new(move |cc| Box::new(CalculadoraApp::new(cc, &config))),
    )
}
