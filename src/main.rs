//! Blind Omok
//!
//! Opens the GUI by default; `--console` plays in the terminal instead.

use std::io;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use omok::config::{DEFAULT_DEPTH, MAX_DEPTH};
use omok::ui::OmokApp;
use omok::{console, AiConfig, GameController};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Blind Omok against a minimax AI", long_about = None)]
struct Args {
    /// AI search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64))]
    depth: u8,

    /// Seed for the AI's random fallback moves
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the AI answers, in milliseconds
    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,

    /// Play in the terminal instead of opening a window
    #[arg(long)]
    console: bool,
}

impl Args {
    fn ai_config(&self) -> AiConfig {
        let config = AiConfig::default()
            .with_depth(self.depth)
            .with_move_delay(Duration::from_millis(self.ai_delay_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.ai_config();
    config.validate()?;
    info!("AI depth {}, delay {:?}", config.depth, config.move_delay);

    if args.console {
        let mut controller = GameController::new(config);
        let stdin = io::stdin();
        return console::run(&mut controller, stdin.lock(), io::stdout()).context("console game failed");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Blind Omok"),
        ..Default::default()
    };

    eframe::run_native(
        "Blind Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
