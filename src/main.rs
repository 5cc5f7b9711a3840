mod app;
mod ui;

use clap::Parser;
use eframe::egui;

use prompt_carousel::config::{PageConfig, DEFAULT_PROMPTS_SOURCE, DEFAULT_WAITLIST_ENDPOINT};

use crate::app::CarouselApp;

#[derive(Parser, Debug)]
#[command(name = "prompt-carousel", version, about = "Promotional prompt carousel")]
struct Cli {
    /// Prompt content resource (URL or local path)
    #[arg(long, env = "CAROUSEL_PROMPTS", default_value = DEFAULT_PROMPTS_SOURCE)]
    prompts: String,

    /// Waitlist form endpoint
    #[arg(long, env = "CAROUSEL_WAITLIST_URL", default_value = DEFAULT_WAITLIST_ENDPOINT)]
    waitlist_url: String,

    /// Prompts drawn per shuffle
    #[arg(
        long,
        env = "CAROUSEL_COUNT",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..=3)
    )]
    count: u64,

    /// Visibility recompute interval in milliseconds
    #[arg(
        long,
        env = "CAROUSEL_TICK_MS",
        default_value_t = 50,
        value_parser = clap::value_parser!(u64).range(10..=100)
    )]
    tick_ms: u64,

    /// Number of backdrop circles
    #[arg(long, env = "CAROUSEL_CIRCLES", default_value_t = 5)]
    circles: usize,

    /// Do not append a timestamp to remote image URLs
    #[arg(long)]
    no_cache_bust: bool,

    /// Fixed RNG seed
    #[arg(long, env = "CAROUSEL_SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> PageConfig {
        PageConfig {
            prompts_source: self.prompts,
            waitlist_endpoint: self.waitlist_url,
            selection_count: self.count as usize,
            tick_interval_ms: self.tick_ms as f64,
            circle_count: self.circles,
            cache_bust: !self.no_cache_bust,
            seed: self.seed,
            ..PageConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = Cli::parse().into_config();
    log::info!("Starting with prompts from {}", config.prompts_source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Carousel",
        options,
        Box::new(|cc| Ok(Box::new(CarouselApp::new(cc, config)))),
    )
    .expect("Failed to start Prompt Carousel");
}
