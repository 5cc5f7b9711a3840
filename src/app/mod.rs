//! `CarouselApp` — the top-level egui application state.
//!
//! This module declares the `CarouselApp` struct, its constructor and the
//! per-frame `update`. Drawing and lifecycle methods are split across the
//! sibling sub-modules:
//!
//! - `loading`  — content fetch, reshuffle, image preload and textures
//! - `toolbar`  — header with the typed tagline and the shuffle control
//! - `content`  — the carousel itself (panels, overlay, slide controls)
//! - `waitlist` — the waitlist form and its async submission

pub mod content;
pub mod loading;
pub mod toolbar;
pub mod waitlist;

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use prompt_carousel::carousel::Carousel;
use prompt_carousel::config::PageConfig;
use prompt_carousel::content::PromptRecord;
use prompt_carousel::net::fetch::FetchError;
use prompt_carousel::net::image::{ImageLoader, PreloadBatch};
use prompt_carousel::net::waitlist::{SubmitError, WaitlistForm};
use prompt_carousel::render::backdrop::Backdrop;

const FRAME_MS: f64 = 16.0;

// ─── Application state ───────────────────────────────────────────────────────

pub struct CarouselApp {
    pub config: PageConfig,
    pub carousel: Carousel,
    pub records: Vec<PromptRecord>,
    pub rng: StdRng,
    // Content fetch
    pub loading: bool,
    pub fetch_rx: Option<mpsc::Receiver<Result<Vec<PromptRecord>, FetchError>>>,
    // Image loading
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
    pub preload: Option<PreloadBatch>,
    // Decoration, created on the first frame once the window size is known
    pub backdrop: Option<Backdrop>,
    // Waitlist
    pub waitlist: WaitlistForm,
    pub submit_rx: Option<mpsc::Receiver<Result<(), SubmitError>>>,
    /// Modal message, dismissed with OK.
    pub alert: Option<String>,
    pub app_start: Instant,
    pub last_frame_time: Instant,
}

impl CarouselApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut app = Self {
            carousel: Carousel::new(&config, 0.0),
            records: Vec::new(),
            rng,
            loading: false,
            fetch_rx: None,
            image_loader: ImageLoader::new(config.cache_bust),
            image_textures: HashMap::new(),
            preload: None,
            backdrop: None,
            waitlist: WaitlistForm::default(),
            submit_rx: None,
            alert: None,
            app_start: Instant::now(),
            last_frame_time: Instant::now(),
            config,
        };
        app.load_content(&cc.egui_ctx);
        app
    }

    /// Milliseconds since the window opened; the engine's time base.
    pub fn now_ms(&self) -> f64 {
        self.app_start.elapsed().as_secs_f64() * 1000.0
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now_ms();

        self.check_fetch();
        self.check_preload(ctx, now);
        self.check_submit();

        let screen = ctx.screen_rect();
        self.carousel.set_viewport_width(screen.width());
        self.carousel.tick(now);

        let frame_now = Instant::now();
        let dt = (frame_now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = frame_now;
        let (width, height) = (screen.width(), screen.height());
        let count = self.config.circle_count;
        let rng = &mut self.rng;
        let backdrop = self
            .backdrop
            .get_or_insert_with(|| Backdrop::new(count, width, height, rng));
        backdrop.resize(width, height);
        backdrop.update(dt);
        crate::ui::paint_backdrop(&ctx.layer_painter(egui::LayerId::background()), backdrop);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(24.0, 16.0)))
            .show(ctx, |ui| self.draw_toolbar(ui, ctx, now));

        egui::TopBottomPanel::bottom("waitlist")
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(24.0, 16.0)))
            .show(ctx, |ui| self.draw_waitlist(ui, ctx));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_carousel(ui, now));

        crate::ui::show_alert(ctx, &mut self.alert);

        // Backdrop animates continuously; never sleep past a visibility beat
        let wait = self
            .carousel
            .until_next_tick(self.now_ms())
            .map_or(FRAME_MS, |ms| ms.min(FRAME_MS));
        ctx.request_repaint_after(Duration::from_secs_f64(wait / 1000.0));
    }
}
