//! Content lifecycle methods for `CarouselApp`.
//!
//! Covers the one-time async content fetch (`load_content`, `check_fetch`),
//! reshuffles (`reshuffle`) and the preload wait that gates them
//! (`check_preload`), plus uploading decoded images as egui textures.

use std::sync::mpsc;
use eframe::egui;

use prompt_carousel::net::fetch::fetch_prompts;
use prompt_carousel::net::image::PreloadBatch;

use super::CarouselApp;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading carousel data. Please try again later.";

impl CarouselApp {
    /// Start fetching the content resource in the background.
    pub fn load_content(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        let source = self.config.prompts_source.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = fetch_prompts(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the async fetch channel and kick off the first reshuffle.
    pub fn check_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                log::error!("Prompt fetch thread exited without a result");
                self.alert = Some(LOAD_ERROR_MESSAGE.to_string());
                self.loading = false;
                self.fetch_rx = None;
                return;
            }
        };
        match result {
            Ok(records) => {
                self.records = records;
                self.reshuffle();
            }
            Err(e) => {
                log::error!("Failed to fetch prompts: {}", e);
                self.alert = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        self.fetch_rx = None;
    }

    /// Draw a new selection and start preloading its images.
    ///
    /// No-op while the previous reshuffle is still waiting on images.
    pub fn reshuffle(&mut self) {
        let Some(sources) = self.carousel.begin_reshuffle(&self.records, &mut self.rng) else {
            return;
        };
        let batch = PreloadBatch::new(sources);
        batch.start(&mut self.image_loader);
        self.preload = Some(batch);
    }

    /// Upload finished images and complete the reshuffle once its batch settles.
    pub fn check_preload(&mut self, ctx: &egui::Context, now: f64) {
        if self.image_loader.poll() > 0 {
            self.upload_textures(ctx);
        }

        let settled = self
            .preload
            .as_ref()
            .is_some_and(|batch| batch.is_settled(&self.image_loader));
        if settled {
            if let Some(batch) = self.preload.take() {
                let failed = batch.failed(&self.image_loader);
                if failed > 0 {
                    log::warn!("{} of {} image(s) failed to load", failed, batch.sources().len());
                }
                log::debug!(
                    "Image cache: {} loaded, {} pending, {} failed",
                    self.image_loader.loaded_count(),
                    self.image_loader.pending_count(),
                    self.image_loader.failed_count()
                );
            }
            self.carousel.finish_reshuffle(now);
        }
    }

    fn upload_textures(&mut self, ctx: &egui::Context) {
        for source in self.image_loader.loaded_sources() {
            if self.image_textures.contains_key(&source) {
                continue;
            }
            if let Some(data) = self.image_loader.get(&source) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let texture = ctx.load_texture(source.clone(), image, egui::TextureOptions::LINEAR);
                self.image_textures.insert(source, texture);
            }
        }
    }
}
