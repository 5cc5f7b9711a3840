//! Header rendering for `CarouselApp`.
//!
//! Draws the page title, the typed tagline and the shuffle control.

use eframe::egui;
use prompt_carousel::render::typewriter::{is_complete, typed_prefix};

use super::CarouselApp;

pub const TITLE: &str = "Prompt Carousel";
pub const TAGLINE: &str = "Ideas worth drawing, one prompt at a time.";

impl CarouselApp {
    /// Render the header strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: f64) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(32.0)
                        .strong()
                        .color(egui::Color32::from_rgb(40, 40, 60)),
                );
                let speed = self.config.typing_ms_per_char;
                let mut typed = typed_prefix(TAGLINE, 0.0, now, speed).to_owned();
                if !is_complete(TAGLINE, 0.0, now, speed) {
                    typed.push('|');
                }
                ui.label(
                    egui::RichText::new(typed)
                        .size(18.0)
                        .color(egui::Color32::from_rgb(80, 80, 110)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let busy = self.loading || self.carousel.is_reshuffling();
                let label = if busy { "Loading…" } else { "Shuffle" };
                if ui
                    .add_enabled(
                        !busy,
                        egui::Button::new(label).min_size(egui::vec2(96.0, 28.0)),
                    )
                    .clicked()
                {
                    self.reshuffle();
                    ctx.request_repaint();
                }
            });
        });
    }
}
