//! Waitlist form for `CarouselApp`.
//!
//! The POST runs on a background thread; the result surfaces only as an
//! alert. On failure the form keeps its input so the user can resubmit.

use std::sync::mpsc;
use eframe::egui;

use prompt_carousel::net::waitlist::{submit, FAILURE_MESSAGE, SUCCESS_MESSAGE};

use super::CarouselApp;

impl CarouselApp {
    pub fn draw_waitlist(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Join the waitlist").size(20.0).strong());
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let width = (ui.available_width() - 140.0).max(160.0) * 0.5;
                ui.add_sized(
                    [width, 28.0],
                    egui::TextEdit::singleline(&mut self.waitlist.name).hint_text("Name"),
                );
                let email = ui.add_sized(
                    [width, 28.0],
                    egui::TextEdit::singleline(&mut self.waitlist.email).hint_text("Email"),
                );

                let in_flight = self.submit_rx.is_some();
                let ready = self.waitlist.is_submittable() && !in_flight;
                let label = if in_flight { "Sending…" } else { "Join" };
                let clicked = ui
                    .add_enabled(ready, egui::Button::new(label).min_size(egui::vec2(96.0, 28.0)))
                    .clicked();
                let entered = email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if clicked || (entered && ready) {
                    self.submit_waitlist(ctx);
                }
            });
        });
    }

    /// Start the POST unless one is already in flight.
    pub fn submit_waitlist(&mut self, ctx: &egui::Context) {
        if self.submit_rx.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.submit_rx = Some(rx);

        let endpoint = self.config.waitlist_endpoint.clone();
        let fields = self.waitlist.fields();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = submit(&endpoint, &fields);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    pub fn check_submit(&mut self) {
        let Some(rx) = &self.submit_rx else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.submit_rx = None;
                self.alert = Some(FAILURE_MESSAGE.to_string());
                return;
            }
        };
        match result {
            Ok(()) => {
                self.alert = Some(SUCCESS_MESSAGE.to_string());
                self.waitlist.reset();
            }
            Err(e) => {
                log::error!("Waitlist submission failed: {}", e);
                self.alert = Some(FAILURE_MESSAGE.to_string());
            }
        }
        self.submit_rx = None;
    }
}
