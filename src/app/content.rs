//! Carousel rendering for `CarouselApp`.
//!
//! Projects the engine state once per frame, paints it back-to-front, and
//! collects the gestures from this frame's clicks. Gestures are applied to
//! the engine only after painting, so a frame never mixes two states.

use eframe::egui;
use prompt_carousel::carousel::panel::SlideDirection;
use prompt_carousel::render::view::{project_view, PanelView};

use crate::ui::{lerp_rect, paint_panel};
use super::CarouselApp;

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Activate(usize),
    Close(usize),
    Navigate(usize, SlideDirection),
    Dismiss,
}

/// Where panels sit on screen for a given content area.
struct RingLayout {
    center: egui::Pos2,
    radius_x: f32,
    card: egui::Vec2,
    expanded: egui::Rect,
}

impl RingLayout {
    fn new(area: egui::Rect) -> Self {
        let card_h = (area.height() * 0.75).min(380.0);
        let expanded = egui::Rect::from_center_size(
            area.center(),
            egui::vec2(
                (area.width() * 0.85).min(760.0),
                (area.height() * 0.92).min(540.0),
            ),
        );
        Self {
            center: area.center(),
            radius_x: (area.width() * 0.3).min(360.0),
            card: egui::vec2(card_h * 0.72, card_h),
            expanded,
        }
    }

    fn ring_rect(&self, panel: &PanelView) -> egui::Rect {
        // Front panels are larger, back panels recede.
        let scale = 0.7 + 0.3 * (panel.depth + 1.0) * 0.5;
        let center = egui::pos2(self.center.x + panel.lateral * self.radius_x, self.center.y);
        egui::Rect::from_center_size(center, self.card * scale)
    }

    fn panel_rect(&self, panel: &PanelView) -> egui::Rect {
        let ring = self.ring_rect(panel);
        if panel.expansion > 0.0 {
            lerp_rect(ring, self.expanded, panel.expansion)
        } else {
            ring
        }
    }
}

impl CarouselApp {
    pub fn draw_carousel(&mut self, ui: &mut egui::Ui, now: f64) {
        let area = ui.available_rect_before_wrap();
        let view = project_view(&self.carousel, now, self.config.typing_ms_per_char);
        let layout = RingLayout::new(area);
        let mut gestures = Vec::new();

        if view.overlay {
            ui.painter()
                .rect_filled(area, 0.0, egui::Color32::from_black_alpha(96));
            if ui
                .interact(area, ui.id().with("overlay"), egui::Sense::click())
                .clicked()
            {
                gestures.push(Gesture::Dismiss);
            }
        }

        for index in view.paint_order() {
            let panel = &view.panels[index];
            let rect = layout.panel_rect(panel);
            paint_panel(ui.painter(), rect, panel, &self.image_textures, &self.image_loader);

            // Hidden panels take no pointer events
            if !panel.visibility.interactive {
                continue;
            }
            let response = ui
                .interact(rect, ui.id().with(("panel", panel.index)), egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                gestures.push(Gesture::Activate(panel.index));
            }

            if panel.detail.is_some() {
                draw_slide_controls(ui, rect, panel.index, &mut gestures);
            }
        }

        if view.reshuffling {
            ui.painter().text(
                egui::pos2(area.center().x, area.bottom() - 12.0),
                egui::Align2::CENTER_BOTTOM,
                "Shuffling prompts…",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(110),
            );
        }

        for gesture in gestures {
            let outcome = match gesture {
                Gesture::Activate(i) => self.carousel.activate(i, now),
                Gesture::Close(i) => self.carousel.close_panel(i, now),
                Gesture::Navigate(i, direction) => self.carousel.navigate(i, direction, now),
                Gesture::Dismiss => self.carousel.dismiss_overlay(now),
            };
            log::debug!("{:?} -> {:?}", gesture, outcome);
        }
    }
}

fn draw_slide_controls(ui: &mut egui::Ui, rect: egui::Rect, index: usize, gestures: &mut Vec<Gesture>) {
    let button = egui::vec2(32.0, 32.0);

    let prev = egui::Rect::from_center_size(egui::pos2(rect.left() + 26.0, rect.center().y), button);
    if ui.put(prev, egui::Button::new("\u{25C0}")).clicked() {
        gestures.push(Gesture::Navigate(index, SlideDirection::Previous));
    }

    let next = egui::Rect::from_center_size(egui::pos2(rect.right() - 26.0, rect.center().y), button);
    if ui.put(next, egui::Button::new("\u{25B6}")).clicked() {
        gestures.push(Gesture::Navigate(index, SlideDirection::Next));
    }

    let close = egui::Rect::from_center_size(egui::pos2(rect.right() - 22.0, rect.top() + 22.0), button);
    if ui.put(close, egui::Button::new("\u{00D7}")).clicked() {
        gestures.push(Gesture::Close(index));
    }
}
