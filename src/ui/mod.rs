//! Stateless egui painting helpers.
//!
//! Everything here paints a render model (`PanelView`, `Backdrop`) onto a
//! `Painter`; none of it touches engine state.

use std::collections::HashMap;

use eframe::egui;
use prompt_carousel::net::image::{ImageLoader, ImageStatus};
use prompt_carousel::render::backdrop::Backdrop;
use prompt_carousel::render::view::PanelView;

pub const IMAGE_PLACEHOLDER: &str = "Image Not Found";

const GRADIENT_STEPS: usize = 24;
const INK: egui::Color32 = egui::Color32::from_rgb(30, 30, 45);

// ─── Backdrop ────────────────────────────────────────────────────────────────

/// White page with soft radial-gradient circles.
pub fn paint_backdrop(painter: &egui::Painter, backdrop: &Backdrop) {
    let (w, h) = backdrop.size();
    painter.rect_filled(
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(w, h)),
        0.0,
        egui::Color32::WHITE,
    );

    // Stacked rings approximate an opaque-centre, transparent-rim gradient.
    let step_alpha = (255.0 * 1.6 / GRADIENT_STEPS as f32) as u8;
    for circle in backdrop.circles() {
        let [r, g, b] = circle.color;
        let color = egui::Color32::from_rgba_unmultiplied(r, g, b, step_alpha);
        let center = egui::pos2(circle.x, circle.y);
        for k in 0..GRADIENT_STEPS {
            let radius = circle.radius * (1.0 - k as f32 / GRADIENT_STEPS as f32);
            painter.circle_filled(center, radius, color);
        }
    }
}

// ─── Panels ──────────────────────────────────────────────────────────────────

/// Interpolate between two rects.
pub fn lerp_rect(from: egui::Rect, to: egui::Rect, t: f32) -> egui::Rect {
    egui::Rect::from_min_max(
        from.min + (to.min - from.min) * t,
        from.max + (to.max - from.max) * t,
    )
}

/// Paint one panel: card, then summary or detail content.
pub fn paint_panel(
    painter: &egui::Painter,
    rect: egui::Rect,
    panel: &PanelView,
    textures: &HashMap<String, egui::TextureHandle>,
    loader: &ImageLoader,
) {
    let opacity = panel.visibility.opacity;
    if opacity <= 0.0 {
        return;
    }

    painter.rect_filled(rect, 14.0, egui::Color32::WHITE.gamma_multiply(0.92 * opacity));
    painter.rect_stroke(
        rect,
        14.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(200).gamma_multiply(opacity)),
    );

    let inner = rect.shrink(12.0);

    if let Some(summary) = &panel.summary {
        if let Some(background) = &summary.background {
            paint_image(
                painter,
                inner,
                background,
                panel.visibility.background_opacity,
                textures,
                loader,
            );
        }
        paint_text(
            painter,
            inner,
            &summary.prompt,
            22.0,
            INK.gamma_multiply(opacity),
            egui::Align2::CENTER_CENTER,
        );
    }

    if let Some(detail) = &panel.detail {
        match &detail.slide {
            Some(slide) => {
                let image_rect = egui::Rect::from_min_max(
                    inner.min,
                    egui::pos2(inner.max.x, inner.min.y + inner.height() * 0.72),
                );
                paint_image(painter, image_rect, &slide.image, opacity, textures, loader);

                let text_rect = egui::Rect::from_min_max(
                    egui::pos2(inner.min.x, image_rect.max.y + 8.0),
                    inner.max,
                );
                paint_text(
                    painter,
                    text_rect,
                    &slide.text,
                    18.0,
                    INK,
                    egui::Align2::CENTER_TOP,
                );
                painter.text(
                    inner.right_bottom(),
                    egui::Align2::RIGHT_BOTTOM,
                    format!("{} / {}", slide.index + 1, slide.count),
                    egui::FontId::proportional(13.0),
                    egui::Color32::from_gray(120),
                );
            }
            None => paint_text(
                painter,
                inner,
                "Nothing to show yet",
                18.0,
                egui::Color32::from_gray(120),
                egui::Align2::CENTER_CENTER,
            ),
        }
    }
}

/// Paint an image scaled to fit `rect`, or the failure placeholder.
pub fn paint_image(
    painter: &egui::Painter,
    rect: egui::Rect,
    source: &str,
    opacity: f32,
    textures: &HashMap<String, egui::TextureHandle>,
    loader: &ImageLoader,
) {
    if let Some(texture) = textures.get(source) {
        let size = texture.size_vec2();
        let scale = (rect.width() / size.x).min(rect.height() / size.y);
        let fitted = egui::Rect::from_center_size(rect.center(), size * scale);
        painter.image(
            texture.id(),
            fitted,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE.gamma_multiply(opacity),
        );
    } else if loader.status(source) == ImageStatus::Failed {
        painter.rect_filled(rect, 8.0, egui::Color32::from_gray(235).gamma_multiply(opacity));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            IMAGE_PLACEHOLDER,
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(110).gamma_multiply(opacity),
        );
    }
}

fn paint_text(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    size: f32,
    color: egui::Color32,
    align: egui::Align2,
) {
    let galley = painter.layout(
        text.to_owned(),
        egui::FontId::proportional(size),
        color,
        rect.width(),
    );
    let pos = align.align_size_within_rect(galley.size(), rect).min;
    painter.galley(pos, galley, color);
}

// ─── Alert ───────────────────────────────────────────────────────────────────

/// Modal message with an OK button.
pub fn show_alert(ctx: &egui::Context, alert: &mut Option<String>) {
    let Some(message) = alert.as_ref() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(message.as_str());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    if dismissed {
        *alert = None;
    }
}
