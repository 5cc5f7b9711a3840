//! Render model for the carousel.
//!
//! [`project_view`] is the only path from engine state to pixels: the UI
//! layer calls it once per frame and paints what it returns, and never
//! inspects `Carousel` directly.

use crate::carousel::panel::PanelPhase;
use crate::carousel::visibility::Visibility;
use crate::carousel::Carousel;

use super::typewriter::typed_prefix;

/// Prompt line over the background image.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub prompt: String,
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub image: String,
    /// Typed-so-far part of the slide text.
    pub text: String,
    pub index: usize,
    pub count: usize,
}

/// Slide viewer shown once a panel has expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// `None` when the panel has no content.
    pub slide: Option<SlideView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub index: usize,
    /// Degrees, `[0, 360)`; 0 faces the viewer.
    pub live_angle: f64,
    /// `sin(angle)`: -1 left … 1 right.
    pub lateral: f32,
    /// `cos(angle)`: 1 front … -1 back.
    pub depth: f32,
    /// Opacity from the last recompute.
    pub visibility: Visibility,
    pub active: bool,
    /// 0 on the ring, 1 fully expanded.
    pub expansion: f32,
    pub summary: Option<SummaryView>,
    pub detail: Option<DetailView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub panels: Vec<PanelView>,
    /// A panel is open; the backdrop overlay is shown.
    pub overlay: bool,
    pub reshuffling: bool,
}

impl CarouselView {
    /// Back-to-front, active panel last.
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.panels.len()).collect();
        order.sort_by(|&a, &b| {
            let pa = &self.panels[a];
            let pb = &self.panels[b];
            pa.active
                .cmp(&pb.active)
                .then(pa.depth.total_cmp(&pb.depth))
        });
        order
    }

    pub fn active(&self) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.active)
    }
}

/// Project the carousel at `now`.
pub fn project_view(carousel: &Carousel, now: f64, typing_ms_per_char: f64) -> CarouselView {
    let state = carousel.state();
    let rotation = state.clock().angle_at(now);
    let delay = carousel.reveal_delay_ms();

    let panels = state
        .panels()
        .iter()
        .map(|panel| {
            let live_angle = panel.live_angle(rotation);
            let radians = live_angle.to_radians();

            let expansion = match panel.phase() {
                PanelPhase::Inactive => 0.0,
                PanelPhase::Expanded => 1.0,
                PanelPhase::Expanding { reveal_at } if delay > 0.0 => {
                    (1.0 - (reveal_at - now) / delay).clamp(0.0, 1.0) as f32
                }
                PanelPhase::Expanding { .. } => 1.0,
            };

            let summary = (!panel.shows_detail()).then(|| SummaryView {
                prompt: panel.prompt_text().to_string(),
                background: panel.background().map(str::to_string),
            });

            let detail = panel.shows_detail().then(|| DetailView {
                slide: panel.slide().map(|slide| SlideView {
                    image: slide.image.clone(),
                    text: typed_prefix(&slide.text, panel.slide_shown_at(), now, typing_ms_per_char)
                        .to_string(),
                    index: panel.current_slide(),
                    count: panel.slide_count(),
                }),
            });

            PanelView {
                index: panel.index(),
                live_angle,
                lateral: radians.sin() as f32,
                depth: radians.cos() as f32,
                visibility: carousel.visibility(panel.index()),
                active: panel.is_active(),
                expansion,
                summary,
                detail,
            }
        })
        .collect();

    CarouselView {
        panels,
        overlay: state.active_index().is_some(),
        reshuffling: carousel.is_reshuffling(),
    }
}
