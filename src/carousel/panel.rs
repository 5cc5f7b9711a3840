//! Per-panel display state.

use crate::content::{Prompt, Slide, PLACEHOLDER_PROMPT};

use super::clock::normalize_degrees;

/// Panels on the carousel.
pub const PANEL_COUNT: usize = 3;

/// Angular distance between neighbouring panels.
pub const PANEL_SPACING_DEG: f64 = 360.0 / PANEL_COUNT as f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPhase {
    /// Summary view (background + prompt line), rotating with the carousel.
    Inactive,
    /// Active, growing into place; the detail view appears at `reveal_at`.
    Expanding { reveal_at: f64 },
    /// Active with the slide viewer shown.
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Previous,
    Next,
}

/// Circular step through `count` slides. `None` when there are no slides.
pub fn step_index(current: usize, count: usize, direction: SlideDirection) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match direction {
        SlideDirection::Previous => (current + count - 1) % count,
        SlideDirection::Next => (current + 1) % count,
    };
    Some(next)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    index: usize,
    content: Option<Prompt>,
    phase: PanelPhase,
    current_slide: usize,
    /// When the current slide was last shown; drives the text typing.
    slide_shown_at: f64,
}

impl Panel {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            content: None,
            phase: PanelPhase::Inactive,
            current_slide: 0,
            slide_shown_at: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Fixed offset on the ring: index × 120°.
    pub fn base_angle(&self) -> f64 {
        self.index as f64 * PANEL_SPACING_DEG
    }

    /// Position on the ring for a given carousel rotation.
    pub fn live_angle(&self, rotation: f64) -> f64 {
        normalize_degrees(self.base_angle() + rotation)
    }

    pub fn content(&self) -> Option<&Prompt> {
        self.content.as_ref()
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != PanelPhase::Inactive
    }

    pub fn shows_detail(&self) -> bool {
        self.phase == PanelPhase::Expanded
    }

    /// Prompt line, or the placeholder when the panel has no content.
    pub fn prompt_text(&self) -> &str {
        self.content
            .as_ref()
            .map(|c| c.prompt.as_str())
            .unwrap_or(PLACEHOLDER_PROMPT)
    }

    pub fn background(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.background.as_str())
    }

    pub fn slide_count(&self) -> usize {
        self.content.as_ref().map_or(0, |c| c.slides.len())
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.content.as_ref()?.slides.get(self.current_slide)
    }

    pub fn slide_shown_at(&self) -> f64 {
        self.slide_shown_at
    }

    /// Replace the content. Always leaves the panel inactive on slide 0.
    pub(crate) fn populate(&mut self, content: Option<Prompt>, now: f64) {
        self.phase = PanelPhase::Inactive;
        self.content = content;
        self.current_slide = 0;
        self.slide_shown_at = now;
    }

    pub(crate) fn expand(&mut self, reveal_at: f64) {
        self.phase = PanelPhase::Expanding { reveal_at };
    }

    pub(crate) fn collapse(&mut self) {
        self.phase = PanelPhase::Inactive;
    }

    /// Show the detail view if the reveal delay has elapsed.
    pub(crate) fn reveal_if_due(&mut self, now: f64) -> bool {
        match self.phase {
            PanelPhase::Expanding { reveal_at } if now >= reveal_at => {
                self.phase = PanelPhase::Expanded;
                self.slide_shown_at = now;
                true
            }
            _ => false,
        }
    }

    /// Step the slide viewer. Returns the new slide index.
    pub(crate) fn step(&mut self, direction: SlideDirection, now: f64) -> Option<usize> {
        let next = step_index(self.current_slide, self.slide_count(), direction)?;
        self.current_slide = next;
        self.slide_shown_at = now;
        Some(next)
    }
}
