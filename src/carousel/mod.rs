//! The carousel engine.
//!
//! `Carousel` owns the whole widget state: rotation clock, three panels, the
//! recompute ticker and the last projected visibility. Every user gesture is
//! a method call that applies its full effect before returning an
//! [`Outcome`]; the caller re-renders from [`crate::render::view`].
//!
//! Reshuffle is two-phase. `begin_reshuffle` stops the ticker, draws a new
//! selection and hands back the images to preload; `finish_reshuffle`
//! (called once the preload batch settles) forces every panel inactive,
//! repopulates them and restarts rotation from 0°. A second
//! `begin_reshuffle` while one is pending is ignored.

pub mod clock;
pub mod panel;
pub mod ticker;
pub mod visibility;

use rand::Rng;

use crate::config::PageConfig;
use crate::content::selection::select;
use crate::content::{Prompt, PromptRecord};

use clock::RotationClock;
use panel::{Panel, SlideDirection, PANEL_COUNT};
use ticker::Ticker;
use visibility::{project, Visibility};

/// Rotation clock plus the three panels.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    clock: RotationClock,
    panels: [Panel; PANEL_COUNT],
}

impl CarouselState {
    pub fn new(now: f64) -> Self {
        Self {
            clock: RotationClock::new(now),
            panels: std::array::from_fn(Panel::new),
        }
    }

    /// Last computed rotation angle, `[0, 360)`.
    pub fn rotation_angle(&self) -> f64 {
        self.clock.angle()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn animation_epoch(&self) -> f64 {
        self.clock.epoch()
    }

    pub fn clock(&self) -> &RotationClock {
        &self.clock
    }

    pub fn panels(&self) -> &[Panel; PANEL_COUNT] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.panels.iter().position(Panel::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.panels.iter().filter(|p| p.is_active()).count()
    }

    /// Live angle of panel `index` at `now`.
    pub fn live_angle(&self, index: usize, now: f64) -> f64 {
        self.panels
            .get(index)
            .map_or(0.0, |p| p.live_angle(self.clock.angle_at(now)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoSuchPanel,
    ReshufflePending,
    NotInteractive,
    NotActive,
    NothingActive,
    NoSlides,
}

/// Result of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Activated(usize),
    Closed(usize),
    Navigated { panel: usize, slide: usize },
    Ignored(IgnoreReason),
}

pub struct Carousel {
    state: CarouselState,
    ticker: Ticker,
    visibility: [Visibility; PANEL_COUNT],
    viewport_width: f32,
    reveal_delay_ms: f64,
    selection_count: usize,
    pending: Option<Vec<Prompt>>,
}

impl Carousel {
    /// Empty carousel (placeholder panels), already rotating.
    pub fn new(config: &PageConfig, now: f64) -> Self {
        let mut carousel = Self {
            state: CarouselState::new(now),
            ticker: Ticker::new(config.tick_interval_ms),
            visibility: [Visibility::HIDDEN; PANEL_COUNT],
            viewport_width: 1280.0,
            reveal_delay_ms: config.reveal_delay_ms,
            selection_count: config.selection_count.min(PANEL_COUNT),
            pending: None,
        };
        carousel.ticker.start(now);
        carousel.recompute(now);
        carousel
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        self.visibility.get(index).copied().unwrap_or(Visibility::HIDDEN)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Takes effect at the next recompute.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn reveal_delay_ms(&self) -> f64 {
        self.reveal_delay_ms
    }

    pub fn is_reshuffling(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Prompts drawn per reshuffle, never more than there are panels.
    pub fn selection_count(&self) -> usize {
        self.selection_count
    }

    /// Milliseconds until the next recompute beat, `None` while stopped.
    pub fn until_next_tick(&self, now: f64) -> Option<f64> {
        self.ticker.until_due(now)
    }

    /// Drive timers. Call every frame; returns whether anything changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;
        if let Some(i) = self.state.active_index() {
            if self.state.panels[i].reveal_if_due(now) {
                log::debug!("Panel {} detail view revealed", i);
                changed = true;
            }
        }
        if self.ticker.due(now) && !self.state.clock.is_paused() {
            self.recompute(now);
            changed = true;
        }
        changed
    }

    /// Activation gesture on panel `index`. Clicking the active panel closes it.
    pub fn activate(&mut self, index: usize, now: f64) -> Outcome {
        if index >= PANEL_COUNT {
            return Outcome::Ignored(IgnoreReason::NoSuchPanel);
        }
        if self.pending.is_some() {
            return Outcome::Ignored(IgnoreReason::ReshufflePending);
        }
        if self.state.panels[index].is_active() {
            return self.close(now);
        }
        if !self.visibility[index].interactive {
            return Outcome::Ignored(IgnoreReason::NotInteractive);
        }

        if let Some(previous) = self.state.active_index() {
            self.state.panels[previous].collapse();
        }
        self.state.panels[index].expand(now + self.reveal_delay_ms);
        self.state.clock.pause(now);
        self.recompute(now);
        Outcome::Activated(index)
    }

    /// Close the active panel (re-click or backdrop dismissal).
    pub fn close(&mut self, now: f64) -> Outcome {
        let Some(index) = self.state.active_index() else {
            return Outcome::Ignored(IgnoreReason::NothingActive);
        };
        self.state.panels[index].collapse();
        self.state.clock.resume(now);
        self.recompute(now);
        Outcome::Closed(index)
    }

    /// Close control on a specific panel.
    pub fn close_panel(&mut self, index: usize, now: f64) -> Outcome {
        let Some(panel) = self.state.panels.get(index) else {
            return Outcome::Ignored(IgnoreReason::NoSuchPanel);
        };
        if !panel.is_active() {
            return Outcome::Ignored(IgnoreReason::NotActive);
        }
        self.close(now)
    }

    /// Backdrop click while a panel is open.
    pub fn dismiss_overlay(&mut self, now: f64) -> Outcome {
        self.close(now)
    }

    /// Left/right arrow inside an active panel.
    pub fn navigate(&mut self, index: usize, direction: SlideDirection, now: f64) -> Outcome {
        let Some(panel) = self.state.panels.get_mut(index) else {
            return Outcome::Ignored(IgnoreReason::NoSuchPanel);
        };
        if !panel.is_active() {
            return Outcome::Ignored(IgnoreReason::NotActive);
        }
        match panel.step(direction, now) {
            Some(slide) => Outcome::Navigated { panel: index, slide },
            None => Outcome::Ignored(IgnoreReason::NoSlides),
        }
    }

    /// Start a reshuffle: stop the ticker and draw a new selection.
    ///
    /// Returns the image sources to preload, de-duplicated in display order,
    /// or `None` if a reshuffle is already pending.
    pub fn begin_reshuffle<R: Rng + ?Sized>(
        &mut self,
        records: &[PromptRecord],
        rng: &mut R,
    ) -> Option<Vec<String>> {
        if self.pending.is_some() {
            log::debug!("Reshuffle already pending, ignoring trigger");
            return None;
        }
        self.ticker.stop();

        let selection = select(records, self.selection_count, rng);
        let mut sources: Vec<String> = Vec::new();
        for source in selection.iter().flat_map(Prompt::image_sources) {
            if !sources.iter().any(|s| s == source) {
                sources.push(source.to_owned());
            }
        }

        log::info!(
            "Reshuffle: {} prompt(s) selected from {} record(s), {} image(s) to preload",
            selection.len(),
            records.len(),
            sources.len()
        );
        self.pending = Some(selection);
        Some(sources)
    }

    /// Apply the pending selection. Returns `false` if none was pending.
    pub fn finish_reshuffle(&mut self, now: f64) -> bool {
        let Some(selection) = self.pending.take() else {
            return false;
        };
        let mut contents = selection.into_iter();
        for panel in self.state.panels.iter_mut() {
            panel.populate(contents.next(), now);
        }
        self.state.clock.reset(now);
        self.ticker.start(now);
        self.recompute(now);
        log::info!("Reshuffle settled, rotation restarted");
        true
    }

    fn recompute(&mut self, now: f64) {
        let rotation = self.state.clock.advance(now);
        for (slot, panel) in self.visibility.iter_mut().zip(self.state.panels.iter()) {
            *slot = project(panel.live_angle(rotation), panel.is_active(), self.viewport_width);
        }
    }
}
