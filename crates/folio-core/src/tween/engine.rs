//! Deterministic chain engine
//!
//! Time is injected: the engine only moves when [`TweenEngine::tick`] is
//! called with a timestamp, so tests drive it with plain numbers and the
//! browser drives it from `requestAnimationFrame`.

use crate::catalog::ProjectId;
use crate::surface::Surface;
use super::{Chain, Step, StyleValue, TweenDriver};

/// Handle to a chain registered with a driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainId(pub(crate) usize);

/// Playback direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Notifications produced by [`TweenEngine::tick`]
#[derive(Clone, Debug, PartialEq)]
pub enum ChainEvent {
    /// A forward run reached the end of the chain
    Completed {
        chain: ChainId,
        payload: Option<ProjectId>,
    },
    /// A reverse run reached the start of the chain
    ReverseCompleted {
        chain: ChainId,
        payload: Option<ProjectId>,
    },
}

/// What the engine last wrote for a step
#[derive(Clone, Debug)]
struct StepTrack {
    /// Local progress last rendered (steps begin at rest, i.e. 0.0)
    rendered: f32,
    /// `auto` target measured when the step began
    resolved_to: Option<StyleValue>,
}

impl StepTrack {
    fn at_rest() -> Self {
        Self {
            rendered: 0.0,
            resolved_to: None,
        }
    }
}

/// Playback state for one chain
#[derive(Clone, Debug)]
struct Timeline {
    chain: Chain,
    playhead_ms: f32,
    direction: Direction,
    running: bool,
    /// Set by play/reverse; the next tick renders without advancing
    fresh: bool,
    tracks: Vec<StepTrack>,
}

impl Timeline {
    fn new(chain: Chain) -> Self {
        let tracks = chain.steps().iter().map(|_| StepTrack::at_rest()).collect();
        Self {
            chain,
            playhead_ms: 0.0,
            direction: Direction::Forward,
            running: false,
            fresh: false,
            tracks,
        }
    }

    fn duration_ms(&self) -> f32 {
        self.chain.duration_ms()
    }

    fn progress(&self) -> f32 {
        let total = self.duration_ms();
        if total <= 0.0 {
            return if self.playhead_ms > 0.0 { 1.0 } else { 0.0 };
        }
        (self.playhead_ms / total).clamp(0.0, 1.0)
    }

    /// Local progress of a step at the current playhead
    fn local_progress(&self, step: &Step) -> f32 {
        let p = self.playhead_ms;
        if step.is_instant() {
            // Entered moving forward: applied. Left moving backward: reverted.
            let applied = p > step.start_ms || (p == step.start_ms && self.direction == Direction::Forward);
            return if applied { 1.0 } else { 0.0 };
        }
        ((p - step.start_ms) / step.duration_ms).clamp(0.0, 1.0)
    }

    fn render(&mut self, surface: &mut dyn Surface) {
        for index in 0..self.chain.steps().len() {
            let step = &self.chain.steps()[index];
            let local = self.local_progress(step);
            let track = &mut self.tracks[index];
            if local == track.rendered {
                continue;
            }
            track.rendered = local;

            let value = if local >= 1.0 {
                step.to.clone()
            } else if local <= 0.0 {
                step.from.clone()
            } else {
                let to = match &track.resolved_to {
                    Some(resolved) => resolved.clone(),
                    None => {
                        let resolved = resolve(&step.to, step, &*surface);
                        track.resolved_to = Some(resolved.clone());
                        resolved
                    }
                };
                let from = resolve(&step.from, step, &*surface);
                StyleValue::lerp(&from, &to, step.ease.apply(local)).unwrap_or_else(|| step.from.clone())
            };
            surface.set_style(&step.target, step.prop, &value);
        }
    }

    /// Advance by `dt_ms`, render, and report a finished run
    fn advance(&mut self, dt_ms: f32, id: ChainId, surface: &mut dyn Surface) -> Option<ChainEvent> {
        let total = self.duration_ms();
        self.playhead_ms = match self.direction {
            Direction::Forward => (self.playhead_ms + dt_ms).min(total),
            Direction::Reverse => (self.playhead_ms - dt_ms).max(0.0),
        };
        self.render(surface);

        let payload = self.chain.payload().cloned();
        match self.direction {
            Direction::Forward if self.playhead_ms >= total => {
                self.running = false;
                Some(ChainEvent::Completed { chain: id, payload })
            }
            Direction::Reverse if self.playhead_ms <= 0.0 => {
                self.running = false;
                Some(ChainEvent::ReverseCompleted { chain: id, payload })
            }
            _ => None,
        }
    }
}

/// Replace an `auto` length with the target's measured height
fn resolve(value: &StyleValue, step: &Step, surface: &dyn Surface) -> StyleValue {
    if value.is_auto() {
        StyleValue::px(surface.natural_height(&step.target))
    } else {
        value.clone()
    }
}

/// Chain engine driven by an injected clock
#[derive(Debug, Default)]
pub struct TweenEngine {
    timelines: Vec<Timeline>,
    last_tick_ms: Option<f64>,
}

impl TweenEngine {
    /// Create an engine with no chains
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every running chain to `now_ms`, writing styles to `surface`
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn Surface) -> Vec<ChainEvent> {
        let dt_ms = self
            .last_tick_ms
            .map(|last| (now_ms - last).max(0.0) as f32)
            .unwrap_or(0.0);
        self.last_tick_ms = Some(now_ms);

        let mut events = Vec::new();
        for (index, timeline) in self.timelines.iter_mut().enumerate() {
            if !timeline.running {
                continue;
            }
            let step = if timeline.fresh {
                timeline.fresh = false;
                0.0
            } else {
                dt_ms
            };
            if let Some(event) = timeline.advance(step, ChainId(index), surface) {
                events.push(event);
            }
        }
        events
    }

    /// Check if any chain is running
    pub fn is_animating(&self) -> bool {
        self.timelines.iter().any(|t| t.running)
    }

    /// Check if a chain is running
    pub fn is_running(&self, id: ChainId) -> bool {
        self.timelines.get(id.0).is_some_and(|t| t.running)
    }

    /// Playhead position as a fraction of the chain duration
    pub fn progress(&self, id: ChainId) -> Option<f32> {
        self.timelines.get(id.0).map(Timeline::progress)
    }

    /// Current playback direction
    pub fn direction(&self, id: ChainId) -> Option<Direction> {
        self.timelines.get(id.0).map(|t| t.direction)
    }

    fn timeline_mut(&mut self, id: ChainId) -> Option<&mut Timeline> {
        let timeline = self.timelines.get_mut(id.0);
        if timeline.is_none() {
            log::warn!("[tween] unknown chain {:?}", id);
        }
        timeline
    }
}

impl TweenDriver for TweenEngine {
    fn create(&mut self, chain: Chain) -> ChainId {
        self.timelines.push(Timeline::new(chain));
        ChainId(self.timelines.len() - 1)
    }

    fn play(&mut self, id: ChainId) {
        if let Some(t) = self.timeline_mut(id) {
            t.direction = Direction::Forward;
            let total = t.duration_ms();
            if t.playhead_ms < total || total <= 0.0 {
                t.running = true;
                t.fresh = true;
            }
        }
    }

    fn reverse(&mut self, id: ChainId) {
        if let Some(t) = self.timeline_mut(id) {
            t.direction = Direction::Reverse;
            if t.playhead_ms > 0.0 {
                t.running = true;
                t.fresh = true;
            }
        }
    }

    fn pause(&mut self, id: ChainId) {
        if let Some(t) = self.timeline_mut(id) {
            t.running = false;
        }
    }

    fn reset(&mut self, id: ChainId) {
        if let Some(t) = self.timeline_mut(id) {
            t.running = false;
            t.fresh = false;
            t.playhead_ms = 0.0;
            t.direction = Direction::Forward;
            t.tracks.iter_mut().for_each(|track| *track = StepTrack::at_rest());
        }
    }
}
