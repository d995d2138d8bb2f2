//! Tween chains
//!
//! A chain is a prebuilt, replayable, reversible sequence of style changes.
//! Controllers only see the [`TweenDriver`] capability; [`TweenEngine`] is the
//! deterministic implementation, advanced by an injected clock through
//! [`TweenEngine::tick`].

mod chain;
mod easing;
mod engine;
mod style;

pub use chain::{Chain, Step};
pub use easing::{linear, power1_out, Ease};
pub use engine::{ChainEvent, ChainId, Direction, TweenEngine};
pub use style::{Length, StyleProp, StyleValue};

/// Capability for driving prebuilt chains
///
/// Chains are created paused. Playing resumes forward from the current
/// position and reversing runs backward from the current position, so a
/// chain reversed mid-flight retraces its path instead of jumping.
pub trait TweenDriver {
    /// Register a chain, returning its handle
    fn create(&mut self, chain: Chain) -> ChainId;

    /// Run forward from the current position
    fn play(&mut self, id: ChainId);

    /// Run backward from the current position
    fn reverse(&mut self, id: ChainId);

    /// Stop at the current position
    fn pause(&mut self, id: ChainId);

    /// Pause and rewind to the start without writing any styles
    fn reset(&mut self, id: ChainId);

    /// Rewind and play from the start
    fn restart(&mut self, id: ChainId) {
        self.reset(id);
        self.play(id);
    }
}
