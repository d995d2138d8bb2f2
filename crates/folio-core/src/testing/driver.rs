//! Call-recording tween driver

use crate::tween::{Chain, ChainId, TweenDriver};

/// A call made on a [`ScriptedDriver`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverCall {
    Create(ChainId),
    Play(ChainId),
    Reverse(ChainId),
    Pause(ChainId),
    Reset(ChainId),
}

/// Driver that keeps the chains it is given and logs every call
///
/// Nothing animates; tests assert on the call order and chain contents.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    chains: Vec<Chain>,
    calls: Vec<DriverCall>,
}

impl ScriptedDriver {
    /// Create an empty driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain registered under `id`
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id.0)
    }

    /// Number of chains created
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Calls made so far
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    /// Forget recorded calls (chains are kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TweenDriver for ScriptedDriver {
    fn create(&mut self, chain: Chain) -> ChainId {
        self.chains.push(chain);
        let id = ChainId(self.chains.len() - 1);
        self.calls.push(DriverCall::Create(id));
        id
    }

    fn play(&mut self, id: ChainId) {
        self.calls.push(DriverCall::Play(id));
    }

    fn reverse(&mut self, id: ChainId) {
        self.calls.push(DriverCall::Reverse(id));
    }

    fn pause(&mut self, id: ChainId) {
        self.calls.push(DriverCall::Pause(id));
    }

    fn reset(&mut self, id: ChainId) {
        self.calls.push(DriverCall::Reset(id));
    }
}
