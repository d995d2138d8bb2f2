//! Chain construction

use crate::catalog::ProjectId;
use crate::surface::Target;
use super::{Ease, StyleProp, StyleValue};

/// One step of a chain
///
/// Steps run back to back; a step with zero duration is an instant set.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub target: Target,
    pub prop: StyleProp,
    pub from: StyleValue,
    pub to: StyleValue,
    /// Offset from the chain start (ms)
    pub start_ms: f32,
    pub duration_ms: f32,
    pub ease: Ease,
}

impl Step {
    /// Check if this step is an instant set
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.duration_ms <= 0.0
    }

    /// Offset at which the step finishes (ms)
    #[inline]
    pub fn end_ms(&self) -> f32 {
        self.start_ms + self.duration_ms
    }
}

/// A sequence of steps plus an optional completion payload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    steps: Vec<Step>,
    payload: Option<ProjectId>,
}

impl Chain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chain that reports `payload` when it completes
    pub fn with_payload(payload: ProjectId) -> Self {
        Self {
            steps: Vec::new(),
            payload: Some(payload),
        }
    }

    /// Append a timed step
    pub fn tween(
        mut self,
        target: Target,
        prop: StyleProp,
        from: StyleValue,
        to: StyleValue,
        duration_ms: u32,
        ease: Ease,
    ) -> Self {
        let start_ms = self.duration_ms();
        self.steps.push(Step {
            target,
            prop,
            from,
            to,
            start_ms,
            duration_ms: duration_ms as f32,
            ease,
        });
        self
    }

    /// Append an instant step
    pub fn set(self, target: Target, prop: StyleProp, from: StyleValue, to: StyleValue) -> Self {
        self.tween(target, prop, from, to, 0, Ease::Linear)
    }

    /// Total duration (ms)
    pub fn duration_ms(&self) -> f32 {
        self.steps.last().map(Step::end_ms).unwrap_or(0.0)
    }

    /// Steps in order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Completion payload
    pub fn payload(&self) -> Option<&ProjectId> {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_steps_are_sequential() {
        let chain = Chain::new()
            .set(Target::TitleRegion, StyleProp::Visibility, StyleValue::Keyword("hidden"), StyleValue::Keyword("visible"))
            .tween(Target::TitleRegion, StyleProp::Width, StyleValue::percent(35.0), StyleValue::percent(100.0), 500, Ease::Power1Out)
            .tween(Target::TitleRegion, StyleProp::BorderRadius, StyleValue::em(1.0), StyleValue::em(0.0), 100, Ease::Linear);

        let starts: Vec<f32> = chain.steps().iter().map(|s| s.start_ms).collect();
        assert_eq!(starts, vec![0.0, 0.0, 500.0]);
        assert!((chain.duration_ms() - 600.0).abs() < 0.001);
        assert!(chain.steps()[0].is_instant());
        assert!(!chain.steps()[1].is_instant());
        assert!(chain.payload().is_none());
    }

    #[test]
    fn test_chain_payload() {
        let chain = Chain::with_payload(ProjectId::from("ACNH"));
        assert_eq!(chain.payload().map(ProjectId::as_str), Some("ACNH"));
        assert!((chain.duration_ms() - 0.0).abs() < 0.001);
    }
}
