//! Easing functions for tween steps

/// Easing curve applied to a step's local progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// Constant speed
    Linear,
    /// Quadratic deceleration, the driver's default curve
    #[default]
    Power1Out,
}

impl Ease {
    /// Map linear progress (0.0 to 1.0) through the curve
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => linear(t),
            Ease::Power1Out => power1_out(t),
        }
    }
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease-out quadratic function
#[inline]
pub fn power1_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
