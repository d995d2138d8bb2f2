//! Test doubles for the page's collaborators
//!
//! These stand in for the browser so controller logic can be exercised
//! without a document:
//! - [`RecordingSurface`] remembers every style, text and href written
//! - [`ScriptedDriver`] records driver calls without animating anything

mod driver;
mod surface;

pub use driver::{DriverCall, ScriptedDriver};
pub use surface::RecordingSurface;
