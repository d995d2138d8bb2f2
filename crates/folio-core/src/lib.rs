//! Interactivity core for the folio portfolio page
//!
//! This crate holds everything the page does between user events:
//! - Project disclosure (cards fly to a shared panel on desktop, expand
//!   inline on mobile)
//! - Nav visibility (static bar, or a slide-out drawer on narrow layouts)
//! - A deterministic tween engine the controllers drive
//!
//! ## Architecture
//!
//! - [`catalog`]: Project records keyed by the cards' `data-id`
//! - [`tween`]: Prebuilt reversible chains and the engine that plays them
//! - [`disclosure`]: Desktop and mobile disclosure strategies
//! - [`nav`]: Nav mounting and the drawer controller
//! - [`markup`]: Injected HTML fragments
//! - [`testing`]: In-memory surface and driver doubles
//!
//! ## Example
//!
//! ```rust
//! use folio_core::testing::RecordingSurface;
//! use folio_core::{Catalog, Page, PageLayout, SiteConfig, ViewportMode};
//!
//! let catalog = Catalog::from_json("[]").unwrap();
//! let mut surface = RecordingSurface::new();
//! let mut page = Page::init(
//!     catalog,
//!     SiteConfig::default(),
//!     ViewportMode::Wide,
//!     &PageLayout::default(),
//!     &mut surface,
//! )
//! .unwrap();
//!
//! assert!(!page.tick(0.0, &mut surface));
//! ```
//!
//! ## Design Principles
//!
//! 1. **No browser types**: the document is reached only through [`Surface`]
//! 2. **Time Abstraction**: [`TweenEngine`] advances only when ticked with a timestamp
//! 3. **Built once**: every chain is created at load and afterwards only played, reversed or reset

pub mod catalog;
pub mod config;
pub mod disclosure;
pub mod geometry;
pub mod markup;
pub mod math;
pub mod nav;
pub mod testing;
pub mod tween;

mod error;
mod page;
mod surface;
mod viewport;

pub use catalog::{Catalog, ProjectId, ProjectLinks, ProjectRecord};
pub use config::SiteConfig;
pub use disclosure::{Disclosure, DisclosureState, DisclosureStrategy};
pub use error::{FolioError, Result};
pub use geometry::{CardLayout, PageLayout};
pub use math::{Rect, Vec2};
pub use nav::{NavDestination, NavDrawer};
pub use page::Page;
pub use surface::{InsertPosition, Surface, Target};
pub use tween::{ChainEvent, ChainId, TweenDriver, TweenEngine};
pub use viewport::ViewportMode;
