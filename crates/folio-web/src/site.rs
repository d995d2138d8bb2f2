//! Event wiring and the frame loop
//!
//! The page lives in an `Rc<RefCell<_>>` shared by every listener and by
//! the `requestAnimationFrame` callback. Listeners mutate the page and
//! request a frame; the frame callback ticks the page and keeps requesting
//! frames only while chains are running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::nav::{mount_nav, NavDestination, CLOSE_NAV_ID};
use folio_core::{Catalog, FolioError, Page, PageLayout, SiteConfig, Target, ViewportMode};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

use crate::dom::DomSurface;
use crate::layout;
use crate::util::to_js;

/// Projects shown on the page
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Id of the optional `<script type="application/json">` config override
const CONFIG_ELEMENT_ID: &str = "folioConfig";

struct App {
    page: Page,
    surface: DomSurface,
}

type Shared = Rc<RefCell<App>>;
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Parse the embedded catalog
pub(crate) fn default_catalog() -> folio_core::Result<Catalog> {
    Catalog::from_json(CATALOG_JSON)
}

fn read_config(document: &Document) -> folio_core::Result<SiteConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) => SiteConfig::from_json(&json),
        None => Ok(SiteConfig::default()),
    }
}

/// `requestAnimationFrame` loop that runs only while chains are running
#[derive(Clone)]
struct FrameLoop {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameLoop {
    fn new(window: Window, app: Shared) -> Self {
        let frames = Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            scheduled: Rc::new(Cell::new(false)),
        };
        let handle = frames.clone();
        *frames.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            handle.scheduled.set(false);
            let running = {
                let mut app = app.borrow_mut();
                let App { page, surface } = &mut *app;
                page.tick(now, surface)
            };
            if running {
                handle.request();
            }
        }) as Box<dyn FnMut(f64)>));
        frames
    }

    /// Schedule a frame unless one is already pending
    fn request(&self) {
        if self.scheduled.get() {
            return;
        }
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref::<Function>()) {
            Ok(_) => self.scheduled.set(true),
            Err(err) => log::error!("[site] requestAnimationFrame failed: {:?}", err),
        }
    }
}

/// Handle given to every listener
#[derive(Clone)]
struct Site {
    app: Shared,
    frames: FrameLoop,
}

impl Site {
    /// Run a page action, log its failure and wake the frame loop
    fn with_page(&self, action: impl FnOnce(&mut Page, &mut DomSurface) -> folio_core::Result<()>) {
        let result = {
            let mut app = self.app.borrow_mut();
            let App { page, surface } = &mut *app;
            action(page, surface)
        };
        if let Err(err) = result {
            log::error!("[site] {}", err);
        }
        self.frames.request();
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<Function>())?;
    closure.forget();
    Ok(())
}

fn require(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| to_js(FolioError::MissingElement(selector.to_string())))
}

fn wire_cards(document: &Document, site: &Site, layout: &PageLayout) -> Result<(), JsValue> {
    for card in &layout.cards {
        let element = require(document, &Target::Card(card.id.clone()).selector())?;
        let site = site.clone();
        let id = card.id.clone();
        listen(&element, "click", move || {
            site.with_page(|page, surface| page.activate_card(&id, surface));
        })?;
    }
    Ok(())
}

fn wire_title(document: &Document, site: &Site) -> Result<(), JsValue> {
    let title = require(document, &Target::TitleRegion.selector())?;

    let on_click = site.clone();
    listen(&title, "click", move || {
        on_click.with_page(|page, surface| {
            page.title_clicked(surface);
            Ok(())
        });
    })?;

    for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
        let site = site.clone();
        listen(&title, event, move || {
            site.with_page(|page, surface| {
                page.title_hover(entered, surface);
                Ok(())
            });
        })?;
    }
    Ok(())
}

fn wire_nav(document: &Document, site: &Site, mode: ViewportMode) -> Result<(), JsValue> {
    for dest in NavDestination::ALL {
        let button = require(document, &format!("#{}", dest.button_id()))?;
        let site = site.clone();
        listen(&button, "click", move || {
            site.with_page(|page, surface| {
                page.navigate(dest, surface);
                Ok(())
            });
        })?;
    }

    if mode.is_narrow() {
        let hamburger = require(document, &Target::Hamburger.selector())?;
        let on_open = site.clone();
        listen(&hamburger, "click", move || {
            on_open.with_page(|page, surface| {
                page.open_drawer(surface);
                Ok(())
            });
        })?;

        let close = require(document, &format!("#{CLOSE_NAV_ID}"))?;
        let on_close = site.clone();
        listen(&close, "click", move || {
            on_close.with_page(|page, surface| {
                page.close_drawer(surface);
                Ok(())
            });
        })?;
    }
    Ok(())
}

fn size_hobbies(document: &Document) {
    if let Err(err) = layout::size_hobbies(document) {
        log::warn!("[site] hobby block not sized: {}", err);
    }
}

/// Build the page from the live document and attach every listener
pub(crate) fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = read_config(&document).map_err(to_js)?;
    let narrow = window
        .match_media(&config.narrow_query)?
        .is_some_and(|query| query.matches());
    let mode = ViewportMode::from_narrow_match(narrow);
    let catalog = default_catalog().map_err(to_js)?;

    // Nav and hobby sizing change the layout, so both precede sampling
    let mut surface = DomSurface::new(document.clone());
    mount_nav(mode, &mut surface);
    if mode == ViewportMode::Wide {
        size_hobbies(&document);
        let resized = document.clone();
        listen(&window, "resize", move || size_hobbies(&resized))?;
    }

    let layout = layout::sample(&document, mode).map_err(to_js)?;
    let page = Page::init(catalog, config, mode, &layout, &mut surface).map_err(to_js)?;

    let app = Rc::new(RefCell::new(App { page, surface }));
    let site = Site {
        frames: FrameLoop::new(window, app.clone()),
        app,
    };

    wire_cards(&document, &site, &layout)?;
    wire_nav(&document, &site, mode)?;
    if mode == ViewportMode::Wide {
        wire_title(&document, &site)?;
    }
    log::info!("[site] mounted");
    Ok(())
}
