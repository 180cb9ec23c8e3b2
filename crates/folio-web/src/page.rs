//! Page initialization and lifetime
//!
//! [`Page::init`] runs every behaviour's setup in order. A failing step is
//! logged and skipped so one broken feature never takes the others down.
//! The mounted page lives in a thread-local until it is replaced.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Capabilities, Controller, FolioConfig, Landmark};
use tracing::{debug, error, info, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, KeyboardEvent, Node, Window};

use crate::capability;
use crate::contact;
use crate::dom::{self, DomSurface};
use crate::error::WebError;
use crate::focus;
use crate::listener::Listener;
use crate::observer::OnceObserver;
use crate::reveal;
use crate::scroll_fallback;
use crate::typing::{self, TypingDriver};

/// Controller shared by every event handler
pub type SharedController = Rc<RefCell<Controller<DomSurface>>>;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Everything a mounted page keeps alive
pub struct Page {
    controller: SharedController,
    capabilities: Capabilities,
    listeners: Vec<Listener>,
    observers: Vec<OnceObserver>,
    typing: Option<TypingDriver>,
}

impl Page {
    /// Wire every behaviour to the current document
    ///
    /// # Errors
    ///
    /// Returns an error only if there is no window or document; individual
    /// behaviours that fail are skipped.
    pub fn init(config: &FolioConfig) -> Result<Self, WebError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let capabilities = capability::probe(&window, &document);
        debug!(?capabilities, "probed browser capabilities");

        let surface = DomSurface::resolve(&document, &config.landmarks);
        let mut page = Self {
            controller: Rc::new(RefCell::new(Controller::new(surface, config))),
            capabilities,
            listeners: Vec::new(),
            observers: Vec::new(),
            typing: None,
        };

        let reveal_strategy = capabilities.reveal_strategy();
        let controller = Rc::clone(&page.controller);

        page.keep_all("window listeners", window_listeners(&window, &controller));
        page.observe(
            "skill bars",
            reveal::skill_bars(&document, config, reveal_strategy),
        );
        page.observe(
            "section fade-in",
            reveal::sections(&document, config, reveal_strategy),
        );
        page.keep_all(
            "contact links",
            contact::instrument(&document, &config.selectors),
        );
        page.typing = keep(
            "typing effect",
            typing::setup(&document, &config.selectors.hero_title, &config.typing),
        )
        .flatten();
        page.keep_all(
            "scroll fallback",
            scroll_fallback::install(
                &window,
                &document,
                &config.selectors,
                capabilities.scroll_strategy(config),
            ),
        );
        page.observe(
            "lazy images",
            reveal::lazy_images(&document, config, capabilities.lazy_load_strategy(config)),
        );
        page.keep_one(
            "outside click",
            outside_click(&document, &config.landmarks.nav_region_selector, &controller),
        );
        page.keep_one("menu click containment", contain_menu_clicks(&controller));
        page.keep_all("escape key", escape_key(&document, &controller).map(|l| vec![l]));
        page.keep_all(
            "focus ring",
            focus::attach(&document, &config.selectors.focusable, &config.focus),
        );

        info!(
            listeners = page.listeners.len(),
            observers = page.observers.len(),
            "{}",
            config.banner.loaded_message
        );
        Ok(page)
    }

    /// The controller behind this page
    #[must_use]
    pub fn controller(&self) -> SharedController {
        Rc::clone(&self.controller)
    }

    /// Capabilities detected at init
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Number of live event listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the typing effect is running
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing.as_ref().is_some_and(|t| !t.is_stopped())
    }

    /// Unregister listeners, disconnect observers and stop the typing loop
    pub fn teardown(self) {
        for listener in self.listeners {
            let event = listener.event();
            if let Err(e) = listener.remove() {
                warn!(event, error = %e, "failed to remove listener");
            }
        }
        for observer in &self.observers {
            observer.disconnect();
        }
        if let Some(typing) = &self.typing {
            typing.stop();
        }
        debug!("page torn down");
    }

    fn keep_all(&mut self, step: &'static str, result: Result<Vec<Listener>, WebError>) {
        if let Some(listeners) = keep(step, result) {
            self.listeners.extend(listeners);
        }
    }

    fn keep_one(&mut self, step: &'static str, result: Result<Option<Listener>, WebError>) {
        if let Some(listener) = keep(step, result).flatten() {
            self.listeners.push(listener);
        }
    }

    fn observe(&mut self, step: &'static str, result: Result<Option<OnceObserver>, WebError>) {
        if let Some(observer) = keep(step, result).flatten() {
            self.observers.push(observer);
        }
    }
}

fn keep<T>(step: &'static str, result: Result<T, WebError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(step, error = %e, "init step skipped");
            None
        }
    }
}

/// Run `f` against the controller unless another handler holds it
fn dispatch(controller: &SharedController, f: impl FnOnce(&mut Controller<DomSurface>)) {
    match controller.try_borrow_mut() {
        Ok(mut ctrl) => f(&mut ctrl),
        Err(_) => trace!("controller busy; event dropped"),
    }
}

fn window_listeners(
    window: &Window,
    controller: &SharedController,
) -> Result<Vec<Listener>, WebError> {
    let scroll = {
        let ctrl = Rc::clone(controller);
        let win = window.clone();
        Listener::attach(window, "scroll", move |_event| {
            let offset = win.scroll_y().unwrap_or(0.0);
            dispatch(&ctrl, |c| {
                c.on_scroll(offset);
            });
        })?
    };

    let resize = {
        let ctrl = Rc::clone(controller);
        let win = window.clone();
        Listener::attach(window, "resize", move |_event| {
            let Some(width) = win.inner_width().ok().and_then(|w| w.as_f64()) else {
                return;
            };
            dispatch(&ctrl, |c| c.on_resize(width));
        })?
    };

    Ok(vec![scroll, resize])
}

fn outside_click(
    document: &Document,
    region_selector: &str,
    controller: &SharedController,
) -> Result<Option<Listener>, WebError> {
    let Some(region) = dom::query(document, region_selector)? else {
        debug!(region_selector, "no navigation region; outside clicks ignored");
        return Ok(None);
    };

    let ctrl = Rc::clone(controller);
    Listener::attach(document, "click", move |event: Event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| region.contains(Some(&node)));
        dispatch(&ctrl, |c| c.on_document_click(inside));
    })
    .map(Some)
}

fn contain_menu_clicks(controller: &SharedController) -> Result<Option<Listener>, WebError> {
    let menu = controller
        .borrow()
        .surface()
        .element(Landmark::MobileMenu)
        .cloned();
    let Some(menu) = menu else {
        return Ok(None);
    };

    Listener::attach(&menu, "click", |event: Event| event.stop_propagation()).map(Some)
}

fn escape_key(document: &Document, controller: &SharedController) -> Result<Listener, WebError> {
    let ctrl = Rc::clone(controller);
    Listener::attach(document, "keydown", move |event: Event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            dispatch(&ctrl, |c| c.on_key(&key));
        }
    })
}

/// Mount a page for `config`, tearing down any previously mounted one
///
/// # Errors
///
/// Returns an error if there is no window or document.
pub fn mount(config: &FolioConfig) -> Result<(), WebError> {
    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().take()) {
        previous.teardown();
    }
    let page = Page::init(config)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Mount now, or once `DOMContentLoaded` fires if the document is still loading
///
/// # Errors
///
/// Returns an error if there is no window or document, or the ready listener
/// cannot be attached.
pub fn mount_when_ready(config: FolioConfig) -> Result<(), WebError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() != "loading" {
        return mount(&config);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount(&config) {
            error!(error = %e, "page initialization failed");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| WebError::listener("DOMContentLoaded", &e))
}

/// Run `f` against the mounted controller
///
/// Returns `false` if no page is mounted yet.
pub fn with_mounted(f: impl FnOnce(&mut Controller<DomSurface>)) -> bool {
    let controller = PAGE.with(|slot| slot.borrow().as_ref().map(Page::controller));
    match controller {
        Some(ctrl) => {
            dispatch(&ctrl, f);
            true
        }
        None => false,
    }
}

/// Whether a page is currently mounted
#[must_use]
pub fn is_mounted() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

/// Inspect the mounted page
pub fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f))
}
