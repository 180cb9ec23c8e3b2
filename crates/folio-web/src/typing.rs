//! Drives the hero-title typing effect with browser timers

use std::cell::Cell;
use std::rc::Rc;

use folio_core::config::TypingConfig;
use folio_core::typing::TypingEffect;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom;
use crate::error::WebError;

/// Handle to a running typing loop
pub struct TypingDriver {
    stopped: Rc<Cell<bool>>,
}

impl TypingDriver {
    /// Start typing into `title` immediately
    #[must_use]
    pub fn start(title: Element, mut effect: TypingEffect) -> Self {
        let stopped = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stopped);

        spawn_local(async move {
            let mut delay_ms = 0;
            loop {
                TimeoutFuture::new(delay_ms).await;
                if flag.get() {
                    break;
                }
                let frame = effect.tick();
                title.set_text_content(Some(&frame.text));
                delay_ms = frame.next_delay_ms;
            }
        });

        Self { stopped }
    }

    /// Stop after the pending tick; the title keeps its current text
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    /// Whether [`stop`](Self::stop) has been called
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Set up the typing effect if it is enabled and the title exists
///
/// # Errors
///
/// Returns an error if the selector is invalid or the phrase list is rejected.
pub fn setup(
    document: &Document,
    selector: &str,
    config: &TypingConfig,
) -> Result<Option<TypingDriver>, WebError> {
    let Some(title) = dom::query(document, selector)? else {
        debug!(selector, "no hero title; typing effect unavailable");
        return Ok(None);
    };

    if !config.enabled {
        debug!("typing effect disabled");
        return Ok(None);
    }

    let effect = TypingEffect::new(config)?;
    Ok(Some(TypingDriver::start(title, effect)))
}
