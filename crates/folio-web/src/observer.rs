//! Fire-once visibility observer
//!
//! Wraps `IntersectionObserver` so each watched element triggers its
//! callback at most once and is unobserved right after.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::FireOnce;
use js_sys::Array;
use tracing::trace;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use crate::error::{WebError, describe};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches a fixed set of elements and reveals each one once
pub struct OnceObserver {
    observer: IntersectionObserver,
    fired: Rc<RefCell<FireOnce>>,
    _callback: EntriesCallback,
}

impl OnceObserver {
    /// Observe `targets` at `threshold` and call `on_first_visible` the first
    /// time each one intersects
    ///
    /// # Errors
    ///
    /// Returns [`WebError::ObserverFailed`] if the observer cannot be created.
    pub fn watch<F>(targets: Vec<Element>, threshold: f64, mut on_first_visible: F) -> Result<Self, WebError>
    where
        F: FnMut(&Element) + 'static,
    {
        let targets = Rc::new(targets);
        let fired = Rc::new(RefCell::new(FireOnce::new(targets.len())));

        let watched = Rc::clone(&targets);
        let tracker = Rc::clone(&fired);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    let node: &Node = &target;
                    let Some(index) = watched.iter().position(|el| el.is_same_node(Some(node)))
                    else {
                        continue;
                    };

                    if tracker.borrow_mut().fire(index) {
                        observer.unobserve(&target);
                        trace!(index, "element revealed");
                        on_first_visible(&target);
                    }
                }

                if tracker.borrow().is_exhausted() {
                    observer.disconnect();
                    trace!("every watched element revealed; observer disconnected");
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| WebError::ObserverFailed(describe(&e)))?;

        for target in targets.iter() {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            fired,
            _callback: callback,
        })
    }

    /// Number of watched elements that have not been revealed yet
    #[must_use]
    pub fn pending(&self) -> usize {
        self.fired.borrow().remaining()
    }

    /// Whether every watched element has been revealed
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.fired.borrow().is_exhausted()
    }

    /// Stop observing everything
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
