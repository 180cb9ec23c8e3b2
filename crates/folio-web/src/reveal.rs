//! Skill bars, section fade-in and deferred images

use folio_core::config::FolioConfig;
use folio_core::reveal::{ImagePromotion, SkillBarAnimation};
use folio_core::{LazyLoadStrategy, RevealStrategy};
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::dom;
use crate::error::{WebError, describe};
use crate::observer::OnceObserver;

/// Animate skill bars from zero to their declared width on first view
///
/// Returns `None` when nothing needs watching.
///
/// # Errors
///
/// Returns an error if the selector is invalid or the observer cannot be
/// created.
pub fn skill_bars(
    document: &Document,
    config: &FolioConfig,
    strategy: RevealStrategy,
) -> Result<Option<OnceObserver>, WebError> {
    let bars = dom::query_all(document, &config.selectors.skill_bar)?;
    if bars.is_empty() || strategy == RevealStrategy::Immediate {
        debug!(count = bars.len(), ?strategy, "skill bars keep their declared width");
        return Ok(None);
    }

    let delay_ms = config.motion.skill_delay_ms;
    let observer = OnceObserver::watch(bars, config.motion.skill_threshold, move |bar| {
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            animate_skill_bar(bar, delay_ms);
        }
    })?;
    Ok(Some(observer))
}

fn animate_skill_bar(bar: &HtmlElement, delay_ms: u32) {
    let style = bar.style();
    let declared = style.get_property_value("width").unwrap_or_default();
    let plan = SkillBarAnimation::plan(&declared, delay_ms);

    if let Err(e) = style.set_property("width", plan.collapsed) {
        warn!(error = %describe(&e), "failed to collapse skill bar");
        return;
    }

    let target = plan.target;
    Timeout::new(plan.delay_ms, move || {
        if let Err(e) = style.set_property("width", &target) {
            warn!(error = %describe(&e), "failed to restore skill bar width");
        }
    })
    .forget();
}

/// Fade sections in the first time they are at least partly visible
///
/// # Errors
///
/// Returns an error if the selector is invalid or the observer cannot be
/// created.
pub fn sections(
    document: &Document,
    config: &FolioConfig,
    strategy: RevealStrategy,
) -> Result<Option<OnceObserver>, WebError> {
    let sections = dom::query_all(document, &config.selectors.section)?;
    let class = config.classes.fade_in.clone();

    match strategy {
        RevealStrategy::Immediate => {
            for section in &sections {
                add_class(section, &class);
            }
            Ok(None)
        }
        RevealStrategy::Observe if sections.is_empty() => Ok(None),
        RevealStrategy::Observe => {
            let observer =
                OnceObserver::watch(sections, config.motion.section_threshold, move |section| {
                    add_class(section, &class);
                })?;
            Ok(Some(observer))
        }
    }
}

/// Promote deferred image sources according to `strategy`
///
/// # Errors
///
/// Returns an error if the selector is invalid or the observer cannot be
/// created.
pub fn lazy_images(
    document: &Document,
    config: &FolioConfig,
    strategy: LazyLoadStrategy,
) -> Result<Option<OnceObserver>, WebError> {
    if strategy == LazyLoadStrategy::Skip {
        debug!("visibility observation unavailable; deferred images stay unloaded");
        return Ok(None);
    }

    let images = dom::query_all(document, &config.selectors.lazy_image)?;
    let attribute = config.selectors.deferred_src_attribute.clone();
    let lazy_class = config.classes.lazy.clone();

    match strategy {
        LazyLoadStrategy::Eager => {
            for image in &images {
                promote_image(image, &attribute, &lazy_class);
            }
            Ok(None)
        }
        LazyLoadStrategy::Observe if !images.is_empty() => {
            let observer = OnceObserver::watch(images, config.motion.lazy_threshold, move |image| {
                promote_image(image, &attribute, &lazy_class);
            })?;
            Ok(Some(observer))
        }
        LazyLoadStrategy::Observe | LazyLoadStrategy::Skip => Ok(None),
    }
}

fn promote_image(image: &Element, attribute: &str, lazy_class: &str) {
    let plan = ImagePromotion::plan(image.get_attribute(attribute), lazy_class);
    if let Some(img) = image.dyn_ref::<HtmlImageElement>() {
        img.set_src(&plan.src);
    } else if let Err(e) = image.set_attribute("src", &plan.src) {
        warn!(error = %describe(&e), "failed to set image source");
    }
    add_or_remove(image, &plan.remove_class, false);
}

fn add_class(element: &Element, class: &str) {
    add_or_remove(element, class, true);
}

fn add_or_remove(element: &Element, class: &str, add: bool) {
    let list = element.class_list();
    let result = if add {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        warn!(class, add, error = %describe(&e), "class update failed");
    }
}
