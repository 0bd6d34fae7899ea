//! DOM-backed seams

use crate::error::{Result, UiError};
use crate::reveal::{
    ClassList, IntersectionEntry, Observation, Reveal, RevealOptions, RevealState,
};
use crate::theme::{PreferenceStore, ThemeRoot};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn dom_error(value: JsValue) -> UiError {
    UiError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// An element's `classList`.
pub struct ElementClasses<'a>(pub &'a Element);

impl ClassList for ElementClasses<'_> {
    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            tracing::warn!(class = %class, error = ?e, "Failed to add class");
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live reveal binding. Dropping it disconnects the observer.
pub struct RevealHandle {
    observer: IntersectionObserver,
    machine: Rc<RefCell<Reveal>>,
    _callback: ObserverCallback,
}

impl RevealHandle {
    pub fn state(&self) -> RevealState {
        self.machine.borrow().state()
    }

    /// Stop observing. No class changes happen afterwards.
    pub fn destroy(&self) {
        self.machine.borrow_mut().destroy();
        self.observer.disconnect();
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Tag `element` for reveal and start observing it.
pub fn observe_reveal(element: &Element) -> Result<RevealHandle> {
    let options = RevealOptions::default();
    let machine = Rc::new(RefCell::new(Reveal::attach_with(
        &mut ElementClasses(element),
        options.clone(),
    )));

    let target = element.clone();
    let state = Rc::clone(&machine);
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let entries: Vec<IntersectionEntry> = entries
            .iter()
            .map(|value| {
                let entry: IntersectionObserverEntry = value.unchecked_into();
                IntersectionEntry {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                }
            })
            .collect();

        let action = state
            .borrow_mut()
            .on_intersection(&mut ElementClasses(&target), &entries);

        if action == Observation::Unobserve {
            observer.unobserve(&target);
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom_error)?;
    observer.observe(element);

    Ok(RevealHandle {
        observer,
        machine,
        _callback: callback,
    })
}

/// `window.localStorage`. Every call fails with
/// [`UiError::StorageUnavailable`] when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(UiError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| UiError::StorageUnavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| UiError::StorageUnavailable)
    }
}

/// `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| UiError::Dom("no document element".into()))?;

        root.set_attribute(name, value).map_err(dom_error)
    }
}
