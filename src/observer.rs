use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Targets still waiting for their first intersection.
///
/// A target leaves the list the moment it becomes visible, so the list only
/// ever holds elements that have not been revealed yet.
#[derive(Debug)]
pub struct Watchlist<K> {
    watching: Vec<K>,
}

impl<K> Default for Watchlist<K> {
    fn default() -> Self {
        Self {
            watching: Vec::new(),
        }
    }
}

impl<K: PartialEq> Watchlist<K> {
    /// Returns `false` if `key` is already watched.
    pub fn watch(&mut self, key: K) -> bool {
        if self.is_watching(&key) {
            return false;
        }
        self.watching.push(key);
        true
    }

    pub fn unwatch(&mut self, key: &K) {
        self.watching.retain(|watched| watched != key);
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    /// Keys from one notification batch that just became visible, in order.
    ///
    /// Non-intersecting entries are ignored. Every returned key is no longer
    /// watched, so a duplicate in the same batch or a later re-entry yields
    /// nothing.
    pub fn take_visible<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, bool)>,
    {
        let mut visible = Vec::new();
        for (key, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(pos) = self.watching.iter().position(|watched| *watched == key) {
                self.watching.swap_remove(pos);
                visible.push(key);
            }
        }
        visible
    }
}

/// Viewport observer that notifies once per element and then stops watching it.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    watching: Rc<RefCell<Watchlist<Element>>>,
}

impl OneShotObserver {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let watching: Rc<RefCell<Watchlist<Element>>> = Rc::default();
        let batch_watching = watching.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()));
            let visible = batch_watching.borrow_mut().take_visible(entries);

            for target in visible {
                observer.unobserve(&target);
                on_visible(target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // The observer outlives every attach call.
        callback.forget();

        Ok(Self { observer, watching })
    }

    pub fn observe(&self, target: &Element) {
        if self.watching.borrow_mut().watch(target.clone()) {
            self.observer.observe(target);
        }
    }

    pub fn cancel(&self, target: &Element) {
        self.watching.borrow_mut().unwatch(target);
        self.observer.unobserve(target);
    }
}
