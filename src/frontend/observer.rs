use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// What to do with a target after it became visible.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    Keep,
    Release,
}

/// An `IntersectionObserver` owned by a component; dropping it disconnects every target.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new(
        threshold: f64,
        mut on_visible: impl FnMut(&Element) -> Retention + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    if on_visible(&target) == Retention::Release {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Detaches every current target, then observes `targets`.
    pub fn retarget<'a>(&self, targets: impl IntoIterator<Item = &'a Element>) {
        self.observer.disconnect();
        for target in targets {
            self.observer.observe(target);
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Adds the `visible` class; used by cards and reveal blocks.
pub fn mark_visible(target: &Element) {
    let _ = target.class_list().add_1("visible");
}
