//! Images that defer their real source until they scroll into view.
//!
//! Each image is observed once; the first viewport intersection
//! substitutes the real source and stops observation. A failed load
//! dims the image and swaps in fallback alt text instead of removing it.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

/// Dark placeholder shown until the real source is substituted.
const PLACEHOLDER_SRC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 3 4'%3E%3Crect width='3' height='4' fill='%2318181b'/%3E%3C/svg%3E";

const FALLBACK_ALT: &str = "Зображення недоступне";

/// One-shot source transition: the swap happens exactly once, the first
/// time the image intersects the viewport, never again afterward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    /// Returns true only on the first call.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            false
        } else {
            self.revealed = true;
            true
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[component]
pub fn LazyImage(id: String, src: String, alt: String, class: String) -> Element {
    let revealed = use_signal(RevealOnce::default);
    let loaded = use_signal(|| false);
    let failed = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let element_id = id.clone();
        let mut revealed = revealed;
        let mut loaded = loaded;
        let mut failed = failed;
        use_effect(move || {
            let Some(document) = window().and_then(|w| w.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(&element_id) else {
                revealed.write().reveal();
                return;
            };

            if let Ok(image) = element.clone().dyn_into::<HtmlImageElement>() {
                let load_cb = Closure::wrap(Box::new(move || {
                    loaded.set(true);
                }) as Box<dyn FnMut()>);
                let error_cb = Closure::wrap(Box::new(move || {
                    failed.set(true);
                }) as Box<dyn FnMut()>);
                image.set_onload(Some(load_cb.as_ref().unchecked_ref()));
                image.set_onerror(Some(error_cb.as_ref().unchecked_ref()));
                load_cb.forget();
                error_cb.forget();
            }

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            revealed.write().reveal();
                            observer.unobserve(&entry.target());
                            observer.disconnect();
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    observer.observe(&element);
                    callback.forget();
                }
                // No observer on this host: show the image outright.
                Err(_) => {
                    revealed.write().reveal();
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut revealed = revealed;
        use_effect(move || {
            revealed.write().reveal();
        });
    }

    let shown_src = if revealed().is_revealed() {
        src.clone()
    } else {
        PLACEHOLDER_SRC.to_string()
    };
    let state_class = if failed() {
        "lazy-image failed"
    } else if loaded() {
        "lazy-image loaded"
    } else {
        "lazy-image"
    };
    let shown_alt = if failed() { FALLBACK_ALT.to_string() } else { alt };

    rsx! {
        img {
            id: "{id}",
            class: "{class} {state_class}",
            src: "{shown_src}",
            alt: "{shown_alt}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_exactly_once() {
        let mut reveal = RevealOnce::default();
        assert!(!reveal.is_revealed());
        assert!(reveal.reveal());
        assert!(reveal.is_revealed());
        // Re-entering the viewport must not retrigger the swap.
        assert!(!reveal.reveal());
        assert!(reveal.is_revealed());
    }
}
