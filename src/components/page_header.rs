//! Sticky page header that hides while scrolling down.

use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::navigation::Navigation;
use crate::components::share_button::ShareButton;
use crate::config::HEADER_SCROLL_THRESHOLD;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Scroll-direction heuristic: hide when moving down past the
/// threshold, reveal on any upward delta. No smoothing, no debounce.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderVisibility {
    last_offset: f64,
}

impl HeaderVisibility {
    /// Feeds a new scroll offset; returns whether the header is hidden.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let hidden = offset > self.last_offset && offset > HEADER_SCROLL_THRESHOLD;
        self.last_offset = offset;
        hidden
    }
}

#[component]
pub fn PageHeader(title: String, share_title: String, share_text: String) -> Element {
    let navigation = use_context::<Navigation>();
    let hidden = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let mut hidden = hidden;
        let mut tracker = use_signal(HeaderVisibility::default);
        use_effect(move || {
            let Some(win) = window() else {
                return;
            };
            let scroll_cb = Closure::wrap(Box::new(move || {
                let offset = crate::platform::page_scroll_offset();
                let is_hidden = tracker.write().on_scroll(offset);
                if *hidden.peek() != is_hidden {
                    hidden.set(is_hidden);
                }
            }) as Box<dyn FnMut()>);
            let _ = win
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            scroll_cb.forget();
        });
    }

    let header_class = if hidden() {
        "page-header hidden"
    } else {
        "page-header"
    };

    rsx! {
        header { class: "{header_class}",
            button {
                r#type: "button",
                class: "header-button back-button",
                aria_label: "Назад",
                onclick: move |_| navigation.go_back(),
                Icon { name: "arrow-left".to_string(), class: "icon".to_string() }
            }
            h1 { class: "header-title", "{title}" }
            ShareButton {
                title: share_title,
                text: share_text,
                class: "header-button share-button".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_visible_below_the_threshold() {
        let mut header = HeaderVisibility::default();
        assert!(!header.on_scroll(40.0));
        assert!(!header.on_scroll(90.0));
    }

    #[test]
    fn hides_scrolling_down_past_the_threshold() {
        let mut header = HeaderVisibility::default();
        assert!(!header.on_scroll(80.0));
        assert!(header.on_scroll(180.0));
        assert!(header.on_scroll(260.0));
    }

    #[test]
    fn any_upward_delta_reveals_regardless_of_position() {
        let mut header = HeaderVisibility::default();
        assert!(header.on_scroll(500.0));
        // One pixel up, still far past the threshold.
        assert!(!header.on_scroll(499.0));
        assert!(header.on_scroll(700.0));
        assert!(!header.on_scroll(300.0));
    }
}
