//! Optional capabilities of the host browser.
//!
//! Every capability is feature-detected before use and best-effort:
//! absence or rejection degrades to a missing cosmetic effect, reported
//! on the diagnostic channel and never retried or surfaced to the user.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing;

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ShareData,
};

/// Outcome of a share request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShareOutcome {
    /// The native share sheet took it from here.
    Shared,
    /// No share sheet; the page URL was copied to the clipboard instead.
    Copied,
    /// The platform rejected the request (dismissed sheet, clipboard
    /// denied). Logged only.
    Failed,
    /// Neither capability exists on this host.
    Unavailable,
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Shares the current page, falling back to a clipboard copy of the URL
/// when the host has no share sheet.
#[cfg(target_arch = "wasm32")]
pub async fn share_page(title: &str, text: &str) -> ShareOutcome {
    let Some(win) = window() else {
        return ShareOutcome::Unavailable;
    };
    let navigator = win.navigator();
    let Ok(url) = win.location().href() else {
        return ShareOutcome::Unavailable;
    };

    if Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false) {
        let data = ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(&url);
        match JsFuture::from(navigator.share_with_data(&data)).await {
            Ok(_) => ShareOutcome::Shared,
            Err(err) => {
                tracing::warn!("share rejected: {err:?}");
                ShareOutcome::Failed
            }
        }
    } else {
        match JsFuture::from(navigator.clipboard().write_text(&url)).await {
            Ok(_) => ShareOutcome::Copied,
            Err(err) => {
                tracing::warn!("clipboard write failed: {err:?}");
                ShareOutcome::Failed
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn share_page(_title: &str, _text: &str) -> ShareOutcome {
    ShareOutcome::Unavailable
}

/// Fire-and-forget haptic pulse. Silently tolerated when absent.
#[cfg(target_arch = "wasm32")]
pub fn vibrate(duration_ms: u32) {
    let Some(win) = window() else {
        return;
    };
    let navigator = win.navigator();
    if Reflect::has(navigator.as_ref(), &JsValue::from_str("vibrate")).unwrap_or(false) {
        let _ = navigator.vibrate_with_duration(duration_ms);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn vibrate(_duration_ms: u32) {}

/// Requests fullscreen on the identified element. Failures are logged,
/// not surfaced.
#[cfg(target_arch = "wasm32")]
pub fn request_fullscreen(element_id: &str) {
    let Some(element) = element_by_id(element_id) else {
        return;
    };
    if let Err(err) = element.request_fullscreen() {
        tracing::warn!("fullscreen request failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_fullscreen(_element_id: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn exit_fullscreen() {
    if let Some(doc) = window().and_then(|w| w.document()) {
        doc.exit_fullscreen();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn exit_fullscreen() {}

#[cfg(target_arch = "wasm32")]
pub fn is_fullscreen() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_fullscreen() -> bool {
    false
}

/// Left edge and width of the identified element, in viewport pixels.
#[cfg(target_arch = "wasm32")]
pub fn element_rect(id: &str) -> Option<(f64, f64)> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn element_rect(_id: &str) -> Option<(f64, f64)> {
    None
}

/// Smoothly scrolls the identified element to the center of the
/// viewport.
#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view(id: &str) {
    if let Some(element) = element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_into_view(_id: &str) {}

/// Current vertical scroll offset of the page.
#[cfg(target_arch = "wasm32")]
pub fn page_scroll_offset() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn page_scroll_offset() -> f64 {
    0.0
}

/// Runs `action` after `delay_ms` on the page's event loop. The only
/// timing primitive in the app; callers guard staleness with a
/// generation check, not by holding the timer.
#[cfg(target_arch = "wasm32")]
pub fn schedule(delay_ms: u32, action: impl FnOnce() + 'static) {
    dioxus::prelude::spawn(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        action();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn schedule(_delay_ms: u32, _action: impl FnOnce() + 'static) {}
