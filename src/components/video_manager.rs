//! Video manager - drives the page's video element outside of the
//! component render cycle. This prevents playback from restarting when
//! unrelated state changes.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

/// DOM id of the movie page's video element.
pub const VIDEO_ELEMENT_ID: &str = "kinolenta-video";

/// DOM id of the player container. Fullscreen is requested on the
/// container, not the raw element, so the overlay controls stay visible.
pub const VIDEO_CONTAINER_ID: &str = "kinolenta-player";

/// Playback readouts shared across renders.
#[derive(Clone)]
pub struct VideoState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub is_fullscreen: Signal<bool>,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
            is_fullscreen: Signal::new(false),
        }
    }
}

/// Look up the page's video element.
#[cfg(target_arch = "wasm32")]
pub fn get_video_element() -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_video_element() -> Option<()> {
    None
}

/// Seek to a position in the current video.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(video) = get_video_element() {
        video.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}

#[cfg(target_arch = "wasm32")]
pub fn set_muted(muted: bool) {
    if let Some(video) = get_video_element() {
        video.set_muted(muted);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_muted(_muted: bool) {}

#[cfg(target_arch = "wasm32")]
pub fn set_volume(volume: f64) {
    if let Some(video) = get_video_element() {
        video.set_volume(volume.clamp(0.0, 1.0));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_volume(_volume: f64) {}

/// Current volume of the element, full volume when absent.
#[cfg(target_arch = "wasm32")]
pub fn current_volume() -> f64 {
    get_video_element().map(|v| v.volume()).unwrap_or(1.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_volume() -> f64 {
    1.0
}

/// Imperative bridge between the shared signals and the video element.
/// Rendered by the player; manages no UI of its own.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn VideoBridge() -> Element {
    let video_state = use_context::<Signal<VideoState>>();
    let is_playing = use_context::<Signal<bool>>();

    // Attach media event listeners once the element is in the page.
    use_effect(move || {
        let Some(video) = get_video_element() else {
            return;
        };

        // Coarse time cadence to avoid excessive re-renders.
        let mut current_time_signal = video_state.peek().current_time;
        let mut last_emit = -1.0f64;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Some(video) = get_video_element() {
                let time = video.current_time();
                if (time - last_emit).abs() >= 0.2 {
                    last_emit = time;
                    current_time_signal.set(time);
                }
            }
        }) as Box<dyn FnMut()>);
        video.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let mut duration_signal = video_state.peek().duration;
        let meta_closure = Closure::wrap(Box::new(move || {
            if let Some(video) = get_video_element() {
                let duration = video.duration();
                if !duration.is_nan() {
                    duration_signal.set(duration);
                }
            }
        }) as Box<dyn FnMut()>);
        video.set_onloadedmetadata(Some(meta_closure.as_ref().unchecked_ref()));
        meta_closure.forget();

        // Native events resynchronize the flag no matter which UI
        // action (or the element itself) triggered the change.
        let mut playing_for_play = is_playing;
        let play_closure = Closure::wrap(Box::new(move || {
            if !*playing_for_play.peek() {
                playing_for_play.set(true);
            }
        }) as Box<dyn FnMut()>);
        video.set_onplay(Some(play_closure.as_ref().unchecked_ref()));
        play_closure.forget();

        let mut playing_for_pause = is_playing;
        let pause_closure = Closure::wrap(Box::new(move || {
            if *playing_for_pause.peek() {
                playing_for_pause.set(false);
            }
        }) as Box<dyn FnMut()>);
        video.set_onpause(Some(pause_closure.as_ref().unchecked_ref()));
        pause_closure.forget();

        // Rewind on ended without replaying.
        let mut playing_for_end = is_playing;
        let mut time_for_end = video_state.peek().current_time;
        let ended_closure = Closure::wrap(Box::new(move || {
            playing_for_end.set(false);
            seek_to(0.0);
            time_for_end.set(0.0);
        }) as Box<dyn FnMut()>);
        video.set_onended(Some(ended_closure.as_ref().unchecked_ref()));
        ended_closure.forget();

        // Keep the fullscreen flag in sync even when fullscreen exits
        // via a platform gesture rather than the in-player button.
        let mut fullscreen_signal = video_state.peek().is_fullscreen;
        let fs_closure = Closure::wrap(Box::new(move || {
            fullscreen_signal.set(crate::platform::is_fullscreen());
        }) as Box<dyn FnMut()>);
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document.add_event_listener_with_callback(
                "fullscreenchange",
                fs_closure.as_ref().unchecked_ref(),
            );
        }
        fs_closure.forget();
    });

    // Drive the element from the playback intent.
    use_effect(move || {
        let playing = is_playing();
        if let Some(video) = get_video_element() {
            if playing {
                if video.paused() {
                    let _ = video.play();
                }
            } else if !video.paused() {
                let _ = video.pause();
            }
        }
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn VideoBridge() -> Element {
    rsx! {}
}
