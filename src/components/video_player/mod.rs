//! The custom video player: play/pause, scrub-bar dragging, volume,
//! fullscreen, and an auto-hiding control overlay.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};

use crate::components::transient::TransientState;
use crate::components::video_manager::{
    VideoBridge, VideoState, VIDEO_CONTAINER_ID, VIDEO_ELEMENT_ID,
};
use crate::config::{CONTROLS_AUTO_HIDE_MS, HAPTIC_PULSE_MS};
use crate::platform;

mod controls;
#[cfg(target_arch = "wasm32")]
mod drag;
pub mod scrub;
pub mod state;
mod volume;

use controls::{
    CenterPlayButton, FullscreenButton, PlayPauseButton, VideoBackButton, VolumeButton,
};
use state::PlaybackFlags;

/// DOM id of the scrub bar; pointer positions are resolved against its
/// on-screen rect.
pub const PROGRESS_BAR_ID: &str = "kinolenta-progress";

#[component]
pub fn VideoPlayer(src: String, poster: String) -> Element {
    let video_state = use_context::<Signal<VideoState>>();
    let is_playing = use_context::<Signal<bool>>();
    let flags = use_signal(PlaybackFlags::default);
    // The video starts paused, so the controls start visible.
    let controls = use_signal(|| TransientState::new(true));
    let drag_position = use_signal(|| 0.0f64);
    #[cfg(target_arch = "wasm32")]
    let drag_listeners = use_signal(|| None::<drag::DragListeners>);

    // Native play/pause/ended events funnel into the flag; any change
    // re-shows the controls exactly as direct interaction does.
    {
        let is_playing = is_playing;
        use_effect(move || {
            let _ = is_playing();
            show_controls(controls, is_playing, flags);
        });
    }

    let current_time = (video_state().current_time)();
    let duration = (video_state().duration)();
    let fullscreen = (video_state().is_fullscreen)();
    let playing = is_playing();
    let dragging = flags().is_dragging;

    // While scrubbing the bar tracks the pointer, not playback.
    let ratio = if dragging {
        drag_position()
    } else {
        scrub::progress_ratio(current_time, duration)
    };
    let percent = format!("{:.2}", ratio * 100.0);
    let current_label = scrub::format_time(current_time);
    let duration_label = scrub::format_time(duration);

    let mut container_class = String::from("video-container ");
    container_class.push_str(if playing { "playing" } else { "paused" });
    if fullscreen {
        container_class.push_str(" fullscreen");
    }
    let controls_class = if controls().is_active() {
        "video-controls visible"
    } else {
        "video-controls"
    };
    let progress_class = if dragging {
        "progress-bar dragging"
    } else {
        "progress-bar"
    };

    let on_scrub_down = move |evt: PointerEvent| {
        evt.stop_propagation();
        let mut flags = flags;
        let mut is_playing = is_playing;
        let mut controls = controls;

        let was_playing = *is_playing.peek();
        flags.write().start_drag(was_playing);
        // Playback is suspended for the whole gesture.
        if was_playing {
            is_playing.set(false);
        }
        // The overlay stays up while scrubbing; no timer is armed.
        controls.write().activate();
        apply_drag(evt.client_coordinates().x, drag_position, video_state);

        #[cfg(target_arch = "wasm32")]
        {
            let mut drag_listeners = drag_listeners;
            let runtime = Runtime::current();
            let move_runtime = runtime.clone();
            let on_move = move |client_x: f64| {
                let _guard = RuntimeGuard::new(move_runtime.clone());
                apply_drag(client_x, drag_position, video_state);
            };
            let release_runtime = runtime.clone();
            let on_release = move || {
                let _guard = RuntimeGuard::new(release_runtime.clone());
                finish_drag(flags, is_playing, controls, drag_listeners);
            };
            drag_listeners.set(drag::DragListeners::attach(on_move, on_release));
        }
    };

    rsx! {
        div {
            id: VIDEO_CONTAINER_ID,
            class: "{container_class}",
            onpointermove: move |_| show_controls(controls, is_playing, flags),
            onpointerdown: move |_| show_controls(controls, is_playing, flags),

            video {
                id: VIDEO_ELEMENT_ID,
                class: "video-surface",
                src: "{src}",
                poster: "{poster}",
                preload: "metadata",
                "playsinline": "true",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    toggle_playback(is_playing, controls, flags);
                },
            }

            VideoBackButton {}

            div { class: "video-overlay",
                CenterPlayButton { controls, flags }
            }

            div { class: "{controls_class}",
                PlayPauseButton { controls, flags }
                span { class: "time-display current-time", "{current_label}" }
                div {
                    id: PROGRESS_BAR_ID,
                    class: "{progress_class}",
                    onpointerdown: on_scrub_down,
                    div { class: "progress-filled", style: "width: {percent}%" }
                    div { class: "progress-handle", style: "left: {percent}%" }
                }
                span { class: "time-display duration-time", "{duration_label}" }
                VolumeButton {}
                FullscreenButton {}
            }

            VideoBridge {}
        }
    }
}

/// Flips playback, shows the controls and pulses the haptics - shared
/// by the center button, the bar button and taps on the video surface.
pub(super) fn toggle_playback(
    mut is_playing: Signal<bool>,
    controls: Signal<TransientState>,
    flags: Signal<PlaybackFlags>,
) {
    let playing = *is_playing.peek();
    is_playing.set(!playing);
    show_controls(controls, is_playing, flags);
    platform::vibrate(HAPTIC_PULSE_MS);
}

/// Makes the overlay visible, invalidating any pending auto-hide timer,
/// and arms a fresh one only while playing and not scrubbing. At most
/// one armed timer can ever take effect.
pub(super) fn show_controls(
    mut controls: Signal<TransientState>,
    is_playing: Signal<bool>,
    flags: Signal<PlaybackFlags>,
) {
    let generation = controls.write().activate();
    let playing = *is_playing.peek();
    let dragging = flags.peek().is_dragging;
    if state::auto_hide_allowed(playing, dragging) {
        let mut controls = controls;
        platform::schedule(CONTROLS_AUTO_HIDE_MS, move || {
            // Conditions may have shifted while the timer ran.
            if state::auto_hide_allowed(*is_playing.peek(), flags.peek().is_dragging) {
                controls.write().try_expire(generation);
            }
        });
    }
}

/// Seeks to the pointer position and moves the fill/handle directly;
/// the element's own timeupdate is unreliable mid-seek.
fn apply_drag(client_x: f64, mut drag_position: Signal<f64>, video_state: Signal<VideoState>) {
    let Some((left, width)) = platform::element_rect(PROGRESS_BAR_ID) else {
        return;
    };
    let ratio = scrub::drag_ratio(client_x, left, width);
    drag_position.set(ratio);
    let duration = *video_state.peek().duration.peek();
    let target = scrub::seek_target(ratio, duration);
    crate::components::video_manager::seek_to(target);
    // Keep the time display on the pointer as well.
    let mut time_signal = video_state.peek().current_time;
    time_signal.set(target);
}

/// Drag teardown, shared by pointerup and pointercancel: listeners are
/// released first, then playback resumes only if it was active when the
/// gesture began.
#[cfg(target_arch = "wasm32")]
fn finish_drag(
    mut flags: Signal<PlaybackFlags>,
    mut is_playing: Signal<bool>,
    controls: Signal<TransientState>,
    mut drag_listeners: Signal<Option<drag::DragListeners>>,
) {
    drag_listeners.with_mut(|slot| {
        if let Some(guard) = slot.as_mut() {
            guard.detach();
        }
    });
    let resume = flags.write().end_drag();
    if resume {
        is_playing.set(true);
    }
    show_controls(controls, is_playing, flags);
}
