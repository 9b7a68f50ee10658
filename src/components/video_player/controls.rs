use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::transient::TransientState;
use crate::components::video_manager::{self, VIDEO_CONTAINER_ID};
use crate::config::HAPTIC_PULSE_MS;
use crate::platform;

use super::state::PlaybackFlags;
use super::volume::VolumeMemory;
use super::{show_controls, toggle_playback};

/// Play/pause button in the controls bar.
#[component]
pub(super) fn PlayPauseButton(
    controls: Signal<TransientState>,
    flags: Signal<PlaybackFlags>,
) -> Element {
    let is_playing = use_context::<Signal<bool>>();
    let playing = is_playing();

    rsx! {
        button {
            r#type: "button",
            class: "control-button play-pause-button",
            aria_label: if playing { "Пауза" } else { "Відтворити" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                toggle_playback(is_playing, controls, flags);
            },
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Large overlay button in the middle of the video surface.
#[component]
pub(super) fn CenterPlayButton(
    controls: Signal<TransientState>,
    flags: Signal<PlaybackFlags>,
) -> Element {
    let is_playing = use_context::<Signal<bool>>();
    let playing = is_playing();

    rsx! {
        button {
            r#type: "button",
            class: "center-play-button",
            aria_label: if playing { "Пауза" } else { "Відтворити" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                toggle_playback(is_playing, controls, flags);
            },
            if playing {
                Icon { name: "pause".to_string(), class: "icon-lg".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon-lg".to_string() }
            }
        }
    }
}

/// Binary mute toggle. Unmuting restores the remembered level rather
/// than defaulting to full volume.
#[component]
pub(super) fn VolumeButton() -> Element {
    let mut volume = use_signal(VolumeMemory::default);
    let muted = volume().is_muted();

    rsx! {
        button {
            r#type: "button",
            class: "control-button volume-button",
            aria_label: if muted { "Увімкнути звук" } else { "Вимкнути звук" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if volume.peek().is_muted() {
                    let restored = volume.write().unmute();
                    video_manager::set_muted(false);
                    video_manager::set_volume(restored);
                } else {
                    let current = video_manager::current_volume();
                    volume.write().mute(current);
                    video_manager::set_muted(true);
                }
                platform::vibrate(HAPTIC_PULSE_MS);
            },
            if muted {
                Icon { name: "volume-muted".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "volume".to_string(), class: "icon".to_string() }
            }
        }
    }
}

/// Fullscreen is requested on the player container so the overlay
/// controls stay visible inside fullscreen.
#[component]
pub(super) fn FullscreenButton() -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "control-button fullscreen-button",
            aria_label: "На весь екран",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if platform::is_fullscreen() {
                    platform::exit_fullscreen();
                } else {
                    platform::request_fullscreen(VIDEO_CONTAINER_ID);
                }
                platform::vibrate(HAPTIC_PULSE_MS);
            },
            Icon { name: "fullscreen".to_string(), class: "icon".to_string() }
        }
    }
}

/// Back button layered over the video: leaves fullscreen when active,
/// otherwise just pauses playback.
#[component]
pub(super) fn VideoBackButton() -> Element {
    let mut is_playing = use_context::<Signal<bool>>();

    rsx! {
        button {
            r#type: "button",
            class: "video-back-button",
            aria_label: "Назад",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if platform::is_fullscreen() {
                    platform::exit_fullscreen();
                } else {
                    is_playing.set(false);
                }
                platform::vibrate(HAPTIC_PULSE_MS);
            },
            Icon { name: "arrow-left".to_string(), class: "icon".to_string() }
        }
    }
}
