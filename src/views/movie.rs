use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::lazy_image::LazyImage;
use crate::components::navigation::Navigation;
use crate::components::page_header::PageHeader;
use crate::components::share_button::ShareButton;
use crate::components::toggles::ToggleFlag;
use crate::components::video_manager::VIDEO_ELEMENT_ID;
use crate::components::video_player::VideoPlayer;
use crate::config::{HAPTIC_PULSE_MS, WATCH_NOW_DELAY_MS};
use crate::data;
use crate::platform;

#[component]
pub fn MovieView() -> Element {
    let is_playing = use_context::<Signal<bool>>();
    let navigation = use_context::<Navigation>();
    let mut favorite = use_signal(ToggleFlag::default);

    // Playback state is discarded on navigation.
    {
        let mut is_playing = is_playing;
        use_drop(move || {
            is_playing.set(false);
        });
    }

    let Some(movie) = data::featured_movie() else {
        return rsx! {
            div { class: "empty-page", "Каталог порожній" }
        };
    };

    let share_title = movie.title.clone();
    let share_text = "Перевірте цей фільм!".to_string();
    let genres = movie.genres.join(" • ");
    let rating = format!("{:.1}", movie.rating);
    let duration_label = movie.duration_label();

    let on_favorite = move |_| {
        favorite.write().toggle();
        platform::vibrate(HAPTIC_PULSE_MS);
    };

    let on_download = move |_| {
        tracing::info!("download requested");
        platform::vibrate(HAPTIC_PULSE_MS);
    };

    // Scroll the player into view, then start it after a short beat.
    let on_watch_now = move |_| {
        platform::scroll_into_view(VIDEO_ELEMENT_ID);
        let mut is_playing = is_playing;
        platform::schedule(WATCH_NOW_DELAY_MS, move || {
            let playing = *is_playing.peek();
            is_playing.set(!playing);
        });
    };

    rsx! {
        div { class: "movie-page",
            PageHeader {
                title: movie.title.clone(),
                share_title: share_title.clone(),
                share_text: share_text.clone(),
            }

            VideoPlayer { src: movie.video_src.clone(), poster: movie.poster.clone() }

            section { class: "movie-info",
                h2 { class: "movie-title", "{movie.title}" }
                div { class: "movie-meta",
                    span { "{movie.year}" }
                    span { class: "meta-separator", "•" }
                    span { "{genres}" }
                    span { class: "meta-separator", "•" }
                    span { "{duration_label}" }
                }
                div { class: "movie-rating",
                    Icon { name: "star".to_string(), class: "icon-sm".to_string() }
                    span { "{rating}" }
                }

                div { class: "action-row",
                    button {
                        r#type: "button",
                        class: if favorite().is_active() { "action-button favorite-button active" } else { "action-button favorite-button" },
                        aria_label: "У обране",
                        onclick: on_favorite,
                        Icon {
                            name: if favorite().is_active() { "heart-filled".to_string() } else { "heart".to_string() },
                            class: "icon".to_string(),
                        }
                    }
                    ShareButton {
                        title: share_title.clone(),
                        text: share_text.clone(),
                        class: "action-button share-button".to_string(),
                    }
                    button {
                        r#type: "button",
                        class: "action-button download-button",
                        aria_label: "Завантажити",
                        onclick: on_download,
                        Icon { name: "download".to_string(), class: "icon".to_string() }
                    }
                    button {
                        r#type: "button",
                        class: "watch-now-button",
                        onclick: on_watch_now,
                        Icon { name: "play".to_string(), class: "icon-sm".to_string() }
                        span { "Дивитися зараз" }
                    }
                }

                p { class: "movie-description", "{movie.description}" }
            }

            section { class: "cast-section",
                h3 { class: "section-title", "Актори" }
                div { class: "cast-list",
                    for member in movie.cast.iter() {
                        div {
                            key: "{member.actor_id}",
                            class: "cast-item",
                            onclick: {
                                let actor_id = member.actor_id.clone();
                                let navigation = navigation.clone();
                                move |_| {
                                    platform::vibrate(HAPTIC_PULSE_MS);
                                    navigation.open_actor(&actor_id);
                                }
                            },
                            LazyImage {
                                id: format!("cast-photo-{}", member.actor_id),
                                src: member.photo.clone(),
                                alt: member.name.clone(),
                                class: "cast-photo".to_string(),
                            }
                            span { class: "cast-name", "{member.name}" }
                            span { class: "cast-role", "{member.role}" }
                        }
                    }
                }
            }

            section { class: "similar-section",
                h3 { class: "section-title", "Схожі фільми" }
                div { class: "similar-movies",
                    for similar in movie.similar.iter().filter_map(|id| data::movie(id)) {
                        div {
                            key: "{similar.id}",
                            class: "similar-movie-card",
                            onclick: {
                                let title = similar.title.clone();
                                move |_| {
                                    tracing::info!("similar movie tapped: {title}");
                                    platform::vibrate(HAPTIC_PULSE_MS);
                                }
                            },
                            LazyImage {
                                id: format!("similar-poster-{}", similar.id),
                                src: similar.poster.clone(),
                                alt: similar.title.clone(),
                                class: "similar-poster".to_string(),
                            }
                            span { class: "similar-movie-title", "{similar.title}" }
                            span { class: "similar-movie-year", "{similar.year}" }
                        }
                    }
                }
            }
        }
    }
}
