use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::lazy_image::LazyImage;
use crate::components::page_header::PageHeader;
use crate::components::share_button::ShareButton;
use crate::components::toggles::{self, ToggleFlag};
use crate::config::HAPTIC_PULSE_MS;
use crate::data;
use crate::platform;

#[component]
pub fn ActorView(actor_id: String) -> Element {
    let mut following = use_signal(ToggleFlag::default);
    let mut favorite = use_signal(ToggleFlag::default);
    let mut expanded = use_signal(ToggleFlag::default);

    let Some(actor) = data::actor(&actor_id) else {
        return rsx! {
            div { class: "empty-page", "Профіль актора не знайдено" }
        };
    };

    let share_title = format!("{} - Профіль актора", actor.name);
    let share_text = "Перевірте профіль цього актора!".to_string();
    let is_following = following().is_active();
    let is_expanded = expanded().is_active();
    let follow_text = toggles::follow_label(is_following);
    let read_more_text = toggles::read_more_label(is_expanded);

    let on_follow = move |_| {
        following.write().toggle();
        platform::vibrate(HAPTIC_PULSE_MS);
    };

    let on_favorite = move |_| {
        favorite.write().toggle();
        platform::vibrate(HAPTIC_PULSE_MS);
    };

    let on_read_more = move |_| {
        expanded.write().toggle();
        platform::vibrate(HAPTIC_PULSE_MS);
    };

    rsx! {
        div { class: "actor-page",
            PageHeader {
                title: actor.name.clone(),
                share_title: share_title.clone(),
                share_text: share_text.clone(),
            }

            section { class: "actor-profile",
                LazyImage {
                    id: "actor-photo".to_string(),
                    src: actor.photo.clone(),
                    alt: actor.name.clone(),
                    class: "actor-photo".to_string(),
                }
                h2 { class: "actor-name", "{actor.name}" }
                p { class: "actor-birth", "{actor.birth_date} • {actor.birthplace}" }

                button {
                    r#type: "button",
                    class: if is_following { "follow-button following" } else { "follow-button" },
                    onclick: on_follow,
                    Icon {
                        name: if is_following { "user-check".to_string() } else { "user-plus".to_string() },
                        class: "icon-sm".to_string(),
                    }
                    span { "{follow_text}" }
                }

                div { class: "action-row",
                    button {
                        r#type: "button",
                        class: if favorite().is_active() { "action-button favorite-button-actor active" } else { "action-button favorite-button-actor" },
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
                        show_confirmation: false,
                        class: "action-button share-button-actor".to_string(),
                    }
                }
            }

            section { class: "biography-section",
                h3 { class: "section-title", "Біографія" }
                p { class: "biography-intro", "{actor.biography_intro}" }
                if is_expanded {
                    p { id: "biography-full", class: "biography-full", "{actor.biography_full}" }
                }
                button {
                    r#type: "button",
                    class: if is_expanded { "read-more-button expanded" } else { "read-more-button" },
                    onclick: on_read_more,
                    span { class: "read-more-text", "{read_more_text}" }
                    Icon { name: "chevron-down".to_string(), class: "icon-sm".to_string() }
                }
            }

            section { class: "filmography-section",
                h3 { class: "section-title", "Фільмографія" }
                div { class: "filmography-list",
                    for (index, entry) in actor.filmography.iter().enumerate() {
                        div {
                            key: "{entry.title}-{entry.year}",
                            class: "filmography-item",
                            onclick: {
                                let title = entry.title.clone();
                                move |_| {
                                    tracing::info!("filmography item tapped: {title}");
                                    platform::vibrate(HAPTIC_PULSE_MS);
                                }
                            },
                            LazyImage {
                                id: format!("filmography-poster-{index}"),
                                src: entry.poster.clone(),
                                alt: entry.title.clone(),
                                class: "filmography-poster".to_string(),
                            }
                            div { class: "filmography-details",
                                span { class: "filmography-title", "{entry.title}" }
                                span { class: "filmography-meta", "{entry.year} • {entry.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
