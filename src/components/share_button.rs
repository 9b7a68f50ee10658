//! Share action: native share sheet when the host has one, clipboard
//! copy with a transient checkmark otherwise.

use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::transient::TransientState;
use crate::config::{HAPTIC_PULSE_MS, SHARE_CONFIRM_MS};
use crate::platform::{self, ShareOutcome};

#[component]
pub fn ShareButton(
    title: String,
    text: String,
    /// Swap the icon to a checkmark after a clipboard copy. The header
    /// variant shows it; the action-row variant on the actor page does
    /// not, matching the page design.
    #[props(default = true)]
    show_confirmation: bool,
    #[props(default = String::from("share-button"))] class: String,
) -> Element {
    let mut confirm = use_signal(TransientState::default);

    let on_share = move |evt: MouseEvent| {
        evt.stop_propagation();
        platform::vibrate(HAPTIC_PULSE_MS);
        let title = title.clone();
        let text = text.clone();
        spawn(async move {
            let outcome = platform::share_page(&title, &text).await;
            // The checkmark only ever appears on a successful copy, so a
            // rejected clipboard write cannot show a false confirmation.
            if outcome == ShareOutcome::Copied && show_confirmation {
                let generation = confirm.write().activate();
                platform::schedule(SHARE_CONFIRM_MS, move || {
                    confirm.write().try_expire(generation);
                });
            }
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "Поділитися",
            onclick: on_share,
            if confirm().is_active() {
                Icon { name: "check".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "share".to_string(), class: "icon".to_string() }
            }
        }
    }
}
