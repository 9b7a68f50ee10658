use dioxus::prelude::*;

use crate::components::app_view::AppView;
use crate::components::navigation::Navigation;
use crate::components::video_manager::VideoState;

/// Layout shared by both pages: owns the state that outlives a single
/// view and hands it down through context.
#[component]
pub fn AppShell() -> Element {
    let is_playing = use_signal(|| false);
    let video_state = use_signal(VideoState::default);
    let navigation = Navigation::new(use_navigator());

    use_context_provider(|| is_playing);
    use_context_provider(|| video_state);
    use_context_provider(|| navigation);

    rsx! {
        div { class: "app-container",
            Outlet::<AppView> {}
        }
    }
}
