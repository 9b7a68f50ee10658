use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::components::app_view::AppView;

/// Back/forward navigation shared by both pages.
///
/// Going back prefers real history; with nothing to return to it lands
/// on the movie page instead of a dead end.
#[derive(Clone)]
pub struct Navigation {
    navigator: Navigator,
}

impl Navigation {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub fn open_actor(&self, actor_id: &str) {
        tracing::info!("opening actor profile: {actor_id}");
        self.navigator.push(AppView::ActorView {
            actor_id: actor_id.to_string(),
        });
    }

    pub fn go_back(&self) {
        if self.navigator.can_go_back() {
            self.navigator.go_back();
        } else {
            self.navigator.replace(AppView::MovieView {});
        }
    }
}
