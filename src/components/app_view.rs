//! The app's routable views.

use dioxus::prelude::*;

use crate::components::app::AppShell;
use crate::views::{ActorView, MovieView};

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    MovieView {},
    #[route("/actor/:actor_id")]
    ActorView { actor_id: String },
}
