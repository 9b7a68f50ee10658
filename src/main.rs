use dioxus::prelude::*;

mod components;
mod config;
mod data;
mod platform;
mod views;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta {
            name: "apple-mobile-web-app-status-bar-style",
            content: "black-translucent",
        }
        document::Meta { name: "apple-mobile-web-app-title", content: "Кінострічка" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
