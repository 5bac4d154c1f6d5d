use dioxus::prelude::*;

mod catalog;
mod components;
mod models;
mod transport;
mod utils;

use components::PlayerApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Title { "Playdeck" }
        document::Stylesheet { href: MAIN_CSS }

        PlayerApp {}
    }
}
