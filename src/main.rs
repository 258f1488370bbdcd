use dioxus::prelude::*;

mod components;

use components::LibraryShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "audiarr" }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: APP_CSS }

        LibraryShell {}
    }
}
