use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting acct web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::ACCT_CSS }
        document::Title { "Buchhaltung" }

        SessionProvider {
            AppShell {}
        }
    }
}
