use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting acct desktop client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::ACCT_CSS }

        SessionProvider {
            AppShell {}
        }
    }
}
