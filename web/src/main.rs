use dioxus::prelude::*;

use ui::components::ModeSwitch;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Resolves the server-held display mode once at startup, then hands it to
/// the dashboard and the shell controls explicitly.
#[component]
fn Home() -> Element {
    let mode = use_resource(|| async {
        // An unreachable mode endpoint falls back to bar charts.
        api::current_mode().await.unwrap_or_default()
    });

    match *mode.read_unchecked() {
        Some(mode) => rsx! {
            div { class: "dashboard-shell__controls",
                ModeSwitch { mode }
            }
            Dashboard { mode }
        },
        None => rsx! {
            p { class: "dashboard__loading", "Loading…" }
        },
    }
}

/// A web-specific shell around the shared dashboard view.
#[component]
fn WebShell() -> Element {
    rsx! {
        header { class: "dashboard-shell__header",
            span { class: "dashboard-shell__brand", "Moodboard" }
            span { class: "dashboard-shell__subtitle", "Your playlists, by mood" }
        }
        Outlet::<Route> {}
    }
}
