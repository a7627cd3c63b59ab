use api::model::DisplayMode;
use dioxus::prelude::*;

use crate::core::platform;

/// Toggles the server-held display mode, then reloads the page so the new
/// mode takes effect. Repeat activations while a toggle is in flight are
/// ignored, so each acknowledged toggle reloads exactly once.
#[component]
pub fn ModeSwitch(mode: DisplayMode) -> Element {
    let mut busy = use_signal(|| false);
    let target_label = mode.toggled().label();

    let on_switch = move |_| {
        if busy() {
            return;
        }
        busy.set(true);

        spawn(async move {
            // A failed toggle still reloads; the page then simply reflects
            // the unchanged server mode.
            if let Err(_err) = api::switch_mode().await {
                #[cfg(debug_assertions)]
                println!("[mode-switch] toggle failed: {_err}");
            }
            platform::reload_page();
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "mode-switch",
            disabled: busy(),
            onclick: on_switch,
            "Switch to {target_label} view"
        }
    }
}
