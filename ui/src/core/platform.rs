//! Platform glue for behaviour the shared views can't express portably.

/// Full page reload, used once a mode switch has been acknowledged.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native shells re-run the app rather than reloading a document.
        #[cfg(debug_assertions)]
        println!("[platform] reload requested outside a browser context");
    }
}
