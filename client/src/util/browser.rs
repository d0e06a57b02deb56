//! Blocking browser dialogs and page navigation.
//!
//! TRADE-OFFS
//! ==========
//! `window.alert` blocks the UI thread until dismissed, which is exactly the
//! behavior the room form wants for validation and server errors. SSR paths
//! no-op.

/// Show a modal alert with `message`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
}

/// Reload the current page, discarding all client state.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("reload failed: {e:?}");
            }
        }
    }
}
