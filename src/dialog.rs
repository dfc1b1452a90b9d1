//! Browser Dialogs

use leptos::prelude::*;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::error!("[dialog] alert failed: {:?}", err);
    }
}
