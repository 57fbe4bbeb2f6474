//! Blocking browser dialogs.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Show a blocking alert. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
