//! Browser utilities shared by the screens.
//!
//! This module wraps the two pieces of the browser the screens need outside of
//! rendering:
//!
//! - **User Feedback**: blocking alerts for validation errors, failed requests
//!   and successful submissions. They are called from `update.rs` and from the
//!   request futures in the screens, so they must not depend on a component
//!   still being mounted.
//! - **Clock**: the wall-clock timestamp that becomes a feedback record's id.

/// Displays a blocking alert with a title line and a message.
///
/// Used by the feedback form for "Preencha todos os campos." and for the
/// outcome of the POST, and by the product list when `GET /products` fails.
/// The call blocks the page until the user dismisses the dialog, matching the
/// modal alerts of the mobile app. Outside a browser window it does nothing.
///
/// # Arguments
/// * `title` - Short heading, for example `"Erro"` or `"Sucesso"`.
/// * `message` - Text shown under the heading.
pub fn show_alert(title: &str, message: &str) {
    if let Some(window) = web_sys::window() {
        window
            .alert_with_message(&format!("{}\n\n{}", title, message))
            .ok();
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// # Returns
/// The value of `Date.now()`, truncated to an integer. Two submits within the
/// same millisecond get the same id; the service answers the second with
/// `409 Conflict`.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
