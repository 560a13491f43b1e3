use gloo::console;

/// Component-tagged console logger.
///
/// Transport errors in this app are logged and swallowed; the list simply
/// stays as it was, so these messages are the only trace of a failure.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tag(component), message.to_string());
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tag(component), message.to_string());
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tag(component), message.to_string());
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tag(component), message.to_string());
    }

    fn tag(component: &str) -> String {
        format!("[{}]", component)
    }
}
