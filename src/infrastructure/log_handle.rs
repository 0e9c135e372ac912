use std::error::Error;
use std::fmt::Display;

/// Tag-scoped logging handle handed to each component at construction time.
///
/// The sink itself is the `log` facade configured once in `main`; the handle
/// only carries the component tag so call sites never hard-code it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogHandle {
    tag: &'static str,
}

impl LogHandle {
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    pub fn debug(&self, message: impl Display) {
        log::debug!("{} {}", self.tag, message);
    }

    pub fn info(&self, message: impl Display) {
        log::info!("{} {}", self.tag, message);
    }

    pub fn warn(&self, message: impl Display) {
        log::warn!("{} {}", self.tag, message);
    }

    pub fn error(&self, message: impl Display) {
        log::error!("{} {}", self.tag, message);
    }

    /// Logs `message` at error level followed by the full `source()` chain.
    pub fn error_with_cause(&self, message: impl Display, error: &dyn Error) {
        log::error!("{} {}: {}", self.tag, message, format_error_chain(error));
    }
}

pub fn format_error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut current = error.source();
    while let Some(cause) = current {
        rendered.push_str("\n  caused by: ");
        rendered.push_str(&cause.to_string());
        current = cause.source();
    }
    rendered
}
