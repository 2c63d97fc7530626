//! User-facing notifications, surfaced by the panel shell as toasts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Info(String),
    Error(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Success(text) | Notification::Info(text) | Notification::Error(text) => {
                text
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}
