use leptos::prelude::*;

/// Notification severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// Get the CSS class for styling this level
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
        }
    }
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Toast channel shared through context. Only the latest toast is shown;
/// `NotificationBar` clears it after a timeout.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Option<Notification> {
        self.current.get_untracked()
    }

    pub fn show(&self, level: NotificationLevel, message: impl Into<String>) {
        self.current.set(Some(Notification {
            level,
            message: message.into(),
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationLevel::Error, message);
    }

    pub fn clear(&self) {
        self.current.set(None);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_notification_wins() {
        let notifier = Notifier::new();
        notifier.success("first");
        notifier.error("second");

        let current = notifier.current_untracked().unwrap();
        assert_eq!(current.level, NotificationLevel::Error);
        assert_eq!(current.message, "second");

        notifier.clear();
        assert!(notifier.current_untracked().is_none());
    }
}
