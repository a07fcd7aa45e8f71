//! User-facing notification messages.
//!
//! Every action settles into exactly one [`Notice`]. Failure notices are
//! deliberately generic; the underlying cause goes to the log, not the user.

use crate::validate::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Action a notice reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Fetch, Action::Create, Action::Update, Action::Delete];

    /// Short tag for the activity log.
    pub fn label(self) -> &'static str {
        match self {
            Action::Fetch => "Load",
            Action::Create => "Add",
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub action: Action,
    pub message: String,
}

impl Notice {
    pub fn success(action: Action) -> Self {
        let message = match action {
            Action::Fetch => "Users loaded.",
            Action::Create => "User added successfully!",
            Action::Update => "User updated successfully!",
            Action::Delete => "User deleted successfully!",
        };
        Self {
            level: NoticeLevel::Success,
            action,
            message: message.to_string(),
        }
    }

    pub fn failure(action: Action) -> Self {
        let message = match action {
            Action::Fetch => "Failed to fetch users. Please try again later.",
            Action::Create => "Failed to add user. Please try again.",
            Action::Update => "Failed to update user. Please try again.",
            Action::Delete => "Failed to delete user. Please try again.",
        };
        Self {
            level: NoticeLevel::Error,
            action,
            message: message.to_string(),
        }
    }

    /// A submit for `action` that never left the client.
    pub fn rejected(action: Action, err: ValidationError) -> Self {
        Self {
            level: NoticeLevel::Error,
            action,
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages_are_generic() {
        assert_eq!(
            Notice::failure(Action::Create).message,
            "Failed to add user. Please try again."
        );
        assert!(Notice::failure(Action::Delete).is_error());
        assert!(!Notice::success(Action::Update).is_error());
        assert_eq!(Notice::failure(Action::Fetch).action, Action::Fetch);
    }

    #[test]
    fn test_validation_notice_uses_rule_message() {
        let notice = Notice::rejected(Action::Update, ValidationError::InvalidEmail);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.action, Action::Update);
        assert_eq!(notice.message, "Please enter a valid email address.");
    }
}
