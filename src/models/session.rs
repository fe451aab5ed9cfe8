use crate::models::User;

/// Snapshot of who is using the client.
///
/// `is_authenticated` is derived from the presence of a user, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
    mention_count: u32,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub const fn authenticated(user: User) -> Self {
        Self {
            current_user: Some(user),
            mention_count: 0,
        }
    }

    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.current_user.as_ref().map(|u| u.username.as_str())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.current_user.as_ref().is_some_and(|u| u.has_role(role))
    }

    pub const fn mention_count(&self) -> u32 {
        self.mention_count
    }

    pub fn set_mention_count(&mut self, count: u32) {
        self.mention_count = count;
    }

    /// Shift the unread counter, saturating at zero.
    pub fn adjust_mention_count(&mut self, delta: i32) {
        self.mention_count = self.mention_count.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> User {
        User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn anonymous_session_is_empty() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(!session.has_role("USER"));
        assert_eq!(session.mention_count(), 0);
    }

    #[test]
    fn authenticated_session_exposes_roles_in_order() {
        let session = Session::authenticated(user(&["USER", "ADMIN"]));
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("alice"));
        assert_eq!(
            session.current_user().map(|u| u.roles.as_slice()),
            Some(["USER".to_string(), "ADMIN".to_string()].as_slice())
        );
        assert!(session.has_role("ADMIN"));
        assert!(!session.has_role("admin"));
    }

    #[test]
    fn mention_count_never_goes_negative() {
        let mut session = Session::authenticated(user(&[]));
        session.set_mention_count(1);
        session.adjust_mention_count(-1);
        session.adjust_mention_count(-1);
        assert_eq!(session.mention_count(), 0);
        session.adjust_mention_count(2);
        assert_eq!(session.mention_count(), 2);
    }
}
