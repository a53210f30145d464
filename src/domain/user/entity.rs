//! User entity and related types

use chrono::{DateTime, Utc};

/// User identifier assigned by the store, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    department: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a user stamped with the current time
    pub fn new(id: UserId, fields: NewUser) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            department: fields.department,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply a patch whose changes have already been validated.
    ///
    /// Absent and empty values leave the field as it is.
    pub(crate) fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name.filter(|v| !v.is_empty()) {
            self.name = name;
        }
        if let Some(email) = patch.email.filter(|v| !v.is_empty()) {
            self.email = email;
        }
        if let Some(department) = patch.department.filter(|v| !v.is_empty()) {
            self.department = department;
        }
    }
}

/// Attributes for a user that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub department: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

/// Partial update; `None` or an empty string means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl UserPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// The email this patch asks to change to, if any
    pub fn email_change(&self) -> Option<&str> {
        self.email.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new(UserId::new(1), NewUser::new("Alice", "alice@x.com", "Eng"))
    }

    #[test]
    fn test_user_id_next() {
        let id = UserId::new(1);
        assert_eq!(id.next(), UserId::new(2));
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user();

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@x.com");
        assert_eq!(user.department(), "Eng");
        assert!(user.created_at() <= Utc::now());
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut user = create_test_user();
        let created_at = user.created_at();

        user.apply(UserPatch::default().with_department("Ops"));

        assert_eq!(user.department(), "Ops");
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@x.com");
        assert_eq!(user.created_at(), created_at);
    }

    #[test]
    fn test_apply_ignores_empty_values() {
        let mut user = create_test_user();

        user.apply(UserPatch::default().with_name("").with_email(""));

        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@x.com");
    }

    #[test]
    fn test_email_change() {
        assert_eq!(UserPatch::default().email_change(), None);
        assert_eq!(UserPatch::default().with_email("").email_change(), None);
        assert_eq!(
            UserPatch::default().with_email("b@x.com").email_change(),
            Some("b@x.com")
        );
    }
}
