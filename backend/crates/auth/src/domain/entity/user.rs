//! User Entity
//!
//! Identity record backing registration and login.
//! The password hash lives here but is stripped from every API response.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email (unique, stored case-sensitively)
    pub email: Email,
    /// Argon2id hash in PHC format; `None` means no local-password login
    pub password_hash: Option<HashedPassword>,
    /// Role (User, Admin)
    pub role: UserRole,
    /// Visibility flag; inactive users are reserved for future lifecycle use
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with local-password credentials
    pub fn new(email: Email, password_hash: HashedPassword, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash: Some(password_hash),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this user can authenticate with a local password
    pub fn has_local_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn hash(raw: &str) -> HashedPassword {
        ClearTextPassword::new(raw.to_string())
            .unwrap()
            .hash(None)
            .unwrap()
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            Email::new("user@example.com").unwrap(),
            hash("correct-horse-battery"),
            UserRole::default(),
        );
        assert!(user.is_active);
        assert_eq!(user.role, UserRole::User);
        assert!(user.has_local_password());
        assert_eq!(user.created_at, user.updated_at);
    }
}
