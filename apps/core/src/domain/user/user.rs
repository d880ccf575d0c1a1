use super::value_objects::{Email, ModerationFlags, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A marketplace account
///
/// # Invariants
/// - `role` never changes after construction (no setter exists)
/// - `is_approved` starts false for barbers and true for everyone else
/// - The password is kept in plaintext and compared by equality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: String,
    name: String,
    email: Email,
    password: String,
    role: Role,
    is_banned: bool,
    is_approved: bool,
}

impl User {
    /// Creates a freshly registered user with a generated `user-…` id
    pub fn register(name: impl Into<String>, email: Email, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.into(),
            email,
            password: password.into(),
            role,
            is_banned: false,
            is_approved: !role.requires_approval(),
        }
    }

    /// Reconstructs a user with every field given, used for seed data
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        email: Email,
        password: impl Into<String>,
        role: Role,
        is_banned: bool,
        is_approved: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
            password: password.into(),
            role,
            is_banned,
            is_approved,
        }
    }

    /// Applies whichever moderation flags are set
    pub fn apply_moderation(&mut self, flags: ModerationFlags) {
        if let Some(banned) = flags.is_banned {
            self.is_banned = banned;
        }
        if let Some(approved) = flags.is_approved {
            self.is_approved = approved;
        }
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// True for barbers still waiting on an administrator
    pub fn is_pending_approval(&self) -> bool {
        self.role == Role::Barber && !self.is_approved
    }

    /// Approved, unbanned barbers are the ones clients can discover
    pub fn is_listed_barber(&self) -> bool {
        self.role == Role::Barber && self.is_approved && !self.is_banned
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_banned(&self) -> bool {
        self.is_banned
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> Email {
        Email::new(value).unwrap()
    }

    #[test]
    fn registered_client_is_approved() {
        let user = User::register("John", email("john@email.com"), "pw", Role::Client);

        assert!(user.id().starts_with("user-"));
        assert!(user.is_approved());
        assert!(!user.is_banned());
        assert!(!user.is_pending_approval());
    }

    #[test]
    fn registered_barber_is_pending() {
        let user = User::register("Pete", email("pete@x.com"), "pw", Role::Barber);

        assert!(!user.is_approved());
        assert!(user.is_pending_approval());
        assert!(!user.is_listed_barber());
    }

    #[test]
    fn registered_ids_are_unique() {
        let a = User::register("A", email("a@x.com"), "pw", Role::Client);
        let b = User::register("B", email("b@x.com"), "pw", Role::Client);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn partial_moderation_keeps_other_flag() {
        let mut user = User::register("Pete", email("pete@x.com"), "pw", Role::Barber);

        user.apply_moderation(ModerationFlags::ban(true));
        assert!(user.is_banned());
        assert!(!user.is_approved());

        user.apply_moderation(ModerationFlags::approve());
        assert!(user.is_banned());
        assert!(user.is_approved());
    }

    #[test]
    fn password_compared_by_equality() {
        let user = User::register("John", email("john@email.com"), "secret", Role::Client);
        assert!(user.password_matches("secret"));
        assert!(!user.password_matches("Secret"));
    }

    #[test]
    fn serialized_user_round_trips_with_camel_case_keys() {
        let user = User::register("John", email("john@email.com"), "pw", Role::Client);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["isBanned"], false);
        assert_eq!(json["isApproved"], true);
        assert_eq!(json["role"], "Client");

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
