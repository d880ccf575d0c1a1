use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign-in address of an account
///
/// Accepted when it has an `@` and at least three characters. Stored and
/// matched exactly as typed, so `John@email.com` and `john@email.com` are two
/// different accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Checks an address typed on the sign-up form
    ///
    /// ```
    /// use barberbook_core::domain::user::Email;
    ///
    /// assert!(Email::new("john@email.com").is_ok());
    /// assert!(Email::new("john.email.com").is_err());
    /// ```
    pub fn new(address: impl Into<String>) -> Result<Self, String> {
        let address = address.into();
        if address.len() < 3 || !address.contains('@') {
            return Err(format!("Invalid email: {}", address));
        }
        Ok(Email(address))
    }

    /// Wraps a stored address without checking it
    pub fn from_persistence(address: impl Into<String>) -> Self {
        Email(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account role, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Client,
    Barber,
    Admin,
}

impl Role {
    /// Only barbers start out unapproved
    pub fn requires_approval(&self) -> bool {
        matches!(self, Role::Barber)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "Client"),
            Role::Barber => write!(f, "Barber"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// Partial update of the two moderation flags
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationFlags {
    pub is_banned: Option<bool>,
    pub is_approved: Option<bool>,
}

impl ModerationFlags {
    pub fn approve() -> Self {
        Self {
            is_approved: Some(true),
            ..Self::default()
        }
    }

    pub fn ban(banned: bool) -> Self {
        Self {
            is_banned: Some(banned),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_addresses() {
        assert!(Email::new("edward@barberbook.com").is_ok());
        assert!(Email::new("a@b").is_ok());
        assert!(Email::new("a@").is_err());
        assert!(Email::new("barberbook.com").is_err());
    }

    #[test]
    fn seeded_admin_address_passes_the_sign_up_check() {
        assert!(Email::new("admin@.com").is_ok());
    }

    #[test]
    fn rejection_names_the_address() {
        assert_eq!(Email::new("pete").unwrap_err(), "Invalid email: pete");
    }

    #[test]
    fn addresses_differing_in_case_are_different_accounts() {
        let lower = Email::new("john@email.com").unwrap();
        let upper = Email::new("John@email.com").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn stored_address_is_kept_verbatim() {
        let email = Email::from_persistence("Jane@Email.com");
        assert_eq!(email.as_str(), "Jane@Email.com");
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"Jane@Email.com\"");
    }

    #[test]
    fn only_barbers_require_approval() {
        assert!(Role::Barber.requires_approval());
        assert!(!Role::Client.requires_approval());
        assert!(!Role::Admin.requires_approval());
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::Client.to_string(), "Client");
        assert_eq!(Role::Barber.to_string(), "Barber");
        assert_eq!(Role::Admin.to_string(), "Admin");
    }

    #[test]
    fn moderation_flag_shortcuts() {
        assert_eq!(ModerationFlags::approve().is_approved, Some(true));
        assert_eq!(ModerationFlags::approve().is_banned, None);
        assert_eq!(ModerationFlags::ban(false).is_banned, Some(false));
    }
}
