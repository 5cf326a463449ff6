use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PersonNameError;

/// User aggregate entity.
///
/// Identity record for authentication and authorization: the `is_admin` and
/// `is_banned` flags are consulted by every guard, and both are mutated only
/// through admin operations.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Person name value type (first name or surname)
///
/// Ensures the name is non-empty and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated person name.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 100 characters
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        if name.trim().is_empty() {
            return Err(PersonNameError::Empty);
        }
        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new user with validated fields.
///
/// Used by both self-registration and the admin create endpoint; the admin
/// flag is never part of the command (it is appointed separately).
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub password: String,
}

/// Command to update an existing user.
///
/// Deliberately a whitelist: only name and surname are updatable through the
/// patch operation, so unrelated columns cannot be mass-assigned.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<PersonName>,
    pub surname: Option<PersonName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_rejects_empty() {
        assert!(matches!(
            PersonName::new("   ".to_string()),
            Err(PersonNameError::Empty)
        ));
    }

    #[test]
    fn test_person_name_rejects_too_long() {
        let result = PersonName::new("x".repeat(101));
        assert!(matches!(
            result,
            Err(PersonNameError::TooLong { actual: 101, .. })
        ));
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("user@example.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}
