//! Field validation for person records.
//!
//! Every validated type in [`crate::model`] and [`crate::tags`] runs its raw
//! input through one of these functions at construction time. Inputs are
//! expected to be trimmed already.
//!
//! | Field   | Accepted                                                     |
//! |---------|--------------------------------------------------------------|
//! | name    | alphanumeric characters and spaces                           |
//! | phone   | ASCII digits                                                 |
//! | email   | `local@domain`, both parts from ASCII alphanumerics, `_`, `.` |
//! | address | any non-empty text                                           |
//! | tag     | alphanumeric characters                                      |

use std::fmt;

/// The record field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

impl Field {
    /// Human-readable description of what the field accepts.
    pub fn constraint(&self) -> &'static str {
        match self {
            Field::Name => "person names should be spaces or alphanumeric characters",
            Field::Phone => "person phone numbers should only contain numbers",
            Field::Email => {
                "person emails should be 2 alphanumeric/period strings separated by '@'"
            }
            Field::Address => "person addresses can be in any format",
            Field::Tag => "tag names should be alphanumeric",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
            Field::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    /// Value is empty (or whitespace only)
    Empty,
    /// Value contains a character the field does not allow
    InvalidCharacter(char),
    /// Email has no `@`
    MissingAt,
    /// Email has more than one `@`
    MultipleAt,
    /// Email has nothing before the `@`
    EmptyLocalPart,
    /// Email has nothing after the `@`
    EmptyDomain,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValidationError::Empty => write!(f, "value cannot be empty"),
            FieldValidationError::InvalidCharacter(ch) => {
                write!(f, "contains invalid character '{}'", ch)
            }
            FieldValidationError::MissingAt => write!(f, "missing '@'"),
            FieldValidationError::MultipleAt => write!(f, "contains more than one '@'"),
            FieldValidationError::EmptyLocalPart => write!(f, "nothing before '@'"),
            FieldValidationError::EmptyDomain => write!(f, "nothing after '@'"),
        }
    }
}

impl std::error::Error for FieldValidationError {}

/// Validates a person name: alphanumeric characters and spaces.
pub fn validate_name(value: &str) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        return Err(FieldValidationError::Empty);
    }
    check_chars(value, |ch| ch.is_alphanumeric() || ch == ' ')
}

/// Validates a phone number: ASCII digits only.
pub fn validate_phone(value: &str) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::Empty);
    }
    check_chars(value, |ch| ch.is_ascii_digit())
}

/// Validates an email address of the form `local@domain`.
///
/// # Examples
/// ```
/// use roloapp::validation::{validate_email, FieldValidationError};
///
/// assert!(validate_email("johnd@gmail.com").is_ok());
/// assert!(validate_email("first.last@example.org").is_ok());
///
/// assert_eq!(validate_email("johnd"), Err(FieldValidationError::MissingAt));
/// assert_eq!(validate_email("@gmail.com"), Err(FieldValidationError::EmptyLocalPart));
/// assert_eq!(validate_email("a@b@c"), Err(FieldValidationError::MultipleAt));
/// ```
pub fn validate_email(value: &str) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::Empty);
    }

    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().ok_or(FieldValidationError::MissingAt)?;
    if parts.next().is_some() {
        return Err(FieldValidationError::MultipleAt);
    }
    if local.is_empty() {
        return Err(FieldValidationError::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(FieldValidationError::EmptyDomain);
    }

    check_chars(local, is_email_char)?;
    check_chars(domain, is_email_char)
}

/// Validates an address: anything non-empty.
pub fn validate_address(value: &str) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        return Err(FieldValidationError::Empty);
    }
    Ok(())
}

/// Validates a tag name: alphanumeric characters only.
pub fn validate_tag_name(value: &str) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::Empty);
    }
    check_chars(value, char::is_alphanumeric)
}

fn check_chars(value: &str, allowed: impl Fn(char) -> bool) -> Result<(), FieldValidationError> {
    match value.chars().find(|ch| !allowed(*ch)) {
        Some(ch) => Err(FieldValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

fn is_email_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("John Doe").is_ok());
        assert!(validate_name("Agent 47").is_ok());
        assert!(validate_name("Zoë").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(validate_name(""), Err(FieldValidationError::Empty));
        assert_eq!(validate_name("   "), Err(FieldValidationError::Empty));
        assert_eq!(
            validate_name("John_Doe"),
            Err(FieldValidationError::InvalidCharacter('_'))
        );
        assert_eq!(
            validate_name("O'Brien"),
            Err(FieldValidationError::InvalidCharacter('\''))
        );
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("98765432").is_ok());
        assert!(validate_phone("0").is_ok());
        assert_eq!(validate_phone(""), Err(FieldValidationError::Empty));
        assert_eq!(
            validate_phone("+6598765432"),
            Err(FieldValidationError::InvalidCharacter('+'))
        );
        assert_eq!(
            validate_phone("9876 5432"),
            Err(FieldValidationError::InvalidCharacter(' '))
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_email("john_doe@mail.example.com").is_ok());
        assert_eq!(validate_email(""), Err(FieldValidationError::Empty));
        assert_eq!(
            validate_email("john@"),
            Err(FieldValidationError::EmptyDomain)
        );
        assert_eq!(
            validate_email("john+spam@gmail.com"),
            Err(FieldValidationError::InvalidCharacter('+'))
        );
        assert_eq!(
            validate_email("john@gm-ail.com"),
            Err(FieldValidationError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_address() {
        assert!(validate_address("311, Clementi Ave 2, #02-25").is_ok());
        assert_eq!(validate_address(" "), Err(FieldValidationError::Empty));
    }

    #[test]
    fn test_tag_name() {
        assert!(validate_tag_name("friends").is_ok());
        assert!(validate_tag_name("owesMoney").is_ok());
        assert!(validate_tag_name("team42").is_ok());
        assert_eq!(validate_tag_name(""), Err(FieldValidationError::Empty));
        assert_eq!(
            validate_tag_name("best-friend"),
            Err(FieldValidationError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FieldValidationError::Empty.to_string(),
            "value cannot be empty"
        );
        assert_eq!(
            FieldValidationError::InvalidCharacter('@').to_string(),
            "contains invalid character '@'"
        );
        assert_eq!(Field::Email.to_string(), "email");
    }
}
