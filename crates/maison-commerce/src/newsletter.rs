//! Newsletter signup.
//!
//! The core validates the address and tracks subscribers in memory; the
//! presentation layer renders the success/error notification.

use crate::error::CommerceError;

/// What happened on a subscribe call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The address was added to the list.
    Subscribed,
    /// The address was already on the list.
    AlreadySubscribed,
}

/// Structural email validation.
///
/// Checks for a single `@` with a non-empty local part and a dotted
/// domain, and rejects whitespace. Deliverability is the mail
/// provider's problem, not ours.
pub fn validate_email(email: &str) -> Result<(), CommerceError> {
    let invalid = || CommerceError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid()),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }

    // Domain must have a dot with something on both sides.
    let mut labels = domain.split('.');
    if !labels.clone().all(|l| !l.is_empty()) || labels.nth(1).is_none() {
        return Err(invalid());
    }

    Ok(())
}

/// In-memory newsletter subscriber list.
///
/// Addresses are de-duplicated case-insensitively but stored as first
/// entered.
#[derive(Debug, Default)]
pub struct SubscriberList {
    emails: Vec<String>,
}

impl SubscriberList {
    /// Create an empty subscriber list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an address after validating it.
    pub fn subscribe(&mut self, email: &str) -> Result<SubscribeOutcome, CommerceError> {
        validate_email(email)?;

        if self.contains(email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        self.emails.push(email.to_string());
        Ok(SubscribeOutcome::Subscribed)
    }

    /// Check membership, case-insensitively.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|e| e.eq_ignore_ascii_case(email))
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+tag@mail.example.co").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@nodot",
            "ada@.com",
            "ada@example.",
            "a b@example.com",
            "two@@example.com",
        ] {
            assert!(validate_email(bad).is_err(), "accepted: {:?}", bad);
        }
    }

    #[test]
    fn test_subscribe() {
        let mut list = SubscriberList::new();
        assert_eq!(
            list.subscribe("ada@example.com").unwrap(),
            SubscribeOutcome::Subscribed
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_subscribe_is_case_insensitive() {
        let mut list = SubscriberList::new();
        list.subscribe("ada@example.com").unwrap();
        assert_eq!(
            list.subscribe("Ada@Example.COM").unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_invalid_email_is_not_stored() {
        let mut list = SubscriberList::new();
        assert!(list.subscribe("not-an-email").is_err());
        assert!(list.is_empty());
    }
}
