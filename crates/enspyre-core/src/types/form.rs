//! Flat form payload submitted by the lead collection form.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What the collection form submits.
///
/// Social profiles arrive as four flat fields. [`Lead::from_form`] folds
/// them into a [`SocialMedia`] mapping.
///
/// [`Lead::from_form`]: crate::Lead::from_form
/// [`SocialMedia`]: crate::SocialMedia
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormData {
    /// Contact name (required).
    pub name: String,

    /// Contact e-mail (required).
    pub email: String,

    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Company or personal website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    /// Twitter/X profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// Facebook profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// Instagram profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadFormData {
    /// Creates form data with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use enspyre_core::LeadFormData;
    ///
    /// let form = LeadFormData::new("Jane Doe", "jane@ex.com");
    /// assert!(form.validate().is_ok());
    /// assert!(form.company.is_none());
    /// ```
    pub fn new<N, E>(name: N, email: E) -> Self
    where
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field when
    /// `name` is blank or `email` is not a plausible address.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_field("name", "name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::validation_field("email", "email is required"));
        }
        if !is_valid_email(&self.email) {
            return Err(Error::validation_field(
                "email",
                format!("'{}' is not a valid email address", self.email.trim()),
            ));
        }
        Ok(())
    }
}

/// Loose e-mail check matching what a browser `type="email"` input accepts:
/// one `@`, non-empty local part, dotless or dotted non-empty domain, no
/// whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_minimal_form() {
        let form = LeadFormData::new("Jane Doe", "jane@ex.com");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = LeadFormData::new("   ", "jane@ex.com").validate().unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_validate_rejects_missing_email() {
        let err = LeadFormData::new("Jane", "").validate().unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let err = LeadFormData::new("Jane", "jane.ex.com")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert!(err.to_string().contains("jane.ex.com"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("jane@ex.com"));
        assert!(is_valid_email("  jane@localhost "));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@ex.com"));
        assert!(!is_valid_email("jane@@ex.com"));
        assert!(!is_valid_email("ja ne@ex.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@ex."));
    }

    #[test]
    fn test_form_deserializes_with_missing_optionals() {
        let form: LeadFormData =
            serde_json::from_str(r#"{"name": "Jane", "email": "jane@ex.com"}"#).unwrap();
        assert_eq!(form, LeadFormData::new("Jane", "jane@ex.com"));
    }
}
