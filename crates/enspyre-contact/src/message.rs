//! Contact form payload.

use enspyre_core::is_valid_email;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What the contact form submits to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender's e-mail address.
    pub email: String,

    /// Free-text project description.
    pub message: String,
}

impl ContactMessage {
    /// Creates a message.
    pub fn new<E, M>(email: E, message: M) -> Self
    where
        E: Into<String>,
        M: Into<String>,
    {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks both fields are present and the address is plausible.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_email(&self.email) {
            return Err(Error::Core(enspyre_core::Error::validation_field(
                "email",
                "a valid email address is required",
            )));
        }
        if self.message.trim().is_empty() {
            return Err(Error::Core(enspyre_core::Error::validation_field(
                "message",
                "message is required",
            )));
        }
        Ok(())
    }
}
