//! # enspyre-contact
//!
//! Client for the third-party form relay behind the site's contact form.
//!
//! The contact form posts `{email, message}` as JSON to a fixed relay URL.
//! Any 2xx response is success; everything else is a failure. There is no
//! retry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::ContactClient;
pub use config::{ContactConfig, DEFAULT_RELAY_URL};
pub use error::{Error, Result};
pub use message::ContactMessage;
