//! # enspyre-cli
//!
//! Command-line front end for the Enspyre lead notebook.
//!
//! This crate plays the part of the site's interactive sections:
//! - `leads add`: the lead collection form
//! - `leads list|show|status|delete|stats`: the management dashboard
//! - `contact`: the contact form
//! - `config path|get|init`: configuration file handling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::EnspyreConfig;
pub use error::{Error, Result};
