#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Enspyre Core
//!
//! Domain types for the lead notebook: the [`Lead`] record, its closed
//! [`LeadStatus`] set, the flat [`LeadFormData`] submitted by the collection
//! form, and the derived views ([`LeadFilter`], [`LeadStats`],
//! [`EmptyState`]) the management dashboard computes over a listed
//! collection.
//!
//! This crate performs no I/O. Persistence lives in `enspyre-store`.

pub mod error;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{Lead, LeadFormData, LeadId, LeadStatus, SocialMedia, is_valid_email};
pub use view::{EmptyState, LeadFilter, LeadStats, StatusFilter, display_website};
