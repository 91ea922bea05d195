//! Core types for the lead notebook.

mod form;
mod ids;
mod lead;
mod proptests;

pub use form::{LeadFormData, is_valid_email};
pub use ids::LeadId;
pub use lead::{Lead, LeadStatus, SocialMedia};
