//! # enspyre-store
//!
//! Durable CRUD over the lead collection.
//!
//! The collection lives as one JSON array under a single key of a
//! whole-value key-value store, the way a browser keeps it in
//! `localStorage`. Every mutation reads the whole array, changes it in
//! memory, and writes the whole array back with one `set`.
//!
//! - [`KeyValueStore`]: the substrate (`get`/`set`/`remove` on whole values)
//! - [`MemoryStore`]: in-process substrate with an optional byte quota
//! - [`FileStore`]: one file per key in a data directory
//! - [`LeadStore`]: List / Save / UpdateStatus / Delete over any substrate
//!
//! A substrate read that fails aborts the mutation before anything is
//! written. Two processes writing the same key can race; the last write
//! wins.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod file;
pub mod kv;
pub mod lead_store;
pub mod memory;

mod proptests;

pub use config::StorageConfig;
pub use error::{Error, Result};
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use lead_store::{LEADS_STORAGE_KEY, LeadStore};
pub use memory::MemoryStore;
