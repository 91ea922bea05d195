//! CRUD over the lead collection.
//!
//! The substrate only offers whole-value get/set, so every mutation is a
//! read-modify-write of the entire array. That is fine for the tens to
//! low hundreds of records a lead notebook holds, and nothing more.

use enspyre_core::{Lead, LeadFormData, LeadId, LeadStatus};

use crate::kv::KeyValueStore;
use crate::{Error, Result};

/// Default key the lead array is stored under.
pub const LEADS_STORAGE_KEY: &str = "enspyre_leads";

/// The lead collection stored as one JSON array under one key.
///
/// Callers never touch the raw key; everything goes through this type.
///
/// # Example
///
/// ```
/// use enspyre_core::{LeadFormData, LeadStatus};
/// use enspyre_store::{LeadStore, MemoryStore};
///
/// let mut store = LeadStore::new(MemoryStore::new());
/// let lead = store.save(LeadFormData::new("Jane Doe", "jane@ex.com"))?;
/// store.update_status(lead.id(), LeadStatus::Contacted)?;
///
/// let leads = store.list();
/// assert_eq!(leads.len(), 1);
/// assert_eq!(leads[0].status(), LeadStatus::Contacted);
/// # Ok::<(), enspyre_store::Error>(())
/// ```
#[derive(Debug)]
pub struct LeadStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LeadStore<S> {
    /// Wraps `store`, using [`LEADS_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, LEADS_STORAGE_KEY)
    }

    /// Wraps `store`, using a custom key.
    pub fn with_key<K: Into<String>>(store: S, key: K) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the array lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying substrate.
    pub fn substrate(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying substrate.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// All stored leads, in insertion order.
    ///
    /// Never fails: an empty store, an unreadable substrate, or a corrupt
    /// blob all yield an empty list. Failures are logged.
    pub fn list(&self) -> Vec<Lead> {
        match self.load() {
            Ok(leads) => leads,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "error loading leads");
                Vec::new()
            }
        }
    }

    /// The lead with `id`, if stored.
    pub fn get(&self, id: &LeadId) -> Option<Lead> {
        self.list().into_iter().find(|lead| lead.id() == id)
    }

    /// Validates `form`, builds a new lead, and appends it.
    ///
    /// The lead gets a fresh id, the current time, and status `new`.
    ///
    /// # Errors
    ///
    /// - [`Error::Core`] if the form is invalid; nothing is written.
    /// - [`Error::Persistence`] if the substrate cannot be read or written;
    ///   nothing is saved and the stored array is left as it was.
    pub fn save(&mut self, form: LeadFormData) -> Result<Lead> {
        form.validate()?;
        let lead = Lead::from_form(form);

        let mut leads = self.load_for_write()?;
        leads.push(lead.clone());
        self.persist(&leads)?;

        tracing::info!(id = %lead.id(), "saved lead");
        Ok(lead)
    }

    /// Sets the status of the lead with `id`.
    ///
    /// Unknown ids are a no-op and nothing is written.
    ///
    /// # Errors
    ///
    /// [`Error::Persistence`] if the substrate cannot be read or written.
    pub fn update_status(&mut self, id: &LeadId, status: LeadStatus) -> Result<()> {
        let mut leads = self.load_for_write()?;
        let Some(lead) = leads.iter_mut().find(|lead| lead.id() == id) else {
            tracing::debug!(%id, "update_status: no such lead");
            return Ok(());
        };
        lead.set_status(status);
        self.persist(&leads)
    }

    /// Removes the lead with `id`.
    ///
    /// Unknown ids are a no-op and nothing is written.
    ///
    /// # Errors
    ///
    /// [`Error::Persistence`] if the substrate cannot be read or written.
    pub fn delete(&mut self, id: &LeadId) -> Result<()> {
        let mut leads = self.load_for_write()?;
        let before = leads.len();
        leads.retain(|lead| lead.id() != id);
        if leads.len() == before {
            tracing::debug!(%id, "delete: no such lead");
            return Ok(());
        }
        self.persist(&leads)
    }

    fn load(&self) -> Result<Vec<Lead>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| Error::Deserialization {
            key: self.key.clone(),
            source,
        })
    }

    // A corrupt blob counts as empty. A failed read aborts the mutation.
    fn load_for_write(&self) -> Result<Vec<Lead>> {
        match self.load() {
            Ok(leads) => Ok(leads),
            Err(e @ Error::Deserialization { .. }) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable lead array");
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "error loading leads before write");
                Err(Error::persistence(self.key.clone(), e))
            }
        }
    }

    fn persist(&mut self, leads: &[Lead]) -> Result<()> {
        let write = serde_json::to_string(leads)
            .map_err(Error::from)
            .and_then(|json| self.store.set(&self.key, &json));
        write.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "error writing leads");
            Error::persistence(self.key.clone(), e)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
