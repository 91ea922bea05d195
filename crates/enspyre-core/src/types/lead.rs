//! The lead record and its status lifecycle.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::{LeadFormData, LeadId};

/// Lifecycle tag on a lead.
///
/// The set is closed: any other value fails to deserialize, so nothing
/// outside it is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Freshly collected, nobody has reached out yet.
    #[default]
    New,

    /// First contact has been made.
    Contacted,

    /// The prospect showed interest.
    Interested,

    /// The prospect became a customer.
    Converted,

    /// The prospect declined.
    NotInterested,
}

impl LeadStatus {
    /// Every status, in dashboard order.
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Interested,
        LeadStatus::Converted,
        LeadStatus::NotInterested,
    ];

    /// The persisted name, e.g. `not_interested`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Interested => "interested",
            LeadStatus::Converted => "converted",
            LeadStatus::NotInterested => "not_interested",
        }
    }

    /// Human label shown in the dashboard, e.g. `Not Interested`.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Interested => "Interested",
            LeadStatus::Converted => "Converted",
            LeadStatus::NotInterested => "Not Interested",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = Error;

    /// Parses a status name. Case and `-`/`_` are not significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// Profile URLs on the fixed set of supported platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
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
}

impl SocialMedia {
    /// Returns `true` if no platform has a URL.
    pub fn is_empty(&self) -> bool {
        self.links().next().is_none()
    }

    /// Iterates over `(platform, url)` pairs that are present.
    pub fn links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("linkedin", &self.linkedin),
            ("twitter", &self.twitter),
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|url| (platform, url)))
    }
}

/// A prospective-customer contact record.
///
/// `id` and `created_at` are fixed when the record is built from form data
/// and have no setters. Only `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    id: LeadId,

    name: String,

    email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<String>,

    #[serde(default)]
    social_media: SocialMedia,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,

    #[serde(serialize_with = "serialize_timestamp")]
    created_at: DateTime<Utc>,

    status: LeadStatus,
}

impl Lead {
    /// Builds a new lead from submitted form data.
    ///
    /// Issues a fresh id, stamps `created_at` with the current time at
    /// millisecond precision, and starts in [`LeadStatus::New`]. Text is
    /// trimmed and blank optional fields become absent. The four flat social
    /// fields move into [`SocialMedia`].
    ///
    /// Callers are expected to run [`LeadFormData::validate`] first.
    pub fn from_form(form: LeadFormData) -> Self {
        Self {
            id: LeadId::new(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            company: clean(form.company),
            website: clean(form.website),
            social_media: SocialMedia {
                linkedin: clean(form.linkedin),
                twitter: clean(form.twitter),
                facebook: clean(form.facebook),
                instagram: clean(form.instagram),
            },
            notes: clean(form.notes),
            created_at: Utc::now().trunc_subsecs(3),
            status: LeadStatus::New,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> &LeadId {
        &self.id
    }

    /// Contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact e-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Company, if given.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Website, if given.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Social profile links.
    pub fn social_media(&self) -> &SocialMedia {
        &self.social_media
    }

    /// Free-text notes, if given.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// When the lead was collected.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current lifecycle status.
    pub fn status(&self) -> LeadStatus {
        self.status
    }

    /// Moves the lead to another status.
    pub fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Same shape a browser `Date` serializes to: `2026-10-17T09:30:00.123Z`.
fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
