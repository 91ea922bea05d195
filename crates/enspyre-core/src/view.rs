//! Dashboard views derived from a listed lead collection.
//!
//! Nothing here touches storage. The management dashboard lists every lead
//! once, then narrows, counts and labels that list in memory:
//!
//! - [`LeadFilter`]: search term plus status filter
//! - [`LeadStats`]: the counters above the lead grid
//! - [`EmptyState`]: which message to show when nothing is left to render

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::{Lead, LeadStatus};

// ============================================================================
// Filtering
// ============================================================================

/// Status half of a [`LeadFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only leads with exactly this status pass.
    Only(LeadStatus),
}

impl StatusFilter {
    /// Label shown in the status dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Leads",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Returns `true` if a lead with `status` passes.
    pub fn accepts(&self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl From<LeadStatus> for StatusFilter {
    fn from(status: LeadStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<LeadStatus>().map(StatusFilter::Only)
    }
}

/// Search term and status filter applied by the management view.
///
/// The search is a case-insensitive substring match against name, e-mail
/// and company. Whitespace around the term is ignored, so a blank search
/// matches everything. Both halves must pass.
///
/// # Examples
///
/// ```
/// use enspyre_core::{Lead, LeadFilter, LeadFormData};
///
/// let leads = vec![
///     Lead::from_form(LeadFormData { company: Some("Acme".into()), ..LeadFormData::new("A", "a@x.io") }),
///     Lead::from_form(LeadFormData { company: Some("Beta".into()), ..LeadFormData::new("B", "b@x.io") }),
/// ];
///
/// let filter = LeadFilter::search("ACME");
/// let hits = filter.apply(&leads);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFilter {
    /// Free-text search term.
    #[serde(default)]
    pub search: String,

    /// Status restriction.
    #[serde(default)]
    pub status: StatusFilter,
}

impl LeadFilter {
    /// A filter that passes every lead.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter with only a search term.
    pub fn search<S: Into<String>>(term: S) -> Self {
        Self {
            search: term.into(),
            status: StatusFilter::All,
        }
    }

    /// Restricts the filter to one status.
    pub fn with_status<F: Into<StatusFilter>>(mut self, status: F) -> Self {
        self.status = status.into();
        self
    }

    /// Returns `true` if neither half narrows anything.
    pub fn is_noop(&self) -> bool {
        self.search.trim().is_empty() && self.status == StatusFilter::All
    }

    /// Returns `true` if `lead` passes both halves.
    pub fn matches(&self, lead: &Lead) -> bool {
        self.status.accepts(lead.status()) && self.matches_search(lead)
    }

    /// Leads that pass, in their original order.
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }

    // Surrounding whitespace is trimmed off the term before matching.
    fn matches_search(&self, lead: &Lead) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let hit = |field: &str| field.to_lowercase().contains(&term);
        hit(lead.name()) || hit(lead.email()) || lead.company().is_some_and(hit)
    }
}

// ============================================================================
// Counters
// ============================================================================

/// Per-status counters over a lead collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStats {
    /// Number of leads.
    pub total: usize,
    /// Leads in [`LeadStatus::New`].
    pub new: usize,
    /// Leads in [`LeadStatus::Contacted`].
    pub contacted: usize,
    /// Leads in [`LeadStatus::Interested`].
    pub interested: usize,
    /// Leads in [`LeadStatus::Converted`].
    pub converted: usize,
    /// Leads in [`LeadStatus::NotInterested`].
    pub not_interested: usize,
}

impl LeadStats {
    /// Counts a collection.
    pub fn from_leads<'a, I>(leads: I) -> Self
    where
        I: IntoIterator<Item = &'a Lead>,
    {
        let mut stats = Self::default();
        for lead in leads {
            stats.total += 1;
            *stats.slot(lead.status()) += 1;
        }
        stats
    }

    /// Count for one status.
    pub fn count(&self, status: LeadStatus) -> usize {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Interested => self.interested,
            LeadStatus::Converted => self.converted,
            LeadStatus::NotInterested => self.not_interested,
        }
    }

    fn slot(&mut self, status: LeadStatus) -> &mut usize {
        match status {
            LeadStatus::New => &mut self.new,
            LeadStatus::Contacted => &mut self.contacted,
            LeadStatus::Interested => &mut self.interested,
            LeadStatus::Converted => &mut self.converted,
            LeadStatus::NotInterested => &mut self.not_interested,
        }
    }
}

// ============================================================================
// Empty state
// ============================================================================

/// Why the lead grid is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been collected yet.
    NoLeads,
    /// Leads exist but the filter hides all of them.
    NoMatches,
}

impl EmptyState {
    /// Classifies an empty result.
    ///
    /// Returns `None` when `shown` is non-zero and there is nothing to
    /// explain.
    pub fn classify(total: usize, shown: usize) -> Option<Self> {
        match (total, shown) {
            (_, shown) if shown > 0 => None,
            (0, _) => Some(EmptyState::NoLeads),
            _ => Some(EmptyState::NoMatches),
        }
    }

    /// Headline shown for either case.
    pub fn headline(&self) -> &'static str {
        "No leads found"
    }

    /// Hint telling the user what to do next.
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoLeads => "Start collecting leads using the form above.",
            EmptyState::NoMatches => "Try adjusting your search or filter criteria.",
        }
    }
}

/// Website as displayed on a lead card, without the `http(s)://` prefix.
pub fn display_website(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::LeadFormData;

    fn lead(name: &str, email: &str, company: Option<&str>) -> Lead {
        Lead::from_form(LeadFormData {
            company: company.map(str::to_string),
            ..LeadFormData::new(name, email)
        })
    }

    fn companies() -> Vec<Lead> {
        vec![
            lead("Ann", "ann@one.io", Some("Acme")),
            lead("Bob", "bob@two.io", Some("Beta")),
            lead("Cid", "cid@three.io", Some("Acme Corp")),
        ]
    }

    #[test]
    fn test_search_matches_company_case_insensitively() {
        let leads = companies();
        for term in ["acme", "ACME", "AcMe"] {
            let names: Vec<_> = LeadFilter::search(term)
                .apply(&leads)
                .into_iter()
                .map(Lead::name)
                .collect();
            assert_eq!(names, vec!["Ann", "Cid"], "term {term}");
        }
    }

    #[test]
    fn test_search_matches_name_and_email() {
        let leads = companies();
        assert_eq!(LeadFilter::search("bob").apply(&leads).len(), 1);
        assert_eq!(LeadFilter::search("@THREE.io").apply(&leads).len(), 1);
        assert_eq!(LeadFilter::search("zzz").apply(&leads).len(), 0);
    }

    #[test]
    fn test_search_ignores_missing_company() {
        let leads = vec![lead("Dee", "dee@four.io", None)];
        assert!(LeadFilter::search("acme").apply(&leads).is_empty());
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let leads = companies();
        let names: Vec<_> = LeadFilter::search("  acme ")
            .apply(&leads)
            .into_iter()
            .map(Lead::name)
            .collect();
        assert_eq!(names, vec!["Ann", "Cid"]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let leads = companies();
        assert_eq!(LeadFilter::search("   ").apply(&leads).len(), 3);
        assert!(LeadFilter::search("  ").is_noop());
        assert!(LeadFilter::all().is_noop());
    }

    #[test]
    fn test_status_filter_intersects_search() {
        let mut leads = companies();
        leads[2].set_status(LeadStatus::Converted);

        let filter = LeadFilter::search("acme").with_status(LeadStatus::Converted);
        let hits = filter.apply(&leads);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Cid");
        assert!(!filter.is_noop());

        let only_new = LeadFilter::all().with_status(LeadStatus::New);
        assert_eq!(only_new.apply(&leads).len(), 2);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "interested".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(LeadStatus::Interested)
        );
        assert!("maybe".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_labels() {
        assert_eq!(StatusFilter::All.label(), "All Leads");
        assert_eq!(
            StatusFilter::Only(LeadStatus::NotInterested).label(),
            "Not Interested"
        );
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(
            StatusFilter::Only(LeadStatus::Converted).to_string(),
            "converted"
        );
    }

    #[test]
    fn test_stats_counts_by_status() {
        let mut leads = companies();
        leads[0].set_status(LeadStatus::Interested);
        leads[1].set_status(LeadStatus::Converted);

        let stats = LeadStats::from_leads(&leads);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.interested, 1);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.count(LeadStatus::Contacted), 0);

        let summed: usize = LeadStatus::ALL.iter().map(|s| stats.count(*s)).sum();
        assert_eq!(summed, stats.total);
    }

    #[test]
    fn test_stats_empty() {
        let none: Vec<Lead> = Vec::new();
        assert_eq!(LeadStats::from_leads(&none), LeadStats::default());
    }

    #[test]
    fn test_empty_state_classification() {
        assert_eq!(EmptyState::classify(0, 0), Some(EmptyState::NoLeads));
        assert_eq!(EmptyState::classify(4, 0), Some(EmptyState::NoMatches));
        assert_eq!(EmptyState::classify(4, 2), None);
    }

    #[test]
    fn test_empty_state_messages_differ() {
        assert_eq!(EmptyState::NoLeads.headline(), EmptyState::NoMatches.headline());
        assert_ne!(EmptyState::NoLeads.message(), EmptyState::NoMatches.message());
        assert!(EmptyState::NoLeads.message().contains("Start collecting"));
    }

    #[test]
    fn test_display_website() {
        assert_eq!(display_website("https://acme.io"), "acme.io");
        assert_eq!(display_website("http://acme.io/about"), "acme.io/about");
        assert_eq!(display_website("acme.io"), "acme.io");
    }
}
