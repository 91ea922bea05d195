//! Lead notebook commands: the collection form and the management view.

use enspyre_core::{
    EmptyState, Lead, LeadFilter, LeadFormData, LeadId, LeadStats, LeadStatus, display_website,
};
use enspyre_store::{KeyValueStore, LeadStore};
use std::io::{BufRead, Write};

use crate::{Error, Result};

/// Banner printed after a successful `leads add`.
pub const SAVE_SUCCESS: &str = "Lead added successfully!";

/// Banner printed after a failed `leads add`.
pub const SAVE_FAILURE: &str = "There was an error saving the lead. Please try again.";

/// Saves a lead from form data and prints a success or failure banner.
pub fn cmd_leads_add<S, W>(
    store: &mut LeadStore<S>,
    form: LeadFormData,
    out: &mut W,
) -> Result<Lead>
where
    S: KeyValueStore,
    W: Write,
{
    match store.save(form) {
        Ok(lead) => {
            writeln!(out, "{SAVE_SUCCESS}")?;
            writeln!(out, "  id: {}", lead.id())?;
            Ok(lead)
        }
        Err(e) => {
            writeln!(out, "{SAVE_FAILURE}")?;
            Err(e.into())
        }
    }
}

/// Lists leads passing `filter`, or explains why nothing is shown.
pub fn cmd_leads_list<S, W>(
    store: &LeadStore<S>,
    filter: &LeadFilter,
    json: bool,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let leads = store.list();
    let shown = filter.apply(&leads);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&shown)?)?;
        return Ok(());
    }

    if let Some(empty) = EmptyState::classify(leads.len(), shown.len()) {
        writeln!(out, "{}", empty.headline())?;
        writeln!(out, "{}", empty.message())?;
        return Ok(());
    }

    for lead in &shown {
        write_lead(out, lead)?;
        writeln!(out)?;
    }
    writeln!(out, "Showing {} of {} leads", shown.len(), leads.len())?;
    Ok(())
}

/// Prints one lead.
pub fn cmd_leads_show<S, W>(
    store: &LeadStore<S>,
    id: &LeadId,
    json: bool,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let lead = store
        .get(id)
        .ok_or_else(|| Error::LeadNotFound(id.to_string()))?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&lead)?)?;
    } else {
        write_lead(out, &lead)?;
    }
    Ok(())
}

/// Changes a lead's status. An unknown id changes nothing and is reported.
pub fn cmd_leads_status<S, W>(
    store: &mut LeadStore<S>,
    id: &LeadId,
    status: LeadStatus,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let known = store.get(id).is_some();
    store.update_status(id, status)?;
    if known {
        writeln!(out, "Lead {id} is now {}", status.label())?;
    } else {
        writeln!(out, "No lead with id {id}; nothing changed.")?;
    }
    Ok(())
}

/// Deletes a lead. An unknown id changes nothing and is reported.
pub fn cmd_leads_delete<S, W>(store: &mut LeadStore<S>, id: &LeadId, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let known = store.get(id).is_some();
    store.delete(id)?;
    if known {
        writeln!(out, "Deleted lead {id}")?;
    } else {
        writeln!(out, "No lead with id {id}; nothing changed.")?;
    }
    Ok(())
}

/// Asks before deleting. Only `y` or `yes` confirms.
pub fn confirm_delete<R, W>(input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Are you sure you want to delete this lead? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Prints the dashboard counters.
pub fn cmd_leads_stats<S, W>(store: &LeadStore<S>, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let stats = LeadStats::from_leads(&store.list());
    writeln!(out, "Total Leads: {}", stats.total)?;
    for status in LeadStatus::ALL {
        writeln!(out, "{}: {}", status.label(), stats.count(status))?;
    }
    Ok(())
}

fn write_lead<W: Write>(out: &mut W, lead: &Lead) -> Result<()> {
    writeln!(
        out,
        "{} <{}> [{}]",
        lead.name(),
        lead.email(),
        lead.status().label()
    )?;
    writeln!(out, "  id:        {}", lead.id())?;
    if let Some(company) = lead.company() {
        writeln!(out, "  company:   {company}")?;
    }
    if let Some(website) = lead.website() {
        writeln!(out, "  website:   {}", display_website(website))?;
    }
    for (platform, url) in lead.social_media().links() {
        writeln!(out, "  {:<10} {url}", format!("{platform}:"))?;
    }
    if let Some(notes) = lead.notes() {
        writeln!(out, "  notes:     {notes}")?;
    }
    writeln!(
        out,
        "  collected: {}",
        lead.created_at().format("%b %-d, %Y, %I:%M %p UTC")
    )?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
