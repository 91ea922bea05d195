//! Command handlers.
//!
//! Handlers write to any [`std::io::Write`] so tests can capture output.
//! [`run`] wires them to stdout/stdin and the configured backends.

pub mod config;
pub mod contact;
pub mod leads;

use enspyre_contact::{ContactClient, ContactMessage};
use enspyre_core::LeadId;
use enspyre_store::LeadStore;
use std::io;

use crate::Result;
use crate::cli::{Command, LeadsAction, lead_filter};
use crate::config::EnspyreConfig;

/// Dispatches a parsed command.
pub async fn run(
    command: Command,
    config: &EnspyreConfig,
    config_path: Option<&str>,
) -> Result<()> {
    match command {
        Command::Leads { action } => run_leads(action, config),
        Command::Contact { email, message } => {
            let client = ContactClient::new(&config.contact)?;
            let message = ContactMessage::new(email, message);
            contact::cmd_contact(&client, &message, &mut io::stdout()).await
        }
        Command::Config { action } => {
            self::config::handle_config_command(config, config_path, action)
        }
    }
}

fn run_leads(action: LeadsAction, config: &EnspyreConfig) -> Result<()> {
    let substrate = config.storage.open()?;
    let mut store = LeadStore::with_key(substrate, config.storage.key.clone());
    let mut out = io::stdout().lock();

    match action {
        LeadsAction::Add(args) => {
            leads::cmd_leads_add(&mut store, args.into(), &mut out).map(|_| ())
        }
        LeadsAction::List {
            search,
            status,
            json,
        } => leads::cmd_leads_list(&store, &lead_filter(&search, status), json, &mut out),
        LeadsAction::Show { id, json } => {
            leads::cmd_leads_show(&store, &LeadId::from(id), json, &mut out)
        }
        LeadsAction::Status { id, status } => {
            leads::cmd_leads_status(&mut store, &LeadId::from(id), status, &mut out)
        }
        LeadsAction::Delete { id, yes } => {
            let id = LeadId::from(id);
            if !yes && !leads::confirm_delete(&mut io::stdin().lock(), &mut out)? {
                return Ok(());
            }
            leads::cmd_leads_delete(&mut store, &id, &mut out)
        }
        LeadsAction::Stats => leads::cmd_leads_stats(&store, &mut out),
    }
}
