//! Command-line argument definitions.

use clap::{Args as ClapArgs, Parser, Subcommand};
use enspyre_core::{LeadFilter, LeadFormData, LeadStatus, StatusFilter};

/// Enspyre lead notebook and contact form
#[derive(Parser, Debug)]
#[command(name = "enspyre")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ENSPYRE_CONFIG")]
    pub config: Option<String>,

    /// Override the lead storage directory
    #[arg(long, global = true, env = "ENSPYRE_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect and manage leads
    Leads {
        /// Lead action
        #[command(subcommand)]
        action: LeadsAction,
    },

    /// Send a message through the contact form relay
    Contact {
        /// Your email address
        #[arg(long)]
        email: String,

        /// Tell us about your project
        #[arg(long)]
        message: String,
    },

    /// Configuration file handling
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Lead notebook actions.
#[derive(Subcommand, Debug)]
pub enum LeadsAction {
    /// Add a lead
    Add(AddLeadArgs),

    /// List leads, optionally filtered
    List {
        /// Match name, email or company (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show one status, or "all"
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one lead
    Show {
        /// Lead id
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change a lead's status
    Status {
        /// Lead id
        id: String,

        /// new, contacted, interested, converted or not_interested
        status: LeadStatus,
    },

    /// Delete a lead
    Delete {
        /// Lead id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show lead counters
    Stats,
}

/// Fields of the lead collection form.
#[derive(ClapArgs, Debug, Clone)]
pub struct AddLeadArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,

    /// LinkedIn profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Twitter/X profile URL
    #[arg(long)]
    pub twitter: Option<String>,

    /// Facebook profile URL
    #[arg(long)]
    pub facebook: Option<String>,

    /// Instagram profile URL
    #[arg(long)]
    pub instagram: Option<String>,

    /// Additional notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddLeadArgs> for LeadFormData {
    fn from(args: AddLeadArgs) -> Self {
        LeadFormData {
            name: args.name,
            email: args.email,
            company: args.company,
            website: args.website,
            linkedin: args.linkedin,
            twitter: args.twitter,
            facebook: args.facebook,
            instagram: args.instagram,
            notes: args.notes,
        }
    }
}

/// Builds the dashboard filter from `leads list` flags.
pub fn lead_filter(search: &str, status: StatusFilter) -> LeadFilter {
    LeadFilter::search(search).with_status(status)
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Print a value by dotted key, e.g. `storage.key`
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Target file (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
