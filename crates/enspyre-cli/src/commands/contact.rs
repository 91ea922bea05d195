//! `contact` command: the site's contact form.

use enspyre_contact::{ContactClient, ContactMessage};
use std::io::Write;

use crate::Result;

/// Printed once the relay accepts a message.
pub const SEND_SUCCESS: &str = "Message sent. We'll get back to you soon.";

/// Sends `message` through `client` and reports the outcome.
pub async fn cmd_contact<W: Write>(
    client: &ContactClient,
    message: &ContactMessage,
    out: &mut W,
) -> Result<()> {
    client.send(message).await?;
    writeln!(out, "{SEND_SUCCESS}")?;
    Ok(())
}
