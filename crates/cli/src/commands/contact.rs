//! butter contact command

use butter_adapter::gateway::LoggingContactGateway;
use butter_domain::{ContactGateway, ContactReceipt, ContactSubmission};
use clap::Args;
use console::style;
use shared::ButterError;

use crate::context::Context;

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Email address to reply to
    #[arg(long)]
    pub email: String,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// What you'd like to talk about
    #[arg(short, long)]
    pub message: String,
}

impl ContactCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let mut gateway = LoggingContactGateway::new();
        let receipt = submit(&mut gateway, self.submission())?;

        if ctx.json {
            println!(
                "{}",
                serde_json::json!({
                    "reference": receipt.reference,
                    "receivedAt": receipt.received_at,
                })
            );
        } else {
            println!(
                "{} Thanks {}, we'll be in touch. Reference: {}",
                style("✓").green(),
                self.name.trim(),
                style(&receipt.reference).bold()
            );
        }
        Ok(())
    }

    fn submission(&self) -> ContactSubmission {
        let submission = ContactSubmission::new(&self.name, &self.email, &self.message);
        match &self.company {
            Some(company) if !company.trim().is_empty() => submission.with_company(company),
            _ => submission,
        }
    }
}

/// Validate, then hand to the gateway
pub fn submit<G: ContactGateway>(
    gateway: &mut G,
    submission: ContactSubmission,
) -> shared::Result<ContactReceipt> {
    submission.validate().map_err(ButterError::from)?;
    Ok(gateway.submit(&submission)?)
}
