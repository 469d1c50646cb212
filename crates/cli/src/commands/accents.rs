//! butter accents command

use butter_domain::Accent;
use clap::Args;
use console::style;

use crate::context::Context;

#[derive(Debug, Args)]
pub struct AccentsCommand {}

impl AccentsCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        if ctx.json {
            let list: Vec<serde_json::Value> = Accent::all()
                .iter()
                .map(|a| serde_json::json!({ "slug": a.slug(), "name": a.display_name() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        println!("Supported accents:");
        for accent in Accent::all() {
            println!("  {:<16} {}", style(accent.slug()).cyan(), accent.display_name());
        }
        Ok(())
    }
}
