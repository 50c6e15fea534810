//! Ask command - answers one question and exits

use clap::Args;

use super::GlobalArgs;
use crate::domain::DomainError;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question text; multiple words are joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Print the full resolution as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskArgs {
    fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

pub fn run(global: &GlobalArgs, args: AskArgs) -> anyhow::Result<()> {
    let config = super::bootstrap(global)?;
    let resolver = crate::create_resolver(&config)?;

    let query = args.query_text();
    if query.trim().is_empty() {
        return Err(DomainError::validation("Query cannot be empty").into());
    }

    let resolution = resolver.resolve(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.answer);
    }

    Ok(())
}
