use admissions_faq_assistant::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run(&cli.global).await,
        Command::Ask(args) => cli::ask::run(&cli.global, args),
        Command::Chat => cli::chat::run(&cli.global).await,
        Command::Documents(args) => cli::documents::run(&cli.global, args),
    }
}
