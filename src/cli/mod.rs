//! CLI module for the admissions FAQ assistant
//!
//! Subcommands:
//! - `serve`: HTTP API server
//! - `ask`: answer one question and exit
//! - `chat`: interactive conversation
//! - `documents`: list the knowledge store

pub mod ask;
pub mod chat;
pub mod documents;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Admissions FAQ Assistant - answers college admission questions
#[derive(Parser)]
#[command(name = "admissions-faq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// JSON or TOML file replacing the built-in documents
    #[arg(long, global = true, value_name = "PATH")]
    pub knowledge_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Answer a single question
    Ask(ask::AskArgs),

    /// Start an interactive chat
    Chat,

    /// List the documents in the knowledge store
    Documents(documents::DocumentsArgs),
}

/// Load `.env`, configuration and CLI overrides, then start logging
pub fn bootstrap(global: &GlobalArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, global);
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, global: &GlobalArgs) {
    if let Some(path) = &global.knowledge_file {
        config.assistant.knowledge_file = Some(path.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_with_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "admissions-faq",
            "ask",
            "hostel",
            "fees",
            "--knowledge-file",
            "docs.json",
        ])
        .unwrap();

        assert_eq!(cli.global.knowledge_file, Some(PathBuf::from("docs.json")));
        match cli.command {
            Command::Ask(args) => assert_eq!(args.query, vec!["hostel", "fees"]),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_knowledge_file_override() {
        let mut config = AppConfig::default();
        apply_overrides(
            &mut config,
            &GlobalArgs {
                knowledge_file: Some(PathBuf::from("faq.toml")),
            },
        );

        assert_eq!(
            config.assistant.knowledge_file,
            Some(PathBuf::from("faq.toml"))
        );
    }

    #[test]
    fn test_no_override_keeps_config() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &GlobalArgs::default());

        assert!(config.assistant.knowledge_file.is_none());
    }
}
