//! CLI command definitions and handlers.

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::RecencyFilter;
use config::Config;
use output::OutputFormat;

/// nook - Apple Notes from the terminal
#[derive(Parser, Debug)]
#[command(name = "nook", version, about, long_about = None)]
pub struct Cli {
    /// Limit to accounts whose name contains this (case-insensitive)
    #[arg(short = 'a', long, global = true)]
    pub account: Option<String>,

    /// Include every account instead of iCloud only
    #[arg(long, global = true)]
    pub all_accounts: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes (also the default when no command is given)
    #[command(name = "ls")]
    Ls(ListArgs),

    /// Show full note content
    Read(ReadArgs),

    /// Create a new note
    Add(AddArgs),

    /// Modify a note
    Edit(EditArgs),

    /// Delete one or more notes
    Delete(DeleteArgs),

    /// Search notes by title or content
    Search(SearchArgs),

    /// List folders with note counts
    Folders(FoldersArgs),

    /// Create a new folder
    Mkfolder(MkfolderArgs),

    /// List accounts
    Accounts(AccountsArgs),

    /// Check Notes automation permission
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` command
#[derive(Parser, Debug, Default)]
pub struct ListArgs {
    /// Recency filter
    #[arg(value_enum)]
    pub filter: Option<RecencyFilter>,

    /// Limit to a specific folder
    #[arg(short = 'f', long)]
    pub folder: Option<String>,

    /// Maximum number of notes to show
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `read` command
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Index (1, 2, 3) or id prefix from the ls output
    pub id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note body content
    #[arg(short = 'b', long)]
    pub body: Option<String>,

    /// Folder name (defaults to the "Notes" folder)
    #[arg(short = 'f', long)]
    pub folder: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Index or id prefix from the ls output
    pub id: String,

    /// New title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// New body content
    #[arg(short = 'b', long)]
    pub body: Option<String>,

    /// Move to folder
    #[arg(short = 'f', long)]
    pub folder: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Indexes or id prefixes from the ls output
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Preview the notes without deleting them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Restrict to a folder
    #[arg(short = 'f', long)]
    pub folder: Option<String>,

    /// Maximum number of results
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `folders` command
#[derive(Parser, Debug)]
pub struct FoldersArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `mkfolder` command
#[derive(Parser, Debug)]
pub struct MkfolderArgs {
    /// Name for the new folder
    pub name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `accounts` command
#[derive(Parser, Debug)]
pub struct AccountsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `status` command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Effective per-invocation options: CLI flags layered over the config file.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    pub account: Option<String>,
    pub all_accounts: bool,
    pub limit: Option<usize>,
}

impl Runtime {
    /// CLI flags take precedence over config file defaults.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            account: cli.account.clone().or_else(|| config.account.clone()),
            all_accounts: cli.all_accounts || config.all_accounts.unwrap_or(false),
            limit: config.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_default_invocation() {
        let cli = Cli::try_parse_from(["nook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.account.is_none());
        assert!(!cli.all_accounts);
    }

    #[test]
    fn ls_accepts_filter_and_limit() {
        let cli = Cli::try_parse_from(["nook", "ls", "today", "-l", "5", "-f", "Work"]).unwrap();
        match cli.command {
            Some(Command::Ls(args)) => {
                assert_eq!(args.filter, Some(RecencyFilter::Today));
                assert_eq!(args.limit, Some(5));
                assert_eq!(args.folder.as_deref(), Some("Work"));
            }
            other => panic!("expected ls, got {other:?}"),
        }
    }

    #[test]
    fn delete_requires_at_least_one_id() {
        assert!(Cli::try_parse_from(["nook", "delete"]).is_err());
        let cli = Cli::try_parse_from(["nook", "delete", "1", "2"]).unwrap();
        match cli.command {
            Some(Command::Delete(args)) => assert_eq!(args.ids, vec!["1", "2"]),
            other => panic!("expected delete, got {other:?}"),
        }
    }

    #[test]
    fn account_flag_is_global() {
        let cli = Cli::try_parse_from(["nook", "ls", "--account", "Work"]).unwrap();
        assert_eq!(cli.account.as_deref(), Some("Work"));
    }

    #[test]
    fn runtime_prefers_cli_over_config() {
        let cli = Cli::try_parse_from(["nook", "--account", "Work"]).unwrap();
        let config = Config {
            account: Some("Home".to_string()),
            all_accounts: Some(true),
            limit: Some(50),
        };
        let runtime = Runtime::new(&cli, &config);
        assert_eq!(runtime.account.as_deref(), Some("Work"));
        assert!(runtime.all_accounts, "config default applies when flag unset");
        assert_eq!(runtime.limit, Some(50));
    }
}
