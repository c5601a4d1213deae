//! nook - Apple Notes from the terminal

pub mod cli;
pub mod domain;
pub mod error;
pub mod script;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command, ListArgs, Runtime,
    config::Config,
    handlers::{
        handle_accounts, handle_add, handle_completions, handle_delete, handle_edit,
        handle_folders, handle_ls, handle_mkfolder, handle_read, handle_search, handle_status,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let runtime = Runtime::new(&cli, &config);

    match &cli.command {
        Some(Command::Ls(args)) => handle_ls(args, &runtime),
        Some(Command::Read(args)) => handle_read(args, &runtime),
        Some(Command::Add(args)) => handle_add(args, &runtime),
        Some(Command::Edit(args)) => handle_edit(args, &runtime),
        Some(Command::Delete(args)) => handle_delete(args, &runtime),
        Some(Command::Search(args)) => handle_search(args, &runtime),
        Some(Command::Folders(args)) => handle_folders(args, &runtime),
        Some(Command::Mkfolder(args)) => handle_mkfolder(args, &runtime),
        Some(Command::Accounts(args)) => handle_accounts(args, &runtime),
        Some(Command::Status(args)) => handle_status(args, &runtime),
        Some(Command::Completions(args)) => handle_completions(args),
        // Bare `nook` behaves like `nook ls`.
        None => handle_ls(&ListArgs::default(), &runtime),
    }
}
