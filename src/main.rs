mod accounts;
mod cli;
mod cli_admin;
mod cli_vault;
mod commands;
/// SecureVault main — subcommands + interactive shell by default.
mod config;
mod files;
mod io;
mod notes;
mod security;
mod shell;
mod store;
mod vault;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser; // trait import enables SecureVaultCli::parse()

use crate::cli::{Command, SecureVaultCli};
use crate::config::resolve_config_path;
use crate::store::LocalStore;

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("SecureVault"));
}

fn main() -> Result<()> {
    set_console_title();

    let args = SecureVaultCli::parse();

    let cfg_path = resolve_config_path(&args.config);

    // No subcommand: open the interactive vault shell.
    let Some(cmd) = args.cmd else {
        return shell::start(cfg_path, args.store);
    };

    let mut store = open_store(&args.store)?;

    match cmd {
        Command::Login { email, password } => commands::auth::login(&mut store, &email, &password),
        Command::Register {
            email,
            password,
            confirm,
            plan,
        } => commands::auth::register(&mut store, &email, &password, &confirm, plan.into()),
        Command::Logout => commands::auth::logout(&mut store),
        Command::Whoami { json } => commands::auth::whoami(&store, json),
        Command::Vault { cmd } => commands::vault::dispatch(cmd),
        Command::Admin { cmd } => commands::admin::dispatch(cmd, &mut store),
        Command::Notes { cmd } => commands::notes::dispatch(cmd, &mut store),
        Command::Files { cmd } => commands::files::dispatch(cmd, &mut store),
        Command::Security { json } => commands::security::security(json),
        Command::Dashboard { json, tui } => commands::security::dashboard(json, tui),
        Command::Settings { cmd } => commands::settings::dispatch(cmd, cfg_path),
    }
}

fn open_store(path: &Option<PathBuf>) -> Result<LocalStore> {
    match path {
        Some(p) => LocalStore::from_path(p),
        None => LocalStore::open_default(),
    }
}
