use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::accounts::PlanTier;
use crate::cli_admin::AdminCommand;
use crate::cli_vault::VaultCommand;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum PlanArg {
    #[default]
    FreeTrial,
    Pro,
    Premium,
}

impl From<PlanArg> for PlanTier {
    fn from(arg: PlanArg) -> Self {
        match arg {
            PlanArg::FreeTrial => PlanTier::FreeTrial,
            PlanArg::Pro => PlanTier::Pro,
            PlanArg::Premium => PlanTier::Premium,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "securevault",
    about = "SecureVault — mock credential vault, user approvals, and admin tools",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct SecureVaultCli {
    /// Global: path to settings (TOML); default: ~/.securevault/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: path to the local store; default: ~/.securevault/local_store.json
    #[arg(long = "store", value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in (mock: the password is accepted as-is, status decides)
    Login {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },

    /// Create an account; it lands in the admin approval queue
    Register {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
        #[arg(long = "confirm", value_name = "PASSWORD")]
        confirm: String,
        #[arg(long, value_enum, default_value_t = PlanArg::FreeTrial)]
        plan: PlanArg,
    },

    /// Clear the user session
    Logout,

    /// Show the current session
    Whoami {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Vault page: list, inspect, favorite
    Vault {
        #[command(subcommand)]
        cmd: VaultCommand,
    },

    /// Admin portal: approvals, edits, exports
    Admin {
        #[command(subcommand)]
        cmd: AdminCommand,
    },

    /// Secure notes
    Notes {
        #[command(subcommand)]
        cmd: NotesCommand,
    },

    /// Documents & files
    Files {
        #[command(subcommand)]
        cmd: FilesCommand,
    },

    /// Security check: strength breakdown and recommendations
    Security {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Welcome-back overview (pass --tui for a terminal panel)
    Dashboard {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
        #[arg(long, action = ArgAction::SetTrue)]
        tui: bool,
    },

    /// Preference toggles from the settings page
    Settings {
        #[command(subcommand)]
        cmd: SettingsCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum NotesCommand {
    /// List notes, optionally filtered by a search term
    List {
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Print one note in full
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Create a note (goes to the top of the list)
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(long, value_name = "TEXT")]
        content: String,
    },
    /// Delete a note
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Share a note with a vault-domain address
    Share {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Revoke a shared address
    Unshare {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "EMAIL")]
        email: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// List documents, optionally filtered by name
    List {
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Document details
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Share a document
    Share {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Delete a document permanently
    Rm {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings
    Show {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Flip a toggle or set the timeout
    Set {
        #[arg(value_enum, value_name = "KEY")]
        key: SettingKey,
        /// on|off for toggles, minutes for session-timeout
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SettingKey {
    TwoFactor,
    FingerprintLogin,
    AutoLock,
    SessionTimeout,
    SuspiciousActivity,
    WeakPasswordReminders,
    SecurityUpdates,
}
