use clap::{ArgAction, Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::accounts::UserStatus;
use crate::cli::PlanArg;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Sign in with the demo admin credentials
    Login {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// End the admin session
    Logout,
    /// List users with status filter and email search
    List(AdminListArgs),
    /// Full record for one user
    Show {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Activate a pending account
    Approve {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Mark a pending account inactive
    Reject {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Move an account to trash
    Trash {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Restore a trashed account to active
    Restore {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Directly override plan and/or status
    Edit(AdminEditArgs),
    /// Export users as CSV (stdout unless --out)
    Export {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Mock announcement to the currently filtered users
    Announce(AdminAnnounceArgs),
    /// User totals and mock monthly revenue
    Stats {
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct AdminListArgs {
    /// Restrict to one status (default: all)
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Case-insensitive email substring
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AdminEditArgs {
    #[arg(value_name = "EMAIL")]
    pub email: String,
    #[arg(long, value_enum)]
    pub plan: Option<PlanArg>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Debug, Args)]
pub struct AdminAnnounceArgs {
    #[arg(value_name = "MESSAGE")]
    pub message: String,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StatusArg {
    Pending,
    Active,
    Inactive,
    Trashed,
}

impl From<StatusArg> for UserStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => UserStatus::Pending,
            StatusArg::Active => UserStatus::Active,
            StatusArg::Inactive => UserStatus::Inactive,
            StatusArg::Trashed => UserStatus::Trashed,
        }
    }
}
