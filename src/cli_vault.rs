use clap::{ArgAction, Args, Subcommand, ValueEnum};

use crate::vault::{ItemKind, SortKey};

#[derive(Debug, Subcommand)]
pub enum VaultCommand {
    /// List items with the vault page's filter/search/sort controls
    List(VaultListArgs),
    /// Show one item in full (absent fields are simply omitted)
    Show(VaultShowArgs),
    /// Toggle an item in the favorites set
    #[command(name = "favorite", visible_alias = "fav")]
    Favorite(VaultFavoriteArgs),
    /// Print the category tabs
    Categories,
}

#[derive(Debug, Args)]
pub struct VaultListArgs {
    /// Category tab
    #[arg(long, value_enum, default_value_t = CategoryArg::All)]
    pub category: CategoryArg,

    /// Case-insensitive search over title and username
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Only favorited items
    #[arg(long = "favorites", action = ArgAction::SetTrue)]
    pub favorites_only: bool,

    /// Sort policy (default: mock order)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Expand the group with this title (repeatable)
    #[arg(long = "expand", value_name = "TITLE")]
    pub expand: Vec<String>,

    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Render a read-only terminal view (q/Esc to exit)
    #[arg(long, action = ArgAction::SetTrue)]
    pub tui: bool,
}

#[derive(Debug, Args)]
pub struct VaultShowArgs {
    #[arg(value_name = "ID")]
    pub id: String,
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct VaultFavoriteArgs {
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CategoryArg {
    #[default]
    All,
    Login,
    Card,
    Note,
    Wifi,
    Bank,
    Identity,
}

impl CategoryArg {
    pub fn to_kind(self) -> Option<ItemKind> {
        match self {
            CategoryArg::All => None,
            CategoryArg::Login => Some(ItemKind::Login),
            CategoryArg::Card => Some(ItemKind::Card),
            CategoryArg::Note => Some(ItemKind::Note),
            CategoryArg::Wifi => Some(ItemKind::Wifi),
            CategoryArg::Bank => Some(ItemKind::Bank),
            CategoryArg::Identity => Some(ItemKind::Identity),
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortArg {
    Name,
    Favorite,
    LastUsed,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Favorite => SortKey::Favorite,
            SortArg::LastUsed => SortKey::LastUsed,
        }
    }
}
