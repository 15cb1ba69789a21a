//! Vault items and the list transform behind the vault page.
//!
//! The item collection is mock data, never persisted. Favorites and group
//! expansion are session-local sets keyed by item id and title; the display
//! list is rebuilt from scratch on every query.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Login,
    Card,
    Note,
    Wifi,
    Bank,
    Identity,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Login => "login",
            ItemKind::Card => "card",
            ItemKind::Note => "note",
            ItemKind::Wifi => "wifi",
            ItemKind::Bank => "bank",
            ItemKind::Identity => "identity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Login => "Logins",
            ItemKind::Card => "Cards",
            ItemKind::Note => "Secure Notes",
            ItemKind::Wifi => "WiFi",
            ItemKind::Bank => "Bank",
            ItemKind::Identity => "Identities",
        }
    }

    pub const ALL: [ItemKind; 6] = [
        ItemKind::Login,
        ItemKind::Card,
        ItemKind::Note,
        ItemKind::Wifi,
        ItemKind::Bank,
        ItemKind::Identity,
    ];
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "login" => Ok(ItemKind::Login),
            "card" => Ok(ItemKind::Card),
            "note" => Ok(ItemKind::Note),
            "wifi" => Ok(ItemKind::Wifi),
            "bank" => Ok(ItemKind::Bank),
            "identity" => Ok(ItemKind::Identity),
            other => bail!("unknown item kind '{other}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Grouping key: items sharing a title collapse into one group card.
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub favorite: bool,
    pub category: String,
    pub last_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
}

impl VaultItem {
    fn new(id: &str, kind: ItemKind, title: &str, subtitle: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            username: None,
            password: None,
            url: None,
            card_number: None,
            expiry: None,
            cvv: None,
            notes: None,
            favorite: false,
            category: String::new(),
            last_used: String::new(),
            strength: None,
        }
    }
}

/// The demo collection backing every vault view.
pub fn mock_items() -> Vec<VaultItem> {
    vec![
        VaultItem {
            username: Some("personal.email@gmail.com".into()),
            password: Some("very-secure-password-123".into()),
            url: Some("google.com".into()),
            favorite: true,
            category: "Personal".into(),
            last_used: "2 hours ago".into(),
            strength: Some(Strength::Strong),
            ..VaultItem::new("1", ItemKind::Login, "Google", "personal.email@gmail.com")
        },
        VaultItem {
            username: Some("family.plan@gmail.com".into()),
            password: Some("password123".into()),
            url: Some("netflix.com".into()),
            category: "Entertainment".into(),
            last_used: "1 day ago".into(),
            strength: Some(Strength::Weak),
            ..VaultItem::new("2", ItemKind::Login, "Netflix", "family.plan@gmail.com")
        },
        VaultItem {
            card_number: Some("4242 4242 4242 4242".into()),
            expiry: Some("12/28".into()),
            cvv: Some("123".into()),
            favorite: true,
            category: "Finance".into(),
            last_used: "3 days ago".into(),
            ..VaultItem::new("3", ItemKind::Card, "Chase Sapphire", "•••• 4242")
        },
        VaultItem {
            notes: Some("XXX-XX-XXXX".into()),
            category: "Personal".into(),
            last_used: "1 week ago".into(),
            ..VaultItem::new("4", ItemKind::Note, "Social Security Number", "Secure Identity")
        },
        VaultItem {
            username: Some("dev_wizard".into()),
            password: Some("github-token-secure-hash".into()),
            url: Some("github.com".into()),
            favorite: true,
            category: "Work".into(),
            last_used: "Just now".into(),
            strength: Some(Strength::Strong),
            ..VaultItem::new("5", ItemKind::Login, "GitHub", "dev_wizard")
        },
        VaultItem {
            password: Some("complex-wifi-password-99".into()),
            category: "Home".into(),
            last_used: "1 month ago".into(),
            ..VaultItem::new("6", ItemKind::Wifi, "Home WiFi 5G", "Network Access")
        },
        VaultItem {
            username: Some("shopper@example.com".into()),
            password: Some("amazon-pass-phrase".into()),
            url: Some("amazon.com".into()),
            category: "Shopping".into(),
            last_used: "2 days ago".into(),
            strength: Some(Strength::Medium),
            ..VaultItem::new("7", ItemKind::Login, "Amazon", "shopper@example.com")
        },
        // Second Google login so the demo data exercises title grouping.
        VaultItem {
            username: Some("work.account@gmail.com".into()),
            password: Some("rotating-work-passphrase".into()),
            url: Some("google.com".into()),
            category: "Work".into(),
            last_used: "3 hours ago".into(),
            strength: Some(Strength::Strong),
            ..VaultItem::new("8", ItemKind::Login, "Google", "work.account@gmail.com")
        },
    ]
}

/// Category tabs as the vault page shows them ("all" plus one per kind).
pub fn category_tabs() -> Vec<(&'static str, &'static str)> {
    let mut tabs = vec![("all", "All Items")];
    tabs.extend(ItemKind::ALL.iter().map(|k| (k.as_str(), k.label())));
    tabs
}

/// Known "last used" strings ranked in hours. Anything outside this table
/// sorts last.
static LAST_USED_HOURS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("Just now", 0),
        ("1 hour ago", 1),
        ("2 hours ago", 2),
        ("3 hours ago", 3),
        ("1 day ago", 24),
        ("2 days ago", 48),
        ("3 days ago", 72),
        ("5 days ago", 120),
        ("1 week ago", 168),
        ("2 weeks ago", 336),
        ("3 weeks ago", 504),
        ("1 month ago", 720),
    ])
});

pub fn last_used_hours(label: &str) -> Option<u32> {
    LAST_USED_HOURS.get(label).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Favorite,
    LastUsed,
}

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// `None` is the "all" tab.
    pub category: Option<ItemKind>,
    pub search: String,
    pub favorites_only: bool,
    pub sort: Option<SortKey>,
}

impl ListQuery {
    pub fn matches(&self, item: &VaultItem, favorites: &HashSet<String>) -> bool {
        let matches_category = self.category.map_or(true, |k| item.kind == k);
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || item.title.to_lowercase().contains(&needle)
            || item
                .username
                .as_deref()
                .map_or(false, |u| u.to_lowercase().contains(&needle));
        let matches_favorite = !self.favorites_only || favorites.contains(&item.id);
        matches_category && matches_search && matches_favorite
    }
}

/// Filter then sort. All sorts are stable, so ties keep mock order.
pub fn filter_items(
    items: &[VaultItem],
    query: &ListQuery,
    favorites: &HashSet<String>,
) -> Vec<VaultItem> {
    let mut filtered: Vec<VaultItem> = items
        .iter()
        .filter(|i| query.matches(i, favorites))
        .cloned()
        .collect();
    match query.sort {
        Some(SortKey::Name) => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
        Some(SortKey::Favorite) => filtered.sort_by_key(|i| !favorites.contains(&i.id)),
        Some(SortKey::LastUsed) => filtered.sort_by_key(|i| {
            last_used_hours(&i.last_used).map_or((true, 0), |h| (false, h))
        }),
        None => {}
    }
    filtered
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemGroup {
    pub title: String,
    pub items: Vec<VaultItem>,
}

/// Group by identical title, preserving first-seen order.
pub fn group_by_title(items: Vec<VaultItem>) -> Vec<ItemGroup> {
    let mut groups: Vec<ItemGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.title == item.title) {
            Some(group) => group.items.push(item),
            None => groups.push(ItemGroup {
                title: item.title.clone(),
                items: vec![item],
            }),
        }
    }
    groups
}

/// One card slot in the rendered list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayEntry {
    Item(VaultItem),
    Group(ItemGroup),
}

/// Flatten groups into display order: expanded groups show their members
/// individually, singletons show directly, the rest collapse to one group
/// card.
pub fn build_display(groups: Vec<ItemGroup>, expanded: &HashSet<String>) -> Vec<DisplayEntry> {
    let mut display = Vec::new();
    for group in groups {
        if expanded.contains(&group.title) || group.items.len() == 1 {
            display.extend(group.items.into_iter().map(DisplayEntry::Item));
        } else {
            display.push(DisplayEntry::Group(group));
        }
    }
    display
}

/// Full pipeline: filter + sort + group + flatten.
pub fn display_list(
    items: &[VaultItem],
    query: &ListQuery,
    favorites: &HashSet<String>,
    expanded: &HashSet<String>,
) -> Vec<DisplayEntry> {
    build_display(group_by_title(filter_items(items, query, favorites)), expanded)
}

/// Ids flagged favorite in the mock data seed the session's favorites set.
pub fn seed_favorites(items: &[VaultItem]) -> HashSet<String> {
    items
        .iter()
        .filter(|i| i.favorite)
        .map(|i| i.id.clone())
        .collect()
}

/// Toggle membership; returns whether the value is now present. Used for
/// both the favorites set (item ids) and the expanded set (group titles).
pub fn toggle_member(set: &mut HashSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

pub fn find_item<'a>(items: &'a [VaultItem], id: &str) -> Result<&'a VaultItem> {
    items
        .iter()
        .find(|i| i.id == id)
        .with_context(|| format!("no vault item with id '{id}'"))
}
