//! Security-overview reports for the dashboard and security pages.
//!
//! The score and the reused/duplicate counts are fixed mock values; only
//! the strength breakdown is computed from the item set.

use serde::Serialize;

use crate::vault::{Strength, VaultItem};

/// Fixed mock figures shown on both pages.
pub const MOCK_SECURITY_SCORE: u8 = 98;
pub const MOCK_REUSED_PASSWORDS: usize = 2;
pub const MOCK_DUPLICATE_PASSWORDS: usize = 1;

const RECENT_ITEM_COUNT: usize = 4;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub score: u8,
    pub total_items: usize,
    pub weak: usize,
    pub medium: usize,
    pub strong: usize,
    pub reused_passwords: usize,
    pub duplicate_passwords: usize,
    /// Titles of items tagged weak, for the "update these" list.
    pub weak_titles: Vec<String>,
}

pub fn security_report(items: &[VaultItem]) -> SecurityReport {
    let by_strength = |s: Strength| items.iter().filter(|i| i.strength == Some(s)).count();
    SecurityReport {
        score: MOCK_SECURITY_SCORE,
        total_items: items.len(),
        weak: by_strength(Strength::Weak),
        medium: by_strength(Strength::Medium),
        strong: by_strength(Strength::Strong),
        reused_passwords: MOCK_REUSED_PASSWORDS,
        duplicate_passwords: MOCK_DUPLICATE_PASSWORDS,
        weak_titles: items
            .iter()
            .filter(|i| i.strength == Some(Strength::Weak))
            .map(|i| i.title.clone())
            .collect(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub security_score: u8,
    pub total_items: usize,
    pub weak_passwords: usize,
    pub reused_passwords: usize,
    pub recent: Vec<VaultItem>,
}

pub fn dashboard_summary(items: &[VaultItem]) -> DashboardSummary {
    DashboardSummary {
        security_score: MOCK_SECURITY_SCORE,
        total_items: items.len(),
        weak_passwords: items
            .iter()
            .filter(|i| i.strength == Some(Strength::Weak))
            .count(),
        reused_passwords: MOCK_REUSED_PASSWORDS,
        recent: items.iter().take(RECENT_ITEM_COUNT).cloned().collect(),
    }
}
