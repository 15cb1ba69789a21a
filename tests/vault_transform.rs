use std::collections::HashSet;

use securevault::vault::{
    self, display_list, filter_items, group_by_title, last_used_hours, mock_items, seed_favorites,
    toggle_member, DisplayEntry, ItemKind, ListQuery, SortKey, VaultItem,
};

fn item(id: &str, kind: ItemKind, title: &str, username: Option<&str>, last_used: &str) -> VaultItem {
    VaultItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        subtitle: String::new(),
        username: username.map(str::to_string),
        password: None,
        url: None,
        card_number: None,
        expiry: None,
        cvv: None,
        notes: None,
        favorite: false,
        category: String::new(),
        last_used: last_used.to_string(),
        strength: None,
    }
}

fn no_favorites() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn category_all_returns_every_item() {
    let items = mock_items();
    let filtered = filter_items(&items, &ListQuery::default(), &no_favorites());
    assert_eq!(filtered.len(), items.len());
}

#[test]
fn category_filter_returns_exact_subset() {
    let items = mock_items();
    let query = ListQuery {
        category: Some(ItemKind::Login),
        ..ListQuery::default()
    };
    let filtered = filter_items(&items, &query, &no_favorites());
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|i| i.kind == ItemKind::Login));
    let expected = items.iter().filter(|i| i.kind == ItemKind::Login).count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn search_is_case_insensitive_on_title() {
    let items = mock_items();
    let query = ListQuery {
        search: "GOOGLE".to_string(),
        ..ListQuery::default()
    };
    let filtered = filter_items(&items, &query, &no_favorites());
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|i| i.title == "Google"));
}

#[test]
fn search_matches_username_substring() {
    let items = mock_items();
    let query = ListQuery {
        search: "dev_WIZ".to_string(),
        ..ListQuery::default()
    };
    let filtered = filter_items(&items, &query, &no_favorites());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "GitHub");
}

#[test]
fn favorites_only_respects_the_favorites_set() {
    let items = mock_items();
    let favorites = seed_favorites(&items);
    let query = ListQuery {
        favorites_only: true,
        ..ListQuery::default()
    };
    let filtered = filter_items(&items, &query, &favorites);
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|i| favorites.contains(&i.id)));
}

#[test]
fn identical_titles_are_grouped_in_first_seen_order() {
    let items = vec![
        item("1", ItemKind::Login, "Google", None, "Just now"),
        item("2", ItemKind::Login, "Netflix", None, "1 day ago"),
        item("3", ItemKind::Login, "Google", None, "1 week ago"),
    ];
    let groups = group_by_title(items);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "Google");
    assert_eq!(groups[0].items.len(), 2);
    assert_eq!(groups[1].title, "Netflix");
}

#[test]
fn collapsed_groups_render_as_one_entry() {
    let items = mock_items();
    let display = display_list(&items, &ListQuery::default(), &no_favorites(), &HashSet::new());
    let groups: Vec<_> = display
        .iter()
        .filter(|e| matches!(e, DisplayEntry::Group(_)))
        .collect();
    assert_eq!(groups.len(), 1);
    match groups[0] {
        DisplayEntry::Group(g) => {
            assert_eq!(g.title, "Google");
            assert_eq!(g.items.len(), 2);
        }
        DisplayEntry::Item(_) => unreachable!(),
    }
}

#[test]
fn expanded_groups_render_members_individually() {
    let items = mock_items();
    let mut expanded = HashSet::new();
    expanded.insert("Google".to_string());
    let display = display_list(&items, &ListQuery::default(), &no_favorites(), &expanded);
    assert_eq!(display.len(), items.len());
    assert!(display.iter().all(|e| matches!(e, DisplayEntry::Item(_))));
}

#[test]
fn expansion_toggles_independently_per_title() {
    let mut expanded = HashSet::new();
    assert!(toggle_member(&mut expanded, "Google"));
    assert!(toggle_member(&mut expanded, "Netflix"));
    assert!(!toggle_member(&mut expanded, "Google"));
    assert!(expanded.contains("Netflix"));
    assert!(!expanded.contains("Google"));
}

#[test]
fn sort_by_name_is_lexicographic_non_decreasing() {
    let items = mock_items();
    let query = ListQuery {
        sort: Some(SortKey::Name),
        ..ListQuery::default()
    };
    let sorted = filter_items(&items, &query, &no_favorites());
    let titles: Vec<_> = sorted.iter().map(|i| i.title.clone()).collect();
    let mut expected = titles.clone();
    expected.sort();
    assert_eq!(titles, expected);
}

#[test]
fn sort_by_last_used_ranks_known_strings() {
    let items = vec![
        item("1", ItemKind::Login, "Google", None, "2 hours ago"),
        item("2", ItemKind::Login, "GitHub", None, "Just now"),
    ];
    let query = ListQuery {
        sort: Some(SortKey::LastUsed),
        ..ListQuery::default()
    };
    let sorted = filter_items(&items, &query, &no_favorites());
    assert_eq!(sorted[0].title, "GitHub");
    assert_eq!(sorted[1].title, "Google");
}

#[test]
fn unmapped_last_used_strings_sort_last() {
    assert_eq!(last_used_hours("1 week ago"), Some(168));
    assert_eq!(last_used_hours("ages ago"), None);

    let items = vec![
        item("1", ItemKind::Login, "Mystery", None, "ages ago"),
        item("2", ItemKind::Login, "Old", None, "1 month ago"),
        item("3", ItemKind::Login, "Fresh", None, "Just now"),
    ];
    let query = ListQuery {
        sort: Some(SortKey::LastUsed),
        ..ListQuery::default()
    };
    let sorted = filter_items(&items, &query, &no_favorites());
    let titles: Vec<_> = sorted.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Fresh", "Old", "Mystery"]);
}

#[test]
fn sort_by_favorite_puts_favorited_first_and_is_stable() {
    let items = vec![
        item("1", ItemKind::Login, "Alpha", None, "Just now"),
        item("2", ItemKind::Login, "Beta", None, "Just now"),
        item("3", ItemKind::Login, "Gamma", None, "Just now"),
    ];
    let mut favorites = HashSet::new();
    favorites.insert("3".to_string());
    let query = ListQuery {
        sort: Some(SortKey::Favorite),
        ..ListQuery::default()
    };
    let sorted = filter_items(&items, &query, &favorites);
    let ids: Vec<_> = sorted.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn favorite_toggle_only_affects_the_toggled_id() {
    let items = mock_items();
    let mut favorites = seed_favorites(&items);
    let before = favorites.clone();

    assert!(toggle_member(&mut favorites, "2"));
    assert!(favorites.contains("2"));
    for id in &before {
        assert!(favorites.contains(id), "other ids must be untouched");
    }

    assert!(!toggle_member(&mut favorites, "2"));
    assert_eq!(favorites, before);
}

#[test]
fn filter_search_and_category_combine() {
    let items = mock_items();
    let query = ListQuery {
        category: Some(ItemKind::Login),
        search: "gmail".to_string(),
        ..ListQuery::default()
    };
    let filtered = filter_items(&items, &query, &no_favorites());
    assert!(filtered
        .iter()
        .all(|i| i.kind == ItemKind::Login
            && i.username.as_deref().unwrap_or("").contains("gmail")));
    assert_eq!(filtered.len(), 3);
}

#[test]
fn find_item_reports_missing_ids() {
    let items = mock_items();
    assert!(vault::find_item(&items, "1").is_ok());
    let err = vault::find_item(&items, "999").unwrap_err();
    assert!(err.to_string().contains("999"));
}
