use securevault::accounts::{
    export_csv, AdminUserView, PaymentInfo, PaymentStatus, PlanTier, UserRecord, UserStatus,
};
use securevault::security::{dashboard_summary, security_report};
use securevault::vault::mock_items;

#[test]
fn security_report_counts_the_mock_strength_tags() {
    let report = security_report(&mock_items());
    let json = serde_json::to_string_pretty(&report).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "score": 98,
      "totalItems": 8,
      "weak": 1,
      "medium": 1,
      "strong": 3,
      "reusedPasswords": 2,
      "duplicatePasswords": 1,
      "weakTitles": [
        "Netflix"
      ]
    }
    "#);
}

#[test]
fn dashboard_shows_the_first_four_items_as_recent() {
    let items = mock_items();
    let summary = dashboard_summary(&items);
    assert_eq!(summary.recent.len(), 4);
    assert_eq!(summary.recent[0].title, items[0].title);
    assert_eq!(summary.total_items, items.len());
    assert_eq!(summary.weak_passwords, 1);
}

fn view(email: &str, plan: PlanTier, status: UserStatus, last_login: &str) -> AdminUserView {
    AdminUserView {
        record: UserRecord {
            email: email.to_string(),
            plan,
            registered_at: "2025-01-01T00:00:00+00:00".to_string(),
            status,
        },
        last_login: last_login.to_string(),
        payment: PaymentInfo {
            plan,
            plan_price: plan.price_display(),
            billing_cycle: "Monthly",
            status: PaymentStatus::Pending,
            trial_days_remaining: None,
            next_billing_date: None,
            payment_method: None,
        },
    }
}

#[test]
fn csv_export_keeps_the_fixed_column_format() {
    let views = vec![
        view("alice@example.com", PlanTier::Pro, UserStatus::Active, "2025-02-01"),
        view(
            "bob@example.com",
            PlanTier::FreeTrial,
            UserStatus::Pending,
            "2025-02-03",
        ),
    ];
    insta::assert_snapshot!(export_csv(&views), @r"
    Email,Plan,Status,LastLogin
    alice@example.com,pro,active,2025-02-01
    bob@example.com,free-trial,pending,2025-02-03
    ");
}

#[test]
fn plan_prices_match_the_register_page() {
    assert_eq!(PlanTier::FreeTrial.price_display(), "$0.00");
    assert_eq!(PlanTier::Pro.price_display(), "$4.99");
    assert_eq!(PlanTier::Premium.price_display(), "$9.99");
}
