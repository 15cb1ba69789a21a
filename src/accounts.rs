//! User accounts, the mock login flows, and the admin approval workflow.
//!
//! Records live in the local store under `user_<email>`; email is the only
//! key and overwriting is the only delete. Status is a closed enum with an
//! explicit transition table:
//!
//! ```text
//! approve: pending -> active
//! reject:  pending -> inactive
//! trash:   pending | active | inactive -> trashed
//! restore: trashed -> active
//! ```
//!
//! Passwords are opaque demo strings compared to nothing; the only checked
//! credentials are the hardcoded admin pair.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::{
    user_key, LocalStore, KEY_ADMIN_EMAIL, KEY_IS_ADMIN, KEY_IS_LOGGED_IN, KEY_PLAN_START_DATE,
    KEY_USER_EMAIL, KEY_USER_PLAN, KEY_USER_STATUS, USER_KEY_PREFIX,
};

/// Hardcoded demo admin credentials.
pub const ADMIN_EMAIL: &str = "admin@securevault.com";
pub const ADMIN_PASSWORD: &str = "admin123";

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Active,
    Inactive,
    Trashed,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Trashed => "trashed",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(UserStatus::Pending),
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "trashed" => Ok(UserStatus::Trashed),
            other => bail!("unknown user status '{other}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanTier {
    FreeTrial,
    Pro,
    Premium,
}

impl PlanTier {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::FreeTrial => "free-trial",
            PlanTier::Pro => "pro",
            PlanTier::Premium => "premium",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PlanTier::FreeTrial => "Free Trial",
            PlanTier::Pro => "Pro",
            PlanTier::Premium => "Premium",
        }
    }

    pub fn monthly_price_cents(self) -> u32 {
        match self {
            PlanTier::FreeTrial => 0,
            PlanTier::Pro => 499,
            PlanTier::Premium => 999,
        }
    }

    pub fn price_display(self) -> String {
        let cents = self.monthly_price_cents();
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "free-trial" => Ok(PlanTier::FreeTrial),
            "pro" => Ok(PlanTier::Pro),
            "premium" => Ok(PlanTier::Premium),
            other => bail!("unknown plan tier '{other}'"),
        }
    }
}

/// Admin-triggered status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Approve,
    Reject,
    Trash,
    Restore,
}

impl AccountAction {
    pub fn verb(self) -> &'static str {
        match self {
            AccountAction::Approve => "approve",
            AccountAction::Reject => "reject",
            AccountAction::Trash => "trash",
            AccountAction::Restore => "restore",
        }
    }

    pub fn target(self) -> UserStatus {
        match self {
            AccountAction::Approve | AccountAction::Restore => UserStatus::Active,
            AccountAction::Reject => UserStatus::Inactive,
            AccountAction::Trash => UserStatus::Trashed,
        }
    }

    pub fn permitted_from(self, from: UserStatus) -> bool {
        match self {
            AccountAction::Approve | AccountAction::Reject => from == UserStatus::Pending,
            AccountAction::Trash => from != UserStatus::Trashed,
            AccountAction::Restore => from == UserStatus::Trashed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub plan: PlanTier,
    pub registered_at: String,
    pub status: UserStatus,
}

/// Mock billing decoration attached to users in the admin views. Derived on
/// read, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub plan: PlanTier,
    pub plan_price: String,
    pub billing_cycle: &'static str,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Active,
    Pending,
}

/// A user record as the admin dashboard lists it: the stored record plus
/// the mock last-login and payment decorations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    #[serde(flatten)]
    pub record: UserRecord,
    pub last_login: String,
    pub payment: PaymentInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Active account, session stamped.
    Active { email: String },
    /// Pending account: session stamped, but the caller should route to the
    /// pending-approval screen.
    PendingApproval { email: String },
    /// Unknown email, admitted as an ad-hoc active demo user.
    DemoUser { email: String },
}

pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

fn display_date(ts: chrono::DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Register a new account. The record is created `pending` and the session
/// keys are stamped.
pub fn register(
    store: &mut LocalStore,
    email: &str,
    password: &str,
    confirm: &str,
    plan: PlanTier,
) -> Result<UserRecord> {
    let email = email.trim();
    if email.is_empty() {
        bail!("email required: please enter your email address");
    }
    if password.trim().is_empty() {
        bail!("password required: please create a strong password");
    }
    if password.len() < MIN_PASSWORD_LEN {
        bail!("password too short: please use at least {MIN_PASSWORD_LEN} characters");
    }
    if password != confirm {
        bail!("passwords don't match: please make sure both passwords are the same");
    }
    if store.contains(&user_key(email)) {
        bail!("an account for {email} already exists");
    }

    let record = UserRecord {
        email: email.to_string(),
        plan,
        registered_at: current_timestamp(),
        status: UserStatus::Pending,
    };
    store.set(&user_key(email), &record)?;

    store.set_flag(KEY_IS_LOGGED_IN, true)?;
    store.set_string(KEY_USER_EMAIL, email)?;
    store.set_string(KEY_USER_STATUS, record.status.as_str())?;
    store.set_string(KEY_USER_PLAN, plan.as_str())?;
    store.set_string(KEY_PLAN_START_DATE, &current_timestamp())?;

    Ok(record)
}

/// Mock login. The password is accepted as an opaque string; only the
/// account status decides the outcome.
pub fn login(store: &mut LocalStore, email: &str, password: &str) -> Result<LoginOutcome> {
    let email = email.trim();
    if email.is_empty() {
        bail!("email required: please enter your email address");
    }
    if password.trim().is_empty() {
        bail!("password required: please enter your password");
    }

    let Some(record) = store.get::<UserRecord>(&user_key(email))? else {
        // Unknown email: demo user, admitted as active without a record.
        store.set_flag(KEY_IS_LOGGED_IN, true)?;
        store.set_string(KEY_USER_EMAIL, email)?;
        store.set_string(KEY_USER_STATUS, UserStatus::Active.as_str())?;
        return Ok(LoginOutcome::DemoUser {
            email: email.to_string(),
        });
    };

    match record.status {
        UserStatus::Inactive => {
            bail!("account rejected: your account has been rejected, please contact support")
        }
        UserStatus::Trashed => bail!("account deleted: this account has been deleted"),
        UserStatus::Pending | UserStatus::Active => {
            store.set_flag(KEY_IS_LOGGED_IN, true)?;
            store.set_string(KEY_USER_EMAIL, email)?;
            store.set_string(KEY_USER_STATUS, record.status.as_str())?;
            store.set_string(KEY_USER_PLAN, record.plan.as_str())?;
            if record.status == UserStatus::Pending {
                Ok(LoginOutcome::PendingApproval {
                    email: email.to_string(),
                })
            } else {
                Ok(LoginOutcome::Active {
                    email: email.to_string(),
                })
            }
        }
    }
}

pub fn logout(store: &mut LocalStore) -> Result<()> {
    for key in [
        KEY_IS_LOGGED_IN,
        KEY_USER_EMAIL,
        KEY_USER_STATUS,
        KEY_USER_PLAN,
        KEY_PLAN_START_DATE,
    ] {
        store.remove(key)?;
    }
    Ok(())
}

pub fn admin_login(store: &mut LocalStore, email: &str, password: &str) -> Result<()> {
    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        bail!("invalid credentials: admin email or password is incorrect");
    }
    store.set_flag(KEY_IS_ADMIN, true)?;
    store.set_string(KEY_ADMIN_EMAIL, email)?;
    Ok(())
}

pub fn admin_logout(store: &mut LocalStore) -> Result<()> {
    store.remove(KEY_IS_ADMIN)?;
    store.remove(KEY_ADMIN_EMAIL)?;
    Ok(())
}

pub fn require_admin(store: &LocalStore) -> Result<String> {
    if !store.get_flag(KEY_IS_ADMIN)? {
        bail!("admin session required: run 'admin login' first");
    }
    Ok(store
        .get_string(KEY_ADMIN_EMAIL)?
        .unwrap_or_else(|| ADMIN_EMAIL.to_string()))
}

pub fn find_user(store: &LocalStore, email: &str) -> Result<UserRecord> {
    store
        .get::<UserRecord>(&user_key(email))?
        .with_context(|| format!("no account found for {email}"))
}

/// All stored records, in key order.
pub fn load_users(store: &LocalStore) -> Result<Vec<UserRecord>> {
    let mut users = Vec::new();
    for key in store.keys_with_prefix(USER_KEY_PREFIX) {
        let record: UserRecord = store
            .get(&key)?
            .with_context(|| format!("store key '{key}' vanished during scan"))?;
        users.push(record);
    }
    Ok(users)
}

/// Decorate a record the way the admin list does: a mock last-login within
/// the past week plus derived billing info.
pub fn decorate(record: UserRecord) -> AdminUserView {
    let mut rng = rand::thread_rng();
    let last_login = display_date(Utc::now() - Duration::hours(rng.gen_range(0..=168)));
    let payment = payment_info(&record, &mut rng);
    AdminUserView {
        record,
        last_login,
        payment,
    }
}

fn payment_info(record: &UserRecord, rng: &mut impl Rng) -> PaymentInfo {
    let active = record.status == UserStatus::Active;
    PaymentInfo {
        plan: record.plan,
        plan_price: record.plan.price_display(),
        billing_cycle: "Monthly",
        status: if active {
            PaymentStatus::Active
        } else {
            PaymentStatus::Pending
        },
        trial_days_remaining: (record.plan == PlanTier::FreeTrial)
            .then(|| rng.gen_range(1..=3)),
        next_billing_date: active.then(|| display_date(Utc::now() + Duration::days(30))),
        payment_method: active.then(|| "•••• 4242".to_string()),
    }
}

/// Status filter + case-insensitive email substring search, as on the admin
/// user list.
pub fn filter_users(
    users: &[AdminUserView],
    status: Option<UserStatus>,
    search: &str,
) -> Vec<AdminUserView> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|u| status.map_or(true, |s| u.record.status == s))
        .filter(|u| needle.is_empty() || u.record.email.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply an admin action, enforcing the transition table.
pub fn apply_action(
    store: &mut LocalStore,
    email: &str,
    action: AccountAction,
) -> Result<UserRecord> {
    let mut record = find_user(store, email)?;
    if !action.permitted_from(record.status) {
        bail!(
            "cannot {} a {} account",
            action.verb(),
            record.status.as_str()
        );
    }
    record.status = action.target();
    store.set(&user_key(email), &record)?;
    Ok(record)
}

/// The admin edit dialog: a direct override of plan and/or status, outside
/// the action table.
pub fn edit_user(
    store: &mut LocalStore,
    email: &str,
    plan: Option<PlanTier>,
    status: Option<UserStatus>,
) -> Result<UserRecord> {
    let mut record = find_user(store, email)?;
    if let Some(plan) = plan {
        record.plan = plan;
    }
    if let Some(status) = status {
        record.status = status;
    }
    store.set(&user_key(email), &record)?;
    Ok(record)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub pending: usize,
    pub active: usize,
    pub monthly_revenue_cents: u64,
}

impl AdminStats {
    pub fn revenue_display(&self) -> String {
        format!(
            "${}.{:02}",
            self.monthly_revenue_cents / 100,
            self.monthly_revenue_cents % 100
        )
    }
}

pub fn stats(users: &[UserRecord]) -> AdminStats {
    AdminStats {
        total_users: users.len(),
        pending: users
            .iter()
            .filter(|u| u.status == UserStatus::Pending)
            .count(),
        active: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        monthly_revenue_cents: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .map(|u| u64::from(u.plan.monthly_price_cents()))
            .sum(),
    }
}

/// CSV export in the dashboard's fixed column order.
pub fn export_csv(users: &[AdminUserView]) -> String {
    let mut csv = String::from("Email,Plan,Status,LastLogin\n");
    for user in users {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            user.record.email,
            user.record.plan.as_str(),
            user.record.status.as_str(),
            user.last_login
        ));
    }
    csv
}
