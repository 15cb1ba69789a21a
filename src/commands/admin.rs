use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::accounts::{self, AccountAction, AdminUserView, PaymentStatus, UserStatus};
use crate::cli_admin::{AdminAnnounceArgs, AdminCommand, AdminEditArgs, AdminListArgs};
use crate::store::LocalStore;

pub fn dispatch(command: AdminCommand, store: &mut LocalStore) -> Result<()> {
    match command {
        AdminCommand::Login { email, password } => {
            accounts::admin_login(store, &email, &password)?;
            println!("Admin login successful. Welcome to the admin dashboard.");
            Ok(())
        }
        AdminCommand::Logout => {
            accounts::admin_logout(store)?;
            println!("Logged out. Admin session ended.");
            Ok(())
        }
        AdminCommand::List(args) => list(store, &args),
        AdminCommand::Show { email, json } => {
            accounts::require_admin(store)?;
            let view = accounts::decorate(accounts::find_user(store, &email)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_user_detail(&view);
            }
            Ok(())
        }
        AdminCommand::Approve { email } => act(store, &email, AccountAction::Approve),
        AdminCommand::Reject { email } => act(store, &email, AccountAction::Reject),
        AdminCommand::Trash { email } => act(store, &email, AccountAction::Trash),
        AdminCommand::Restore { email } => act(store, &email, AccountAction::Restore),
        AdminCommand::Edit(args) => edit(store, args),
        AdminCommand::Export { out } => {
            accounts::require_admin(store)?;
            let views: Vec<AdminUserView> = accounts::load_users(store)?
                .into_iter()
                .map(accounts::decorate)
                .collect();
            let csv = accounts::export_csv(&views);
            match out {
                Some(path) => {
                    fs::write(&path, csv)
                        .with_context(|| format!("write export {}", path.display()))?;
                    println!(
                        "Export complete: user data exported as CSV to {}",
                        path.display()
                    );
                }
                None => print!("{csv}"),
            }
            Ok(())
        }
        AdminCommand::Announce(args) => announce(store, &args),
        AdminCommand::Stats { json } => {
            accounts::require_admin(store)?;
            let stats = accounts::stats(&accounts::load_users(store)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("--- SecureVault Admin ---");
                println!("Total users:     {}", stats.total_users);
                println!("Pending:         {}", stats.pending);
                println!("Active users:    {}", stats.active);
                println!("Monthly revenue: {}", stats.revenue_display());
            }
            Ok(())
        }
    }
}

fn list(store: &mut LocalStore, args: &AdminListArgs) -> Result<()> {
    accounts::require_admin(store)?;
    let views: Vec<AdminUserView> = accounts::load_users(store)?
        .into_iter()
        .map(accounts::decorate)
        .collect();
    let filtered = accounts::filter_users(&views, args.status.map(Into::into), &args.search);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }
    if filtered.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    for view in &filtered {
        println!(
            "{}  {}  {}",
            view.record.email.bold(),
            view.record.plan.as_str(),
            status_badge(view.record.status)
        );
    }
    Ok(())
}

fn act(store: &mut LocalStore, email: &str, action: AccountAction) -> Result<()> {
    accounts::require_admin(store)?;
    accounts::apply_action(store, email, action)?;
    match action {
        AccountAction::Approve => println!("User approved: {email} is now active"),
        AccountAction::Reject => println!("User rejected: {email} has been marked as inactive"),
        AccountAction::Trash => println!("User trashed: {email} has been moved to trash"),
        AccountAction::Restore => println!("User restored: {email} has been restored to active"),
    }
    Ok(())
}

fn edit(store: &mut LocalStore, args: AdminEditArgs) -> Result<()> {
    accounts::require_admin(store)?;
    let record = accounts::edit_user(
        store,
        &args.email,
        args.plan.map(Into::into),
        args.status.map(Into::into),
    )?;
    println!(
        "User updated: {} ({}, {})",
        record.email,
        record.plan.as_str(),
        record.status.as_str()
    );
    Ok(())
}

fn announce(store: &mut LocalStore, args: &AdminAnnounceArgs) -> Result<()> {
    accounts::require_admin(store)?;
    if args.message.trim().is_empty() {
        anyhow::bail!("announcement message is empty");
    }
    let views: Vec<AdminUserView> = accounts::load_users(store)?
        .into_iter()
        .map(accounts::decorate)
        .collect();
    let recipients = accounts::filter_users(&views, args.status.map(Into::into), &args.search);
    println!(
        "Announcement sent: message sent to {} user(s)",
        recipients.len()
    );
    Ok(())
}

fn status_badge(status: UserStatus) -> String {
    match status {
        UserStatus::Pending => "⏳ pending".yellow().to_string(),
        UserStatus::Active => "✓ active".green().to_string(),
        UserStatus::Inactive => "✕ inactive".dimmed().to_string(),
        UserStatus::Trashed => "🗑 trashed".red().to_string(),
    }
}

fn print_user_detail(view: &AdminUserView) {
    println!("--- User Details ---");
    println!("email:      {}", view.record.email);
    println!("plan:       {}", view.record.plan.display_name());
    println!("status:     {}", status_badge(view.record.status));
    println!("registered: {}", view.record.registered_at);
    println!("last login: {}", view.last_login);
    println!("--- Payment Info ---");
    println!("plan price: {}/month", view.payment.plan_price);
    println!("billing:    {}", view.payment.billing_cycle);
    println!(
        "payment:    {}",
        match view.payment.status {
            PaymentStatus::Active => "active".green().to_string(),
            PaymentStatus::Pending => "pending".yellow().to_string(),
        }
    );
    if let Some(days) = view.payment.trial_days_remaining {
        println!("trial:      {days} day(s) left");
    }
    if let Some(date) = &view.payment.next_billing_date {
        println!("next bill:  {date}");
    }
    if let Some(method) = &view.payment.payment_method {
        println!("method:     {method}");
    }
}
