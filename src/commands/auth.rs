use anyhow::Result;
use colored::Colorize;

use crate::accounts::{self, LoginOutcome, PlanTier};
use crate::store::{LocalStore, Session};

pub fn login(store: &mut LocalStore, email: &str, password: &str) -> Result<()> {
    match accounts::login(store, email, password)? {
        LoginOutcome::Active { email } | LoginOutcome::DemoUser { email } => {
            println!("Login successful. Welcome back, {email}!");
        }
        LoginOutcome::PendingApproval { email } => {
            println!(
                "{} {} is awaiting admin approval. You will have full access once approved.",
                "account pending:".yellow().bold(),
                email
            );
        }
    }
    Ok(())
}

pub fn register(
    store: &mut LocalStore,
    email: &str,
    password: &str,
    confirm: &str,
    plan: PlanTier,
) -> Result<()> {
    let record = accounts::register(store, email, password, confirm, plan)?;
    println!(
        "Account created! You're on the {} plan.",
        record.plan.display_name()
    );
    println!(
        "{} your account is under review; approval usually lands within 24 hours.",
        "status pending:".yellow().bold()
    );
    Ok(())
}

pub fn logout(store: &mut LocalStore) -> Result<()> {
    accounts::logout(store)?;
    println!("Logged out. You have been signed out.");
    Ok(())
}

pub fn whoami(store: &LocalStore, json: bool) -> Result<()> {
    let session = Session::load(store)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }
    if !session.logged_in && !session.admin {
        println!("Not signed in.");
        return Ok(());
    }
    if session.logged_in {
        println!(
            "Signed in as {}",
            session.email.as_deref().unwrap_or("(unknown)")
        );
        if let Some(status) = session.status {
            println!("  status: {status}");
        }
        if let Some(plan) = session.plan {
            println!("  plan:   {}", plan.display_name());
        }
        if let Some(start) = &session.plan_start {
            println!("  since:  {start}");
        }
    }
    if session.admin {
        println!(
            "Admin session: {}",
            session.admin_email.as_deref().unwrap_or("(unknown)")
        );
    }
    Ok(())
}
