use colored::Colorize;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::ValueEnum;

use crate::cli::{FilesCommand, NotesCommand, SettingKey, SettingsCommand};
use crate::cli_admin::{AdminAnnounceArgs, AdminCommand, AdminEditArgs, AdminListArgs, StatusArg};
use crate::cli_vault::{CategoryArg, SortArg};
use crate::commands;
use crate::store::{LocalStore, Session};
use crate::vault::{self, ListQuery, VaultItem};

/// Interactive mode: one long-lived session holding the favorites and
/// expanded-group sets, the way the vault page holds them in component
/// state. Everything else round-trips through the store on each command.
pub fn start(config_path: Option<PathBuf>, store_path: Option<PathBuf>) -> anyhow::Result<()> {
    banner();

    let mut store = match &store_path {
        Some(p) => LocalStore::from_path(p)?,
        None => LocalStore::open_default()?,
    };
    println!("{} {}", "store:".dimmed(), store.path().display());
    let items = vault::mock_items();
    let mut favorites = vault::seed_favorites(&items);
    let mut expanded: HashSet<String> = HashSet::new();

    loop {
        // Prompt
        print!(
            "{} {} {} ",
            "⟦VAULT⟧".bold().truecolor(0, 200, 160),
            prompt_label(&store).truecolor(130, 130, 220),
            "›".truecolor(255, 240, 0)
        );
        io::stdout().flush().ok();

        // Read line
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Parse
        let mut parts = shell_words(line);
        if parts.is_empty() {
            continue;
        }
        let cmd = parts.remove(0);

        match cmd.as_str() {
            "help" | "?" => print_help(),
            "exit" | "quit" => break,

            // Auth
            "login" => {
                if parts.len() < 2 {
                    usage("login <email> <password>");
                    continue;
                }
                fake_delay("Signing in...");
                if let Err(e) = commands::auth::login(&mut store, &parts[0], &parts[1]) {
                    err(e);
                }
            }
            "register" => {
                if parts.len() < 3 {
                    usage("register <email> <password> <confirm> [free-trial|pro|premium]");
                    continue;
                }
                let plan = match parts.get(3) {
                    Some(raw) => match raw.parse() {
                        Ok(plan) => plan,
                        Err(e) => {
                            err(e);
                            continue;
                        }
                    },
                    None => crate::accounts::PlanTier::FreeTrial,
                };
                fake_delay("Creating Account...");
                if let Err(e) =
                    commands::auth::register(&mut store, &parts[0], &parts[1], &parts[2], plan)
                {
                    err(e);
                }
            }
            "logout" => {
                if let Err(e) = commands::auth::logout(&mut store) {
                    err(e);
                }
            }
            "whoami" => {
                if let Err(e) = commands::auth::whoami(&store, false) {
                    err(e);
                }
            }

            // Vault (session-state commands)
            "vault" => vault_command(&items, &mut favorites, &mut expanded, &parts),

            // Overviews
            "security" => {
                if let Err(e) = commands::security::security(false) {
                    err(e);
                }
            }
            "dashboard" => {
                let tui = parts.first().map(String::as_str) == Some("--tui");
                if let Err(e) = commands::security::dashboard(false, tui) {
                    err(e);
                }
            }

            // Notes / files / settings / admin delegate to the command layer
            "notes" => match notes_args(&parts) {
                Ok(cmd) => {
                    if let Err(e) = commands::notes::dispatch(cmd, &mut store) {
                        err(e);
                    }
                }
                Err(u) => usage(u),
            },
            "files" => match files_args(&parts) {
                Ok(cmd) => {
                    if let Err(e) = commands::files::dispatch(cmd, &mut store) {
                        err(e);
                    }
                }
                Err(u) => usage(u),
            },
            "settings" => match settings_args(&parts) {
                Ok(cmd) => {
                    if let Err(e) = commands::settings::dispatch(cmd, config_path.clone()) {
                        err(e);
                    }
                }
                Err(u) => usage(u),
            },
            "admin" => match admin_args(&parts) {
                Ok(cmd) => {
                    if matches!(cmd, AdminCommand::Login { .. }) {
                        fake_delay("Signing in...");
                    }
                    if let Err(e) = commands::admin::dispatch(cmd, &mut store) {
                        err(e);
                    }
                }
                Err(u) => usage(u),
            },

            // Fallback
            other => eprintln!("{} unknown command: {other}", "err:".red().bold()),
        }
    }

    Ok(())
}

fn vault_command(
    items: &[VaultItem],
    favorites: &mut HashSet<String>,
    expanded: &mut HashSet<String>,
    parts: &[String],
) {
    match parts.first().map(String::as_str) {
        None | Some("list") => {
            // vault list [--category KIND] [--search TEXT] [--favorites] [--sort KEY]
            let rest = if parts.is_empty() { parts } else { &parts[1..] };
            let mut query = ListQuery::default();
            let mut j = 0;
            while j < rest.len() {
                match rest[j].as_str() {
                    "--category" if j + 1 < rest.len() => {
                        match CategoryArg::from_str(&rest[j + 1], true) {
                            Ok(cat) => query.category = cat.to_kind(),
                            Err(e) => {
                                eprintln!("{} {}", "err:".red().bold(), e);
                                return;
                            }
                        }
                        j += 2;
                    }
                    "--search" if j + 1 < rest.len() => {
                        query.search = rest[j + 1].clone();
                        j += 2;
                    }
                    "--favorites" => {
                        query.favorites_only = true;
                        j += 1;
                    }
                    "--sort" if j + 1 < rest.len() => {
                        match SortArg::from_str(&rest[j + 1], true) {
                            Ok(sort) => query.sort = Some(sort.into()),
                            Err(e) => {
                                eprintln!("{} {}", "err:".red().bold(), e);
                                return;
                            }
                        }
                        j += 2;
                    }
                    other => {
                        query.search = other.to_string();
                        j += 1;
                    }
                }
            }
            let display = vault::display_list(items, &query, favorites, expanded);
            commands::vault::print_display(&display, favorites);
        }
        Some("show") => match parts.get(1) {
            Some(id) => match vault::find_item(items, id) {
                Ok(item) => println!("{}", serde_json::to_string_pretty(item).unwrap_or_default()),
                Err(e) => err(e),
            },
            None => usage("vault show <id>"),
        },
        Some("fav") | Some("favorite") => match parts.get(1) {
            Some(id) => match vault::find_item(items, id) {
                Ok(item) => {
                    if vault::toggle_member(favorites, id) {
                        println!("{} added to favorites.", item.title);
                    } else {
                        println!("{} removed from favorites.", item.title);
                    }
                }
                Err(e) => err(e),
            },
            None => usage("vault fav <id>"),
        },
        Some("expand") => match parts.get(1) {
            Some(title) => {
                if vault::toggle_member(expanded, title) {
                    println!("Group \"{title}\" expanded.");
                } else {
                    println!("Group \"{title}\" collapsed.");
                }
            }
            None => usage("vault expand <title>"),
        },
        Some("categories") => {
            for (id, label) in vault::category_tabs() {
                println!("  {id:<10} {label}");
            }
        }
        Some(other) => eprintln!("{} unknown vault command: {other}", "err:".red().bold()),
    }
}

fn notes_args(parts: &[String]) -> Result<NotesCommand, &'static str> {
    match parts.first().map(String::as_str) {
        None | Some("list") => Ok(NotesCommand::List {
            search: parts.get(1).cloned(),
            json: false,
        }),
        Some("show") => match parts.get(1) {
            Some(id) => Ok(NotesCommand::Show { id: id.clone() }),
            None => Err("notes show <id>"),
        },
        Some("add") => match (parts.get(1), parts.get(2)) {
            (Some(title), Some(content)) => Ok(NotesCommand::Add {
                title: title.clone(),
                content: content.clone(),
            }),
            _ => Err("notes add \"<title>\" \"<content>\""),
        },
        Some("rm") => match parts.get(1) {
            Some(id) => Ok(NotesCommand::Rm { id: id.clone() }),
            None => Err("notes rm <id>"),
        },
        Some("share") => match (parts.get(1), parts.get(2)) {
            (Some(id), Some(email)) => Ok(NotesCommand::Share {
                id: id.clone(),
                email: email.clone(),
            }),
            _ => Err("notes share <id> <email>"),
        },
        Some("unshare") => match (parts.get(1), parts.get(2)) {
            (Some(id), Some(email)) => Ok(NotesCommand::Unshare {
                id: id.clone(),
                email: email.clone(),
            }),
            _ => Err("notes unshare <id> <email>"),
        },
        Some(_) => Err("notes [list|show|add|rm|share|unshare]"),
    }
}

fn files_args(parts: &[String]) -> Result<FilesCommand, &'static str> {
    match parts.first().map(String::as_str) {
        None | Some("list") => Ok(FilesCommand::List {
            search: parts.get(1).cloned(),
            json: false,
        }),
        Some("show") => match parts.get(1) {
            Some(id) => Ok(FilesCommand::Show { id: id.clone() }),
            None => Err("files show <id>"),
        },
        Some("share") => match (parts.get(1), parts.get(2)) {
            (Some(id), Some(email)) => Ok(FilesCommand::Share {
                id: id.clone(),
                email: email.clone(),
            }),
            _ => Err("files share <id> <email>"),
        },
        Some("rm") => match parts.get(1) {
            Some(id) => Ok(FilesCommand::Rm { id: id.clone() }),
            None => Err("files rm <id>"),
        },
        Some(_) => Err("files [list|show|share|rm]"),
    }
}

fn settings_args(parts: &[String]) -> Result<SettingsCommand, &'static str> {
    match parts.first().map(String::as_str) {
        None | Some("show") => Ok(SettingsCommand::Show { json: false }),
        Some("set") => match (parts.get(1), parts.get(2)) {
            (Some(key), Some(value)) => match SettingKey::from_str(key, true) {
                Ok(key) => Ok(SettingsCommand::Set {
                    key,
                    value: value.clone(),
                }),
                Err(_) => Err("settings set <key> <on|off|minutes>"),
            },
            _ => Err("settings set <key> <on|off|minutes>"),
        },
        Some(_) => Err("settings [show|set]"),
    }
}

fn admin_args(parts: &[String]) -> Result<AdminCommand, &'static str> {
    let email_arg = |idx: usize| parts.get(idx).cloned().ok_or("admin <action> <email>");
    match parts.first().map(String::as_str) {
        Some("login") => match (parts.get(1), parts.get(2)) {
            (Some(email), Some(password)) => Ok(AdminCommand::Login {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => Err("admin login <email> <password>"),
        },
        Some("logout") => Ok(AdminCommand::Logout),
        None | Some("list") => {
            let mut args = AdminListArgs {
                status: None,
                search: String::new(),
                json: false,
            };
            let rest = if parts.is_empty() { parts } else { &parts[1..] };
            let mut j = 0;
            while j < rest.len() {
                match rest[j].as_str() {
                    "--status" if j + 1 < rest.len() => {
                        args.status = StatusArg::from_str(&rest[j + 1], true).ok();
                        j += 2;
                    }
                    "--search" if j + 1 < rest.len() => {
                        args.search = rest[j + 1].clone();
                        j += 2;
                    }
                    _ => {
                        args.search = rest[j].clone();
                        j += 1;
                    }
                }
            }
            Ok(AdminCommand::List(args))
        }
        Some("show") => Ok(AdminCommand::Show {
            email: email_arg(1)?,
            json: false,
        }),
        Some("approve") => Ok(AdminCommand::Approve { email: email_arg(1)? }),
        Some("reject") => Ok(AdminCommand::Reject { email: email_arg(1)? }),
        Some("trash") => Ok(AdminCommand::Trash { email: email_arg(1)? }),
        Some("restore") => Ok(AdminCommand::Restore { email: email_arg(1)? }),
        Some("edit") => {
            let email = email_arg(1)?;
            let mut edit = AdminEditArgs {
                email,
                plan: None,
                status: None,
            };
            let mut j = 2;
            while j < parts.len() {
                match parts[j].as_str() {
                    "--plan" if j + 1 < parts.len() => {
                        edit.plan = ValueEnum::from_str(&parts[j + 1], true).ok();
                        j += 2;
                    }
                    "--status" if j + 1 < parts.len() => {
                        edit.status = StatusArg::from_str(&parts[j + 1], true).ok();
                        j += 2;
                    }
                    _ => j += 1,
                }
            }
            Ok(AdminCommand::Edit(edit))
        }
        Some("export") => Ok(AdminCommand::Export {
            out: parts.get(1).map(PathBuf::from),
        }),
        Some("announce") => match parts.get(1) {
            Some(message) => Ok(AdminCommand::Announce(AdminAnnounceArgs {
                message: message.clone(),
                status: None,
                search: String::new(),
            })),
            None => Err("admin announce \"<message>\""),
        },
        Some("stats") => Ok(AdminCommand::Stats { json: false }),
        Some(_) => Err("admin [login|logout|list|show|approve|reject|trash|restore|edit|export|announce|stats]"),
    }
}

fn prompt_label(store: &LocalStore) -> String {
    match Session::load(store) {
        Ok(session) if session.admin => "admin".to_string(),
        Ok(session) if session.logged_in => {
            session.email.unwrap_or_else(|| "user".to_string())
        }
        _ => "guest".to_string(),
    }
}

/// Fixed timer purely for perceived latency; nothing is actually verified.
fn fake_delay(message: &str) {
    print!("{message}");
    io::stdout().flush().ok();
    thread::sleep(Duration::from_millis(600));
    println!();
}

fn err(e: anyhow::Error) {
    eprintln!("{} {e:#}", "err:".red().bold());
}

fn banner() {
    println!(
        "\n{}  \n{}  \n",
        "╔══════════════════════════════════════════════════╗".truecolor(0, 200, 160),
        "║              S e c u r e V a u l t              ║"
            .truecolor(255, 240, 0)
            .bold(),
    );
    println!(
        "{}  {}",
        "╚══════════════════════════════════════════════════╝".truecolor(0, 200, 160),
        "type 'help' for commands".truecolor(130, 130, 220)
    );
}

fn print_help() {
    println!(
        "{}\n\
         {}\n  login <email> <password>       # sign in (mock)\n  register <email> <pw> <pw> [plan]\n  logout                         # clear the session\n  whoami                         # show the session\n\
         {}\n  vault list [--category K] [--search T] [--favorites] [--sort name|favorite|last-used]\n  vault show <id>                # one item in full\n  vault fav <id>                 # toggle favorite\n  vault expand <title>           # toggle a group open/closed\n  vault categories               # the filter tabs\n\
         {}\n  security                       # strength breakdown\n  dashboard [--tui]              # overview panel\n  notes [list|show|add|rm|share|unshare]\n  files [list|show|share|rm]\n  settings [show|set]\n\
         {}\n  admin login <email> <password> # demo: admin@securevault.com / admin123\n  admin list [--status S] [--search T]\n  admin approve|reject|trash|restore <email>\n  admin edit <email> [--plan P] [--status S]\n  admin export [FILE] | announce \"msg\" | stats\n\
         {}\n  help                           # show this help\n  exit                           # quit shell\n",
        "SecureVault — Credential Vault Shell".bold().truecolor(0, 200, 160),
        "Account:".truecolor(130, 130, 220),
        "Vault:".truecolor(130, 130, 220),
        "Pages:".truecolor(130, 130, 220),
        "Admin:".truecolor(255, 180, 0),
        "Help:".truecolor(130, 130, 220),
    );
}

fn usage(s: &str) {
    eprintln!("{} usage: {}", "usage:".yellow().bold(), s);
}

fn shell_words(s: &str) -> Vec<String> {
    // minimal split by whitespace respecting "quoted strings"
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_q = false;
    for c in s.chars() {
        match (c, in_q) {
            ('"', false) => in_q = true,
            ('"', true) => in_q = false,
            (c, _) if c.is_whitespace() && !in_q => {
                if !buf.is_empty() {
                    out.push(std::mem::take(&mut buf));
                }
            }
            (c, _) => buf.push(c),
        }
    }
    if !buf.is_empty() {
        out.push(buf);
    }
    out
}
