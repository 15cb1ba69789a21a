use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, execute};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Terminal,
};

use crate::cli_vault::{VaultCommand, VaultListArgs};
use crate::vault::{self, DisplayEntry, ListQuery, VaultItem};

pub fn dispatch(command: VaultCommand) -> Result<()> {
    let items = vault::mock_items();

    match command {
        VaultCommand::List(args) => list(&items, &args),
        VaultCommand::Show(args) => {
            let item = vault::find_item(&items, &args.id)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(item)?);
            } else {
                print_item_detail(item);
            }
            Ok(())
        }
        VaultCommand::Favorite(args) => {
            let item = vault::find_item(&items, &args.id)?;
            let mut favorites = vault::seed_favorites(&items);
            let now_favorite = vault::toggle_member(&mut favorites, &args.id);
            if now_favorite {
                println!("{} added to favorites.", item.title);
            } else {
                println!("{} removed from favorites.", item.title);
            }
            println!("(favorites are session state; the interactive shell keeps the set between commands)");
            Ok(())
        }
        VaultCommand::Categories => {
            for (id, label) in vault::category_tabs() {
                println!("  {id:<10} {label}");
            }
            Ok(())
        }
    }
}

fn list(items: &[VaultItem], args: &VaultListArgs) -> Result<()> {
    let query = ListQuery {
        category: args.category.to_kind(),
        search: args.search.clone(),
        favorites_only: args.favorites_only,
        sort: args.sort.map(Into::into),
    };
    let favorites = vault::seed_favorites(items);
    let expanded: HashSet<String> = args.expand.iter().cloned().collect();
    let display = vault::display_list(items, &query, &favorites, &expanded);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&display)?);
    } else if args.tui {
        render_tui(&display, &favorites)?;
    } else {
        print_display(&display, &favorites);
    }
    Ok(())
}

pub fn print_display(display: &[DisplayEntry], favorites: &HashSet<String>) {
    if display.is_empty() {
        println!("No items found.");
        println!("We couldn't find any items matching your search or filter criteria.");
        return;
    }
    for entry in display {
        match entry {
            DisplayEntry::Item(item) => print_item_row(item, favorites),
            DisplayEntry::Group(group) => {
                println!(
                    "{} {} ({} items) — expand with --expand \"{}\"",
                    "▸".cyan(),
                    group.title.bold(),
                    group.items.len(),
                    group.title
                );
            }
        }
    }
}

fn print_item_row(item: &VaultItem, favorites: &HashSet<String>) {
    let star = if favorites.contains(&item.id) {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };
    println!(
        "{star} {:>3}  {} — {}  [{}]  {}",
        item.id,
        item.title.bold(),
        item.subtitle,
        item.kind,
        item.last_used.dimmed()
    );
}

fn print_item_detail(item: &VaultItem) {
    println!("--- {} ---", item.title);
    println!("id:        {}", item.id);
    println!("type:      {}", item.kind);
    println!("subtitle:  {}", item.subtitle);
    println!("category:  {}", item.category);
    println!("last used: {}", item.last_used);
    if let Some(username) = &item.username {
        println!("username:  {username}");
    }
    if let Some(password) = &item.password {
        println!("password:  {password}");
    }
    if let Some(url) = &item.url {
        println!("url:       {url}");
    }
    if let Some(card_number) = &item.card_number {
        println!("card:      {card_number}");
    }
    if let Some(expiry) = &item.expiry {
        println!("expiry:    {expiry}");
    }
    if let Some(cvv) = &item.cvv {
        println!("cvv:       {cvv}");
    }
    if let Some(notes) = &item.notes {
        println!("notes:     {notes}");
    }
    if let Some(strength) = item.strength {
        println!("strength:  {}", strength.as_str());
    }
    if item.favorite {
        println!("favorite:  yes");
    }
}

fn render_tui(display: &[DisplayEntry], favorites: &HashSet<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let rows: Vec<ListItem> = display
        .iter()
        .map(|entry| match entry {
            DisplayEntry::Item(item) => {
                let star = if favorites.contains(&item.id) { "★ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(star.to_string(), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{} — {}", item.title, item.subtitle)),
                    Span::styled(
                        format!("  {}", item.last_used),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            }
            DisplayEntry::Group(group) => ListItem::new(Line::from(vec![
                Span::styled("▸ ".to_string(), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{} ({} items)", group.title, group.items.len())),
            ])),
        })
        .collect();

    let item_count: usize = display
        .iter()
        .map(|e| match e {
            DisplayEntry::Item(_) => 1,
            DisplayEntry::Group(g) => g.items.len(),
        })
        .sum();
    let summary_lines = vec![
        Line::from(format!("Items shown: {item_count}")),
        Line::from(format!("Favorites:   {}", favorites.len())),
    ];

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(4), Constraint::Min(3)].as_ref())
            .split(f.size());

        let header = Paragraph::new(summary_lines.clone())
            .block(Block::default().borders(Borders::ALL).title("My Vault"))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(header, chunks[0]);

        let list = List::new(rows.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Credentials (press q to exit)"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(list, chunks[1]);
    })?;

    loop {
        if event::poll(Duration::from_millis(500))? {
            if let event::Event::Key(key) = event::read()? {
                if matches!(key.code, event::KeyCode::Char('q') | event::KeyCode::Esc) {
                    break;
                }
            }
        } else {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
