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

use crate::security::{dashboard_summary, security_report, DashboardSummary};
use crate::vault;

pub fn security(json: bool) -> Result<()> {
    let items = vault::mock_items();
    let report = security_report(&items);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- Security Check ---");
    println!("Overall score:       {}%", report.score);
    println!("Weak passwords:      {}", report.weak);
    println!("Reused passwords:    {}", report.reused_passwords);
    println!("Duplicate passwords: {}", report.duplicate_passwords);
    println!();
    println!("Password strength breakdown ({} items):", report.total_items);
    println!("  strong: {}", report.strong.to_string().green());
    println!("  medium: {}", report.medium.to_string().yellow());
    println!("  weak:   {}", report.weak.to_string().red());
    if !report.weak_titles.is_empty() {
        println!();
        println!("{}", "Weak passwords found:".red().bold());
        for title in &report.weak_titles {
            println!("  - {title} (consider updating this password)");
        }
    }
    Ok(())
}

pub fn dashboard(json: bool, tui: bool) -> Result<()> {
    let items = vault::mock_items();
    let summary = dashboard_summary(&items);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if tui {
        return render_tui(&summary);
    }

    println!("Welcome back. Here is your security overview.");
    println!("Security score: {}%", summary.security_score);
    println!("Total items:    {}", summary.total_items);
    println!("Weak passwords: {}", summary.weak_passwords);
    println!();
    println!("Recent activity:");
    for item in &summary.recent {
        println!("  {} — {}  [{}]", item.title.bold(), item.subtitle, item.kind);
    }
    println!();
    println!(
        "You have {} weak passwords and {} reused passwords to fix.",
        summary.weak_passwords, summary.reused_passwords
    );
    Ok(())
}

fn render_tui(summary: &DashboardSummary) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let recent: Vec<ListItem> = summary
        .recent
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.title.clone()),
                Span::styled(
                    format!("  {}", item.last_used),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let summary_lines = vec![
        Line::from(format!("Security score: {}%", summary.security_score)),
        Line::from(format!("Total items:    {}", summary.total_items)),
        Line::from(format!("Weak passwords: {}", summary.weak_passwords)),
        Line::from(format!("Reused:         {}", summary.reused_passwords)),
    ];

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(6), Constraint::Min(3)].as_ref())
            .split(f.size());

        let header = Paragraph::new(summary_lines.clone())
            .block(Block::default().borders(Borders::ALL).title("Dashboard"))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(header, chunks[0]);

        let list = List::new(recent.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Recent Activity (press q to exit)"),
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
