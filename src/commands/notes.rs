use anyhow::Result;
use colored::Colorize;

use crate::cli::NotesCommand;
use crate::notes::{Note, NoteBook};
use crate::store::LocalStore;

pub fn dispatch(command: NotesCommand, store: &mut LocalStore) -> Result<()> {
    let mut book = NoteBook::load(store)?;

    match command {
        NotesCommand::List { search, json } => {
            let notes: Vec<&Note> = match &search {
                Some(term) => book.search(term),
                None => book.all().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in notes {
                    print_note_row(note);
                }
            }
        }
        NotesCommand::Show { id } => {
            let note = book.get(&id)?;
            println!("--- {} ---", note.title);
            println!("{}", note.content);
            println!();
            println!("created: {}", note.created_at);
            println!("updated: {}", note.updated_at);
            if !note.shared_with.is_empty() {
                println!("shared with:");
                for email in &note.shared_with {
                    println!("  - {email}");
                }
            }
        }
        NotesCommand::Add { title, content } => {
            let note = book.add(store, &title, &content)?;
            println!("Note created: \"{}\" has been added to your notes", note.title);
        }
        NotesCommand::Rm { id } => {
            let removed = book.delete(store, &id)?;
            println!("Note deleted: \"{}\" has been removed", removed.title);
        }
        NotesCommand::Share { id, email } => {
            book.share(store, &id, &email)?;
            let note = book.get(&id)?;
            println!("Note shared: \"{}\" shared with {email}", note.title);
        }
        NotesCommand::Unshare { id, email } => {
            book.unshare(store, &id, &email)?;
            println!("Access removed: {email} no longer has access to this note");
        }
    }
    Ok(())
}

fn print_note_row(note: &Note) {
    let preview: String = note.content.chars().take(48).collect();
    let shared = if note.shared_with.is_empty() {
        String::new()
    } else {
        format!("  (shared with {})", note.shared_with.len()).dimmed().to_string()
    };
    println!("{:>12}  {}  {}{}", note.id, note.title.bold(), preview.dimmed(), shared);
}
