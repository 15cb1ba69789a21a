use anyhow::Result;
use colored::Colorize;

use crate::cli::FilesCommand;
use crate::files::{Document, DocumentLibrary};
use crate::store::LocalStore;

pub fn dispatch(command: FilesCommand, store: &mut LocalStore) -> Result<()> {
    let mut library = DocumentLibrary::load(store)?;

    match command {
        FilesCommand::List { search, json } => {
            let documents: Vec<&Document> = match &search {
                Some(term) => library.search(term),
                None => library.all().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else if documents.is_empty() {
                println!("No documents found.");
            } else {
                println!(
                    "{:<3} {:<24} {:<10} {:>8}  {:<12} {}",
                    "id", "name", "type", "size", "uploaded", "status"
                );
                for doc in documents {
                    print_document_row(doc);
                }
            }
        }
        FilesCommand::Show { id } => {
            let doc = library.get(&id)?;
            println!("--- {} ---", doc.name);
            println!("type:     {}", doc.kind);
            println!("size:     {}", doc.size);
            println!("uploaded: {} by {}", doc.uploaded_date, doc.uploaded_by);
            if doc.shared_with.is_empty() {
                println!("sharing:  private");
            } else {
                println!("sharing:");
                for email in &doc.shared_with {
                    println!("  - {email}");
                }
            }
        }
        FilesCommand::Share { id, email } => {
            library.share(store, &id, &email)?;
            let doc = library.get(&id)?;
            println!("Document shared: {} shared with {email}", doc.name);
        }
        FilesCommand::Rm { id } => {
            let removed = library.delete(store, &id)?;
            println!(
                "Document deleted: {} has been removed permanently",
                removed.name
            );
        }
    }
    Ok(())
}

fn print_document_row(doc: &Document) {
    let status = if doc.is_shared {
        "shared".cyan().to_string()
    } else {
        "private".dimmed().to_string()
    };
    println!(
        "{:<3} {:<24} {:<10} {:>8}  {:<12} {}",
        doc.id, doc.name, doc.kind.as_str(), doc.size, doc.uploaded_date, status
    );
}
