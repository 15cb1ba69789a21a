//! Secure notes: seeded mock data, free-text search, and the
//! share-by-email rule from the notes page (vault-domain addresses only).

use anyhow::{bail, Context, Result};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::accounts::current_timestamp;
use crate::store::{LocalStore, KEY_NOTES};

/// Only addresses in this domain may receive shared notes.
pub const SHARE_DOMAIN: &str = "@securevault.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub shared_with: Vec<String>,
}

pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    /// Load from the store, seeding the mock notes on first use.
    pub fn load(store: &mut LocalStore) -> Result<Self> {
        if let Some(notes) = store.get::<Vec<Note>>(KEY_NOTES)? {
            return Ok(Self { notes });
        }
        let book = Self {
            notes: seed_notes(),
        };
        book.save(store)?;
        Ok(book)
    }

    fn save(&self, store: &mut LocalStore) -> Result<()> {
        store.set(KEY_NOTES, &self.notes)
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .with_context(|| format!("no note with id '{id}'"))
    }

    /// Case-insensitive substring match over title and content.
    pub fn search(&self, term: &str) -> Vec<&Note> {
        let needle = term.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// New notes go to the front, as on the notes page.
    pub fn add(&mut self, store: &mut LocalStore, title: &str, content: &str) -> Result<Note> {
        if title.trim().is_empty() || content.trim().is_empty() {
            bail!("please enter both title and content");
        }
        let now = current_timestamp();
        let note = Note {
            id: random_record_id(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now.clone(),
            updated_at: now,
            shared_with: Vec::new(),
        };
        self.notes.insert(0, note.clone());
        self.save(store)?;
        Ok(note)
    }

    pub fn delete(&mut self, store: &mut LocalStore, id: &str) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .with_context(|| format!("no note with id '{id}'"))?;
        let removed = self.notes.remove(index);
        self.save(store)?;
        Ok(removed)
    }

    pub fn share(&mut self, store: &mut LocalStore, id: &str, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            bail!("email required: please enter an email address");
        }
        if !email.ends_with(SHARE_DOMAIN) {
            bail!("invalid email: only {SHARE_DOMAIN} email addresses can access notes");
        }
        let note = self.note_mut(id)?;
        if note.shared_with.iter().any(|e| e == email) {
            bail!("note is already shared with {email}");
        }
        note.shared_with.push(email.to_string());
        self.save(store)
    }

    pub fn unshare(&mut self, store: &mut LocalStore, id: &str, email: &str) -> Result<()> {
        let note = self.note_mut(id)?;
        let before = note.shared_with.len();
        note.shared_with.retain(|e| e != email);
        if note.shared_with.len() == before {
            bail!("{email} does not have access to this note");
        }
        self.save(store)
    }

    fn note_mut(&mut self, id: &str) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .with_context(|| format!("no note with id '{id}'"))
    }
}

fn seed_notes() -> Vec<Note> {
    let mock = |id: &str, title: &str, content: &str, date: &str| Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at: date.to_string(),
        updated_at: date.to_string(),
        shared_with: Vec::new(),
    };
    vec![
        mock(
            "1",
            "Important Reminders",
            "Remember to update all passwords by end of month",
            "2024-12-15T00:00:00Z",
        ),
        mock(
            "2",
            "Account Recovery Info",
            "Recovery email: backup@example.com\nRecovery phone: +1-555-0123",
            "2024-12-10T00:00:00Z",
        ),
        mock(
            "3",
            "Security Questions Answers",
            "First pet: Max\nBirth city: New York",
            "2024-12-05T00:00:00Z",
        ),
    ]
}

fn random_record_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
