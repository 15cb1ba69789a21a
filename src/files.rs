//! Mock document listings from the files page. Metadata only; there are no
//! file bytes behind these records.

use std::fmt;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::{LocalStore, KEY_DOCUMENTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Pdf,
    Image,
    Document,
}

impl DocKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Pdf => "pdf",
            DocKind::Image => "image",
            DocKind::Document => "document",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocKind,
    pub size: String,
    pub uploaded_date: String,
    pub uploaded_by: String,
    pub is_shared: bool,
    #[serde(default)]
    pub shared_with: Vec<String>,
}

pub struct DocumentLibrary {
    documents: Vec<Document>,
}

impl DocumentLibrary {
    /// Load from the store, seeding the mock documents on first use.
    pub fn load(store: &mut LocalStore) -> Result<Self> {
        if let Some(documents) = store.get::<Vec<Document>>(KEY_DOCUMENTS)? {
            return Ok(Self { documents });
        }
        let library = Self {
            documents: seed_documents(),
        };
        library.save(store)?;
        Ok(library)
    }

    fn save(&self, store: &mut LocalStore) -> Result<()> {
        store.set(KEY_DOCUMENTS, &self.documents)
    }

    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Result<&Document> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .with_context(|| format!("no document with id '{id}'"))
    }

    pub fn search(&self, term: &str) -> Vec<&Document> {
        let needle = term.to_lowercase();
        self.documents
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Unlike notes, documents may be shared with any address.
    pub fn share(&mut self, store: &mut LocalStore, id: &str, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            bail!("email required: please enter an email address");
        }
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .with_context(|| format!("no document with id '{id}'"))?;
        doc.shared_with.push(email.to_string());
        doc.is_shared = true;
        self.save(store)
    }

    pub fn delete(&mut self, store: &mut LocalStore, id: &str) -> Result<Document> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .with_context(|| format!("no document with id '{id}'"))?;
        let removed = self.documents.remove(index);
        self.save(store)?;
        Ok(removed)
    }
}

fn seed_documents() -> Vec<Document> {
    let mock = |id: &str, name: &str, kind: DocKind, size: &str, uploaded: &str| Document {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        size: size.to_string(),
        uploaded_date: uploaded.to_string(),
        uploaded_by: "You".to_string(),
        is_shared: false,
        shared_with: Vec::new(),
    };
    vec![
        Document {
            is_shared: true,
            shared_with: vec!["admin@securevault.com".to_string()],
            ..mock("1", "Passport_Scan.pdf", DocKind::Pdf, "2.4 MB", "2 days ago")
        },
        mock(
            "2",
            "Bank_Statement_Dec.pdf",
            DocKind::Pdf,
            "1.8 MB",
            "5 days ago",
        ),
        mock(
            "3",
            "Driver_License.jpg",
            DocKind::Image,
            "856 KB",
            "1 week ago",
        ),
        Document {
            is_shared: true,
            shared_with: vec!["manager@company.com".to_string()],
            ..mock(
                "4",
                "Insurance_Policy.pdf",
                DocKind::Pdf,
                "3.2 MB",
                "2 weeks ago",
            )
        },
        mock(
            "5",
            "Contract_Draft.docx",
            DocKind::Document,
            "450 KB",
            "3 weeks ago",
        ),
    ]
}
