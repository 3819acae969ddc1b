//! In-memory store for open documents.
//!
//! The server only needs the current full text of each open document; text
//! synchronization is full-document, so didChange simply replaces the entry.

use dashmap::DashMap;
use url::Url;

/// The central store for open document text, keyed by document URI.
#[derive(Default)]
pub struct DocumentStore {
    documents: DashMap<Url, String>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document's text.
    pub fn insert(&self, uri: Url, text: String) {
        self.documents.insert(uri, text);
    }

    /// Get a copy of the document's current text.
    pub fn get_text(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|text| text.value().clone())
    }

    /// Remove a closed document.
    pub fn remove(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Number of stored documents (test helper).
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
