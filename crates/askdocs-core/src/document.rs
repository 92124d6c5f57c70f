//! Document and retrieval types

use serde::{Deserialize, Serialize};

/// Category assigned to documents that do not declare one
pub const DEFAULT_CATEGORY: &str = "general";

/// Constant source tag attached to every indexed record
pub const SOURCE_TAG: &str = "internal";

/// A plain-text document loaded from the data folder
///
/// The identifier is the source filename. It must be unique within a run;
/// a second file with the same name overwrites the earlier in-memory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub category: String,
    pub source: String,
}

impl Document {
    /// Create a document with the default category and source tag
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            category: DEFAULT_CATEGORY.to_string(),
            source: SOURCE_TAG.to_string(),
        }
    }
}

/// Metadata stored alongside each indexed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub category: String,
    pub source: String,
    pub doc_id: String,
}

impl RecordMetadata {
    pub fn for_document(doc: &Document) -> Self {
        Self {
            category: doc.category.clone(),
            source: doc.source.clone(),
            doc_id: doc.id.clone(),
        }
    }
}

/// A passage retrieved from the vector store for a query
///
/// Ephemeral, produced per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieved {
    pub content: String,
    pub metadata: RecordMetadata,
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_defaults() {
        let doc = Document::new("policies.txt", "Refunds are processed within 14 days.");
        assert_eq!(doc.id, "policies.txt");
        assert_eq!(doc.category, DEFAULT_CATEGORY);
        assert_eq!(doc.source, SOURCE_TAG);
    }

    #[test]
    fn test_metadata_from_document() {
        let doc = Document::new("faq.txt", "content");
        let meta = RecordMetadata::for_document(&doc);
        assert_eq!(meta.doc_id, "faq.txt");
        assert_eq!(meta.category, "general");
        assert_eq!(meta.source, "internal");
    }
}
