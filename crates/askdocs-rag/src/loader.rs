//! Plain-text document loader

use std::fs;
use std::path::Path;

use askdocs_core::{Document, Error, Result};

/// Load every `.txt` file in a directory as a document
///
/// The scan is non-recursive and the document id is the source filename.
/// A missing directory fails the whole load; a file that cannot be read or
/// is not valid UTF-8 is logged and skipped.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(Error::Ingestion(format!(
            "Data folder not found: {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        match fs::read_to_string(&path) {
            Ok(content) => documents.push(Document::new(name, content)),
            Err(e) => tracing::warn!("Failed to read {}: {}", name, e),
        }
    }

    tracing::info!(
        "Loaded {} text files from {}",
        documents.len(),
        dir.display()
    );

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_loads_txt_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("refunds.txt"), "Refunds take 14 days.").unwrap();
        fs::write(dir.path().join("shipping.txt"), "Shipping takes 3 days.").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().any(|d| d.id == "refunds.txt"));
        assert!(docs.iter().any(|d| d.id == "shipping.txt"));
    }

    #[test]
    fn test_non_txt_files_are_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "markdown").unwrap();
        fs::write(dir.path().join("data.csv"), "a,b,c").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no_such_folder");
        let result = load_documents(&missing);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.txt"), "valid text").unwrap();

        let mut file = fs::File::create(dir.path().join("bad.txt")).unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "good.txt");
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.txt"), "nested text").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert!(docs.is_empty());
    }
}
