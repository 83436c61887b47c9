use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use crate::core::error::{Error, Result};

/// Where noise-word lists, manifests and documents are read from.
/// A missing name is reported as `ErrorKind::SourceUnavailable`.
pub trait DocumentSource {
    fn read_text(&self, name: &str) -> Result<String>;
}

/// Reads files from disk, relative to `root` when one is set
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    pub root: Option<PathBuf>,
}

impl FileSystemSource {
    pub fn new() -> Self {
        FileSystemSource { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        FileSystemSource {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl DocumentSource for FileSystemSource {
    fn read_text(&self, name: &str) -> Result<String> {
        let path = self.resolve(name);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::source_unavailable(&path.display().to_string()),
            _ => Error::from(e),
        })
    }
}

/// In-memory documents keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource {
            documents: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl DocumentSource for MemorySource {
    fn read_text(&self, name: &str) -> Result<String> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| Error::source_unavailable(name))
    }
}

/// Document names listed in a manifest, whitespace-delimited, in order
pub fn read_manifest<S: DocumentSource + ?Sized>(source: &S, name: &str) -> Result<Vec<String>> {
    let text = source.read_text(name)?;
    Ok(text.split_whitespace().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("docs.txt", "doc1.txt\ndoc2.txt\n");
        assert_eq!(read_manifest(&source, "docs.txt").unwrap(), vec!["doc1.txt", "doc2.txt"]);
        assert!(source.read_text("missing.txt").unwrap_err().is_source_unavailable());
    }

    #[test]
    fn test_file_system_source_with_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("doc1.txt")).unwrap();
        writeln!(file, "The rain in Spain.").unwrap();

        let source = FileSystemSource::with_root(dir.path());
        assert_eq!(source.read_text("doc1.txt").unwrap().trim(), "The rain in Spain.");

        let err = source.read_text("doc2.txt").unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(err.context.contains("doc2.txt"));
    }
}
