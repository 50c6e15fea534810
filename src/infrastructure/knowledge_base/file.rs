//! Knowledge documents loaded from JSON or TOML files

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::knowledge_base::{Document, KnowledgeStore};
use crate::domain::DomainError;

/// Supported knowledge file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeFileFormat {
    Json,
    Toml,
}

impl KnowledgeFileFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(DomainError::configuration(format!(
                "Unsupported knowledge file '{}': expected a .json or .toml extension",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    documents: Vec<Document>,
}

/// Parse and validate knowledge documents from a string
pub fn parse_knowledge_store(
    raw: &str,
    format: KnowledgeFileFormat,
) -> Result<KnowledgeStore, DomainError> {
    let file: KnowledgeFile = match format {
        KnowledgeFileFormat::Json => serde_json::from_str(raw)
            .map_err(|e| DomainError::knowledge_base(format!("Invalid JSON: {}", e)))?,
        KnowledgeFileFormat::Toml => toml::from_str(raw)
            .map_err(|e| DomainError::knowledge_base(format!("Invalid TOML: {}", e)))?,
    };

    Ok(KnowledgeStore::new(file.documents)?)
}

/// Read a knowledge file from disk
pub fn load_knowledge_store(path: &Path) -> Result<KnowledgeStore, DomainError> {
    let format = KnowledgeFileFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::knowledge_base(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    let store = parse_knowledge_store(&raw, format)?;
    info!(
        path = %path.display(),
        documents = store.len(),
        "Loaded knowledge file"
    );

    Ok(store)
}
