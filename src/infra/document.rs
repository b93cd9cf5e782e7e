//! Loading article documents from JSON sources.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tracing::debug;

use crate::domain::article::ArticleDocument;

use super::error::InfraError;

const STDIN_PATH: &str = "-";

/// Read a document from `path`, or from stdin when the path is `-`.
pub fn load_document(path: &Path) -> Result<ArticleDocument, InfraError> {
    let (origin, contents) = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        ("<stdin>".to_string(), buffer)
    } else {
        let contents = fs::read_to_string(path).map_err(|source| InfraError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        (path.display().to_string(), contents)
    };

    parse_document(&origin, &contents)
}

pub fn parse_document(origin: &str, contents: &str) -> Result<ArticleDocument, InfraError> {
    let document: ArticleDocument =
        serde_json::from_str(contents).map_err(|source| InfraError::Document {
            origin: origin.to_string(),
            source,
        })?;

    debug!(
        target = "infra::document",
        origin = %origin,
        elements = document.elements.len(),
        "Loaded article document"
    );

    Ok(document)
}
