use crate::domain::models::SceneDocument;
use crate::error::ReportError;
use std::path::Path;

/// Read and parse a command batch. Field access is deferred to the report.
pub fn load_document(path: &Path) -> Result<SceneDocument, ReportError> {
    tracing::debug!(path = %path.display(), "reading scene file");
    let bytes = std::fs::read(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ReportError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let root = serde_json::from_str(&text)?;
    tracing::debug!(bytes = text.len(), "scene file parsed");
    Ok(SceneDocument::new(root))
}
