use std::path::PathBuf;

/// Everything that can stop a report run.
///
/// `FileAccess` and `Encoding` cover an unreadable input file, `Parse` covers
/// malformed JSON, and the two field variants cover a document or command that
/// lacks (or mistypes) a field the report needs.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing field `{field}` in {context}")]
    MissingField { field: String, context: String },
    #[error("field `{field}` in {context} must be {expected}")]
    InvalidField {
        field: String,
        context: String,
        expected: &'static str,
    },
}

impl ReportError {
    pub fn missing(field: &str, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.to_string(),
            context: context.into(),
        }
    }

    pub fn invalid(field: &str, context: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            context: context.into(),
            expected,
        }
    }

    /// True for failures raised while reading fields of an already parsed document.
    pub fn is_field_access(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidField { .. })
    }
}
