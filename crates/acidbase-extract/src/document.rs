use std::path::Path;

use crate::error::ExtractError;

/// A scanned report handed to an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    /// Build a document, inferring the MIME type from the file extension.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ExtractError> {
        let filename = filename.into();
        let mime_type = mime_type_for_filename(&filename)?;
        Ok(Self {
            filename,
            mime_type,
            bytes,
        })
    }

    pub async fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ExtractError::UnsupportedDocument(path.display().to_string()))?
            .to_string();
        // Unsupported files are rejected before they are read.
        let mime_type = mime_type_for_filename(&filename)?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self {
            filename,
            mime_type,
            bytes,
        })
    }
}

/// Map a file extension to the MIME type sent to the extraction service.
///
/// Returns `None` for anything that isn't a PDF or a photo of a report.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

fn mime_type_for_filename(filename: &str) -> Result<&'static str, ExtractError> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_type_for_extension)
        .ok_or_else(|| ExtractError::UnsupportedDocument(filename.to_string()))
}
