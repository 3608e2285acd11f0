//! Uploaded documents.

use std::path::Path;

use bytes::Bytes;

use crate::AnalysisError;

/// Accepted document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// PDF document.
    Pdf,
    /// Legacy Word document.
    Doc,
    /// Word document.
    Docx,
    /// Plain text.
    Txt,
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
}

impl DocumentKind {
    /// Infers the kind from a file name's extension (case-insensitive).
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Returns the MIME type sent with the upload.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Txt => "text/plain",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Returns the accepted extensions, for help text.
    #[must_use]
    pub const fn accepted_extensions() -> &'static [&'static str] {
        &["pdf", "doc", "docx", "txt", "png", "jpg", "jpeg"]
    }
}

/// A document ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    kind: DocumentKind,
    bytes: Bytes,
}

impl Document {
    /// Creates a document from its file name and contents.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Request`] if the file name is empty or its
    /// extension is not an accepted type.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Result<Self, AnalysisError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(AnalysisError::Request("document has no file name".to_string()));
        }
        let kind = DocumentKind::from_file_name(&file_name).ok_or_else(|| {
            AnalysisError::Request(format!(
                "unsupported document type '{file_name}', expected one of: {}",
                DocumentKind::accepted_extensions().join(", ")
            ))
        })?;

        Ok(Self {
            file_name,
            kind,
            bytes: bytes.into(),
        })
    }

    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Request`] if the file cannot be read or is
    /// not an accepted type.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AnalysisError::Request(format!("cannot read {}: {e}", path.display())))?;

        Self::new(file_name, bytes)
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the document kind.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the contents.
    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            DocumentKind::from_file_name("Q3_earnings_report.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::from_file_name("scan.jpeg"), Some(DocumentKind::Jpeg));
        assert_eq!(DocumentKind::from_file_name("model.xlsx"), None);
        assert_eq!(DocumentKind::from_file_name("README"), None);
    }

    #[test]
    fn test_document_validation() {
        let doc = Document::new("notes.txt", "revenue up".as_bytes().to_vec()).unwrap();
        assert_eq!(doc.kind().mime(), "text/plain");
        assert_eq!(doc.len(), 10);

        assert!(matches!(
            Document::new("", Vec::<u8>::new()),
            Err(AnalysisError::Request(_))
        ));
        assert!(matches!(
            Document::new("model.xlsx", Vec::<u8>::new()),
            Err(AnalysisError::Request(_))
        ));
    }

    #[tokio::test]
    async fn test_document_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annual_report.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Revenue grew 12%").unwrap();

        let doc = Document::from_path(&path).await.unwrap();
        assert_eq!(doc.file_name(), "annual_report.txt");
        assert_eq!(doc.kind(), DocumentKind::Txt);
        assert!(!doc.is_empty());
    }

    #[tokio::test]
    async fn test_document_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Document::from_path(dir.path().join("missing.pdf")).await;
        assert!(matches!(result, Err(AnalysisError::Request(_))));
    }
}
