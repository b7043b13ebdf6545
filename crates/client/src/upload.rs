//! Files attached to multipart requests.

use std::path::Path;

use reqwest::multipart::Part;

use crate::error::ApiError;

/// A file loaded into memory, ready to become a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl UploadFile {
    /// Wrap in-memory bytes. The MIME type is guessed from the extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            bytes,
            mime,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archivo".to_string());
        Ok(Self::from_bytes(file_name, bytes))
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ApiError::Decode(format!("invalid MIME type: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_mime_from_extension() {
        assert_eq!(UploadFile::from_bytes("ci.jpg", vec![]).mime, "image/jpeg");
        assert_eq!(UploadFile::from_bytes("nota.pdf", vec![]).mime, "application/pdf");
        assert_eq!(UploadFile::from_bytes("seriales.csv", vec![]).mime, "text/csv");
        assert_eq!(
            UploadFile::from_bytes("blob", vec![]).mime,
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anverso.png");
        std::fs::write(&path, b"png").unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "anverso.png");
        assert_eq!(file.bytes, b"png");
        assert_eq!(file.mime, "image/png");
    }

    #[tokio::test]
    async fn missing_file_is_file_error() {
        let err = UploadFile::from_path("/definitely/not/here.jpg").await.unwrap_err();
        assert!(matches!(err, ApiError::File { .. }));
    }
}
