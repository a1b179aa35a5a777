//! Selected upload file

use crate::core::error::DomainError;

/// The first entry of the file picker: a name and its raw contents.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    bytes: Vec<u8>,
    mime: Option<String>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(DomainError::InvalidFileName(file_name));
        }
        Ok(Self {
            file_name,
            bytes: bytes.into(),
            mime: None,
        })
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Contents can be megabytes; keep them out of logs.
impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("mime", &self.mime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file() {
        let file = UploadFile::new("reviews.csv", b"Too slow\n".to_vec()).unwrap();
        assert_eq!(file.file_name(), "reviews.csv");
        assert_eq!(file.len(), 9);
        assert!(file.mime().is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(UploadFile::new(" ", Vec::new()).is_err());
    }

    #[test]
    fn test_debug_omits_contents() {
        let file = UploadFile::new("a.txt", b"secret review".to_vec())
            .unwrap()
            .with_mime("text/plain");
        let debug = format!("{:?}", file);
        assert!(debug.contains("a.txt"));
        assert!(debug.contains("text/plain"));
        assert!(!debug.contains("secret"));
    }
}
