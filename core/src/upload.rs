//! Selected files and their base64 transcoding for JSON uploads.
//!
//! A `ResumeFile` is either already in memory or a path to read later. The
//! read happens in [`ResumeFile::encode`], immediately before the upload
//! request is built, so a file that vanished or is unreadable fails the
//! submission without any request being sent.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid base64 file data: {0}")]
    Decode(#[from] base64::DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Memory(Vec<u8>),
    Disk(PathBuf),
}

/// A file picked by the user, plus the name and type declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    filename: String,
    content_type: String,
    source: Source,
}

/// A file ready to embed in a JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    pub filename: String,
    pub content_type: String,
    pub data_base64: String,
}

impl ResumeFile {
    pub fn from_bytes(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            source: Source::Memory(bytes),
        }
    }

    /// Refer to a file on disk. Nothing is read until [`ResumeFile::encode`].
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            content_type: content_type_for(&path).to_string(),
            filename,
            source: Source::Disk(path),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, UploadError> {
        match &self.source {
            Source::Memory(bytes) => Ok(bytes.clone()),
            Source::Disk(path) => fs::read(path).map_err(|source| UploadError::Read {
                path: path.clone(),
                source,
            }),
        }
    }

    pub fn encode(&self) -> Result<EncodedFile, UploadError> {
        let bytes = self.read_bytes()?;
        Ok(EncodedFile {
            filename: self.filename.clone(),
            content_type: self.content_type.clone(),
            data_base64: STANDARD.encode(bytes),
        })
    }
}

pub fn decode_file_data(data: &str) -> Result<Vec<u8>, UploadError> {
    Ok(STANDARD.decode(data)?)
}

/// Declared MIME type by file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        _ => OCTET_STREAM,
    }
}
