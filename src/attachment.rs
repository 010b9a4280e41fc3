//! Turns a local file into a content part for the `$load` directive.
//!
//! Files with a known media extension are sent as inline binary data; any
//! other file is sent as text, provided it looks like text.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{BINARY_DETECTION_BYTES, MAX_ATTACHMENT_SIZE};
use crate::message::Part;

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is too large: {size} bytes (max {max})", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),
}

/// Media type for extensions the API accepts as inline data.
pub fn media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "mp3" => "audio/mp3",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mov" => "video/mov",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime)
}

/// Reads `path` and converts it into a [`Part`].
///
/// # Errors
///
/// Fails when the file is missing, unreadable, over the inline size limit,
/// or neither a known media type nor text.
pub async fn load_part(path: &Path) -> Result<Part, AttachmentError> {
    let read_err = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            AttachmentError::NotFound(path.to_path_buf())
        } else {
            AttachmentError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_err)?;
    if !metadata.is_file() {
        return Err(AttachmentError::Unsupported(path.to_path_buf()));
    }
    if metadata.len() > MAX_ATTACHMENT_SIZE {
        return Err(AttachmentError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_ATTACHMENT_SIZE,
        });
    }

    let data = tokio::fs::read(path).await.map_err(read_err)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded attachment");

    if let Some(mime) = media_type(path) {
        return Ok(Part::blob(mime, data));
    }

    // Check for binary content (null bytes in first 8KB)
    let check_len = data.len().min(BINARY_DETECTION_BYTES);
    if data[..check_len].contains(&0) {
        return Err(AttachmentError::Unsupported(path.to_path_buf()));
    }
    String::from_utf8(data)
        .map(Part::Text)
        .map_err(|_| AttachmentError::Unsupported(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn media_types_by_extension() {
        assert_eq!(media_type(Path::new("a.PNG")), Some("image/png"));
        assert_eq!(media_type(Path::new("dir/b.jpeg")), Some("image/jpeg"));
        assert_eq!(media_type(Path::new("doc.pdf")), Some("application/pdf"));
        assert_eq!(media_type(Path::new("notes.txt")), None);
        assert_eq!(media_type(Path::new("Makefile")), None);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_part(&dir.path().join("foo.txt")).await.unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
        assert!(err.to_string().contains("foo.txt"));
    }

    #[tokio::test]
    async fn text_file_becomes_text_part() {
        let mut file = tempfile::Builder::new().suffix(".rs").tempfile().unwrap();
        write!(file, "fn main() {{}}").unwrap();
        let part = load_part(file.path()).await.unwrap();
        assert_eq!(part, Part::text("fn main() {}"));
    }

    #[tokio::test]
    async fn image_becomes_blob() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G', 0]).unwrap();
        let part = load_part(file.path()).await.unwrap();
        assert_eq!(part, Part::blob("image/png", vec![0x89, b'P', b'N', b'G', 0]));
    }

    #[tokio::test]
    async fn unknown_binary_is_unsupported() {
        let mut file = tempfile::Builder::new().suffix(".bin").tempfile().unwrap();
        file.write_all(&[1, 0, 2, 3]).unwrap();
        let err = load_part(file.path()).await.unwrap_err();
        assert!(matches!(err, AttachmentError::Unsupported(_)));
    }

    #[tokio::test]
    async fn directory_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_part(dir.path()).await.unwrap_err();
        assert!(matches!(err, AttachmentError::Unsupported(_)));
    }
}
