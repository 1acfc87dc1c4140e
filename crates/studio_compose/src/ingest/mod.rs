//! Image ingestion: turns dropped, pasted or picked files into attachments.
//!
//! Sources are processed one after another, so the resulting attachments
//! keep the input order of the sources that decoded. Non-image sources are
//! skipped before any read. A source that cannot be read becomes a
//! [`DecodeFailure`] in the report and does not stop the batch.

mod drag;
mod encode;

use std::path::PathBuf;

use studio_core::Attachment;
use tracing::{debug, error};

pub use drag::{DragPayload, FILE_URL_MARKER, drag_contains_image};
pub use encode::{COMPRESSED_MIME, CompressOptions, EncodedImage, Encoding, compress, encode_image};

use crate::config::ComposeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Drop,
    Paste,
    Picker,
}

#[derive(Debug, Clone)]
pub enum SourceData {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// A raw, not yet normalized image candidate.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub name: String,
    pub mime_type: String,
    pub origin: SourceOrigin,
    pub data: SourceData,
}

impl ImageSource {
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        origin: SourceOrigin,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            origin,
            data: SourceData::Bytes(bytes),
        }
    }

    /// File-backed source; the media type is guessed from the extension.
    pub fn from_path(path: impl Into<PathBuf>, origin: SourceOrigin) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = guess_mime(&name).to_string();
        Self {
            name,
            mime_type,
            origin,
            data: SourceData::File(path),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub display_name: String,
    pub reason: String,
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.display_name, self.reason)
    }
}

/// Outcome of one gesture's worth of sources.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub attachments: Vec<Attachment>,
    pub failures: Vec<DecodeFailure>,
    /// Sources dropped because they were not images
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct ImageIngestor {
    compress: Option<CompressOptions>,
}

impl ImageIngestor {
    pub fn new(config: &ComposeConfig) -> Self {
        let compress = config.compression_enabled.then_some(CompressOptions {
            max_dimension: config.compress_max_dimension,
            quality: config.compress_quality,
        });
        Self { compress }
    }

    pub async fn ingest(&self, source: ImageSource) -> Result<Attachment, DecodeFailure> {
        let ImageSource {
            name,
            mime_type,
            data,
            ..
        } = source;

        let bytes = match data {
            SourceData::Bytes(bytes) => bytes,
            SourceData::File(path) => tokio::fs::read(&path).await.map_err(|e| DecodeFailure {
                display_name: name.clone(),
                reason: e.to_string(),
            })?,
        };
        if bytes.is_empty() {
            return Err(DecodeFailure {
                display_name: name,
                reason: "empty image data".to_string(),
            });
        }

        let compress = self.compress;
        let mime = mime_type.clone();
        let encoded = tokio::task::spawn_blocking(move || encode_image(&bytes, &mime, compress))
            .await
            .map_err(|e| DecodeFailure {
                display_name: name.clone(),
                reason: format!("encoder task failed: {e}"),
            })?;

        debug!(name = %name, encoding = ?encoded.encoding, "image ingested");
        Ok(Attachment::image(encoded.content, name, mime_type))
    }

    pub async fn ingest_batch(&self, sources: Vec<ImageSource>) -> IngestReport {
        let mut report = IngestReport::default();
        for source in sources {
            if !source.is_image() {
                debug!(name = %source.name, mime_type = %source.mime_type, "skipping non-image source");
                report.skipped += 1;
                continue;
            }
            match self.ingest(source).await {
                Ok(attachment) => report.attachments.push(attachment),
                Err(failure) => {
                    error!(name = %failure.display_name, reason = %failure.reason, "Error reading file");
                    report.failures.push(failure);
                }
            }
        }
        report
    }
}

fn guess_mime(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::encode::tests::sample_png;
    use super::*;

    fn ingestor() -> ImageIngestor {
        ImageIngestor::new(&ComposeConfig::default())
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("a.PNG"), "image/png");
        assert_eq!(guess_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("notes.txt"), "application/octet-stream");
        assert_eq!(guess_mime("README"), "application/octet-stream");
    }

    #[test]
    fn test_from_path_sets_name_and_type() {
        let source = ImageSource::from_path("/tmp/shots/hero.webp", SourceOrigin::Picker);
        assert_eq!(source.name, "hero.webp");
        assert_eq!(source.mime_type, "image/webp");
        assert!(source.is_image());
    }

    #[tokio::test]
    async fn test_mixed_batch_keeps_image_order() {
        let sources = vec![
            ImageSource::from_bytes("first.png", "image/png", SourceOrigin::Drop, sample_png(16, 16)),
            ImageSource::from_bytes("notes.txt", "text/plain", SourceOrigin::Drop, b"hello".to_vec()),
            ImageSource::from_bytes("second.png", "image/png", SourceOrigin::Drop, sample_png(8, 8)),
        ];

        let report = ingestor().ingest_batch(sources).await;

        let names: Vec<_> = report
            .attachments
            .iter()
            .map(|a| a.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["first.png", "second.png"]);
        assert_eq!(report.skipped, 1);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let sources = vec![
            ImageSource::from_path("/definitely/missing.png", SourceOrigin::Drop),
            ImageSource::from_bytes("ok.png", "image/png", SourceOrigin::Drop, sample_png(8, 8)),
        ];

        let report = ingestor().ingest_batch(sources).await;

        assert_eq!(report.attachments.len(), 1);
        assert_eq!(report.attachments[0].display_name, "ok.png");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].display_name, "missing.png");
    }

    #[tokio::test]
    async fn test_file_source_is_inlined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inline.png");
        std::fs::write(&path, sample_png(12, 12)).unwrap();

        let attachment = ingestor()
            .ingest(ImageSource::from_path(&path, SourceOrigin::Picker))
            .await
            .unwrap();

        assert!(attachment.content.starts_with("data:image/"));
        assert!(!attachment.content.contains(&*path.to_string_lossy()));
        assert_eq!(attachment.mime_type, "image/png");
        assert!(!attachment.decode_bytes().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_image_bytes_still_encode_raw() {
        let attachment = ingestor()
            .ingest(ImageSource::from_bytes(
                "odd.png",
                "image/png",
                SourceOrigin::Paste,
                b"\x89PNG-but-not-really".to_vec(),
            ))
            .await
            .unwrap();
        assert!(attachment.content.starts_with("data:image/png;base64,"));
        assert_eq!(attachment.decode_bytes().unwrap(), b"\x89PNG-but-not-really");
    }

    #[tokio::test]
    async fn test_empty_bytes_are_a_failure() {
        let result = ingestor()
            .ingest(ImageSource::from_bytes("empty.png", "image/png", SourceOrigin::Paste, Vec::new()))
            .await;
        assert!(result.is_err());
    }
}
