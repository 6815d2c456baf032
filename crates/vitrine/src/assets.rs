//! Asset sources backed by the filesystem or by in-memory bytes.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageReader;
use vitrine_core::{ImageReference, Result, VitrineError};

use crate::resolver::AssetSource;

fn decode_error(reference: &ImageReference, error: impl std::fmt::Display) -> VitrineError {
    VitrineError::ImageDecode {
        source_id: reference.file().to_string(),
        message: error.to_string(),
    }
}

/// Reads images from a directory.
///
/// Every image is fully decoded, so a file with a valid header but a broken
/// body is reported as a decode failure.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    base_dir: PathBuf,
}

impl FsAssetSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the referenced file.
    pub fn path_for(&self, reference: &ImageReference) -> PathBuf {
        self.base_dir.join(reference.file())
    }
}

impl AssetSource for FsAssetSource {
    fn url(&self, reference: &ImageReference) -> String {
        self.path_for(reference).display().to_string()
    }

    async fn decode(&self, reference: &ImageReference) -> Result<(u32, u32)> {
        let path = self.path_for(reference);
        if !path.is_file() {
            return Err(VitrineError::AssetNotFound(path.display().to_string()));
        }
        let image = ImageReader::open(&path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| decode_error(reference, e))?;
        Ok((image.width(), image.height()))
    }
}

/// Serves already-fetched image bytes keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    base_url: String,
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    /// Creates an empty source whose URLs start with `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            files: HashMap::new(),
        }
    }

    /// Adds or replaces the bytes for a file.
    pub fn insert(&mut self, file: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(file.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn url(&self, reference: &ImageReference) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), reference.file())
    }

    async fn decode(&self, reference: &ImageReference) -> Result<(u32, u32)> {
        let bytes = self
            .files
            .get(reference.file())
            .ok_or_else(|| VitrineError::AssetNotFound(self.url(reference)))?;
        let image = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()?
            .decode()
            .map_err(|e| decode_error(reference, e))?;
        Ok((image.width(), image.height()))
    }
}
