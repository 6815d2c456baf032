//! Image references and sized exhibit items.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitrineError};

/// A reference to an image as listed in a room manifest.
///
/// Manifests may list a bare file name or a record carrying display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageReference {
    /// Only the file name is known.
    Bare(String),
    /// File name plus optional metadata.
    Detailed {
        file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
}

impl ImageReference {
    /// Creates a reference from a bare file name.
    pub fn bare(file: impl Into<String>) -> Self {
        Self::Bare(file.into())
    }

    /// Returns the file name this reference points at.
    pub fn file(&self) -> &str {
        match self {
            Self::Bare(file) | Self::Detailed { file, .. } => file,
        }
    }

    /// Returns the title, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::Detailed { title, .. } => title.as_deref(),
        }
    }

    /// Returns the caption, if any.
    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::Detailed { caption, .. } => caption.as_deref(),
        }
    }

    /// Returns the author, if any.
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::Detailed { author, .. } => author.as_deref(),
        }
    }
}

impl From<&str> for ImageReference {
    fn from(file: &str) -> Self {
        Self::bare(file)
    }
}

/// Computes the display size of an image whose longer side is normalized
/// to `fixed_long_side`, preserving the aspect ratio.
pub fn display_size(natural_width: u32, natural_height: u32, fixed_long_side: f32) -> Result<Vec2> {
    if natural_width == 0 || natural_height == 0 {
        return Err(VitrineError::InvalidDimensions {
            width: natural_width,
            height: natural_height,
        });
    }
    if !(fixed_long_side > 0.0) {
        return Err(VitrineError::InvalidConfig(format!(
            "fixed long side must be positive, got {fixed_long_side}"
        )));
    }

    #[allow(clippy::cast_precision_loss)]
    let (w, h) = (natural_width as f32, natural_height as f32);
    let size = if natural_width >= natural_height {
        Vec2::new(fixed_long_side, fixed_long_side * h / w)
    } else {
        Vec2::new(fixed_long_side * w / h, fixed_long_side)
    };
    Ok(size)
}

/// An image with known natural and display dimensions.
///
/// Display dimensions are derived once at construction and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    source_id: String,
    natural_width: u32,
    natural_height: u32,
    display_width: f32,
    display_height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl ImageItem {
    /// Creates an item from a reference and its decoded pixel size.
    pub fn from_natural(
        reference: &ImageReference,
        natural_width: u32,
        natural_height: u32,
        fixed_long_side: f32,
    ) -> Result<Self> {
        let size = display_size(natural_width, natural_height, fixed_long_side)?;
        Ok(Self {
            source_id: reference.file().to_string(),
            natural_width,
            natural_height,
            display_width: size.x,
            display_height: size.y,
            title: reference.title().map(str::to_string),
            caption: reference.caption().map(str::to_string),
            author: reference.author().map(str::to_string),
        })
    }

    /// Returns the identifier of the source image.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Returns the decoded pixel size as (width, height).
    pub fn natural_size(&self) -> (u32, u32) {
        (self.natural_width, self.natural_height)
    }

    /// Returns the display size in scene units.
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.display_width, self.display_height)
    }

    /// Display width (fw).
    pub fn display_width(&self) -> f32 {
        self.display_width
    }

    /// Display height (fh).
    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}
