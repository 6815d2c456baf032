//! Concurrent image metadata resolution.
//!
//! Every reference is decoded at the same time; the resulting items keep the
//! order of the references. A reference that fails to decode is logged,
//! reported, and left out.

use futures::future::join_all;
use vitrine_core::{ImageItem, ImageReference, Result, VitrineError};

/// Where images come from.
///
/// Implementations map references to loadable locations and read their
/// natural pixel size.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    /// Loadable location of the referenced image.
    fn url(&self, reference: &ImageReference) -> String;

    /// Decodes enough of the image to report its (width, height) in pixels.
    async fn decode(&self, reference: &ImageReference) -> Result<(u32, u32)>;
}

/// An image that could not be resolved.
#[derive(Debug)]
pub struct ResolveFailure {
    /// Position of the reference in the input list.
    pub index: usize,
    pub source_id: String,
    pub error: VitrineError,
}

/// Outcome of resolving a reference list.
#[derive(Debug, Default)]
pub struct ResolvedImages {
    /// Successfully sized images, in input order.
    pub items: Vec<ImageItem>,
    pub failures: Vec<ResolveFailure>,
}

/// Resolves every reference concurrently and waits for all of them.
pub async fn resolve_images<S: AssetSource>(
    source: &S,
    references: &[ImageReference],
    fixed_long_side: f32,
) -> ResolvedImages {
    let decodes = references.iter().map(|reference| async move {
        let (width, height) = source.decode(reference).await?;
        ImageItem::from_natural(reference, width, height, fixed_long_side)
    });
    let outcomes = join_all(decodes).await;

    let mut resolved = ResolvedImages::default();
    for (index, (reference, outcome)) in references.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(item) => resolved.items.push(item),
            Err(error) => {
                log::warn!(
                    "skipping image '{}' ({}): {error}",
                    reference.file(),
                    source.url(reference)
                );
                resolved.failures.push(ResolveFailure {
                    index,
                    source_id: reference.file().to_string(),
                    error,
                });
            }
        }
    }

    log::info!(
        "resolved {} of {} images",
        resolved.items.len(),
        references.len()
    );
    resolved
}
