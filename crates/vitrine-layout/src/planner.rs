//! Greedy first-fit packing of images onto the display walls.
//!
//! Walls are filled in [`WallName::DISPLAY_ORDER`]. Each wall takes as many
//! images from the front of the remaining list as fit between its margins,
//! and the resulting group is centred on the wall. Images left over once
//! every wall is full are not placed.

use glam::Vec2;
use serde::Serialize;
use vitrine_core::{ImageItem, LayoutOptions, WallName};

/// One image's slot on a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Index into the planner's input list.
    pub image_index: usize,
    /// Wall-local position of the image centre, measured from the wall's origin edge.
    pub offset: f32,
    /// Display width (fw).
    pub width: f32,
    /// Display height (fh).
    pub height: f32,
}

impl Placement {
    /// Wall-local extent of the image as (start, end).
    #[must_use]
    pub fn span(&self) -> (f32, f32) {
        let half = self.width * 0.5;
        (self.offset - half, self.offset + half)
    }
}

/// The images assigned to one wall, ordered by increasing offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallAssignment {
    pub wall: WallName,
    pub placements: Vec<Placement>,
}

/// Per-wall placements for a whole room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutPlan {
    walls: Vec<WallAssignment>,
}

impl LayoutPlan {
    /// Plans a layout for resolved images.
    #[must_use]
    pub fn for_images(items: &[ImageItem], wall_width: f32, options: &LayoutOptions) -> Self {
        let sizes: Vec<Vec2> = items.iter().map(ImageItem::display_size).collect();
        plan_layout(&sizes, wall_width, options)
    }

    /// Wall assignments in the order they were filled. Walls without images are absent.
    pub fn walls(&self) -> &[WallAssignment] {
        &self.walls
    }

    /// Returns the assignment for a wall, if it received any images.
    #[must_use]
    pub fn wall(&self, name: WallName) -> Option<&WallAssignment> {
        self.walls.iter().find(|w| w.wall == name)
    }

    /// Iterates over every placement together with its wall.
    pub fn placements(&self) -> impl Iterator<Item = (WallName, &Placement)> {
        self.walls
            .iter()
            .flat_map(|w| w.placements.iter().map(move |p| (w.wall, p)))
    }

    /// Total number of placed images.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.walls.iter().map(|w| w.placements.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placement_count() == 0
    }

    /// Sorted indices of every placed image.
    #[must_use]
    pub fn placed_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.placements().map(|(_, p)| p.image_index).collect();
        indices.sort_unstable();
        indices
    }

    /// Indices in `0..total` that did not fit on any wall.
    #[must_use]
    pub fn dropped_indices(&self, total: usize) -> Vec<usize> {
        let placed = self.placed_indices();
        (0..total).filter(|i| placed.binary_search(i).is_err()).collect()
    }
}

/// Packs images of the given display sizes onto the display walls.
///
/// The result depends only on the arguments.
#[must_use]
pub fn plan_layout(sizes: &[Vec2], wall_width: f32, options: &LayoutOptions) -> LayoutPlan {
    let available = options.available_width(wall_width);
    let mut cursor = 0;
    let mut walls = Vec::new();

    for wall in WallName::DISPLAY_ORDER {
        if cursor >= sizes.len() {
            break;
        }

        let count = fit_count(&sizes[cursor..], available, options.min_spacing);
        if count == 0 {
            log::debug!("image {cursor} does not fit on the {} wall", wall.name());
            continue;
        }

        let mut indices: Vec<usize> = (cursor..cursor + count).collect();
        // Walking in from the door, the first image should be on the right.
        if wall == WallName::Front {
            indices.reverse();
        }

        let placements = center_group(&indices, sizes, available, options);
        log::debug!("{} wall: {} images", wall.name(), placements.len());
        walls.push(WallAssignment { wall, placements });
        cursor += count;
    }

    if cursor < sizes.len() {
        log::debug!(
            "{} of {} images exceed wall capacity and were left out",
            sizes.len() - cursor,
            sizes.len()
        );
    }

    LayoutPlan { walls }
}

/// Number of leading images that fit side by side in `available`.
fn fit_count(sizes: &[Vec2], available: f32, spacing: f32) -> usize {
    let mut running = 0.0;
    let mut count = 0;
    for size in sizes {
        let gap = if count > 0 { spacing } else { 0.0 };
        if running + gap + size.x > available {
            break;
        }
        running += gap + size.x;
        count += 1;
    }
    count
}

fn center_group(
    indices: &[usize],
    sizes: &[Vec2],
    available: f32,
    options: &LayoutOptions,
) -> Vec<Placement> {
    let image_width: f32 = indices.iter().map(|&i| sizes[i].x).sum();
    #[allow(clippy::cast_precision_loss)]
    let gaps = indices.len().saturating_sub(1) as f32 * options.min_spacing;
    let extra = available - (image_width + gaps);

    let mut running = options.min_margin + extra * 0.5;
    indices
        .iter()
        .map(|&image_index| {
            let size = sizes[image_index];
            let placement = Placement {
                image_index,
                offset: running + size.x * 0.5,
                width: size.x,
                height: size.y,
            };
            running += size.x + options.min_spacing;
            placement
        })
        .collect()
}
