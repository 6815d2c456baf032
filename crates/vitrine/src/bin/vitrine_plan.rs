//! Plans a room headlessly and prints the placed exhibits as JSON.
//!
//! Usage: `vitrine-plan <manifest.json> [image_dir]`
//!
//! Images are read from `image_dir`, or from the manifest's directory when
//! it is omitted.

use std::path::{Path, PathBuf};

use serde::Serialize;
use vitrine_rs::{init_logging, FsAssetSource, Gallery, PlacedScene, Result, RoomManifest};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanReport<'a> {
    room_title: &'a str,
    wall_width: f32,
    wall_height: f32,
    scene: &'a PlacedScene,
    dropped: Vec<&'a str>,
    failed: Vec<FailedImage<'a>>,
}

#[derive(Serialize)]
struct FailedImage<'a> {
    file: &'a str,
    error: String,
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1);
    let Some(manifest_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: vitrine-plan <manifest.json> [image_dir]");
        std::process::exit(2);
    };
    let image_dir = args.next().map_or_else(
        || {
            manifest_path
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        PathBuf::from,
    );

    let manifest = RoomManifest::from_path(&manifest_path)?;
    let source = FsAssetSource::new(image_dir);
    let gallery = pollster::block_on(Gallery::load(manifest, &source))?;

    let report = PlanReport {
        room_title: &gallery.room().room_title,
        wall_width: gallery.room().wall_width,
        wall_height: gallery.room().wall_height,
        scene: gallery.scene(),
        dropped: gallery
            .dropped_items()
            .into_iter()
            .map(|item| item.source_id())
            .collect(),
        failed: gallery
            .failures()
            .iter()
            .map(|f| FailedImage {
                file: &f.source_id,
                error: f.error.to_string(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
