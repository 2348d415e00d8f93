// assets.rs - Background Texture Lookup
//
// The view references its background by bare name; resolving that name to a
// file is a host concern. A missing or undecodable texture is not an error
// path of the view: it is logged and the scene falls back to a flat fill.

use std::path::PathBuf;

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use log::{info, warn};

/// Name of the background texture in the asset bundle.
pub const BACKGROUND_NAME: &str = "bg-texture";

/// Environment override for the asset bundle directory.
const ASSET_DIR_ENV: &str = "SIMPLE_ASSETS";

fn asset_dir() -> PathBuf {
    std::env::var_os(ASSET_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Resolves and decodes the background texture, or `None` with a logged
/// warning when it cannot be had.
pub fn background_handle() -> Option<Handle> {
    match load_background() {
        Ok(handle) => {
            info!("background texture '{BACKGROUND_NAME}' loaded");
            Some(handle)
        }
        Err(e) => {
            warn!("background texture '{BACKGROUND_NAME}' unavailable: {e:#}");
            None
        }
    }
}

fn load_background() -> Result<Handle> {
    let path = asset_dir().join(format!("{BACKGROUND_NAME}.png"));
    let reader = image::ImageReader::open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    let decoded = reader
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
