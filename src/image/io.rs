//! I/O helpers around the `image` crate.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into a [`Grid`] of 0–255
//!   intensities (color inputs are reduced to luma by the `image` crate).
//! - `save_edge_mask`: write a binary mask as an 8-bit PNG (edge = 255).
//! - `save_grayscale_f32`: write an arbitrary grid, min/max-stretched to 0–255.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Grid, ImageView};
use crate::error::CannyError;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures at the file boundary of the tooling.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to decode or encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid of shape {0:?} does not fit an image")]
    Dimensions((usize, usize)),

    #[error(transparent)]
    Canny(#[from] CannyError),
}

/// Load an image from disk and convert to a grayscale grid in `[0, 255]`.
pub fn load_grayscale_image(path: &Path) -> Result<Grid, IoError> {
    let img = image::open(path)
        .map_err(|source| IoError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let (cols, rows) = (img.width() as usize, img.height() as usize);
    let data = img.into_raw().into_iter().map(f32::from).collect();
    Ok(Grid::from_vec(rows, cols, data)?)
}

/// Save a binary edge mask: any non-zero cell becomes white.
pub fn save_edge_mask(mask: &Grid, path: &Path) -> Result<(), IoError> {
    save_mapped(mask, path, |v| if v != 0.0 { 255 } else { 0 })
}

/// Save any grid, stretching its value range linearly onto `[0, 255]`.
pub fn save_grayscale_f32(grid: &Grid, path: &Path) -> Result<(), IoError> {
    let (lo, hi) = grid
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    save_mapped(grid, path, |v| {
        if span > 0.0 {
            ((v - lo) / span * 255.0).round().clamp(0.0, 255.0) as u8
        } else {
            0
        }
    })
}

fn save_mapped<F: Fn(f32) -> u8>(grid: &Grid, path: &Path, map: F) -> Result<(), IoError> {
    let (rows, cols) = grid.shape();
    let (w, h) = match (u32::try_from(cols), u32::try_from(rows)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(IoError::Dimensions(grid.shape())),
    };
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(w, h);
    for (y, row) in grid.row_iter().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([map(px)]));
        }
    }
    out.save(path).map_err(|source| IoError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IoError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| IoError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
