use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::{debug, info, warn};
use raylib::prelude::*;
use thiserror::Error;

pub const FIGURE_COUNT: u8 = 8;
pub const DOCUMENT_PATH: &str = "paper.pdf";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image data for {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to create texture for {path:?}: {reason}")]
    Upload { path: PathBuf, reason: String },
}

/// Relative path of a numbered paper figure.
pub fn figure_path(number: u8) -> String {
    format!("images/figures/Figure {}.jpg", number)
}

/// Pixel operation needed to undo an EXIF orientation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fixup {
    RotateCw,
    RotateCcw,
    FlipHorizontal,
    FlipVertical,
}

// 1 = Top-left (Normal)
// 2 = Top-right (mirrored)
// 3 = Bottom-right (180 deg)
// 4 = Bottom-left (mirrored vertically)
// 5 = Left-top (transposed)
// 6 = Right-top (90 deg clockwise)
// 7 = Right-bottom (transverse)
// 8 = Left-bottom (270 deg clockwise / 90 deg counter-clockwise)
pub fn orientation_fixups(orientation: u16) -> &'static [Fixup] {
    match orientation {
        2 => &[Fixup::FlipHorizontal],
        3 => &[Fixup::RotateCw, Fixup::RotateCw],
        4 => &[Fixup::FlipVertical],
        5 => &[Fixup::RotateCw, Fixup::FlipHorizontal],
        6 => &[Fixup::RotateCw],
        7 => &[Fixup::RotateCcw, Fixup::FlipHorizontal],
        8 => &[Fixup::RotateCcw],
        _ => &[],
    }
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: the image is shown as stored
            debug!("No EXIF orientation for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Orientation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path).map_err(|source| AssetError::Read {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| AssetError::Decode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    for fixup in orientation_fixups(orientation) {
        match fixup {
            Fixup::RotateCw => image.rotate_cw(),
            Fixup::RotateCcw => image.rotate_ccw(),
            Fixup::FlipHorizontal => image.flip_horizontal(),
            Fixup::FlipVertical => image.flip_vertical(),
        }
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Upload {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // CPU-side pixels are no longer needed once uploaded
    drop(image);

    Ok(texture)
}

/// Figures and the paper, resolved against one asset root.
pub struct Assets {
    root: PathBuf,
    figures: HashMap<u8, Texture2D>,
}

impl Assets {
    /// Loads every figure it can. Missing or broken files are logged and later drawn
    /// as placeholders.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, root: &Path) -> Self {
        let mut figures = HashMap::new();
        for number in 1..=FIGURE_COUNT {
            let path = root.join(figure_path(number));
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    figures.insert(number, texture);
                }
                Err(e) => warn!("{}", e),
            }
        }
        info!(
            "Loaded {}/{} figures from {}",
            figures.len(),
            FIGURE_COUNT,
            root.display()
        );
        Self {
            root: root.to_path_buf(),
            figures,
        }
    }

    pub fn figure(&self, number: u8) -> Option<&Texture2D> {
        self.figures.get(&number)
    }

    pub fn document(&self) -> PathBuf {
        self.root.join(DOCUMENT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_paths_match_the_paper_layout() {
        assert_eq!(figure_path(1), "images/figures/Figure 1.jpg");
        assert_eq!(figure_path(8), "images/figures/Figure 8.jpg");
    }

    #[test]
    fn orientation_fixups_cover_all_tags() {
        assert!(orientation_fixups(1).is_empty());
        assert!(orientation_fixups(0).is_empty());
        assert!(orientation_fixups(9).is_empty());
        assert_eq!(orientation_fixups(3), &[Fixup::RotateCw, Fixup::RotateCw]);
        assert_eq!(orientation_fixups(6), &[Fixup::RotateCw]);
        assert_eq!(orientation_fixups(8), &[Fixup::RotateCcw]);
        for tag in 2..=8 {
            assert!(!orientation_fixups(tag).is_empty(), "tag {tag}");
        }
    }

    #[test]
    fn unreadable_exif_means_upright() {
        assert_eq!(read_orientation(Path::new("broken.jpg"), b"not a jpeg"), 1);
        assert_eq!(read_orientation(Path::new("empty.jpg"), &[]), 1);
    }
}
