//! Reads image dimensions from header bytes without decoding pixels.

use dobble_traits::{AssetError, ImageDimensions};
use image::{ImageError, ImageReader};
use std::io::{Cursor, ErrorKind};

/// Detects the format from the byte signature and reads width and height.
///
/// `path` is only used to label errors. The file extension is never trusted:
/// a GIF saved as `3.png` is still read as a GIF.
pub fn sniff_dimensions(path: &str, bytes: &[u8]) -> Result<ImageDimensions, AssetError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AssetError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if reader.format().is_none() {
        return Err(AssetError::UnsupportedFormat {
            path: path.to_string(),
            message: "unrecognized file signature".to_string(),
        });
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| map_image_error(path, e))?;
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidDimensions {
            path: path.to_string(),
            width,
            height,
        });
    }
    Ok(ImageDimensions::new(width, height))
}

fn map_image_error(path: &str, error: ImageError) -> AssetError {
    let path = path.to_string();
    match error {
        ImageError::Unsupported(e) => AssetError::UnsupportedFormat {
            path,
            message: e.to_string(),
        },
        ImageError::IoError(e) if e.kind() != ErrorKind::UnexpectedEof => AssetError::Io {
            path,
            message: e.to_string(),
        },
        other => AssetError::Truncated {
            path,
            message: other.to_string(),
        },
    }
}
