/// Preview generation for the image browser
/// Decodes a file and shrinks it to fit the preview area, never enlarging it
use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

use crate::error::{AppError, Result};

/// A decoded, scaled RGBA preview
#[derive(Debug, Clone)]
pub struct PreviewBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PreviewBitmap {
    /// Hand the pixels to iced for display
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.rgba)
    }
}

/// Size of `original` after fitting it into `max`, keeping the aspect ratio.
///
/// The scale factor is min(max_w / w, max_h / h, 1.0), so images that already
/// fit keep their size.
pub fn scaled_dimensions(original: (u32, u32), max: (u32, u32)) -> (u32, u32) {
    let (width, height) = original;
    let (max_width, max_height) = max;
    if width == 0 || height == 0 {
        return original;
    }

    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);
    if scale >= 1.0 {
        return original;
    }

    let scaled_width = ((width as f64 * scale).round() as u32).clamp(1, max_width.max(1));
    let scaled_height = ((height as f64 * scale).round() as u32).clamp(1, max_height.max(1));
    (scaled_width, scaled_height)
}

/// Decode `path` and scale it to fit within `max_width` x `max_height`
pub fn render_preview(path: &Path, max_width: u32, max_height: u32) -> Result<PreviewBitmap> {
    let img = decode(path)?;
    let original = (img.width(), img.height());
    let (width, height) = scaled_dimensions(original, (max_width, max_height));

    let rgba = if (width, height) == original {
        img.to_rgba8()
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3).to_rgba8()
    };

    log::debug!(
        "🖼️  Preview {}: {}x{} -> {}x{}",
        path.display(),
        original.0,
        original.1,
        width,
        height
    );

    Ok(PreviewBitmap {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Like `render_preview`, but re-encoded as PNG bytes.
///
/// Used for the first preview of a session, which is built before the
/// window exists and is supplied as static content.
pub fn render_initial_preview(path: &Path, max_width: u32, max_height: u32) -> Result<Vec<u8>> {
    let bitmap = render_preview(path, max_width, max_height)?;
    let buffer = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.rgba).ok_or_else(|| {
        AppError::Decode {
            path: path.to_path_buf(),
            reason: "preview buffer has the wrong size".to_string(),
        }
    })?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::Decode {
            path: path.to_path_buf(),
            reason: format!("failed to encode preview: {}", e),
        })?;

    Ok(bytes)
}

/// Handle for PNG bytes produced by `render_initial_preview`
pub fn initial_handle(png_bytes: Vec<u8>) -> Handle {
    Handle::from_bytes(png_bytes)
}

fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_error = |reason: String| AppError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    // The reader (and its file handle) is dropped when this returns
    ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}
