//! Image probing and placement for photo and identity card regions

use crate::{ImageSlot, Rect};
use base64::Engine;
use image::ImageReader;
use serde::Serializer;
use std::io::Cursor;

/// Format and pixel size read from an image header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
}

// Stored identity scans are JPEG unless the header says otherwise
const FALLBACK_MIME: &str = "image/jpeg";

/// Read format and dimensions without decoding pixel data
pub fn probe_image(data: &[u8]) -> image::ImageResult<ImageInfo> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let mime = reader
        .format()
        .map_or(FALLBACK_MIME, |format| format.to_mime_type());
    let (width, height) = reader.into_dimensions()?;

    Ok(ImageInfo {
        mime,
        width,
        height,
    })
}

/// Largest rectangle with the image's aspect ratio that fits in `region`, centred
pub fn fit_within(width: u32, height: u32, region: Rect) -> Rect {
    if width == 0 || height == 0 {
        return region;
    }

    let width_ratio = region.width / width as f64;
    let height_ratio = region.height / height as f64;
    let scale = width_ratio.min(height_ratio);

    let fitted_width = width as f64 * scale;
    let fitted_height = height as f64 * scale;

    Rect::new(
        region.x + (region.width - fitted_width) / 2.0,
        region.y + (region.height - fitted_height) / 2.0,
        fitted_width,
        fitted_height,
    )
}

/// Build the slot for a stored image, or a placeholder when there is none
///
/// Bytes that cannot be probed are still placed, filling the whole region.
pub fn image_slot(data: Option<&[u8]>, region: Rect, missing_message: &str) -> ImageSlot {
    let Some(data) = data.filter(|bytes| !bytes.is_empty()) else {
        return ImageSlot::NotAvailable {
            message: missing_message.to_string(),
            region,
        };
    };

    let (mime, placement) = match probe_image(data) {
        Ok(info) => (info.mime, fit_within(info.width, info.height, region)),
        Err(e) => {
            log::warn!("could not read image header ({} bytes): {}", data.len(), e);
            (FALLBACK_MIME, region)
        }
    };

    ImageSlot::Available {
        mime: mime.to_string(),
        data: data.to_vec(),
        placement,
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_uri(mime: &str, data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(data)
    )
}

pub(crate) fn serialize_base64<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(data))
}
