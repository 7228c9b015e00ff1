use std::path::Path;

use anyhow::{Context, Result};
use at_core::error::CoreError;
use at_core::frame::RgbFrame;
use image::DynamicImage;

/// Charge une image depuis le disque en RGB8 (alpha ignoré).
///
/// Le format est déduit du contenu et de l'extension par `image`.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded, or if it
/// decodes to an image with a zero dimension.
///
/// # Example
/// ```no_run
/// use at_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<RgbFrame> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let frame = frame_from_dynamic(img)?;
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        frame.width,
        frame.height
    );
    Ok(frame)
}

/// Convert any decoded image into a 3-channel frame.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] for an empty image.
///
/// # Example
/// ```
/// use at_source::image::frame_from_dynamic;
/// use image::{DynamicImage, RgbaImage, Rgba};
/// let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 1, Rgba([9, 8, 7, 0])));
/// let frame = frame_from_dynamic(img).unwrap();
/// assert_eq!(&frame.data[3..6], &[9, 8, 7]);
/// ```
pub fn frame_from_dynamic(img: DynamicImage) -> Result<RgbFrame> {
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height }.into());
    }
    Ok(RgbFrame::from_raw(width, height, rgb.into_raw())?)
}
