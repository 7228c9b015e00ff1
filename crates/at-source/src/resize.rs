use anyhow::{Context, Result};
use at_core::error::CoreError;
use at_core::frame::RgbFrame;
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

/// Hauteur de grille en caractères pour une largeur donnée.
///
/// `max(1, round((src_height / src_width) * width * aspect))`. Les caractères
/// de terminal sont plus hauts que larges, `aspect` compense.
/// NaN, négatif ou nul retombent sur 1.
///
/// # Example
/// ```
/// use at_source::resize::target_height;
/// assert_eq!(target_height(100, 50, 80, 0.55), 22);
/// assert_eq!(target_height(10_000, 1, 80, 0.55), 1);
/// ```
#[must_use]
pub fn target_height(src_width: u32, src_height: u32, width: u32, aspect: f64) -> u32 {
    let ratio = f64::from(src_height) / f64::from(src_width);
    let height = (ratio * f64::from(width) * aspect).round();
    if height.is_nan() || height < 1.0 {
        return 1;
    }
    // `as` sature à u32::MAX pour +inf.
    height as u32
}

/// Rééchantillonne `src` en `width`×`height`, filtre Lanczos3.
///
/// Taille identique : simple copie, pas de filtrage.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if the source or the target has a
/// zero dimension, or an error if fast_image_resize rejects the buffers.
///
/// # Example
/// ```
/// use at_source::resize::resize_frame;
/// use at_core::frame::RgbFrame;
/// let src = RgbFrame::new(100, 100);
/// let dst = resize_frame(&src, 50, 25).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 25));
/// assert!(resize_frame(&src, 0, 25).is_err());
/// ```
pub fn resize_frame(src: &RgbFrame, width: u32, height: u32) -> Result<RgbFrame> {
    if src.is_empty() {
        return Err(CoreError::InvalidDimensions {
            width: src.width,
            height: src.height,
        }
        .into());
    }
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height }.into());
    }
    if src.width == width && src.height == height {
        return Ok(src.clone());
    }

    let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x3)
        .context("Dimensions source invalides")?;
    let mut dst = RgbFrame::new(width, height);
    let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x3)
        .context("Dimensions destination invalides")?;

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .context("Échec du redimensionnement")?;

    Ok(dst)
}

/// Resample `src` onto the character grid for `width` columns.
///
/// Height follows [`target_height`].
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] when `width` is zero, or any
/// resize failure.
///
/// # Example
/// ```
/// use at_source::resize::fit_to_width;
/// use at_core::frame::RgbFrame;
/// let src = RgbFrame::new(100, 50);
/// let grid = fit_to_width(&src, 80, 0.55).unwrap();
/// assert_eq!((grid.width, grid.height), (80, 22));
/// ```
pub fn fit_to_width(src: &RgbFrame, width: u32, aspect: f64) -> Result<RgbFrame> {
    if width == 0 || src.is_empty() {
        return Err(CoreError::InvalidDimensions {
            width,
            height: src.height,
        }
        .into());
    }
    let height = target_height(src.width, src.height, width, aspect);
    log::debug!(
        "Redimensionnement {}×{} → {width}×{height} (aspect {aspect})",
        src.width,
        src.height
    );
    resize_frame(src, width, height)
}
