use at_core::charset::Ramp;
use at_core::config::ToneParams;
use at_core::frame::{AsciiCell, AsciiGrid, RgbFrame};
use rayon::prelude::*;

use crate::tone::tone_map;

/// Index dans une rampe de `len` glyphes pour une luminance [0, 1].
///
/// `floor(lum * (len - 1))`, clampé sur `[0, len - 1]`.
///
/// # Example
/// ```
/// use at_ascii::quantize::glyph_index;
/// assert_eq!(glyph_index(0.0, 10), 0);
/// assert_eq!(glyph_index(1.0, 10), 9);
/// assert_eq!(glyph_index(0.5, 10), 4);
/// ```
#[inline(always)]
#[must_use]
pub fn glyph_index(lum: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let idx = (lum * last as f64).floor();
    // `as usize` sature : NaN et négatifs → 0.
    (idx as usize).min(last)
}

/// Glyph for a final luminance.
///
/// # Example
/// ```
/// use at_ascii::quantize::quantize;
/// use at_core::charset::Ramp;
/// let ramp = Ramp::new(" .:#@").unwrap();
/// assert_eq!(quantize(1.0, &ramp), '@');
/// ```
#[inline(always)]
#[must_use]
pub fn quantize(lum: f64, ramp: &Ramp) -> char {
    ramp.glyph(glyph_index(lum, ramp.len()))
}

/// Process a frame into an ASCII grid, one cell per pixel.
///
/// Each cell carries the glyph for the tone-mapped luminance and the
/// pixel's original color. Rows are processed in parallel.
///
/// # Example
/// ```
/// use at_ascii::quantize::process_luminance;
/// use at_core::charset::Ramp;
/// use at_core::config::ToneParams;
/// use at_core::frame::{AsciiGrid, RgbFrame};
///
/// let frame = RgbFrame::filled(4, 2, (255, 255, 255));
/// let mut grid = AsciiGrid::new(4, 2);
/// process_luminance(&frame, &Ramp::default(), &ToneParams::default(), &mut grid);
/// assert_eq!(grid.get(3, 1).ch, '@');
/// ```
pub fn process_luminance(frame: &RgbFrame, ramp: &Ramp, tone: &ToneParams, grid: &mut AsciiGrid) {
    debug_assert_eq!((frame.width, frame.height), (grid.width, grid.height));
    if frame.is_empty() || grid.cells.is_empty() {
        return;
    }
    log::trace!(
        "Quantification {}×{} sur {} glyphes",
        frame.width,
        frame.height,
        ramp.len()
    );

    let stride = frame.stride();
    grid.cells
        .par_chunks_mut(grid.width as usize)
        .zip(frame.data.par_chunks(stride))
        .for_each(|(row, pixels)| {
            for (cell, px) in row.iter_mut().zip(pixels.chunks_exact(3)) {
                let (r, g, b) = (px[0], px[1], px[2]);
                *cell = AsciiCell {
                    ch: quantize(tone_map(r, g, b, tone), ramp),
                    fg: (r, g, b),
                };
            }
        });
}

/// Allocating variant of [`process_luminance`].
///
/// # Example
/// ```
/// use at_ascii::quantize::frame_to_grid;
/// use at_core::charset::Ramp;
/// use at_core::config::ToneParams;
/// use at_core::frame::RgbFrame;
///
/// let grid = frame_to_grid(&RgbFrame::new(3, 3), &Ramp::default(), &ToneParams::default());
/// assert_eq!(grid.get(0, 0).ch, ' ');
/// ```
#[must_use]
pub fn frame_to_grid(frame: &RgbFrame, ramp: &Ramp, tone: &ToneParams) -> AsciiGrid {
    let mut grid = AsciiGrid::new(frame.width, frame.height);
    process_luminance(frame, ramp, tone, &mut grid);
    grid
}
