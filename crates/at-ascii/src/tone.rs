//! Luminance perceptuelle et tone mapping.
//!
//! L'ordre des étapes est contractuel : contraste, puis luminosité, clamp,
//! gamma, clamp. Inverser contraste et luminosité change le rendu.

use at_core::config::ToneParams;

/// Luma perceptuelle BT.709 sur [0, 255].
///
/// # Example
/// ```
/// use at_ascii::tone::luma;
/// assert!((luma(255, 255, 255) - 255.0).abs() < 1e-9);
/// assert_eq!(luma(0, 0, 0), 0.0);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// Clamp to [0, 1]; NaN becomes 0.
#[inline(always)]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Every intermediate value of the tone pipeline for one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneStages {
    /// Luma normalisée, [0, 1].
    pub normalized: f64,
    /// Après contraste autour de 0.5.
    pub contrasted: f64,
    /// Après multiplication par la luminosité.
    pub brightened: f64,
    /// Clampé sur [0, 1].
    pub clamped: f64,
    /// Après gamma, clampé à nouveau. Valeur finale.
    pub corrected: f64,
}

/// Run the tone pipeline and keep each stage.
///
/// # Example
/// ```
/// use at_ascii::tone::tone_stages;
/// use at_core::config::ToneParams;
/// let s = tone_stages(0, 0, 0, &ToneParams::default());
/// assert!(s.brightened < 0.0);
/// assert_eq!(s.corrected, 0.0);
/// ```
#[inline(always)]
#[must_use]
pub fn tone_stages(r: u8, g: u8, b: u8, tone: &ToneParams) -> ToneStages {
    let normalized = luma(r, g, b) / 255.0;
    let contrasted = (normalized - 0.5) * tone.contrast + 0.5;
    let brightened = contrasted * tone.brightness;
    let clamped = clamp_unit(brightened);
    // Base ≥ 0 garantie avant powf : pas de racine de négatif.
    let corrected = clamp_unit(clamped.max(0.0).powf(tone.gamma));
    ToneStages {
        normalized,
        contrasted,
        brightened,
        clamped,
        corrected,
    }
}

/// Final luminance in [0, 1] for one pixel.
///
/// # Example
/// ```
/// use at_ascii::tone::tone_map;
/// use at_core::config::ToneParams;
/// assert_eq!(tone_map(255, 255, 255, &ToneParams::default()), 1.0);
/// ```
#[inline(always)]
#[must_use]
pub fn tone_map(r: u8, g: u8, b: u8, tone: &ToneParams) -> f64 {
    tone_stages(r, g, b, tone).corrected
}
