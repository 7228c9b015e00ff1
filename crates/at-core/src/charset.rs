use serde::Deserialize;

use crate::error::CoreError;

/// 15 caractères — rampe historique, transitions douces.
pub const RAMP_DEFAULT: &str = " .,:;i1tfLCG08@";

/// 10 caractères — plus contrastée, souvent meilleure. Preset par défaut.
pub const RAMP_ALT: &str = " .:-=+*#%@";

/// Built-in ramp presets.
///
/// # Example
/// ```
/// use at_core::charset::RampPreset;
/// assert_eq!(RampPreset::default(), RampPreset::Alt);
/// assert_eq!(RampPreset::Default.as_str().chars().count(), 15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampPreset {
    /// `" .,:;i1tfLCG08@"`.
    Default,
    /// `" .:-=+*#%@"`.
    #[default]
    Alt,
}

impl RampPreset {
    /// Glyphs of the preset, lightest first.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => RAMP_DEFAULT,
            Self::Alt => RAMP_ALT,
        }
    }
}

/// Ordered glyph sequence, lightest (index 0) to densest (last index).
///
/// Never empty. Ordering is not validated: a ramp authored dense-to-light
/// simply renders inverted.
///
/// # Example
/// ```
/// use at_core::charset::Ramp;
/// let ramp = Ramp::new(" .:#@").unwrap();
/// assert_eq!(ramp.len(), 5);
/// assert_eq!(ramp.glyph(0), ' ');
/// assert_eq!(ramp.glyph(4), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string ordered lightest→densest.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyRamp`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    /// Ramp for a built-in preset.
    ///
    /// # Example
    /// ```
    /// use at_core::charset::{Ramp, RampPreset};
    /// let ramp = Ramp::preset(RampPreset::Alt);
    /// assert_eq!(ramp.glyph(ramp.len() - 1), '@');
    /// ```
    #[must_use]
    pub fn preset(preset: RampPreset) -> Self {
        Self {
            glyphs: preset.as_str().chars().collect(),
        }
    }

    /// Number of glyphs, always ≥ 1.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last glyph.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::preset(RampPreset::default())
    }
}
