use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// A ramp needs at least one glyph.
    #[error("Rampe vide : au moins un caractère est requis")]
    EmptyRamp,

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match its dimensions.
    #[error("Taille de buffer invalide : {actual} octets, {expected} attendus")]
    BufferSize {
        /// Bytes required by `width * height * 3`.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },
}
