use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::charset::{Ramp, RampPreset};
use crate::error::CoreError;

/// Paramètres de tone mapping, appliqués uniformément à chaque pixel.
///
/// Aucune borne n'est imposée : des valeurs atypiques (gamma négatif,
/// contraste nul) produisent simplement leur résultat mathématique.
///
/// # Example
/// ```
/// use at_core::config::ToneParams;
/// let tone = ToneParams::default();
/// assert_eq!(tone.gamma, 0.85);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneParams {
    /// Multiplicateur de luminosité, appliqué après le contraste.
    pub brightness: f64,
    /// Contraste autour de 0.5. >1 augmente le contraste.
    pub contrast: f64,
    /// Exposant gamma. <1 éclaircit les ombres, >1 assombrit.
    pub gamma: f64,
    /// Correction d'aspect des caractères (0.45–0.65 typique).
    pub aspect: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            brightness: 1.05,
            contrast: 1.25,
            gamma: 0.85,
            aspect: 0.55,
        }
    }
}

/// Configuration complète d'un rendu.
///
/// # Example
/// ```
/// use at_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert!(config.color_enabled);
/// assert_eq!(config.width, 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Largeur en caractères. 0 = largeur du terminal.
    pub width: u32,
    /// Preset de rampe.
    pub ramp: RampPreset,
    /// Rampe personnalisée (clair → dense). Remplace le preset si non vide.
    pub custom_ramp: Option<String>,
    /// Activer la couleur truecolor.
    pub color_enabled: bool,
    /// Tone mapping et correction d'aspect.
    pub tone: ToneParams,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 0,
            ramp: RampPreset::Alt,
            custom_ramp: None,
            color_enabled: true,
            tone: ToneParams::default(),
        }
    }
}

impl RenderConfig {
    /// Resolve the active ramp: a non-empty custom ramp wins over the preset.
    /// An empty custom ramp is ignored.
    ///
    /// # Example
    /// ```
    /// use at_core::config::RenderConfig;
    /// use at_core::charset::RampPreset;
    /// let config = RenderConfig {
    ///     ramp: RampPreset::Default,
    ///     custom_ramp: Some("ab".into()),
    ///     ..RenderConfig::default()
    /// };
    /// assert_eq!(config.resolve_ramp().len(), 2);
    /// ```
    #[must_use]
    pub fn resolve_ramp(&self) -> Ramp {
        self.custom_ramp
            .as_deref()
            .and_then(|custom| Ramp::new(custom).ok())
            .unwrap_or_else(|| Ramp::preset(self.ramp))
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u32>,
    ramp: Option<RampPreset>,
    custom_ramp: Option<String>,
    color_enabled: Option<bool>,
    brightness: Option<f64>,
    contrast: Option<f64>,
    gamma: Option<f64>,
    aspect: Option<f64>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML or carries unknown keys.
///
/// # Example
/// ```
/// use at_core::config::parse_config;
/// let config = parse_config("[render]\ngamma = 1.0\n").unwrap();
/// assert_eq!(config.tone.gamma, 1.0);
/// assert_eq!(config.tone.contrast, 1.25);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content)
        .map_err(|e| CoreError::Config(e.to_string()))?;

    let mut config = RenderConfig::default();

    let Some(r) = file.render else {
        return Ok(config);
    };
    if let Some(v) = r.width {
        config.width = v;
    }
    if let Some(v) = r.ramp {
        config.ramp = v;
    }
    if let Some(v) = r.custom_ramp {
        config.custom_ramp = Some(v);
    }
    if let Some(v) = r.color_enabled {
        config.color_enabled = v;
    }
    if let Some(v) = r.brightness {
        config.tone.brightness = v;
    }
    if let Some(v) = r.contrast {
        config.tone.contrast = v;
    }
    if let Some(v) = r.gamma {
        config.tone.gamma = v;
    }
    if let Some(v) = r.aspect {
        config.tone.aspect = v;
    }

    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use at_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        assert_eq!(parse_config("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn partial_render_section_overrides_only_given_fields() {
        let config = parse_config(
            "[render]\nramp = \"default\"\ncolor_enabled = false\nbrightness = 1.3\n",
        )
        .unwrap();
        assert_eq!(config.ramp, RampPreset::Default);
        assert!(!config.color_enabled);
        assert_eq!(config.tone.brightness, 1.3);
        assert_eq!(config.tone.aspect, 0.55);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse_config("[render]\nsaturation = 2.0\n").is_err());
    }

    #[test]
    fn custom_ramp_wins_over_preset() {
        let config = RenderConfig {
            ramp: RampPreset::Default,
            custom_ramp: Some("xyz".into()),
            ..RenderConfig::default()
        };
        assert_eq!(config.resolve_ramp(), Ramp::new("xyz").unwrap());
    }

    #[test]
    fn empty_custom_ramp_falls_back_to_preset() {
        let config = RenderConfig {
            ramp: RampPreset::Default,
            custom_ramp: Some(String::new()),
            ..RenderConfig::default()
        };
        assert_eq!(config.resolve_ramp(), Ramp::preset(RampPreset::Default));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = 42\ncustom_ramp = \" #\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.width, 42);
        assert_eq!(config.custom_ramp.as_deref(), Some(" #"));
    }

    #[test]
    fn load_config_missing_file_is_typed_error() {
        let err = load_config(Path::new("/nonexistent/asciitone.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }
}
