use std::path::PathBuf;

use at_core::charset::RampPreset;
use at_core::config::RenderConfig;
use clap::{Parser, ValueEnum};

/// asciitone — convertit une image en ASCII couleur (ANSI TrueColor).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image (PNG, JPEG, BMP).
    pub image: PathBuf,

    /// Largeur de sortie en caractères. 0 = largeur du terminal.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Preset de rampe ASCII [défaut : alt].
    #[arg(long, value_enum)]
    pub ramp: Option<RampArg>,

    /// Rampe personnalisée, du plus clair au plus dense (remplace --ramp).
    #[arg(long)]
    pub custom_ramp: Option<String>,

    /// Désactiver la couleur ANSI (ASCII en niveaux de gris).
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Multiplicateur de luminosité, essayer 1.1–1.4 [défaut : 1.05].
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Multiplicateur de contraste, essayer 1.2–2.0 [défaut : 1.25].
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Gamma, essayer 0.7–1.1 ; <1 révèle les fonds sombres [défaut : 0.85].
    #[arg(long, allow_negative_numbers = true)]
    pub gamma: Option<f64>,

    /// Correction d'aspect des caractères, 0.45–0.65 typique [défaut : 0.55].
    #[arg(long, allow_negative_numbers = true)]
    pub aspect: Option<f64>,

    /// Fichier de configuration TOML fournissant les valeurs par défaut.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Écrire le résultat dans un fichier plutôt que sur stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Ramp presets selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RampArg {
    /// `" .,:;i1tfLCG08@"`
    Default,
    /// `" .:-=+*#%@"`
    Alt,
}

impl From<RampArg> for RampPreset {
    fn from(arg: RampArg) -> Self {
        match arg {
            RampArg::Default => Self::Default,
            RampArg::Alt => Self::Alt,
        }
    }
}

impl Cli {
    /// Apply every flag given on the command line over `config`.
    ///
    /// Flags left unset keep the config (file or built-in) value.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(ramp) = self.ramp {
            config.ramp = ramp.into();
        }
        if let Some(ref custom) = self.custom_ramp {
            config.custom_ramp = Some(custom.clone());
        }
        if self.no_color {
            config.color_enabled = false;
        }
        if let Some(v) = self.brightness {
            config.tone.brightness = v;
        }
        if let Some(v) = self.contrast {
            config.tone.contrast = v;
        }
        if let Some(v) = self.gamma {
            config.tone.gamma = v;
        }
        if let Some(v) = self.aspect {
            config.tone.aspect = v;
        }
    }

    /// `--log-level` parsed, `None` if the name is unknown.
    #[must_use]
    pub fn parse_log_level(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }

    /// Parsed `--log-level`, `Warn` if unrecognized.
    #[must_use]
    pub fn log_filter(&self) -> log::LevelFilter {
        self.parse_log_level().unwrap_or(log::LevelFilter::Warn)
    }
}
