use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use at_core::config::{RenderConfig, load_config};
use at_core::frame::RgbFrame;

use crate::cli::Cli;
use crate::terminal;

/// Convert an already-decoded frame into the final text block.
///
/// Resamples to `width` columns, tone-maps and quantizes each pixel, then
/// renders rows with or without color escapes. No trailing newline.
///
/// # Errors
/// Returns an error if `width` is zero or resampling fails.
pub fn convert(frame: &RgbFrame, width: u32, config: &RenderConfig) -> Result<String> {
    let ramp = config.resolve_ramp();
    log::debug!("Rampe : {} glyphes, tone : {:?}", ramp.len(), config.tone);

    let resized = at_source::resize::fit_to_width(frame, width, config.tone.aspect)?;
    let grid = at_ascii::quantize::frame_to_grid(&resized, &ramp, &config.tone);
    Ok(at_render::ansi::render_grid(&grid, config.color_enabled))
}

/// Load `path` and convert it at `width` columns.
///
/// # Errors
/// Returns an error if the image cannot be loaded or converted.
pub fn render_file(path: &Path, width: u32, config: &RenderConfig) -> Result<String> {
    let frame = at_source::image::load_image(path)?;
    convert(&frame, width, config)
}

/// Resolve config: built-in defaults, then `--config`, then CLI flags.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// Exécution complète d'une invocation CLI.
///
/// # Errors
/// Returns an error on config, decode, resize or output failure.
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let width = terminal::resolve_width(config.width, terminal::detect_columns);
    log::info!("Largeur de sortie : {width} colonnes");

    let text = render_file(&cli.image, width, &config)?;

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        writeln!(file, "{text}")
            .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
        log::info!("Sortie écrite dans {}", path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("Impossible d'écrire sur stdout")?;
        stdout.flush().context("Impossible d'écrire sur stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use at_core::charset::RampPreset;
    use at_render::ansi::RESET;
    use clap::Parser;
    use image::{Rgb, RgbImage};

    use super::*;

    fn write_png(dir: &Path, name: &str, img: &RgbImage) -> std::path::PathBuf {
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn output_has_height_lines_of_width_glyphs() {
        let dir = tempfile::tempdir().unwrap();
        let gray = RgbImage::from_pixel(100, 50, Rgb([128, 128, 128]));
        let path = write_png(dir.path(), "gray.png", &gray);
        let config = RenderConfig {
            color_enabled: false,
            ..RenderConfig::default()
        };

        let text = render_file(&path, 80, &config).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 22);
        for line in lines {
            assert_eq!(line.chars().count(), 80);
            // gris moyen → index 5 de la rampe alt
            assert!(line.chars().all(|c| c == '+'), "{line:?}");
        }
    }

    #[test]
    fn red_pixel_in_color_mode() {
        let frame = RgbFrame::filled(1, 1, (255, 0, 0));
        let config = RenderConfig {
            tone: at_core::config::ToneParams {
                aspect: 1.0,
                ..Default::default()
            },
            ..RenderConfig::default()
        };
        let text = convert(&frame, 1, &config).unwrap();
        assert_eq!(text, "\x1b[38;2;255;0;0m.\x1b[0m");
        assert_eq!(text.matches(RESET).count(), 1);
    }

    #[test]
    fn custom_ramp_used_exclusively() {
        let frame = RgbFrame::filled(4, 4, (255, 255, 255));
        let config = RenderConfig {
            ramp: RampPreset::Default,
            custom_ramp: Some("xyZ".into()),
            color_enabled: false,
            ..RenderConfig::default()
        };
        let text = convert(&frame, 4, &config).unwrap();
        assert!(text.lines().all(|l| l == "ZZZZ"));
    }

    #[test]
    fn zero_width_is_an_error() {
        let frame = RgbFrame::filled(4, 4, (0, 0, 0));
        assert!(convert(&frame, 0, &RenderConfig::default()).is_err());
    }

    #[test]
    fn cli_flags_beat_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("asciitone.toml");
        let mut file = std::fs::File::create(&cfg).unwrap();
        writeln!(file, "[render]\nwidth = 12\ngamma = 2.0\ncolor_enabled = false").unwrap();

        let cli = Cli::try_parse_from([
            "asciitone",
            "img.png",
            "--config",
            cfg.to_str().unwrap(),
            "--gamma",
            "0.5",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.tone.gamma, 0.5);
        assert!(!config.color_enabled);
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let white = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let img = write_png(dir.path(), "white.png", &white);
        let out = dir.path().join("out.txt");

        let cli = Cli::try_parse_from([
            "asciitone",
            img.to_str().unwrap(),
            "-w",
            "10",
            "--no-color",
            "--aspect",
            "0.5",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run(&cli).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "@@@@@@@@@@\n".repeat(5));
    }

    #[test]
    fn undecodable_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"nope").unwrap();
        assert!(render_file(&path, 10, &RenderConfig::default()).is_err());
    }
}
