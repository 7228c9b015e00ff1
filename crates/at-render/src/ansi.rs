use std::fmt::Write;

use at_core::frame::{AsciiCell, AsciiGrid};
use rayon::prelude::*;

/// Reset des attributs SGR, émis une fois en fin de ligne en mode couleur.
pub const RESET: &str = "\x1b[0m";

/// Écrit la séquence truecolor foreground `ESC[38;2;R;G;Bm` dans `out`.
///
/// # Example
/// ```
/// use at_render::ansi::push_fg;
/// let mut s = String::new();
/// push_fg(&mut s, (255, 0, 0));
/// assert_eq!(s, "\x1b[38;2;255;0;0m");
/// ```
#[inline(always)]
pub fn push_fg(out: &mut String, (r, g, b): (u8, u8, u8)) {
    // L'écriture dans une String ne peut pas échouer.
    let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
}

/// Render one row of cells.
///
/// # Example
/// ```
/// use at_core::frame::AsciiCell;
/// use at_render::ansi::render_row;
/// let row = [AsciiCell { ch: '#', fg: (1, 2, 3) }];
/// assert_eq!(render_row(&row, false), "#");
/// assert_eq!(render_row(&row, true), "\x1b[38;2;1;2;3m#\x1b[0m");
/// ```
#[must_use]
pub fn render_row(row: &[AsciiCell], color: bool) -> String {
    if !color {
        return row.iter().map(|c| c.ch).collect();
    }
    // ~19 octets par séquence + glyphe
    let mut line = String::with_capacity(row.len() * 24 + RESET.len());
    for cell in row {
        push_fg(&mut line, cell.fg);
        line.push(cell.ch);
    }
    line.push_str(RESET);
    line
}

/// Écrit toute la grille en un bloc de texte, lignes séparées par `\n`.
///
/// Pas de `\n` final : l'appelant décide comment terminer la sortie.
///
/// # Example
/// ```
/// use at_core::frame::{AsciiCell, AsciiGrid};
/// use at_render::ansi::render_grid;
/// let mut grid = AsciiGrid::new(2, 2);
/// grid.set(0, 0, AsciiCell { ch: '@', fg: (0, 0, 0) });
/// assert_eq!(render_grid(&grid, false), "@ \n  ");
/// ```
#[must_use]
pub fn render_grid(grid: &AsciiGrid, color: bool) -> String {
    if grid.cells.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = grid
        .cells
        .par_chunks(grid.width as usize)
        .map(|row| render_row(row, color))
        .collect();
    log::debug!(
        "Rendu de {} lignes ({})",
        lines.len(),
        if color { "truecolor" } else { "sans couleur" }
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_grid(width: u32, height: u32) -> AsciiGrid {
        let mut grid = AsciiGrid::new(width, height);
        for cell in &mut grid.cells {
            *cell = AsciiCell {
                ch: '.',
                fg: (255, 0, 0),
            };
        }
        grid
    }

    #[test]
    fn color_escape_precedes_glyph() {
        let out = render_grid(&red_grid(1, 1), true);
        assert_eq!(out, "\x1b[38;2;255;0;0m.\x1b[0m");
    }

    #[test]
    fn reset_exactly_once_per_line() {
        let out = render_grid(&red_grid(5, 3), true);
        for line in out.split('\n') {
            assert_eq!(line.matches(RESET).count(), 1);
            assert!(line.ends_with(RESET));
            assert_eq!(line.matches("\x1b[38;2;255;0;0m.").count(), 5);
        }
    }

    #[test]
    fn plain_mode_has_no_escapes() {
        let out = render_grid(&red_grid(4, 2), false);
        assert_eq!(out, "....\n....");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn line_count_matches_height() {
        let out = render_grid(&red_grid(7, 11), false);
        assert_eq!(out.lines().count(), 11);
        assert!(out.lines().all(|l| l.chars().count() == 7));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn rows_rendered_in_order() {
        let mut grid = AsciiGrid::new(1, 100);
        for y in 0..100u32 {
            let ch = char::from(b'0' + (y % 10) as u8);
            grid.set(0, y, AsciiCell { ch, fg: (0, 0, 0) });
        }
        let out = render_grid(&grid, false);
        for (y, line) in out.lines().enumerate() {
            assert_eq!(line, (y % 10).to_string());
        }
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(render_grid(&AsciiGrid::new(0, 0), true), "");
    }
}
