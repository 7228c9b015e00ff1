use crate::error::CoreError;

/// Buffer de pixels RGB, row-major, 3 bytes par pixel.
///
/// Immuable une fois décodé : le pipeline ne fait que le lire.
///
/// # Example
/// ```
/// use at_core::frame::RgbFrame;
/// let fb = RgbFrame::new(10, 10);
/// assert_eq!(fb.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RgbFrame {
    /// Crée un buffer noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use at_core::frame::RgbFrame;
    /// let fb = RgbFrame::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap an existing RGB8 buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if `data.len() != width * height * 3`.
    ///
    /// # Example
    /// ```
    /// use at_core::frame::RgbFrame;
    /// let fb = RgbFrame::from_raw(1, 1, vec![255, 0, 0]).unwrap();
    /// assert_eq!(fb.data, [255, 0, 0]);
    /// assert!(RgbFrame::from_raw(2, 1, vec![0; 3]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Solid frame filled with one color. Handy for tests and benches.
    ///
    /// # Example
    /// ```
    /// use at_core::frame::RgbFrame;
    /// let fb = RgbFrame::filled(2, 2, (1, 2, 3));
    /// assert_eq!(&fb.data[9..12], &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let data = [rgb.0, rgb.1, rgb.2].repeat(width as usize * height as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Bytes per row.
    #[inline]
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    /// True when either dimension is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Grille de sortie ASCII, row-major.
///
/// # Example
/// ```
/// use at_core::frame::{AsciiGrid, AsciiCell};
/// let mut grid = AsciiGrid::new(80, 24);
/// grid.set(0, 0, AsciiCell { ch: '@', fg: (255, 0, 0) });
/// assert_eq!(grid.get(0, 0).ch, '@');
/// ```
#[derive(Clone, Debug)]
pub struct AsciiGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<AsciiCell>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

/// Single cell in the ASCII grid.
///
/// # Example
/// ```
/// use at_core::frame::AsciiCell;
/// let cell = AsciiCell::default();
/// assert_eq!(cell.ch, ' ');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiCell {
    /// Caractère à afficher.
    pub ch: char,
    /// Couleur foreground : RGB d'origine du pixel, avant tone mapping.
    pub fg: (u8, u8, u8),
}

impl Default for AsciiCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: (0, 0, 0),
        }
    }
}

impl AsciiGrid {
    /// Crée une grille pré-allouée.
    ///
    /// # Example
    /// ```
    /// use at_core::frame::AsciiGrid;
    /// let grid = AsciiGrid::new(80, 24);
    /// assert_eq!(grid.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![AsciiCell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set a cell at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, cell: AsciiCell) {
        self.cells[y as usize * self.width as usize + x as usize] = cell;
    }

    /// Get a cell reference at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &AsciiCell {
        &self.cells[y as usize * self.width as usize + x as usize]
    }
}
