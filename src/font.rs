use crate::error::{Result, StencilError};
use std::collections::HashMap;

/// Contribution graphs are 7 rows tall (one per weekday), so every glyph is too.
pub const GLYPH_HEIGHT: usize = 7;

/// One character as 7 rows of '0'/'1' cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: [String; GLYPH_HEIGHT],
}

impl Glyph {
    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

/// Glyph table mapping characters to their bit patterns.
///
/// The table is passed explicitly to the pattern renderer, so callers can
/// supply their own font without source changes.
#[derive(Debug, Clone, Default)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Registers a glyph. All rows must have the same width and there must be
    /// exactly 7 of them, otherwise concatenation would produce ragged rows.
    pub fn add(&mut self, ch: char, rows: [&str; GLYPH_HEIGHT]) -> Result<()> {
        let width = rows[0].len();
        for row in &rows {
            if row.len() != width {
                return Err(StencilError::GlyphWidth {
                    ch,
                    got: row.len(),
                    expected: width,
                });
            }
        }
        self.glyphs.insert(
            ch,
            Glyph {
                rows: rows.map(str::to_string),
            },
        );
        Ok(())
    }

    pub fn get(&self, ch: char) -> Result<&Glyph> {
        self.glyphs.get(&ch).ok_or(StencilError::UnknownGlyph(ch))
    }

    /// The built-in 5x7 dot-matrix font covering A-Z and space.
    pub fn default_5x7() -> Self {
        let mut font = Self::default();
        for &(ch, rows) in FONT_5X7 {
            // Static table entries are known-good 7x5 grids.
            font.add(ch, rows).expect("built-in glyph table is well-formed");
        }
        font
    }
}

#[rustfmt::skip]
const FONT_5X7: &[(char, [&str; GLYPH_HEIGHT])] = &[
    ('A', ["01110", "10001", "10001", "11111", "10001", "10001", "10001"]),
    ('B', ["11110", "10001", "10001", "11110", "10001", "10001", "11110"]),
    ('C', ["01110", "10001", "10000", "10000", "10000", "10001", "01110"]),
    ('D', ["11110", "10001", "10001", "10001", "10001", "10001", "11110"]),
    ('E', ["11111", "10000", "10000", "11110", "10000", "10000", "11111"]),
    ('F', ["11111", "10000", "10000", "11110", "10000", "10000", "10000"]),
    ('G', ["01110", "10001", "10000", "10111", "10001", "10001", "01111"]),
    ('H', ["10001", "10001", "10001", "11111", "10001", "10001", "10001"]),
    ('I', ["01110", "00100", "00100", "00100", "00100", "00100", "01110"]),
    ('J', ["00111", "00010", "00010", "00010", "00010", "10010", "01100"]),
    ('K', ["10001", "10010", "10100", "11000", "10100", "10010", "10001"]),
    ('L', ["10000", "10000", "10000", "10000", "10000", "10000", "11111"]),
    ('M', ["10001", "11011", "10101", "10101", "10001", "10001", "10001"]),
    ('N', ["10001", "11001", "10101", "10011", "10001", "10001", "10001"]),
    ('O', ["01110", "10001", "10001", "10001", "10001", "10001", "01110"]),
    ('P', ["11110", "10001", "10001", "11110", "10000", "10000", "10000"]),
    ('Q', ["01110", "10001", "10001", "10001", "10101", "10010", "01101"]),
    ('R', ["11110", "10001", "10001", "11110", "10100", "10010", "10001"]),
    ('S', ["01111", "10000", "10000", "01110", "00001", "00001", "11110"]),
    ('T', ["11111", "00100", "00100", "00100", "00100", "00100", "00100"]),
    ('U', ["10001", "10001", "10001", "10001", "10001", "10001", "01110"]),
    ('V', ["10001", "10001", "10001", "10001", "10001", "01010", "00100"]),
    ('W', ["10001", "10001", "10001", "10101", "10101", "11011", "10001"]),
    ('X', ["10001", "10001", "01010", "00100", "01010", "10001", "10001"]),
    ('Y', ["10001", "10001", "01010", "00100", "00100", "00100", "00100"]),
    ('Z', ["11111", "00001", "00010", "00100", "01000", "10000", "11111"]),
    (' ', ["00000", "00000", "00000", "00000", "00000", "00000", "00000"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_covers_alphabet() {
        let font = Font::default_5x7();
        for ch in 'A'..='Z' {
            assert!(font.get(ch).is_ok(), "missing glyph for {ch}");
        }
        assert!(font.get(' ').is_ok());
    }

    #[test]
    fn test_default_glyphs_are_5x7() {
        let font = Font::default_5x7();
        for ch in 'A'..='Z' {
            let glyph = font.get(ch).unwrap();
            assert_eq!(glyph.width(), 5);
            for row in glyph.rows() {
                assert_eq!(row.len(), 5);
            }
        }
    }

    #[test]
    fn test_unknown_glyph_is_an_error() {
        let font = Font::default_5x7();
        let err = font.get('?').unwrap_err();
        assert!(matches!(err, StencilError::UnknownGlyph('?')));
    }

    #[test]
    fn test_add_rejects_ragged_rows() {
        let mut font = Font::default();
        let result = font.add('x', ["10", "1", "10", "10", "10", "10", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_custom_glyph() {
        let mut font = Font::default();
        font.add('!', ["1", "1", "1", "1", "1", "0", "1"]).unwrap();
        let glyph = font.get('!').unwrap();
        assert_eq!(glyph.width(), 1);
    }
}
