use crate::error::Result;
use crate::font::{Font, GLYPH_HEIGHT};

/// The full message pattern: glyphs laid side by side, 7 rows tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    rows: [String; GLYPH_HEIGHT],
}

impl Bitmap {
    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Number of columns (weeks on the graph).
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the cell at (row, col) is lit.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows[row].as_bytes()[col] == b'1'
    }
}

/// Renders `message` through `font` into a single bitmap.
///
/// Adjacent glyphs are separated by one all-zero column; there is no column
/// after the last glyph. Fails on any character the font has no glyph for.
pub fn render_message(font: &Font, message: &str) -> Result<Bitmap> {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();

    for (i, ch) in message.chars().enumerate() {
        let glyph = font.get(ch)?;
        for (row, glyph_row) in rows.iter_mut().zip(glyph.rows()) {
            if i > 0 {
                row.push('0');
            }
            row.push_str(glyph_row);
        }
    }

    Ok(Bitmap { rows })
}
