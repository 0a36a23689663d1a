//! Eingebetteter 5×7 Bitmap-Font für Beschriftungen.
//!
//! Glyphen werden ganzzahlig skaliert; die Skalierung ergibt sich aus der
//! gewünschten Schrifthöhe in Pixeln.
//!
//! Die Glyphentabelle (`FONT_5X7`, ASCII 32–126) und `glyph_for` sind
//! unverändert aus `fs25_map_overview::text` (mro68, GPL-3.0) übernommen.
//! Neu sind RGBA-Blending, Fettdruck und die Skalierung nach Schrifthöhe.

use crate::primitive::Rgba;
use crate::raster::blend_pixel;
use image::RgbaImage;

const CHAR_WIDTH: usize = 5;
const CHAR_HEIGHT: usize = 7;

/// Ganzzahliger Skalierungsfaktor für eine Schrifthöhe in Pixeln (mindestens 1).
pub fn glyph_scale(size_px: f32) -> u32 {
    if !size_px.is_finite() {
        return 1;
    }
    ((size_px / CHAR_HEIGHT as f32).round() as u32).max(1)
}

/// Pixelbreite eines Texts (1 Spalte Abstand pro Skalierung, +1 bei Fettdruck).
pub fn text_width(text: &str, scale: u32, bold: bool) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * CHAR_WIDTH as u32 * scale + (chars - 1) * scale + u32::from(bold)
}

/// Pixelhöhe eines Texts.
pub fn text_height(scale: u32) -> u32 {
    CHAR_HEIGHT as u32 * scale
}

/// Zeichnet Text mit oberer linker Ecke bei (`x`, `y`).
///
/// Fettdruck zeichnet jede Glyphe zusätzlich um ein Pixel nach rechts versetzt.
/// Zeichen außerhalb von ASCII 32–126 bleiben als Lücke stehen.
pub fn draw_text(image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba, scale: u32, bold: bool) {
    let advance = (CHAR_WIDTH as i32 + 1) * scale as i32;
    let mut cursor_x = x;

    for ch in text.chars() {
        if let Some(glyph) = glyph_for(ch) {
            draw_glyph(image, cursor_x, y, glyph, color, scale);
            if bold {
                draw_glyph(image, cursor_x + 1, y, glyph, color, scale);
            }
        }
        cursor_x += advance;
    }
}

/// Zeichnet eine Glyphe; jeder Pixel wird höchstens einmal geblendet.
fn draw_glyph(image: &mut RgbaImage, x: i32, y: i32, glyph: &[u8; CHAR_HEIGHT], color: Rgba, scale: u32) {
    let s = scale as i32;
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH {
            if bits & (1 << (CHAR_WIDTH - 1 - col)) == 0 {
                continue;
            }
            for sy in 0..s {
                for sx in 0..s {
                    blend_pixel(image, x + col as i32 * s + sx, y + row as i32 * s + sy, color);
                }
            }
        }
    }
}

fn glyph_for(ch: char) -> Option<&'static [u8; CHAR_HEIGHT]> {
    let idx = ch as usize;
    if !(32..=126).contains(&idx) {
        return None;
    }
    Some(&FONT_5X7[idx - 32])
}

// ── 5×7 Bitmap-Font ─────────────────────────────────────────────────

/// 5×7 Bitmap-Font (ASCII 32–126).
/// Jede Zeile ist ein Byte, Bits 4–0 repräsentieren die 5 Spalten.
#[rustfmt::skip]
static FONT_5X7: [[u8; 7]; 95] = [
    // 32: ' ' (Space)
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 33: '!'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000],
    // 34: '"'
    [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 35: '#'
    [0b01010, 0b11111, 0b01010, 0b01010, 0b11111, 0b01010, 0b00000],
    // 36: '$'
    [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100],
    // 37: '%'
    [0b11001, 0b11010, 0b00100, 0b01000, 0b01011, 0b10011, 0b00000],
    // 38: '&'
    [0b01100, 0b10010, 0b01100, 0b10101, 0b10010, 0b01101, 0b00000],
    // 39: '\''
    [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 40: '('
    [0b00010, 0b00100, 0b01000, 0b01000, 0b00100, 0b00010, 0b00000],
    // 41: ')'
    [0b01000, 0b00100, 0b00010, 0b00010, 0b00100, 0b01000, 0b00000],
    // 42: '*'
    [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
    // 43: '+'
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
    // 44: ','
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
    // 45: '-'
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
    // 46: '.'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000],
    // 47: '/'
    [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000],
    // 48: '0'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 49: '1'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 50: '2'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    // 51: '3'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    // 52: '4'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 53: '5'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 54: '6'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 55: '7'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 56: '8'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 57: '9'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
    // 58: ':'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
    // 59: ';'
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
    // 60: '<'
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
    // 61: '='
    [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
    // 62: '>'
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00100, 0b01000, 0b10000],
    // 63: '?'
    [0b01110, 0b10001, 0b00010, 0b00100, 0b00000, 0b00100, 0b00000],
    // 64: '@'
    [0b01110, 0b10001, 0b10111, 0b10101, 0b10110, 0b10000, 0b01110],
    // 65: 'A'
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    // 66: 'B'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
    // 67: 'C'
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
    // 68: 'D'
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
    // 69: 'E'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
    // 70: 'F'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
    // 71: 'G'
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
    // 72: 'H'
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    // 73: 'I'
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 74: 'J'
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
    // 75: 'K'
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
    // 76: 'L'
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
    // 77: 'M'
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
    // 78: 'N'
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
    // 79: 'O'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // 80: 'P'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    // 81: 'Q'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
    // 82: 'R'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
    // 83: 'S'
    [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
    // 84: 'T'
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // 85: 'U'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    // 86: 'V'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
    // 87: 'W'
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
    // 88: 'X'
    [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
    // 89: 'Y'
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
    // 90: 'Z'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
    // 91: '['
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
    // 92: '\'
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000],
    // 93: ']'
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
    // 94: '^'
    [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
    // 95: '_'
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
    // 96: '`'
    [0b01000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    // 97: 'a'
    [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
    // 98: 'b'
    [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
    // 99: 'c'
    [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
    // 100: 'd'
    [0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111],
    // 101: 'e'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
    // 102: 'f'
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
    // 103: 'g'
    [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // 104: 'h'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // 105: 'i'
    [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 106: 'j'
    [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
    // 107: 'k'
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
    // 108: 'l'
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 109: 'm'
    [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10001],
    // 110: 'n'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
    // 111: 'o'
    [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    // 112: 'p'
    [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
    // 113: 'q'
    [0b00000, 0b00000, 0b01111, 0b10001, 0b01111, 0b00001, 0b00001],
    // 114: 'r'
    [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
    // 115: 's'
    [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
    // 116: 't'
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
    // 117: 'u'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
    // 118: 'v'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    // 119: 'w'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
    // 120: 'x'
    [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
    // 121: 'y'
    [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
    // 122: 'z'
    [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
    // 123: '{'
    [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010],
    // 124: '|'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    // 125: '}'
    [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000],
    // 126: '~'
    [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
];

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba as Pixel;

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(text_width("AB", 1, false), 11);
        assert_eq!(text_width("AB", 2, false), 22);
        assert_eq!(text_width("A'", 1, true), 12);
        assert_eq!(text_width("", 3, true), 0);
        // '°' ist ein Zeichen, aber zwei Bytes
        assert_eq!(text_width("9°", 1, false), 11);
    }

    #[test]
    fn scale_follows_requested_height() {
        assert_eq!(glyph_scale(7.0), 1);
        assert_eq!(glyph_scale(2.0), 1);
        assert_eq!(glyph_scale(14.0), 2);
        assert_eq!(glyph_scale(24.0), 3);
        assert_eq!(glyph_scale(f32::NAN), 1);
    }

    #[test]
    fn draws_glyph_pixels_in_color() {
        let mut img = RgbaImage::from_pixel(10, 10, Pixel([255, 255, 255, 255]));
        // '|' belegt die mittlere Spalte aller 7 Zeilen
        draw_text(&mut img, 0, 0, "|", [1.0, 0.0, 0.0, 1.0], 1, false);
        assert_eq!(*img.get_pixel(2, 0), Pixel([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(2, 6), Pixel([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Pixel([255, 255, 255, 255]));
    }

    #[test]
    fn table_covers_printable_ascii_only() {
        assert!((' '..='~').all(|ch| glyph_for(ch).is_some()));
        assert!(glyph_for('\n').is_none());
        assert!(glyph_for('ä').is_none());
    }

    #[test]
    fn clipped_text_does_not_panic() {
        let mut img = RgbaImage::new(10, 10);
        draw_text(&mut img, -5, -5, "Original", [0.0, 0.0, 0.0, 1.0], 2, true);
        draw_text(&mut img, 8, 8, "X", [0.0, 0.0, 0.0, 1.0], 1, false);
    }
}
