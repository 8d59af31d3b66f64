use pascaltri_engine::Cell;

pub const ASCII_PATTERNS: [char; 5] = [' ', 'x', '+', '-', 'W'];

/// Glyph for `value mod modulus`. Remainders past the palette wrap around it.
pub fn glyph_for(value: Cell, modulus: u32) -> char {
    let remainder = (value % modulus) as usize;
    ASCII_PATTERNS[remainder % ASCII_PATTERNS.len()]
}

/// Gray level for `value mod modulus`, with multiples of 8 forced to black.
pub fn gray_level(value: Cell, modulus: u32) -> u32 {
    let color = value % modulus;
    if color % 8 == 0 { 0 } else { color }
}
