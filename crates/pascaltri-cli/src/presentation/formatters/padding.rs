use std::io::{self, Write};

/// Leading spaces that center a row of `size + 1` cells, each
/// `cell_width` columns wide, under a triangle of `max_size` rows.
pub fn centering_offset(cell_width: usize, size: usize, max_size: usize) -> usize {
    cell_width * max_size.saturating_sub(size) / 2
}

pub fn write_spaces(out: &mut dyn Write, count: usize) -> io::Result<()> {
    write!(out, "{:count$}", "", count = count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_offset() {
        assert_eq!(centering_offset(6, 0, 16), 48);
        assert_eq!(centering_offset(6, 15, 16), 3);
        assert_eq!(centering_offset(2, 3, 16), 13);
        assert_eq!(centering_offset(2, 15, 16), 1);
    }

    #[test]
    fn test_centering_offset_never_underflows() {
        assert_eq!(centering_offset(6, 20, 16), 0);
    }

    #[test]
    fn test_write_spaces() {
        let mut out = Vec::new();
        write_spaces(&mut out, 4).unwrap();
        assert_eq!(out, b"    ");

        let mut out = Vec::new();
        write_spaces(&mut out, 0).unwrap();
        assert!(out.is_empty());
    }
}
