use pascaltri_engine::Cell;
use std::io::{self, Write};

/// Columns taken by one numeric cell, including the trailing separator.
pub const NUMERIC_CELL_WIDTH: usize = 5 + 1;

/// Write each value right-aligned in five columns followed by a space.
pub fn write_numeric_cells(out: &mut dyn Write, values: &[Cell]) -> io::Result<()> {
    for value in values {
        write!(out, "{:>5} ", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_right_aligned() {
        let mut out = Vec::new();
        write_numeric_cells(&mut out, &[1, 10, 12870]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    1    10 12870 ");
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let mut out = Vec::new();
        write_numeric_cells(&mut out, &[2333606220]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2333606220 ");
    }
}
