// Engine module - row recurrence for Pascal's triangle
// This layer owns the row buffers; the CLI only ever sees borrowed rows.

pub mod generator;
pub mod row;

pub use generator::{CapacityError, TriangleGenerator};
pub use row::{Cell, RowView, next_row};

// Façade API - Stable public interface for CLI layer

/// Collect the first `width` rows into owned vectors.
///
/// Convenient for tests and small widths; the CLI streams rows through
/// [`TriangleGenerator::generate`] instead.
pub fn collect_rows(width: usize) -> Vec<Vec<Cell>> {
    let mut generator = TriangleGenerator::new(width);
    let mut rows = Vec::with_capacity(width);
    while let Some(row) = generator.advance() {
        rows.push(row.values().to_vec());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_rows_small_triangle() {
        let rows = collect_rows(5);
        assert_eq!(
            rows,
            vec![
                vec![1],
                vec![1, 1],
                vec![1, 2, 1],
                vec![1, 3, 3, 1],
                vec![1, 4, 6, 4, 1],
            ]
        );
    }

    #[test]
    fn test_collect_rows_zero_width() {
        assert!(collect_rows(0).is_empty());
    }
}
