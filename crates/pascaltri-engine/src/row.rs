/// Value type of a triangle cell.
///
/// Cells are fixed-width: coefficients past C(34, 17) no longer fit and
/// wrap modulo 2^32. Wrapping is accepted; renderers that reduce values
/// by a modulus are unaffected only when the modulus divides 2^32.
pub type Cell = u32;

/// Borrowed view of one generated row.
///
/// `index` is the row number n; `values` holds C(n, 0..=n).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    index: usize,
    values: &'a [Cell],
}

impl<'a> RowView<'a> {
    pub(crate) fn new(index: usize, values: &'a [Cell]) -> Self {
        debug_assert_eq!(values.len(), index + 1);
        Self { index, values }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &'a [Cell] {
        self.values
    }

    pub fn get(&self, i: usize) -> Option<Cell> {
        self.values.get(i).copied()
    }

    /// Sum of the row with the same wraparound as the cells themselves.
    pub fn wrapping_sum(&self) -> Cell {
        self.values.iter().fold(0, |acc, v| acc.wrapping_add(*v))
    }
}

/// Build row `size` into `dest` from row `size - 1` held in `src`.
///
/// `src` must hold at least `size` values and `dest` at least `size + 1`.
/// For `size == 0` this seeds the apex.
pub fn next_row(dest: &mut [Cell], src: &[Cell], size: usize) {
    if size == 0 {
        dest[0] = 1;
        return;
    }

    dest[0] = src[0];
    for i in 1..size {
        dest[i] = src[i - 1].wrapping_add(src[i]);
    }
    dest[size] = src[size - 1];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_row_applies_recurrence() {
        let src = [1, 3, 3, 1, 0];
        let mut dest = [0; 5];
        next_row(&mut dest, &src, 4);
        assert_eq!(dest, [1, 4, 6, 4, 1]);
    }

    #[test]
    fn test_next_row_seeds_apex() {
        let mut dest = [7; 3];
        next_row(&mut dest, &[], 0);
        assert_eq!(dest[0], 1);
    }

    #[test]
    fn test_next_row_wraps_instead_of_panicking() {
        let src = [1, u32::MAX, 2, 1];
        let mut dest = [0; 4];
        next_row(&mut dest, &src, 3);
        assert_eq!(dest, [1, 0, 1, 2]);
    }

    #[test]
    fn test_row_view_accessors() {
        let values = [1, 2, 1];
        let row = RowView::new(2, &values);
        assert_eq!(row.index(), 2);
        assert_eq!(row.values().len(), 3);
        assert_eq!(row.get(1), Some(2));
        assert_eq!(row.get(3), None);
        assert_eq!(row.wrapping_sum(), 4);
    }
}
