use crate::row::{Cell, RowView, next_row};
use std::collections::TryReserveError;
use std::fmt;

/// The row buffers for the requested width could not be allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityError {
    width: usize,
    source: TryReserveError,
}

impl CapacityError {
    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot allocate row buffers for {} rows", self.width)
    }
}

impl std::error::Error for CapacityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Double-buffered generator for the first `width` rows of the triangle.
///
/// Row n is computed from row n-1 into the other buffer, so no row is
/// ever read and written in the same pass. Odd rows land in `line_b`,
/// even rows in `line_a`. Buffers are reserved up front and grow one cell
/// per row within that reservation.
#[derive(Debug, Clone)]
pub struct TriangleGenerator {
    width: usize,
    line_a: Vec<Cell>,
    line_b: Vec<Cell>,
    next: usize,
}

impl TriangleGenerator {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            line_a: Vec::with_capacity(width),
            line_b: Vec::with_capacity(width),
            next: 0,
        }
    }

    /// Like [`TriangleGenerator::new`], but reports an allocation failure
    /// instead of aborting.
    pub fn try_new(width: usize) -> Result<Self, CapacityError> {
        let mut line_a = Vec::new();
        let mut line_b = Vec::new();
        line_a
            .try_reserve_exact(width)
            .and_then(|_| line_b.try_reserve_exact(width))
            .map_err(|source| CapacityError { width, source })?;

        Ok(Self {
            width,
            line_a,
            line_b,
            next: 0,
        })
    }

    /// Rows not yet produced.
    pub fn remaining(&self) -> usize {
        self.width - self.next
    }

    /// Produce the next row, or `None` once `width` rows have been produced.
    pub fn advance(&mut self) -> Option<RowView<'_>> {
        if self.next >= self.width {
            return None;
        }

        let size = self.next;
        self.next += 1;

        let values = if size % 2 == 0 {
            self.line_a.resize(size + 1, 0);
            next_row(&mut self.line_a, &self.line_b, size);
            &self.line_a[..=size]
        } else {
            self.line_b.resize(size + 1, 0);
            next_row(&mut self.line_b, &self.line_a, size);
            &self.line_b[..=size]
        };

        Some(RowView::new(size, values))
    }

    /// Feed every remaining row to `sink`, stopping at the first error.
    ///
    /// Returns the number of rows handed to the sink.
    pub fn generate<E, F>(&mut self, mut sink: F) -> Result<usize, E>
    where
        F: FnMut(RowView<'_>) -> Result<(), E>,
    {
        let mut produced = 0;
        while let Some(row) = self.advance() {
            sink(row)?;
            produced += 1;
        }
        Ok(produced)
    }
}
