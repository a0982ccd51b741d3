use std::iter::{ExactSizeIterator, FusedIterator};

use crate::cells::Cartesian2DCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, Height, RowIndex, Width};


/// Every coordinate of a grid in row major order.
#[derive(Debug, Clone)]
pub struct RectGridCellIter {
    dimensions: RectGridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size(),
        }
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl FusedIterator for RectGridCellIter {}
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.coordinate_from_index(self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchIterType {
    Row,
    Column,
}

/// Whole rows (north to south) or whole columns (west to east) of a grid.
#[derive(Debug, Copy, Clone)]
pub struct RectBatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    dimensions: RectGridDimensions,
}

impl RectBatchIter {
    pub fn new(iter_type: BatchIterType, dimensions: RectGridDimensions) -> RectBatchIter {
        RectBatchIter {
            iter_type,
            current_index: 0,
            dimensions,
        }
    }

    fn batch_count(&self) -> usize {
        let (Width(width), Height(height)) = (self.dimensions.width(), self.dimensions.height());
        match self.iter_type {
            BatchIterType::Row => height,
            BatchIterType::Column => width,
        }
    }
}

impl ExactSizeIterator for RectBatchIter {} // default impl using size_hint()
impl FusedIterator for RectBatchIter {}
impl Iterator for RectBatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.batch_count() {
            return None;
        }

        let (Width(width), Height(height)) = (self.dimensions.width(), self.dimensions.height());
        let dims = self.dimensions;
        let current = self.current_index;
        let coords = match self.iter_type {
            BatchIterType::Row => {
                (0..width)
                    .map(|i| dims.coordinate_from_row_column(ColumnIndex(i), RowIndex(current)))
                    .collect()
            }
            BatchIterType::Column => {
                (0..height)
                    .map(|i| dims.coordinate_from_row_column(ColumnIndex(current), RowIndex(i)))
                    .collect()
            }
        };
        self.current_index += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch_count() - self.current_index;
        (remaining, Some(remaining))
    }
}
