use crate::cells::Cartesian2DCoordinate;
use crate::errors::{ErrorKind, Result};
use crate::units::{ColumnIndex, Height, RowIndex, Width};


/// Validated size of a rectangular grid.
/// Both sides are at least 1, every coordinate fits in a `u32` and the cell count fits in a `usize`.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone)]
pub struct RectGridDimensions {
    row_width: Width,
    column_height: Height,
    size: usize,
}

impl RectGridDimensions {
    pub fn new(row_width: Width, column_height: Height) -> Result<RectGridDimensions> {
        let (Width(width), Height(height)) = (row_width, column_height);
        if width == 0 || height == 0 {
            return Err(ErrorKind::InvalidDimensions(width, height).into());
        }
        if width > u32::MAX as usize || height > u32::MAX as usize {
            return Err(ErrorKind::GridTooLarge(width, height).into());
        }
        let size = width
            .checked_mul(height)
            .ok_or_else(|| ErrorKind::GridTooLarge(width, height))?;

        Ok(RectGridDimensions {
            row_width,
            column_height,
            size,
        })
    }

    /// The number of cells.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.row_width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.column_height
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.row_width.0 && (coord.y as usize) < self.column_height.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some((coord.y as usize * self.row_width.0) + coord.x as usize)
        } else {
            None
        }
    }

    /// Inverse of `coordinate_to_index`. `index` must be less than `size`.
    #[inline]
    pub fn coordinate_from_index(&self, index: usize) -> Cartesian2DCoordinate {
        let Width(width) = self.row_width;
        Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32)
    }

    #[inline]
    pub fn coordinate_from_row_column(&self,
                                      col_index: ColumnIndex,
                                      row_index: RowIndex)
                                      -> Cartesian2DCoordinate {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(w: usize, h: usize) -> RectGridDimensions {
        RectGridDimensions::new(Width(w), Height(h)).expect("valid dimensions")
    }

    #[test]
    fn zero_sides_rejected() {
        for &(w, h) in &[(0, 0), (0, 5), (5, 0)] {
            match RectGridDimensions::new(Width(w), Height(h)) {
                Err(e) => match *e.kind() {
                    ErrorKind::InvalidDimensions(ew, eh) => assert_eq!((ew, eh), (w, h)),
                    ref other => panic!("unexpected error kind {:?}", other),
                },
                Ok(d) => panic!("{}x{} accepted as {:?}", w, h, d),
            }
        }
    }

    #[test]
    fn unaddressable_sides_rejected() {
        let too_wide = u32::MAX as usize + 1;
        let result = RectGridDimensions::new(Width(too_wide), Height(1));
        assert!(match result {
            Err(ref e) => match *e.kind() {
                ErrorKind::GridTooLarge(..) => true,
                _ => false,
            },
            Ok(_) => false,
        });
    }

    #[test]
    fn dimensions_as_hash_keys() {
        use std::collections::HashSet;
        let seen: HashSet<RectGridDimensions> =
            [dims(4, 3), dims(3, 4), dims(4, 3)].iter().cloned().collect();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&dims(3, 4)));
    }

    #[test]
    fn size_and_sides() {
        let d = dims(4, 3);
        assert_eq!(d.size(), 12);
        assert_eq!(d.width(), Width(4));
        assert_eq!(d.height(), Height(3));
        assert_eq!(dims(1, 1).size(), 1);
    }

    #[test]
    fn grid_coordinate_as_index() {
        let d = dims(3, 3);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        let coords = &[gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1), gc(0, 2),
                       gc(1, 2), gc(2, 2)];
        let indices: Vec<Option<usize>> = coords.iter()
            .map(|coord| d.coordinate_to_index(*coord))
            .collect();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(d.coordinate_to_index(gc(2, 3)), None);
        assert_eq!(d.coordinate_to_index(gc(3, 2)), None);
        assert_eq!(d.coordinate_to_index(gc(u32::MAX, u32::MAX)), None);
    }

    #[test]
    fn index_as_grid_coordinate() {
        let d = dims(4, 2);
        for index in 0..d.size() {
            let coord = d.coordinate_from_index(index);
            assert_eq!(d.coordinate_to_index(coord), Some(index));
        }
        assert_eq!(d.coordinate_from_index(5), Cartesian2DCoordinate::new(1, 1));
    }
}
