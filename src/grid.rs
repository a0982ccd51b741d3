use std::error;
use std::fmt;
use std::ops::Index;

use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, Opening, WalledCell};
use crate::errors::Result;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{BatchIterType, RectBatchIter, RectGridCellIter};
use crate::units::{Height, Width};

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type NeighbourSmallVec = SmallVec<[(Cartesian2DCoordinate, CompassPrimary); 4]>;

/// A rectangular grid of walled cells, stored row major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    dimensions: RectGridDimensions,
    cells: Vec<WalledCell>,
    entrance: Option<Opening>,
    exit: Option<Opening>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarveError {
    InvalidGridCoordinate,
    /// The wall is on the outer boundary, there is no cell on its far side.
    NoNeighbour,
    /// The wall is shared with another cell so it is not an outer wall.
    NotOnBoundary,
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match *self {
            CarveError::InvalidGridCoordinate => "coordinate is outside the grid",
            CarveError::NoNeighbour => "no cell on the far side of the wall",
            CarveError::NotOnBoundary => "wall is shared with another cell",
        };
        f.write_str(reason)
    }
}

impl error::Error for CarveError {}

impl Grid {
    /// A fully walled grid with every cell unvisited.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let dimensions = RectGridDimensions::new(width, height)?;
        Ok(Grid {
            dimensions,
            cells: vec![WalledCell::default(); dimensions.size()],
            entrance: None,
            exit: None,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size()
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&WalledCell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// All cells in row major order.
    #[inline]
    pub fn cells(&self) -> &[WalledCell] {
        &self.cells
    }

    #[inline]
    pub fn entrance(&self) -> Option<Opening> {
        self.entrance
    }

    #[inline]
    pub fn exit(&self) -> Option<Opening> {
        self.exit
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        self.dimensions.coordinate_to_index(coord)
    }

    /// Uniformly pick any cell, using exactly one draw from `rng`.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cartesian2DCoordinate {
        let index = rng.gen_range(0..self.size());
        self.dimensions.coordinate_from_index(index)
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    /// Cells to the North, South, East or West of a particular cell, whether or not a passage
    /// leads to them.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// Neighbouring cells not yet visited by a generator, each paired with the direction leading
    /// to it from `coord`. Reported in `CompassPrimary::NEIGHBOUR_ORDER`.
    pub fn unvisited_neighbours(&self, coord: Cartesian2DCoordinate) -> NeighbourSmallVec {
        CompassPrimary::NEIGHBOUR_ORDER
            .iter()
            .filter_map(|&dir| {
                self.neighbour_at_direction(coord, dir)
                    .filter(|&neighbour_coord| !self[neighbour_coord].is_visited())
                    .map(|neighbour_coord| (neighbour_coord, dir))
            })
            .collect()
    }

    /// Is the wall on the `direction` side of the cell absent? Out of grid coordinates are never
    /// open.
    pub fn is_open(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.cell(coord).map_or(false, |cell| !cell.has_wall(direction))
    }

    /// Is there a passage from the cell to its neighbour in `direction`?
    pub fn is_neighbour_linked(&self,
                               coord: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> bool {
        self.neighbour_at_direction(coord, direction).is_some() && self.is_open(coord, direction)
    }

    /// Remove the wall between a cell and its neighbour, on both sides.
    /// Returns the neighbour's coordinate.
    pub fn carve_passage(&mut self,
                         coord: Cartesian2DCoordinate,
                         direction: CompassPrimary)
                         -> ::std::result::Result<Cartesian2DCoordinate, CarveError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(CarveError::InvalidGridCoordinate)?;
        let neighbour_coord = self.neighbour_at_direction(coord, direction)
            .ok_or(CarveError::NoNeighbour)?;
        let neighbour_index = self.grid_coordinate_to_index(neighbour_coord)
            .ok_or(CarveError::NoNeighbour)?;

        self.cells[index].remove_wall(direction);
        self.cells[neighbour_index].remove_wall(direction.opposite());
        Ok(neighbour_coord)
    }

    /// Remove one of the grid's outer walls.
    pub fn carve_boundary(&mut self,
                          coord: Cartesian2DCoordinate,
                          direction: CompassPrimary)
                          -> ::std::result::Result<Opening, CarveError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(CarveError::InvalidGridCoordinate)?;
        if self.neighbour_at_direction(coord, direction).is_some() {
            return Err(CarveError::NotOnBoundary);
        }

        self.cells[index].remove_wall(direction);
        Ok(Opening {
            coordinate: coord,
            side: direction,
        })
    }

    pub(crate) fn set_openings(&mut self, entrance: Opening, exit: Opening) {
        self.entrance = Some(entrance);
        self.exit = Some(exit);
    }

    pub(crate) fn mark_visited(&mut self, coord: Cartesian2DCoordinate) {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index].mark_visited();
        }
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectBatchIter {
        RectBatchIter::new(BatchIterType::Row, self.dimensions)
    }

    #[inline]
    pub fn iter_column(&self) -> RectBatchIter {
        RectBatchIter::new(BatchIterType::Column, self.dimensions)
    }

    /// Every carved passage between two cells, each reported once from its western or northern
    /// cell. Entrance and exit openings are not passages.
    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter {
            grid: self,
            cells: self.iter(),
            pending_south: None,
        }
    }

    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }
}

impl Index<Cartesian2DCoordinate> for Grid {
    type Output = WalledCell;

    /// Panics if the coordinate is outside the grid.
    fn index(&self, coord: Cartesian2DCoordinate) -> &WalledCell {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => &self.cells[index],
            None => {
                panic!("coordinate {} outside {}x{} grid",
                       coord,
                       self.width().0,
                       self.height().0)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PassagesIter<'a> {
    grid: &'a Grid,
    cells: RectGridCellIter,
    pending_south: Option<Cartesian2DCoordinate>,
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (Cartesian2DCoordinate, Cartesian2DCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coord) = self.pending_south.take() {
                if self.grid.is_neighbour_linked(coord, CompassPrimary::South) {
                    let south = coord.offset(CompassPrimary::South)
                        .expect("linked neighbour exists");
                    return Some((coord, south));
                }
            }

            let coord = self.cells.next()?;
            self.pending_south = Some(coord);
            if self.grid.is_neighbour_linked(coord, CompassPrimary::East) {
                let east = coord.offset(CompassPrimary::East).expect("linked neighbour exists");
                return Some((coord, east));
            }
        }
    }
}
