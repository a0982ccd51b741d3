use std::fmt;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

/// The four sides of a square cell.
///
/// `x` grows to the East and `y` grows to the South, so row 0 is the northern edge of a grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    /// The order in which neighbouring cells are reported during maze generation.
    /// A random index picks from a list built in this order, so changing it changes which maze a
    /// given seed produces.
    /// North is `y - 1`, so the coordinates are visited as `x - 1`, `y + 1`, `y - 1`, `x + 1`.
    pub const NEIGHBOUR_ORDER: [CompassPrimary; 4] = [CompassPrimary::West,
                                                      CompassPrimary::South,
                                                      CompassPrimary::North,
                                                      CompassPrimary::East];

    /// The direction pointing back the way this one came.
    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

impl fmt::Display for CompassPrimary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            CompassPrimary::North => "north",
            CompassPrimary::South => "south",
            CompassPrimary::East => "east",
            CompassPrimary::West => "west",
        };
        f.write_str(name)
    }
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable. The result is not checked against
    /// any grid's dimensions.
    pub fn offset(self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One square of the maze: four independent walls and the generation-only `visited` mark.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct WalledCell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    visited: bool,
}

impl Default for WalledCell {
    /// Fully enclosed and unvisited.
    fn default() -> WalledCell {
        WalledCell {
            north: true,
            south: true,
            east: true,
            west: true,
            visited: false,
        }
    }
}

impl WalledCell {
    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        match dir {
            CompassPrimary::North => self.north,
            CompassPrimary::South => self.south,
            CompassPrimary::East => self.east,
            CompassPrimary::West => self.west,
        }
    }

    #[inline]
    pub fn has_north_wall(&self) -> bool {
        self.north
    }

    #[inline]
    pub fn has_south_wall(&self) -> bool {
        self.south
    }

    #[inline]
    pub fn has_east_wall(&self) -> bool {
        self.east
    }

    #[inline]
    pub fn has_west_wall(&self) -> bool {
        self.west
    }

    /// Only meaningful while a generator is running. Every cell of a finished maze is visited.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn walls(&self) -> CellWalls {
        CompassPrimary::ALL
            .iter()
            .filter(|&&dir| self.has_wall(dir))
            .fold(CellWalls::empty(), |walls, &dir| walls.with(dir))
    }

    pub(crate) fn remove_wall(&mut self, dir: CompassPrimary) {
        match dir {
            CompassPrimary::North => self.north = false,
            CompassPrimary::South => self.south = false,
            CompassPrimary::East => self.east = false,
            CompassPrimary::West => self.west = false,
        }
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }
}

/// Compact wall configuration of one cell: `N = 1, S = 2, E = 4, W = 8`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct CellWalls(u8);

impl CellWalls {
    pub const NORTH: u8 = 1;
    pub const SOUTH: u8 = 2;
    pub const EAST: u8 = 4;
    pub const WEST: u8 = 8;

    #[inline]
    pub fn empty() -> CellWalls {
        CellWalls(0)
    }

    #[inline]
    pub fn all() -> CellWalls {
        CellWalls(Self::NORTH | Self::SOUTH | Self::EAST | Self::WEST)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn contains(self, dir: CompassPrimary) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    #[inline]
    pub fn with(self, dir: CompassPrimary) -> CellWalls {
        CellWalls(self.0 | Self::bit(dir))
    }

    fn bit(dir: CompassPrimary) -> u8 {
        match dir {
            CompassPrimary::North => Self::NORTH,
            CompassPrimary::South => Self::SOUTH,
            CompassPrimary::East => Self::EAST,
            CompassPrimary::West => Self::WEST,
        }
    }
}

impl fmt::LowerHex for CellWalls {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// An outer wall removed to let the maze be entered or left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Opening {
    pub coordinate: Cartesian2DCoordinate,
    pub side: CompassPrimary,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} wall of {}", self.side, self.coordinate)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn opposite_directions() {
        for &dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
        assert_eq!(CompassPrimary::North.opposite(), CompassPrimary::South);
        assert_eq!(CompassPrimary::East.opposite(), CompassPrimary::West);
    }

    #[test]
    fn neighbour_order_offsets() {
        let centre = Cartesian2DCoordinate::new(1, 1);
        let visited: Vec<Option<Cartesian2DCoordinate>> = CompassPrimary::NEIGHBOUR_ORDER
            .iter()
            .map(|&dir| centre.offset(dir))
            .collect();
        let gc = |x, y| Some(Cartesian2DCoordinate::new(x, y));
        assert_eq!(visited, vec![gc(0, 1), gc(1, 2), gc(1, 0), gc(2, 1)]);
    }

    #[test]
    fn coordinate_offsets() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(0, 0).offset(CompassPrimary::North), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::South), Some(gc(0, 1)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East), Some(gc(1, 0)));
        assert_eq!(gc(3, 3).offset(CompassPrimary::North), Some(gc(3, 2)));
        assert_eq!(gc(3, 3).offset(CompassPrimary::West), Some(gc(2, 3)));
        assert_eq!(gc(u32::MAX, 0).offset(CompassPrimary::East), None);
        assert_eq!(gc(0, u32::MAX).offset(CompassPrimary::South), None);
    }

    #[test]
    fn new_cell_is_enclosed_and_unvisited() {
        let cell = WalledCell::default();
        assert!(CompassPrimary::ALL.iter().all(|&dir| cell.has_wall(dir)));
        assert!(!cell.is_visited());
        assert_eq!(cell.walls(), CellWalls::all());
        assert_eq!(cell.walls().bits(), 0xf);
    }

    #[test]
    fn walls_are_independent() {
        let mut cell = WalledCell::default();
        cell.remove_wall(CompassPrimary::East);
        assert!(!cell.has_east_wall());
        assert!(cell.has_north_wall());
        assert!(cell.has_south_wall());
        assert!(cell.has_west_wall());
        assert_eq!(cell.walls().bits(), CellWalls::NORTH | CellWalls::SOUTH | CellWalls::WEST);
        assert!(!cell.walls().contains(CompassPrimary::East));

        cell.remove_wall(CompassPrimary::North);
        assert_eq!(format!("{:x}", cell.walls()), "a");
    }
}
