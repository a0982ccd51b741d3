use log::debug;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::Result;
use crate::grid::{CarveError, Grid};
use crate::units::{Height, Width};

/// Where the entrance and exit are cut into the outer wall.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ExitPlacement {
    /// Entrance on the west side of the north west corner cell, exit on the east side of the
    /// south east corner cell.
    Corners,
    /// A coin flip chooses between west/east and north/south outer edges, then the cell along
    /// each edge is chosen at random. The entrance is always on the west or north edge and the
    /// exit on the edge opposite it.
    RandomEdges,
}

impl From<bool> for ExitPlacement {
    fn from(random_exits: bool) -> ExitPlacement {
        if random_exits {
            ExitPlacement::RandomEdges
        } else {
            ExitPlacement::Corners
        }
    }
}

/// Generate a perfect maze: initialise a fully walled grid, cut the entrance and exit, then carve
/// a spanning tree of passages with the recursive backtracker.
///
/// Fails with `InvalidDimensions` if either side is zero. No grid is built in that case.
pub fn generate<R: Rng>(width: Width,
                        height: Height,
                        exits: ExitPlacement,
                        rng: &mut R)
                        -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    debug!("generating {}x{} maze with {:?} exits", width.0, height.0, exits);

    create_exits(&mut grid, exits, rng)?;
    recursive_backtracker(&mut grid, rng)?;

    debug!("carved {} passages", grid.passages_count());
    Ok(grid)
}

/// Same as `generate` with a fresh `XorShiftRng` seeded from `seed`.
/// The same seed, dimensions and exit placement always produce an identical grid.
pub fn generate_seeded(width: Width,
                       height: Height,
                       exits: ExitPlacement,
                       seed: u64)
                       -> Result<Grid> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate(width, height, exits, &mut rng)
}

/// Remove two outer walls to make the maze's entrance and exit, and record them on the grid.
pub fn create_exits<R: Rng>(grid: &mut Grid,
                            placement: ExitPlacement,
                            rng: &mut R)
                            -> ::std::result::Result<(), CarveError> {
    let (Width(width), Height(height)) = (grid.width(), grid.height());
    let (last_x, last_y) = (width as u32 - 1, height as u32 - 1);

    let ((entrance_coord, entrance_side), (exit_coord, exit_side)) = match placement {
        ExitPlacement::Corners => {
            ((Cartesian2DCoordinate::new(0, 0), CompassPrimary::West),
             (Cartesian2DCoordinate::new(last_x, last_y), CompassPrimary::East))
        }
        ExitPlacement::RandomEdges => {
            let west_to_east: bool = rng.gen(); // coin flip
            if west_to_east {
                let entrance_y = rng.gen_range(0..height) as u32;
                let exit_y = rng.gen_range(0..height) as u32;
                ((Cartesian2DCoordinate::new(0, entrance_y), CompassPrimary::West),
                 (Cartesian2DCoordinate::new(last_x, exit_y), CompassPrimary::East))
            } else {
                let entrance_x = rng.gen_range(0..width) as u32;
                let exit_x = rng.gen_range(0..width) as u32;
                ((Cartesian2DCoordinate::new(entrance_x, 0), CompassPrimary::North),
                 (Cartesian2DCoordinate::new(exit_x, last_y), CompassPrimary::South))
            }
        }
    };

    let entrance = grid.carve_boundary(entrance_coord, entrance_side)?;
    let exit = grid.carve_boundary(exit_coord, exit_side)?;
    debug!("entrance on the {}, exit on the {}", entrance, exit);

    grid.set_openings(entrance, exit);
    Ok(())
}

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// A depth first random walk from a random cell. At each step the current cell is popped; if it
/// has unvisited neighbours it goes back on the stack, one neighbour is chosen at random, the wall
/// between them is removed and the neighbour becomes the top of the stack. A cell with no
/// unvisited neighbours is dropped, which backtracks to the cell below it.
///
/// An explicit stack is used rather than recursion so large grids cannot overflow the call stack.
/// Every cell ends up visited with exactly `size - 1` passages carved, a spanning tree.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid,
                                     rng: &mut R)
                                     -> ::std::result::Result<(), CarveError> {
    let start = grid.random_cell(rng);
    grid.mark_visited(start);

    let mut stack = Vec::with_capacity(grid.size());
    stack.push(start);

    while let Some(current) = stack.pop() {
        let neighbours = grid.unvisited_neighbours(current);
        if neighbours.is_empty() {
            continue;
        }

        // Come back later in case it still has other unvisited neighbours.
        stack.push(current);

        let (next, direction) = neighbours[rng.gen_range(0..neighbours.len())];
        grid.carve_passage(current, direction)?;
        grid.mark_visited(next);
        stack.push(next);
    }

    Ok(())
}
