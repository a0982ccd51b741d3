//! **mazegen** generates perfect rectangular mazes with a recursive backtracker.
//!
//! A maze is a `grid::Grid` of `cells::WalledCell`s, each with four walls. A renderer only needs
//! to read the walls:
//!
//! ```
//! use mazegen::cells::Cartesian2DCoordinate;
//! use mazegen::generators::{self, ExitPlacement};
//! use mazegen::grid_displays;
//! use mazegen::units::{Height, Width};
//!
//! let maze = generators::generate_seeded(Width(3), Height(3), ExitPlacement::Corners, 42)
//!     .expect("valid dimensions");
//! assert_eq!(maze.passages_count(), 8);
//! for coord in maze.iter() {
//!     let walls = maze[coord].walls();
//!     assert!(walls.bits() <= 0xf);
//! }
//!
//! // Entrance on the west wall of the top left cell, exit on the east wall of the bottom right.
//! assert!(!maze[Cartesian2DCoordinate::new(0, 0)].has_west_wall());
//! assert!(!maze[Cartesian2DCoordinate::new(2, 2)].has_east_wall());
//!
//! let text = grid_displays::walls_text(&maze);
//! assert_eq!(text.lines().count(), 3);
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_dimensions;
pub mod grid_iterators;
pub mod options;
pub mod units;
