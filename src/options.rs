use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::errors::Result;
use crate::generators::{self, ExitPlacement};
use crate::grid::Grid;
use crate::units::{Height, Width};


/// Everything needed to generate one maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeOptions {
    width: Width,
    height: Height,
    exits: ExitPlacement,
    seed: Option<u64>,
}

impl Default for MazeOptions {
    fn default() -> MazeOptions {
        MazeOptions {
            width: Width(20),
            height: Height(20),
            exits: ExitPlacement::Corners,
            seed: None,
        }
    }
}

impl MazeOptions {
    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn exits(&self) -> ExitPlacement {
        self.exits
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate a maze with these options. Without a seed the random source is seeded from the
    /// operating system, so every call gives a different maze.
    pub fn generate(&self) -> Result<Grid> {
        match self.seed {
            Some(seed) => generators::generate_seeded(self.width, self.height, self.exits, seed),
            None => {
                let mut rng = XorShiftRng::from_entropy();
                generators::generate(self.width, self.height, self.exits, &mut rng)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MazeOptionsBuilder {
    options: MazeOptions,
}

impl MazeOptionsBuilder {
    pub fn new() -> MazeOptionsBuilder {
        MazeOptionsBuilder::default()
    }

    pub fn width(mut self, width: Width) -> MazeOptionsBuilder {
        self.options.width = width;
        self
    }

    pub fn height(mut self, height: Height) -> MazeOptionsBuilder {
        self.options.height = height;
        self
    }

    pub fn exits(mut self, exits: ExitPlacement) -> MazeOptionsBuilder {
        self.options.exits = exits;
        self
    }

    pub fn random_exits(self, random_exits: bool) -> MazeOptionsBuilder {
        self.exits(ExitPlacement::from(random_exits))
    }

    pub fn seed(mut self, seed: Option<u64>) -> MazeOptionsBuilder {
        self.options.seed = seed;
        self
    }

    pub fn build(self) -> MazeOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn defaults() {
        let options = MazeOptionsBuilder::new().build();
        assert_eq!(options, MazeOptions::default());
        assert_eq!(options.width(), Width(20));
        assert_eq!(options.height(), Height(20));
        assert_eq!(options.exits(), ExitPlacement::Corners);
        assert_eq!(options.seed(), None);
    }

    #[test]
    fn builder_sets_everything() {
        let options = MazeOptionsBuilder::new()
            .width(Width(5))
            .height(Height(7))
            .random_exits(true)
            .seed(Some(99))
            .build();
        assert_eq!(options.width(), Width(5));
        assert_eq!(options.height(), Height(7));
        assert_eq!(options.exits(), ExitPlacement::RandomEdges);
        assert_eq!(options.seed(), Some(99));
    }

    #[test]
    fn seeded_options_reproduce_the_maze() {
        let options = MazeOptionsBuilder::new()
            .width(Width(10))
            .height(Height(4))
            .seed(Some(17))
            .build();
        let grid = options.generate().unwrap();
        assert_eq!(grid,
                   generators::generate_seeded(Width(10), Height(4), ExitPlacement::Corners, 17)
                       .unwrap());
        assert_eq!(grid.passages_count(), 39);
    }

    #[test]
    fn unseeded_options_still_make_a_perfect_maze() {
        let grid = MazeOptionsBuilder::new()
            .width(Width(6))
            .height(Height(6))
            .build()
            .generate()
            .unwrap();
        assert_eq!(grid.passages_count(), 35);
    }

    #[test]
    fn invalid_options_rejected() {
        let result = MazeOptionsBuilder::new().width(Width(0)).build().generate();
        match result {
            Err(e) => assert!(match *e.kind() {
                ErrorKind::InvalidDimensions(0, 20) => true,
                _ => false,
            }),
            Ok(_) => panic!("zero width accepted"),
        }
    }
}
