use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazegen::{
    grid_displays::{edges_text, walls_text},
    options::{MazeOptions, MazeOptionsBuilder},
    units::{Height, Width},
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--random-exits] [--seed=<s>] [--format=<f>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --random-exits         Cut the entrance and exit at random cells along opposite outer edges instead of the north west and south east corners.
    --seed=<s>             Seed for the random source. The same seed and options always give the same maze.
    --format=<f>           How to print the maze [default: walls].
                           walls: one line per row, one hex digit per cell with the walls present (north 1, south 2, east 4, west 8).
                           edges: line 1 is n(#vertices) m(#passages), then one line per passage between two 1-based row major vertex indices.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_random_exits: bool,
    flag_seed: Option<u64>,
    flag_format: OutputFormat,
}

#[derive(Debug, Deserialize, Eq, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    Walls,
    Edges,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazegen::errors::Error, ::mazegen::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    let options = maze_options(&args);
    info!("maze options {:?}", options);

    let maze_grid = options.generate()
        .chain_err(|| format!("Failed to generate a {}x{} maze",
                              options.width().0,
                              options.height().0))?;

    let text = match args.flag_format {
        OutputFormat::Walls => walls_text(&maze_grid),
        OutputFormat::Edges => edges_text(&maze_grid),
    };
    print!("{}", text);

    if let (Some(entrance), Some(exit)) = (maze_grid.entrance(), maze_grid.exit()) {
        println!("entrance: {}, exit: {}", entrance, exit);
    }

    Ok(())
}

fn maze_options(args: &MazeArgs) -> MazeOptions {
    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    MazeOptionsBuilder::new()
        .width(Width(width))
        .height(Height(height))
        .random_exits(args.flag_random_exits)
        .seed(args.flag_seed)
        .build()
}
