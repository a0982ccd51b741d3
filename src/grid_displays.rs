use itertools::Itertools;

use crate::grid::Grid;

/// One line per row, one lowercase hex digit per cell holding its `CellWalls` bits
/// (north 1, south 2, east 4, west 8).
pub fn walls_text(maze_grid: &Grid) -> String {
    let mut text = String::with_capacity(maze_grid.size() + maze_grid.height().0);
    for row in maze_grid.iter_row() {
        let line = row.iter().map(|&coord| format!("{:x}", maze_grid[coord].walls())).join("");
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// The maze as a graph: a `n m` header line (vertices, passages) then one `a b` line per passage.
/// Vertices are the 1-based row major cell indices.
pub fn edges_text(maze_grid: &Grid) -> String {
    let mut graph_data = String::new();
    let vertices_count = maze_grid.size();
    let edges_count = maze_grid.passages_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze_grid.iter_passages() {
        let (index_a, index_b) = match (maze_grid.grid_coordinate_to_index(src),
                                        maze_grid.grid_coordinate_to_index(dst)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        graph_data.push_str((index_a + 1).to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str((index_b + 1).to_string().as_ref());
        graph_data.push('\n');
    }

    graph_data
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
    use crate::generators::{generate_seeded, ExitPlacement};
    use crate::units::{Height, Width};

    fn seeded_maze(w: usize, h: usize, seed: u64) -> Grid {
        generate_seeded(Width(w), Height(h), ExitPlacement::Corners, seed)
            .expect("valid dimensions")
    }

    #[test]
    fn walls_of_an_uncarved_grid() {
        let g = Grid::new(Width(3), Height(2)).expect("valid dimensions");
        assert_eq!(walls_text(&g), "fff\nfff\n");
    }

    #[test]
    fn walls_follow_the_bit_layout() {
        let mut g = Grid::new(Width(2), Height(1)).expect("valid dimensions");
        let origin = Cartesian2DCoordinate::new(0, 0);
        g.carve_passage(origin, CompassPrimary::East).expect("neighbour exists");
        // west cell keeps N, S, W (1 + 2 + 8), east cell keeps N, S, E (1 + 2 + 4)
        assert_eq!(walls_text(&g), "b7\n");

        g.carve_boundary(origin, CompassPrimary::North).expect("outer wall");
        assert_eq!(walls_text(&g), "a7\n");
    }

    #[test]
    fn seeded_maze_walls() {
        let g = seeded_maze(2, 2, 1);
        assert_eq!(walls_text(&g), "35\nb2\n");
        assert_eq!(walls_text(&g), walls_text(&seeded_maze(2, 2, 1)));
    }

    #[test]
    fn walls_text_shape() {
        let g = seeded_maze(7, 4, 99);
        let text = walls_text(&g);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.len() == 7));
        assert!(text.chars().filter(|&c| c != '\n').all(|c| c.is_digit(16)));
    }

    #[test]
    fn seeded_maze_edges() {
        let g = seeded_maze(2, 2, 1);
        assert_eq!(edges_text(&g), "4 3\n1 2\n2 4\n3 4\n");
    }

    #[test]
    fn edges_form_a_spanning_tree_over_1_based_vertices() {
        let g = seeded_maze(6, 5, 12345);
        let text = edges_text(&g);
        let mut lines = text.lines();

        let header = lines.next().expect("header line");
        assert_eq!(header, format!("{} {}", g.size(), g.size() - 1));

        let edges: Vec<(usize, usize)> = lines.map(|line| {
                let mut fields = line.split(' ').map(|f| f.parse::<usize>().expect("index"));
                (fields.next().expect("source"), fields.next().expect("destination"))
            })
            .collect();
        assert_eq!(edges.len(), g.size() - 1);
        assert!(edges.iter().all(|&(a, b)| a >= 1 && b >= 1 && a <= g.size() && b <= g.size()));
        assert!(edges.iter().all(|&(a, b)| b == a + 1 || b == a + g.width().0));
    }

    #[test]
    fn single_cell_has_no_edges() {
        let g = seeded_maze(1, 1, 0);
        assert_eq!(edges_text(&g), "1 0\n");
        assert_eq!(walls_text(&g), "3\n");
    }
}
