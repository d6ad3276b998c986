use serde::{Deserialize, Serialize};

/// Placeholder for a cell that has not been assigned a letter yet
pub const BLANK: char = ' ';

/// Direction a word is read in. All orientations run left-to-right and/or
/// top-to-bottom; reversed and wrap-around placements do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// (row, col) increment between consecutive letters
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Where a word landed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

impl Placement {
    /// Cells covered by this placement, in reading order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..self.len).map(move |i| Position {
            row: self.row + i * dr,
            col: self.col + i * dc,
        })
    }

    /// Whether every covered cell lies inside a grid of `size`
    pub fn fits(&self, size: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let (dr, dc) = self.orientation.step();
        let last_row = self.row + (self.len - 1) * dr;
        let last_col = self.col + (self.len - 1) * dc;
        last_row < size && last_col < size
    }
}

/// Square, row-major matrix of letters.
///
/// Serializes as a plain `[[char]]` array so it can be returned from the
/// API as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a `size` x `size` grid with every cell set to [`BLANK`].
    /// Callers guarantee `size > 0`.
    pub(crate) fn blank(size: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row][pos.col] = letter;
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut char> {
        self.cells.iter_mut().flatten()
    }

    /// Read the letters covered by `placement`, or `None` if it runs off the grid
    pub fn read(&self, placement: &Placement) -> Option<String> {
        if !placement.fits(self.size()) {
            return None;
        }
        placement.positions().map(|pos| self.get(pos)).collect()
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_steps() {
        assert_eq!(Orientation::Horizontal.step(), (0, 1));
        assert_eq!(Orientation::Vertical.step(), (1, 0));
        assert_eq!(Orientation::Diagonal.step(), (1, 1));
    }

    #[test]
    fn test_placement_positions_diagonal() {
        let placement = Placement {
            orientation: Orientation::Diagonal,
            row: 1,
            col: 2,
            len: 3,
        };
        let positions: Vec<Position> = placement.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position { row: 1, col: 2 },
                Position { row: 2, col: 3 },
                Position { row: 3, col: 4 },
            ]
        );
    }

    #[test]
    fn test_placement_fits() {
        let placement = Placement {
            orientation: Orientation::Horizontal,
            row: 4,
            col: 1,
            len: 4,
        };
        assert!(placement.fits(5));
        assert!(!placement.fits(4));

        let empty = Placement { len: 0, ..placement };
        assert!(!empty.fits(5));
    }

    #[test]
    fn test_blank_grid_is_square() {
        let grid = Grid::blank(4);
        assert_eq!(grid.size(), 4);
        assert!(grid.rows().iter().all(|row| row.len() == 4));
        assert!(grid.rows().iter().flatten().all(|&c| c == BLANK));
    }

    #[test]
    fn test_grid_serializes_as_nested_array() {
        let mut grid = Grid::blank(2);
        grid.set(Position { row: 0, col: 0 }, 'A');
        grid.set(Position { row: 0, col: 1 }, 'B');
        grid.set(Position { row: 1, col: 0 }, 'C');
        grid.set(Position { row: 1, col: 1 }, 'D');

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["A","B"],["C","D"]]"#);
    }

    #[test]
    fn test_read_rejects_out_of_bounds() {
        let grid = Grid::blank(3);
        let placement = Placement {
            orientation: Orientation::Vertical,
            row: 1,
            col: 0,
            len: 3,
        };
        assert_eq!(grid.read(&placement), None);
    }
}
