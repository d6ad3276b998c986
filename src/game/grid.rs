use rand::Rng;

use crate::{
    error::GridError,
    game::WordValidator,
    models::{Grid, Orientation, Placement, BLANK},
};

pub struct GridGenerator;

impl GridGenerator {
    /// Create a `size` x `size` grid with every cell blank
    pub fn create_empty_grid(size: usize) -> Result<Grid, GridError> {
        WordValidator::check_size(size)?;
        Ok(Grid::blank(size))
    }

    /// Write `word` into the grid along a random orientation and start cell.
    ///
    /// Existing letters are overwritten; there is no collision detection.
    /// The word must already be uppercase A-Z and no longer than the grid.
    pub fn place_word(
        grid: &mut Grid,
        word: &str,
        rng: &mut impl Rng,
    ) -> Result<Placement, GridError> {
        let size = grid.size();
        // A lone word is position 0 of its own list
        WordValidator::check_word(0, word, size)?;

        let len = word.len();
        let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
        let (row, col) = match orientation {
            Orientation::Horizontal => (rng.random_range(0..size), rng.random_range(0..=size - len)),
            Orientation::Vertical => (rng.random_range(0..=size - len), rng.random_range(0..size)),
            Orientation::Diagonal => (
                rng.random_range(0..=size - len),
                rng.random_range(0..=size - len),
            ),
        };

        let placement = Placement {
            orientation,
            row,
            col,
            len,
        };

        for (pos, letter) in placement.positions().zip(word.chars()) {
            grid.set(pos, letter);
        }

        Ok(placement)
    }

    /// Generate a complete puzzle: place every word in order, then fill the
    /// remaining blanks with uniformly random letters.
    ///
    /// All inputs are validated before the grid is allocated, so a rejected
    /// request never touches a grid.
    pub fn create_wordsearch_grid<S: AsRef<str>>(
        size: usize,
        words: &[S],
        rng: &mut impl Rng,
    ) -> Result<Grid, GridError> {
        WordValidator::check_size(size)?;
        for (index, word) in words.iter().enumerate() {
            WordValidator::check_word(index, word.as_ref(), size)?;
        }

        let mut grid = Self::create_empty_grid(size)?;

        for word in words {
            let placement = Self::place_word(&mut grid, word.as_ref(), rng)?;
            tracing::trace!(word = word.as_ref(), ?placement, "placed word");
        }

        Self::fill_blanks(&mut grid, rng);

        Ok(grid)
    }

    fn fill_blanks(grid: &mut Grid, rng: &mut impl Rng) {
        for cell in grid.cells_mut().filter(|c| **c == BLANK) {
            *cell = Self::random_letter(rng);
        }
    }

    fn random_letter(rng: &mut impl Rng) -> char {
        (b'A' + rng.random_range(0..26u8)) as char
    }
}
