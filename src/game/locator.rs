use crate::models::{Grid, Orientation, Placement};

/// Find the first placement at which `word` reads contiguously.
///
/// Orientations are tried in [`Orientation::ALL`] order, then start cells
/// row by row.
pub fn locate_word(grid: &Grid, word: &str) -> Option<Placement> {
    let size = grid.size();
    let len = word.chars().count();
    if len == 0 || len > size {
        return None;
    }

    Orientation::ALL.into_iter().find_map(|orientation| {
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| Placement {
                orientation,
                row,
                col,
                len,
            })
            .find(|placement| grid.read(placement).as_deref() == Some(word))
    })
}
