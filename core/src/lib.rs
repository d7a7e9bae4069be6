#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use roster::*;
pub use round::*;
pub use shell::*;
pub use store::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod roster;
mod round;
mod shell;
mod store;
mod types;

/// The 5×5 grid of one round, addressed by flat row-major [`CellIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    generation: Generation,
    cells: Array2<Cell>,
}

impl Board {
    pub fn from_mine_mask(generation: Generation, mine_mask: &[bool; BOARD_CELLS]) -> Self {
        let side = usize::from(BOARD_SIDE);
        let cells = Array2::from_shape_fn((side, side), |(x, y)| {
            Cell::new(mine_mask[coords_to_index((x as Coord, y as Coord))])
        });
        Self { generation, cells }
    }

    pub fn from_mine_indices(generation: Generation, mine_indices: &[CellIndex]) -> Result<Self> {
        let mut mine_mask = [false; BOARD_CELLS];

        for &index in mine_indices {
            let slot = mine_mask
                .get_mut(index)
                .ok_or(GameError::InvalidIndex(index))?;
            *slot = true;
        }

        Ok(Self::from_mine_mask(generation, &mine_mask))
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        index_to_coords(index).ok_or(GameError::InvalidIndex(index))
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        index_to_coords(index).map(|coords| &self.cells[coords.to_nd_index()])
    }

    /// Cells in flat index order.
    pub fn cells(&self) -> impl Iterator<Item = (CellIndex, &Cell)> {
        (0..BOARD_CELLS).map(move |index| (index, &self[index]))
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_mine()).count()
    }

    pub fn safe_cell_count(&self) -> usize {
        self.len() - self.mine_count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed()).count()
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> Result<&mut Cell> {
        let coords = self.validate_index(index)?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let coords = index_to_coords(index).expect("cell index out of bounds");
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_from_indices_places_mines_where_asked() {
        let board = Board::from_mine_indices(Generation::new(3), &[0, 7, 24]).unwrap();

        assert_eq!(board.len(), BOARD_CELLS);
        assert_eq!(board.mine_count(), 3);
        assert_eq!(board.safe_cell_count(), BOARD_CELLS - 3);
        assert!(board[0].has_mine());
        assert!(board[7].has_mine());
        assert!(board[24].has_mine());
        assert!(!board[1].has_mine());
        assert_eq!(board.generation(), Generation::new(3));
    }

    #[test]
    fn board_from_indices_rejects_out_of_range() {
        let err = Board::from_mine_indices(Generation::default(), &[25]).unwrap_err();
        assert!(matches!(err, GameError::InvalidIndex(25)));
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let board = Board::from_mine_indices(Generation::default(), &[]).unwrap();
        assert!(board.cell(24).is_some());
        assert!(board.cell(25).is_none());
        assert!(board.validate_index(100).is_err());
    }
}
