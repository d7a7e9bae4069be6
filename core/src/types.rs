/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Flat, row-major position of a cell on the board.
pub type CellIndex = usize;

/// Points earned in a round, one per safe reveal.
pub type Score = u32;

/// Cells per side of the (only) board.
pub const BOARD_SIDE: Coord = 5;

/// Total number of cells on a board.
pub const BOARD_CELLS: usize = BOARD_SIDE as usize * BOARD_SIDE as usize;

/// Independent chance of any single cell holding a mine.
pub const MINE_PROBABILITY: f64 = 0.2;

/// How many players the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 3;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Splits a flat index into `(x, y)`, returning a value only when it is on the board.
pub const fn index_to_coords(index: CellIndex) -> Option<Coord2> {
    if index >= BOARD_CELLS {
        return None;
    }
    let side = BOARD_SIDE as usize;
    Some(((index % side) as Coord, (index / side) as Coord))
}

pub const fn coords_to_index((x, y): Coord2) -> CellIndex {
    y as usize * BOARD_SIDE as usize + x as usize
}

/// Stamp identifying one freshly generated board.
///
/// Every board the round controller allocates gets the next generation, so
/// anything holding on to an older stamp can tell the board it referred to is
/// gone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u32);

impl Generation {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
