use alloc::string::String;
use core::num::Saturating;

use crate::*;

/// Receipt for a safe reveal, redeemed when the cell's decoration arrives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecorationTicket {
    generation: Generation,
    index: CellIndex,
}

impl DecorationTicket {
    pub const fn generation(self) -> Generation {
        self.generation
    }

    pub const fn index(self) -> CellIndex {
        self.index
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    AlreadyTerminal,
    AlreadyRevealed,
    Mine,
    Safe(DecorationTicket),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            AlreadyTerminal | AlreadyRevealed => false,
            Mine | Safe(_) => true,
        }
    }

    pub const fn ticket(self) -> Option<DecorationTicket> {
        match self {
            Self::Safe(ticket) => Some(ticket),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecorationOutcome {
    Applied,
    /// The ticket belongs to a board that has since been replaced.
    Stale,
    /// Same board, but the cell cannot take a decoration (already has one).
    Ignored,
}

/// Applies reveals to a single board and keeps the round's score.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    board: Board,
    score: Saturating<Score>,
    finished: bool,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: Saturating(0),
            finished: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> Generation {
        self.board.generation()
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// All safe cells have been revealed.
    pub fn is_cleared(&self) -> bool {
        self.board
            .cells()
            .all(|(_, cell)| cell.has_mine() || cell.is_revealed())
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        self.board.validate_index(index)?;

        if self.finished {
            return Ok(AlreadyTerminal);
        }

        let generation = self.board.generation();
        let cell = self.board.cell_mut(index)?;
        if !cell.reveal() {
            return Ok(AlreadyRevealed);
        }

        if cell.has_mine() {
            self.finished = true;
            log::debug!("board {}: mine at {}", generation.get(), index);
            Ok(Mine)
        } else {
            self.score += 1;
            Ok(Safe(DecorationTicket { generation, index }))
        }
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }

    pub fn attach_decoration(
        &mut self,
        ticket: DecorationTicket,
        url: String,
    ) -> DecorationOutcome {
        if ticket.generation != self.board.generation() {
            log::debug!(
                "dropping decoration for board {}, current board is {}",
                ticket.generation.get(),
                self.board.generation().get()
            );
            return DecorationOutcome::Stale;
        }

        match self.board.cell_mut(ticket.index) {
            Ok(cell) => {
                if cell.decorate(url) {
                    DecorationOutcome::Applied
                } else {
                    DecorationOutcome::Ignored
                }
            }
            Err(_) => DecorationOutcome::Ignored,
        }
    }
}
