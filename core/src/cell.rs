use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Canonical state of one board cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    revealed: bool,
    decoration: Option<String>,
}

impl Cell {
    pub const fn new(has_mine: bool) -> Self {
        Self {
            has_mine,
            revealed: false,
            decoration: None,
        }
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn decoration(&self) -> Option<&str> {
        self.decoration.as_deref()
    }

    /// Returns `false` if the cell was already revealed.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }

    /// Only a revealed, safe, undecorated cell accepts a decoration.
    pub(crate) fn decorate(&mut self, url: String) -> bool {
        if self.has_mine || !self.revealed || self.decoration.is_some() {
            return false;
        }
        self.decoration = Some(url);
        true
    }
}
