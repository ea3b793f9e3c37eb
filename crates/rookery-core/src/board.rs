//! The board-query capability and a map-backed board implementing it.

use std::collections::HashMap;
use std::fmt;

use crate::coord::Coord;
use crate::error::BoardError;
use crate::piece::Piece;

/// Read-only view of board occupancy at query time.
///
/// Move generation reaches the board only through this trait, so it never
/// assumes a board size beyond what [`is_valid`](BoardQuery::is_valid)
/// encodes. The view must stay unchanged for the duration of one query; the
/// surrounding system owns that discipline.
///
/// Implementations must answer [`occupant_at`](BoardQuery::occupant_at) for
/// every coordinate `is_valid` accepts. Returning an error for an in-bounds
/// coordinate marks the board as inconsistent and fails the whole query.
pub trait BoardQuery {
    /// Whether `coord` names a square on this board.
    fn is_valid(&self, coord: Coord) -> bool;

    /// The piece occupying `coord`, or `None` for an empty square.
    fn occupant_at(&self, coord: Coord) -> Result<Option<Piece>, BoardError>;
}

/// A rectangular board backed by a coordinate map.
///
/// Squares not present in the map are empty, so the map only ever holds the
/// occupied squares. This is the concrete snapshot used by tests and the demo
/// binary; the generators themselves only see [`BoardQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    files: u8,
    ranks: u8,
    occupancy: HashMap<Coord, Piece>,
}

impl Board {
    /// Create an empty board with the given extent.
    pub fn new(files: u8, ranks: u8) -> Board {
        Board {
            files,
            ranks,
            occupancy: HashMap::new(),
        }
    }

    /// Create an empty 8×8 board.
    pub fn standard() -> Board {
        Board::new(8, 8)
    }

    /// Return the number of files.
    #[inline]
    pub fn files(&self) -> u8 {
        self.files
    }

    /// Return the number of ranks.
    #[inline]
    pub fn ranks(&self) -> u8 {
        self.ranks
    }

    /// Put `piece` on `coord`, returning whatever piece it displaced.
    ///
    /// Placing on an out-of-bounds coordinate is a programming error.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        debug_assert!(self.is_valid(coord), "placement off the board: {coord}");
        self.occupancy.insert(coord, piece)
    }

    /// Remove and return the piece on `coord`, if any.
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        self.occupancy.remove(&coord)
    }

    /// Return the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.occupancy.len()
    }
}

impl BoardQuery for Board {
    fn is_valid(&self, coord: Coord) -> bool {
        coord.file() < self.files && coord.rank() < self.ranks
    }

    fn occupant_at(&self, coord: Coord) -> Result<Option<Piece>, BoardError> {
        Ok(self.occupancy.get(&coord).copied())
    }
}

impl fmt::Display for Board {
    /// Render the board rank by rank, highest rank first, empty squares as
    /// dots. Intended for logs and test failure output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.ranks).rev() {
            for file in 0..self.files {
                let c = self
                    .occupancy
                    .get(&Coord::new(file, rank))
                    .map_or('.', |piece| piece.letter());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
