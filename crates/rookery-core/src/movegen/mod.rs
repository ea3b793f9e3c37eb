//! Destination-set generation, one generator per piece kind.

mod knights;
mod sliders;

use std::collections::HashSet;
use std::collections::hash_set;

use tracing::debug;

use crate::board::BoardQuery;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub use knights::KnightMoves;
pub use sliders::{BishopMoves, QueenMoves, RookMoves};

/// The destination squares produced by one move query.
///
/// Destinations are unique and unordered; the origin square is never among
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    destinations: HashSet<Coord>,
}

impl MoveSet {
    /// Create an empty set.
    pub fn new() -> MoveSet {
        MoveSet {
            destinations: HashSet::new(),
        }
    }

    /// Add a destination. Re-adding an existing destination is a no-op.
    #[inline]
    pub(crate) fn insert(&mut self, coord: Coord) {
        self.destinations.insert(coord);
    }

    /// Whether `coord` is among the destinations.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.destinations.contains(&coord)
    }

    /// Return the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Return `true` if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterate over the destinations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.destinations.iter().copied()
    }
}

impl FromIterator<Coord> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> MoveSet {
        MoveSet {
            destinations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = Coord;
    type IntoIter = std::iter::Copied<hash_set::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter().copied()
    }
}

/// Compute the legal destinations of a single piece.
///
/// The piece on `origin` is the mover; its owning side decides which occupied
/// squares block and which are captures. Implementations are pure queries:
/// the board is read through [`BoardQuery`] and never changed, and no state
/// survives the call.
pub trait MoveGenerator {
    /// All squares the piece on `origin` may move to on `board`.
    ///
    /// Fails with [`MoveError::VacantOrigin`] when `origin` is empty and with
    /// [`MoveError::InconsistentBoard`] when the board cannot answer an
    /// occupancy query for an in-bounds square.
    fn compute_moves(
        &self,
        board: &dyn BoardQuery,
        origin: Coord,
    ) -> Result<MoveSet, MoveError>;
}

impl PieceKind {
    /// The move generator implementing this kind's movement rule.
    pub fn generator(self) -> &'static dyn MoveGenerator {
        match self {
            PieceKind::Rook => &RookMoves,
            PieceKind::Bishop => &BishopMoves,
            PieceKind::Knight => &KnightMoves,
            PieceKind::Queen => &QueenMoves,
        }
    }
}

/// Resolve the piece on `origin` and compute its destinations.
pub fn destinations(board: &dyn BoardQuery, origin: Coord) -> Result<MoveSet, MoveError> {
    let piece = mover_at(board, origin)?;
    debug!(%origin, %piece, "computing destinations");
    piece.kind().generator().compute_moves(board, origin)
}

/// Fetch the mover on `origin`, rejecting vacant origins.
pub(crate) fn mover_at(board: &dyn BoardQuery, origin: Coord) -> Result<Piece, MoveError> {
    board
        .occupant_at(origin)?
        .ok_or(MoveError::VacantOrigin { origin })
}

#[cfg(test)]
mod tests {
    use super::{MoveSet, destinations};
    use crate::board::{Board, BoardQuery};
    use crate::coord::Coord;
    use crate::error::{BoardError, MoveError};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;

    fn coord(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    /// Reports every coordinate valid but refuses to answer occupancy for
    /// anything except the origin.
    struct UnansweringBoard {
        origin: Coord,
    }

    impl BoardQuery for UnansweringBoard {
        fn is_valid(&self, coord: Coord) -> bool {
            coord.file() < 8 && coord.rank() < 8
        }

        fn occupant_at(&self, coord: Coord) -> Result<Option<Piece>, BoardError> {
            if coord == self.origin {
                Ok(Some(Piece::WHITE_ROOK))
            } else {
                Err(BoardError::MissingSquare { coord })
            }
        }
    }

    #[test]
    fn move_set_dedups_and_answers_contains() {
        let mut set = MoveSet::new();
        assert!(set.is_empty());
        set.insert(coord("a1"));
        set.insert(coord("a1"));
        set.insert(coord("b2"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(coord("a1")));
        assert!(!set.contains(coord("c3")));
    }

    #[test]
    fn move_set_from_iterator() {
        let set: MoveSet = [coord("a1"), coord("b2"), coord("a1")].into_iter().collect();
        assert_eq!(set.len(), 2);
        let roundtrip: MoveSet = set.iter().collect();
        assert_eq!(roundtrip, set);
    }

    #[test]
    fn vacant_origin_is_an_error() {
        let board = Board::standard();
        let origin = coord("d4");
        assert_eq!(
            destinations(&board, origin),
            Err(MoveError::VacantOrigin { origin })
        );
    }

    #[test]
    fn unanswerable_board_is_an_error() {
        let origin = coord("d4");
        let board = UnansweringBoard { origin };
        match destinations(&board, origin) {
            Err(MoveError::InconsistentBoard { .. }) => {}
            other => panic!("expected InconsistentBoard, got {other:?}"),
        }
    }

    #[test]
    fn dispatch_follows_piece_kind() {
        let mut board = Board::standard();
        let origin = coord("d4");

        board.place(origin, Piece::WHITE_ROOK);
        let rook = destinations(&board, origin).unwrap();
        assert!(rook.contains(coord("d8")));
        assert!(!rook.contains(coord("e5")));

        board.place(origin, Piece::WHITE_BISHOP);
        let bishop = destinations(&board, origin).unwrap();
        assert!(bishop.contains(coord("h8")));
        assert!(!bishop.contains(coord("d8")));

        board.place(origin, Piece::WHITE_KNIGHT);
        let knight = destinations(&board, origin).unwrap();
        assert!(knight.contains(coord("e6")));
        assert_eq!(knight.len(), 8);

        board.place(origin, Piece::WHITE_QUEEN);
        let queen = destinations(&board, origin).unwrap();
        assert!(queen.contains(coord("d8")));
        assert!(queen.contains(coord("h8")));
    }

    #[test]
    fn no_kind_ever_returns_its_origin() {
        let origin = coord("d4");
        for kind in PieceKind::ALL {
            let mut board = Board::standard();
            board.place(origin, Piece::new(kind, Side::White));
            let moves = destinations(&board, origin).unwrap();
            assert!(!moves.contains(origin), "{kind} returned its own origin");
        }
    }

    #[test]
    fn repeated_queries_agree() {
        // Blocking state is call-local, so a second query over the same board
        // must reproduce the first result exactly.
        let mut board = Board::standard();
        let origin = coord("a1");
        board.place(origin, Piece::WHITE_ROOK);
        board.place(coord("a4"), Piece::BLACK_KNIGHT);
        let first = destinations(&board, origin).unwrap();
        let second = destinations(&board, origin).unwrap();
        assert_eq!(first, second);
    }
}
