//! Knight move generation.

use crate::board::BoardQuery;
use crate::coord::Coord;
use crate::error::MoveError;

use super::{MoveGenerator, MoveSet, mover_at};

/// The eight L-shaped jump offsets as (file, rank) deltas.
const JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Leaper: eight fixed offsets, no rays and no blocking chains. Each target
/// is either on the board and not friendly-occupied (a destination) or not.
pub struct KnightMoves;

impl MoveGenerator for KnightMoves {
    fn compute_moves(
        &self,
        board: &dyn BoardQuery,
        origin: Coord,
    ) -> Result<MoveSet, MoveError> {
        let mover = mover_at(board, origin)?;
        let mut moves = MoveSet::new();

        for (dx, dy) in JUMPS {
            let candidate = match origin.translate(dx, dy) {
                Some(c) if board.is_valid(c) => c,
                _ => continue,
            };
            match board.occupant_at(candidate)? {
                None => moves.insert(candidate),
                Some(piece) if piece.side() != mover.side() => moves.insert(candidate),
                Some(_) => {}
            }
        }

        Ok(moves)
    }
}
