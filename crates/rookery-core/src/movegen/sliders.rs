//! Sliding piece (rook, bishop, queen) move generation: ray casting with
//! per-direction blocking.

use crate::board::BoardQuery;
use crate::coord::{Coord, Direction};
use crate::error::MoveError;
use crate::side::Side;

use super::{MoveGenerator, MoveSet, mover_at};

/// Orthogonal slider: the full rank and file until blocked.
pub struct RookMoves;

/// Diagonal slider.
pub struct BishopMoves;

/// Rook and bishop rays combined.
pub struct QueenMoves;

impl MoveGenerator for RookMoves {
    fn compute_moves(
        &self,
        board: &dyn BoardQuery,
        origin: Coord,
    ) -> Result<MoveSet, MoveError> {
        let mover = mover_at(board, origin)?;
        slide(board, origin, mover.side(), &Direction::ORTHOGONAL)
    }
}

impl MoveGenerator for BishopMoves {
    fn compute_moves(
        &self,
        board: &dyn BoardQuery,
        origin: Coord,
    ) -> Result<MoveSet, MoveError> {
        let mover = mover_at(board, origin)?;
        slide(board, origin, mover.side(), &Direction::DIAGONAL)
    }
}

impl MoveGenerator for QueenMoves {
    fn compute_moves(
        &self,
        board: &dyn BoardQuery,
        origin: Coord,
    ) -> Result<MoveSet, MoveError> {
        let mover = mover_at(board, origin)?;
        slide(board, origin, mover.side(), &Direction::ALL)
    }
}

/// Walk every ray in `rays` outward from `origin`, collecting destinations.
///
/// The scan is distance-major: at each distance every still-open ray proposes
/// one candidate square. A ray closes when its candidate leaves the board,
/// lands on a friendly piece (candidate excluded), or lands on an enemy piece
/// (candidate included as a capture). Closed rays never reopen, and the scan
/// stops once every ray is closed.
///
/// The open/closed flags live in this call frame only, so concurrent queries
/// against the same board cannot contaminate one another.
fn slide(
    board: &dyn BoardQuery,
    origin: Coord,
    mover: Side,
    rays: &[Direction],
) -> Result<MoveSet, MoveError> {
    debug_assert!(rays.len() <= 8);
    let mut open = [true; 8];
    let mut moves = MoveSet::new();
    let mut distance: u16 = 1;

    while open[..rays.len()].contains(&true) {
        for (i, &ray) in rays.iter().enumerate() {
            if !open[i] {
                continue;
            }
            let candidate = match origin.offset(ray, distance) {
                Some(c) if board.is_valid(c) => c,
                _ => {
                    open[i] = false;
                    continue;
                }
            };
            match board.occupant_at(candidate)? {
                None => moves.insert(candidate),
                Some(piece) => {
                    if piece.side() != mover {
                        moves.insert(candidate);
                    }
                    open[i] = false;
                }
            }
        }
        distance += 1;
    }

    Ok(moves)
}
