//! Core movement types: coordinates, pieces, the board-query capability, and
//! per-piece destination generation.

mod board;
mod coord;
mod error;
mod movegen;
mod piece;
mod piece_kind;
mod side;

pub use board::{Board, BoardQuery};
pub use coord::{Coord, Direction};
pub use error::{BoardError, MoveError};
pub use movegen::{
    BishopMoves, KnightMoves, MoveGenerator, MoveSet, QueenMoves, RookMoves, destinations,
};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use side::Side;
