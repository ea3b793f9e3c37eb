//! An owned piece: what it is and whose it is.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece occupying a square: a [`PieceKind`] plus its owning [`Side`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::White);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::Black);

    /// Create a piece from a kind and a side.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the owning side.
    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Parse an identifying letter into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce
    /// Black pieces.
    #[inline]
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }

    /// Return the identifying letter: uppercase for White, lowercase for
    /// Black.
    #[inline]
    pub fn letter(self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side, self.kind.letter().to_ascii_uppercase())
    }
}
