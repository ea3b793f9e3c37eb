//! Piece kinds covered by the move generators.

use std::fmt;

/// The kind of a piece, without ownership information.
///
/// Only the movers whose rules this library implements appear here: the three
/// sliders and the knight. Pawn and king movement depends on game-state
/// context (push history, castling rights, check exposure) owned by the
/// surrounding system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Bishop,
    Knight,
    Queen,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 4;

    /// All piece kinds.
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
    ];

    /// Return the identifying letter for this kind (lowercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Queen => 'q',
        }
    }

    /// Parse an identifying letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn letter_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert_eq!(PieceKind::from_letter(c), Some(kind));
            assert_eq!(PieceKind::from_letter(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_letter_invalid() {
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::from_letter('1'), None);
        assert_eq!(PieceKind::from_letter(' '), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Rook), "r");
        assert_eq!(format!("{}", PieceKind::Knight), "n");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(PieceKind::COUNT, 4);
        assert_eq!(PieceKind::ALL.len(), PieceKind::COUNT);
    }
}
