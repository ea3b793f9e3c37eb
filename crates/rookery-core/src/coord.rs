//! Board coordinates and ray directions.

use std::fmt;

/// A square identified by its zero-based file (column) and rank (row).
///
/// Coordinates carry no bounds of their own: whether one names a real square
/// is decided by [`BoardQuery::is_valid`](crate::board::BoardQuery::is_valid),
/// so the same type serves any rectangular board up to 256×256. Coordinates
/// compare only for equality and set membership; there is deliberately no
/// ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    file: u8,
    rank: u8,
}

impl Coord {
    /// Create a coordinate from a zero-based file and rank.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Coord {
        Coord { file, rank }
    }

    /// Return the zero-based file (column).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the zero-based rank (row).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Parse an algebraic square name (e.g. "e4", "a12") into a coordinate.
    ///
    /// The file letter covers a–z; the rank number is one-based. Returns
    /// `None` for anything else.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() < 2 || !bytes[0].is_ascii_lowercase() {
            return None;
        }
        let rank: u16 = s[1..].parse().ok()?;
        if rank == 0 || rank > 256 {
            return None;
        }
        Some(Coord::new(bytes[0] - b'a', (rank - 1) as u8))
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if either component
    /// leaves the representable range.
    ///
    /// Leaving the range never wraps around; callers treat `None` exactly
    /// like an off-board square.
    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Option<Coord> {
        let file = self.file as i32 + dx;
        let rank = self.rank as i32 + dy;
        if (0..=u8::MAX as i32).contains(&file) && (0..=u8::MAX as i32).contains(&rank) {
            Some(Coord::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// The coordinate at `distance` steps along `direction`, or `None` if it
    /// leaves the representable range.
    #[inline]
    pub fn offset(self, direction: Direction, distance: u16) -> Option<Coord> {
        self.translate(
            direction.dx() as i32 * distance as i32,
            direction.dy() as i32 * distance as i32,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file < 26 {
            write!(f, "{}{}", (b'a' + self.file) as char, self.rank as u16 + 1)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({self})")
    }
}

/// A ray direction, expressed as the signs of its file and rank deltas.
///
/// During a scan, blocking state is keyed by this sign pair: zero file delta
/// with positive rank delta is one ray, zero with negative its opposite, and
/// so on. Orthogonal directions have exactly one nonzero component, diagonal
/// directions have two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const UP: Direction = Direction { dx: 0, dy: 1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: -1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };
    pub const UP_LEFT: Direction = Direction { dx: -1, dy: 1 };
    pub const UP_RIGHT: Direction = Direction { dx: 1, dy: 1 };
    pub const DOWN_LEFT: Direction = Direction { dx: -1, dy: -1 };
    pub const DOWN_RIGHT: Direction = Direction { dx: 1, dy: -1 };

    /// The four orthogonal rays, in up/down/left/right order.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT];

    /// The four diagonal rays.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// All eight rays: orthogonal followed by diagonal.
    pub const ALL: [Direction; 8] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// Return the sign of the file delta (-1, 0, or 1).
    #[inline]
    pub const fn dx(self) -> i8 {
        self.dx
    }

    /// Return the sign of the rank delta (-1, 0, or 1).
    #[inline]
    pub const fn dy(self) -> i8 {
        self.dy
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Direction};

    #[test]
    fn new_and_accessors() {
        let c = Coord::new(3, 4);
        assert_eq!(c.file(), 3);
        assert_eq!(c.rank(), 4);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Coord::from_algebraic("a1"), Some(Coord::new(0, 0)));
        assert_eq!(Coord::from_algebraic("e4"), Some(Coord::new(4, 3)));
        assert_eq!(Coord::from_algebraic("h8"), Some(Coord::new(7, 7)));
        assert_eq!(Coord::from_algebraic("a12"), Some(Coord::new(0, 11)));
        assert_eq!(format!("{}", Coord::new(4, 3)), "e4");
        assert_eq!(format!("{}", Coord::new(0, 0)), "a1");
        assert_eq!(format!("{}", Coord::new(7, 7)), "h8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Coord::from_algebraic("").is_none());
        assert!(Coord::from_algebraic("a").is_none());
        assert!(Coord::from_algebraic("A1").is_none());
        assert!(Coord::from_algebraic("a0").is_none());
        assert!(Coord::from_algebraic("a257").is_none());
        assert!(Coord::from_algebraic("1a").is_none());
    }

    #[test]
    fn translate_in_range() {
        let c = Coord::new(3, 4);
        assert_eq!(c.translate(1, -2), Some(Coord::new(4, 2)));
        assert_eq!(c.translate(0, 0), Some(c));
    }

    #[test]
    fn translate_never_wraps() {
        assert_eq!(Coord::new(0, 0).translate(-1, 0), None);
        assert_eq!(Coord::new(0, 0).translate(0, -1), None);
        assert_eq!(Coord::new(255, 255).translate(1, 0), None);
        assert_eq!(Coord::new(255, 255).translate(0, 1), None);
    }

    #[test]
    fn offset_along_direction() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(Direction::UP, 2), Some(Coord::new(3, 5)));
        assert_eq!(c.offset(Direction::LEFT, 3), Some(Coord::new(0, 3)));
        assert_eq!(c.offset(Direction::LEFT, 4), None);
        assert_eq!(c.offset(Direction::DOWN_RIGHT, 3), Some(Coord::new(6, 0)));
    }

    #[test]
    fn direction_signs() {
        for dir in Direction::ORTHOGONAL {
            assert_eq!(dir.dx().abs() + dir.dy().abs(), 1, "{dir:?} is not orthogonal");
        }
        for dir in Direction::DIAGONAL {
            assert_eq!(dir.dx().abs(), 1, "{dir:?} is not diagonal");
            assert_eq!(dir.dy().abs(), 1, "{dir:?} is not diagonal");
        }
    }

    #[test]
    fn direction_sets_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Coord::new(4, 3)), "Coord(e4)");
    }
}
