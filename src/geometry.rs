/// Character-cell position, addressed row first.
///
/// Ordering is row-major (row, then column) so positions can key an ordered
/// map and be replayed top-to-bottom, left-to-right. Coordinates are signed
/// because layout math may pass through negative values transiently; final
/// output never contains one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

/// Top-left corner of every render.
pub const ORIGIN: Pos = Pos::new(0, 0);

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Displace by `dx` columns and `dy` rows.
    pub fn move_by(self, dx: i32, dy: i32) -> Self {
        Self::new(self.row + dy, self.col + dx)
    }

    pub fn move_x(self, dx: i32) -> Self {
        Self::new(self.row, self.col + dx)
    }

    pub fn move_y(self, dy: i32) -> Self {
        Self::new(self.row + dy, self.col)
    }

    /// Component-wise sum.
    pub fn add(self, other: Pos) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

/// Integer size measured in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        assert!(Pos::new(0, 9) < Pos::new(1, 0));
        assert!(Pos::new(2, 3) < Pos::new(2, 4));
        assert!(Pos::new(5, 0) == Pos::new(5, 0));
    }

    #[test]
    fn moves_compose() {
        let pos = ORIGIN.move_by(3, 2).move_x(-1).move_y(4);
        assert_eq!(pos, Pos::new(6, 2));
        assert_eq!(pos.add(Pos::new(1, 1)), Pos::new(7, 3));
    }
}
