/// A cell of the snake's playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring cell one step towards `direction`.
    #[must_use]
    pub const fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` of one step; `y` grows downwards.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_cancels_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_stepped() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.stepped(Direction::Up), Position::new(3, 2));
        assert_eq!(pos.stepped(Direction::Down), Position::new(3, 4));
        assert_eq!(pos.stepped(Direction::Left), Position::new(2, 3));
        assert_eq!(pos.stepped(Direction::Right), Position::new(4, 3));
    }
}
