use super::grid::Grid;
use enum_map::Enum;
use ratatui::layout::Position;

/// A direction in which the snake can travel.  `y` grows downwards.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The `(dx, dy)` step taken by one move in this direction
    pub(crate) fn offset(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step would leave `grid`.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let (dx, dy) = self.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Position { x, y };
        grid.contains(next).then_some(next)
    }
}
