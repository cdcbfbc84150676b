use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The bounded playing field, measured in cells.  The top-left cell is at
/// `(0, 0)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT)
    }
}
