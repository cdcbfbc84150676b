use crate::consts;
use crate::sim::GridSimulation;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Styles used for the tiles of the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background: Style,
    pub(crate) snake: Style,
    pub(crate) food: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            background: consts::BACKGROUND_STYLE,
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
        }
    }
}

/// A widget drawing the current state of a simulation: a score bar, the grid
/// with one tile per cell inside a border, and a message line underneath.
#[derive(Debug)]
pub(crate) struct Board<'a, R> {
    sim: &'a GridSimulation<R>,
    theme: Theme,
    /// Number of terminal columns per tile
    cell_width: u16,
}

impl<'a, R> Board<'a, R> {
    pub(crate) fn new(sim: &'a GridSimulation<R>, theme: Theme, cell_width: u16) -> Self {
        Board {
            sim,
            theme,
            cell_width,
        }
    }

    /// The smallest area in which the whole board can be drawn
    pub(crate) fn size(&self) -> Size {
        let field = self.field_size();
        Size {
            width: field.width.max(consts::MESSAGE_WIDTH),
            height: field.height.saturating_add(2),
        }
    }

    /// Size of the bordered grid
    fn field_size(&self) -> Size {
        let grid = self.sim.grid();
        Size {
            width: grid.width.saturating_mul(self.cell_width).saturating_add(2),
            height: grid.height.saturating_add(2),
        }
    }

    fn message(&self) -> Option<Line<'static>> {
        if self.sim.is_running() {
            return None;
        }
        let (before, after) = if self.sim.is_lost() {
            (" You've lost :( Press ", " to restart")
        } else if self.sim.is_won() {
            (" Board full, you win! Press ", " to restart")
        } else {
            (" Press ", " to start")
        };
        Some(Line::from_iter([
            Span::raw(before),
            Span::styled("R", consts::KEY_STYLE),
            Span::raw(after),
        ]))
    }
}

impl<R> Widget for &Board<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, field_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(" Score: {}", self.sim.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(field_area, self.field_size());
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            cell_width: self.cell_width,
            buf,
        };
        for pos in self.sim.grid().positions() {
            canvas.draw_tile(pos, consts::BACKGROUND_SYMBOL, self.theme.background);
            if self.sim.is_occupied(pos) {
                canvas.draw_tile(pos, consts::SNAKE_SYMBOL, self.theme.snake);
            }
            if self.sim.is_food(pos) {
                canvas.draw_tile(pos, consts::FOOD_SYMBOL, self.theme.food);
            }
        }

        if let Some(msg) = self.message() {
            msg.render(msg_area, buf);
        }
    }
}

/// The drawing surface for the grid.  Each grid cell covers `cell_width`
/// terminal columns; nothing is drawn outside `area`.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_width: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_tile(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(left) = pos
            .x
            .checked_mul(self.cell_width)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for i in 0..self.cell_width {
            let Some(x) = left.checked_add(i) else {
                return;
            };
            if !self.area.contains(Position { x, y }) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
