//! Assorted constants & hard-coded defaults
use ratatui::style::{Color, Modifier, Style};

/// Default number of cells in each row of the grid
pub(crate) const GRID_WIDTH: u16 = 15;

/// Default number of cells in each column of the grid
pub(crate) const GRID_HEIGHT: u16 = 15;

/// Default number of terminal columns used to draw one grid cell.  Terminal
/// cells are about twice as tall as they are wide, so two columns make a
/// roughly square tile.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Default time between frames, in milliseconds (about 60 frames per second)
pub(crate) const FRAME_PERIOD_MS: u64 = 16;

/// Default number of frames between movements of the snake
pub(crate) const FRAMES_PER_TICK: u32 = 10;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 5;

/// Minimum width reserved for the status and message lines
pub(crate) const MESSAGE_WIDTH: u16 = 42;

/// Glyph for empty cells of the grid
pub(crate) const BACKGROUND_SYMBOL: char = '·';

/// Glyph for cells covered by the snake
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for empty cells of the grid
pub(crate) const BACKGROUND_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
