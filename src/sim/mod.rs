mod direction;
mod grid;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Grid;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// The snake, its food, and the rules that move them, advanced one step per
/// call to [`GridSimulation::tick()`].
///
/// A new simulation has not started yet; call
/// [`restart()`][GridSimulation::restart] to begin a game.
#[derive(Clone, Debug)]
pub(crate) struct GridSimulation<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,

    /// The cells of the snake's body, tail first and head last
    snake: VecDeque<Position>,

    /// The direction of the snake's most recent move
    heading: Direction,

    /// The direction in which the snake will move on the next tick
    next_heading: Direction,

    food: Option<Position>,
    state: GameState,

    /// Number of moves made since the last restart
    ticks: u64,

    /// Number of food items eaten since the last restart
    score: u32,
}

impl<R: Rng> GridSimulation<R> {
    pub(crate) fn with_rng(grid: Grid, rng: R) -> GridSimulation<R> {
        GridSimulation {
            rng,
            grid,
            snake: VecDeque::new(),
            heading: Direction::Right,
            next_heading: Direction::Right,
            food: None,
            state: GameState::NotStarted,
            ticks: 0,
            score: 0,
        }
    }

    /// Start a new game: a row of cells along the top edge with the head on
    /// the right, heading right, with freshly-placed food.
    pub(crate) fn restart(&mut self) {
        let length = consts::INITIAL_SNAKE_LENGTH.min(self.grid.width);
        self.snake = (0..length).map(|x| Position::new(x, 0)).collect();
        self.heading = Direction::Right;
        self.next_heading = Direction::Right;
        self.ticks = 0;
        self.score = 0;
        self.state = GameState::Running;
        if self.spawn_food().is_none() {
            self.state = GameState::Won;
        }
        log::info!(
            "New game on a {}x{} grid; food at {:?}",
            self.grid.width,
            self.grid.height,
            self.food
        );
    }

    /// Advance the snake one cell.  Hitting a wall or any part of the body
    /// other than the tail ends the game and leaves the snake where it was.
    pub(crate) fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.heading = self.next_heading;
        let Some(head) = self.head() else {
            return;
        };
        let Some(next) = self.heading.advance(head, self.grid) else {
            log::info!(
                "Snake hit the wall at {head:?} heading {:?}; score {}",
                self.heading,
                self.score
            );
            self.state = GameState::Lost;
            return;
        };
        // The tail moves out of the way this tick, so it is skipped.
        if self.snake.iter().skip(1).any(|&p| p == next) {
            log::info!("Snake ran into itself at {next:?}; score {}", self.score);
            self.state = GameState::Lost;
            return;
        }
        self.ticks += 1;
        if self.food == Some(next) {
            self.snake.push_back(next);
            self.score += 1;
            if self.spawn_food().is_none() {
                log::info!("Board is full; score {}", self.score);
                self.state = GameState::Won;
            }
        } else {
            self.snake.pop_front();
            self.snake.push_back(next);
        }
        log::trace!("Tick {}: head at {next:?}", self.ticks);
    }

    /// Place the food on a cell chosen uniformly at random from those not
    /// covered by the snake.  Returns `None`, leaving no food on the board,
    /// if the snake covers every cell.
    pub(crate) fn spawn_food(&mut self) -> Option<Position> {
        let occupied = self.snake.iter().copied().collect::<HashSet<_>>();
        self.food = self
            .grid
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng);
        log::debug!("Food placed at {:?}", self.food);
        self.food
    }
}

impl<R> GridSimulation<R> {
    /// Request that the snake move in `direction` on the next tick.
    ///
    /// The request is ignored if the game is not running or if `direction`
    /// would reverse the snake back into itself.  Returns `true` if the
    /// request was accepted; of several accepted requests between two ticks,
    /// the last one wins.
    pub(crate) fn set_heading(&mut self, direction: Direction) -> bool {
        if !self.is_running() || direction == self.heading.opposite() {
            return false;
        }
        self.next_heading = direction;
        true
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// The cells of the snake's body, tail first and head last
    pub(crate) fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub(crate) fn head(&self) -> Option<Position> {
        self.snake.back().copied()
    }

    /// The direction in which the snake will move on the next tick
    pub(crate) fn heading(&self) -> Direction {
        self.next_heading
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn is_occupied(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub(crate) fn is_food(&self, pos: Position) -> bool {
        self.food == Some(pos)
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn is_lost(&self) -> bool {
        self.state == GameState::Lost
    }

    pub(crate) fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Put the simulation into a running state with the given body (tail
    /// first), heading, and food.
    #[cfg(test)]
    pub(crate) fn arrange(
        &mut self,
        snake: &[Position],
        heading: Direction,
        food: Option<Position>,
    ) {
        self.snake = snake.iter().copied().collect();
        self.heading = heading;
        self.next_heading = heading;
        self.food = food;
        self.state = GameState::Running;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum GameState {
    /// No game has been started yet
    #[default]
    NotStarted,
    Running,
    /// The snake hit a wall or itself
    Lost,
    /// The snake covers the whole grid and there is nowhere left for food
    Won,
}
