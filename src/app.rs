use crate::board::{Board, Theme};
use crate::command::Command;
use crate::config::Config;
use crate::input::FrameInput;
use crate::pacer::Pacer;
use crate::sim::GridSimulation;
use crate::util::center_rect;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The frame loop: draws the board, gathers the keys pressed during the
/// frame, and feeds them and the periodic tick to the simulation.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    sim: GridSimulation<R>,
    pacer: Pacer,
    theme: Theme,
    cell_width: u16,
    frame_period: Duration,
    quitting: bool,
}

impl<R: Rng> App<R> {
    /// Create an app for the given configuration and start the first game
    pub(crate) fn new(config: Config, rng: R) -> App<R> {
        let mut sim = GridSimulation::with_rng(config.grid.grid(), rng);
        sim.restart();
        App {
            sim,
            pacer: Pacer::new(config.timing.frames_per_tick),
            theme: config.styles.into_theme(),
            cell_width: config.grid.cell_width,
            frame_period: config.timing.frame_period(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            let deadline = Instant::now() + self.frame_period;
            terminal.draw(|frame| self.draw(frame))?;
            let input = poll_input(deadline)?;
            self.update(&input);
        }
        Ok(())
    }

    /// Apply one frame's worth of input, ticking the simulation if this frame
    /// is due for it
    fn update(&mut self, input: &FrameInput) {
        if input.quit {
            log::info!("Quitting with score {}", self.sim.score());
            self.quitting = true;
            return;
        }
        if !self.sim.is_running() {
            if input.restart {
                self.sim.restart();
                log::debug!("Restarted; first food at {:?}", self.sim.food());
            } else {
                return;
            }
        }
        if self.pacer.frame() {
            self.sim.tick();
            if self.sim.is_won() {
                log::info!(
                    "Won after {} moves with a snake of length {}",
                    self.sim.ticks(),
                    self.sim.snake().len()
                );
            } else if !self.sim.is_running() {
                log::info!(
                    "Game ended ({:?}) after {} moves",
                    self.sim.state(),
                    self.sim.ticks()
                );
            }
        }
        if input.steer(&mut self.sim).is_some() {
            log::debug!("Heading changed to {:?}", self.sim.heading());
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let board = Board::new(&self.sim, self.theme, self.cell_width);
        let area = center_rect(frame.area(), board.size());
        frame.render_widget(&board, area);
    }
}

/// Read key presses until `deadline`
fn poll_input(deadline: Instant) -> io::Result<FrameInput> {
    let mut input = FrameInput::default();
    while poll(deadline.saturating_duration_since(Instant::now()))? {
        if let Some(cmd) = read()?
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            input.record(cmd);
        }
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::sim::{Direction, GameState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{backend::TestBackend, layout::Position};
    use std::num::NonZeroU32;

    fn new_app(frames_per_tick: u32) -> App<ChaCha12Rng> {
        let config = Config {
            timing: TimingConfig {
                frames_per_tick: NonZeroU32::new(frames_per_tick).unwrap(),
                ..TimingConfig::default()
            },
            ..Config::default()
        };
        App::new(config, ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF))
    }

    fn pressing(cmds: &[Command]) -> FrameInput {
        let mut input = FrameInput::default();
        for &cmd in cmds {
            input.record(cmd);
        }
        input
    }

    #[test]
    fn starts_running() {
        let app = new_app(10);
        assert!(app.sim.is_running());
        assert_eq!(app.sim.head(), Some(Position::new(4, 0)));
        assert!(!app.quitting);
    }

    #[test]
    fn ticks_every_nth_frame() {
        let mut app = new_app(3);
        let idle = FrameInput::default();
        app.update(&idle);
        assert_eq!(app.sim.head(), Some(Position::new(5, 0)));
        app.update(&idle);
        app.update(&idle);
        assert_eq!(app.sim.head(), Some(Position::new(5, 0)));
        app.update(&idle);
        assert_eq!(app.sim.head(), Some(Position::new(6, 0)));
    }

    #[test]
    fn steering_applies_on_next_tick() {
        let mut app = new_app(2);
        app.update(&pressing(&[Command::Down]));
        assert_eq!(app.sim.head(), Some(Position::new(5, 0)));
        assert_eq!(app.sim.heading(), Direction::Down);
        app.update(&FrameInput::default());
        app.update(&FrameInput::default());
        assert_eq!(app.sim.head(), Some(Position::new(5, 1)));
    }

    #[test]
    fn restart_ignored_while_running() {
        let mut app = new_app(1);
        app.update(&FrameInput::default());
        app.update(&pressing(&[Command::Restart]));
        assert_eq!(app.sim.head(), Some(Position::new(6, 0)));
        assert_eq!(app.sim.ticks(), 2);
    }

    #[test]
    fn restart_after_loss() {
        let mut app = new_app(1);
        app.update(&pressing(&[Command::Up]));
        app.update(&FrameInput::default());
        assert!(app.sim.is_lost());
        app.update(&pressing(&[Command::Down]));
        assert!(app.sim.is_lost());
        app.update(&pressing(&[Command::Restart]));
        assert!(app.sim.is_running());
        assert_eq!(app.sim.state(), GameState::Running);
        assert_eq!(app.sim.head(), Some(Position::new(5, 0)));
    }

    #[test]
    fn quit() {
        let mut app = new_app(1);
        app.update(&pressing(&[Command::Quit, Command::Left]));
        assert!(app.quitting);
        assert_eq!(app.sim.ticks(), 0);
    }

    #[test]
    fn draw_centers_board() {
        let app = new_app(10);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        // Board is 42x19: the border's top-left corner lands at (24, 3)
        assert_eq!(buffer[(24, 3)].symbol(), "┌");
        assert_eq!(buffer[(25, 4)].symbol(), "█");
        assert_eq!(buffer[(34, 4)].symbol(), "█");
        assert_eq!(buffer[(20, 2)].symbol(), "S");
    }
}
