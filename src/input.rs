use crate::command::Command;
use crate::sim::{Direction, GridSimulation};
use enum_map::EnumMap;

/// The keys newly pressed during a single frame
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameInput {
    pub(crate) directions: EnumMap<Direction, bool>,
    pub(crate) restart: bool,
    pub(crate) quit: bool,
}

impl FrameInput {
    pub(crate) fn record(&mut self, cmd: Command) {
        match cmd {
            Command::Up => self.directions[Direction::Up] = true,
            Command::Down => self.directions[Direction::Down] = true,
            Command::Left => self.directions[Direction::Left] = true,
            Command::Right => self.directions[Direction::Right] = true,
            Command::Restart => self.restart = true,
            Command::Quit => self.quit = true,
        }
    }

    /// Turn the snake according to the pressed direction keys.  Keys are
    /// tried in the order up, down, left, right, and only the first one that
    /// the simulation accepts takes effect.
    pub(crate) fn steer<R>(&self, sim: &mut GridSimulation<R>) -> Option<Direction> {
        self.directions
            .iter()
            .filter(|&(_, &pressed)| pressed)
            .map(|(d, _)| d)
            .find(|&d| sim.set_heading(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn running_sim() -> GridSimulation<ChaCha12Rng> {
        let mut sim = GridSimulation::with_rng(Grid::default(), ChaCha12Rng::seed_from_u64(0));
        sim.restart();
        sim
    }

    #[test]
    fn record() {
        let mut input = FrameInput::default();
        input.record(Command::Left);
        input.record(Command::Restart);
        assert!(input.directions[Direction::Left]);
        assert!(!input.directions[Direction::Right]);
        assert!(input.restart);
        assert!(!input.quit);
    }

    #[test]
    fn steer_nothing_pressed() {
        let mut sim = running_sim();
        assert_eq!(FrameInput::default().steer(&mut sim), None);
        assert_eq!(sim.heading(), Direction::Right);
    }

    #[test]
    fn steer_first_accepted_wins() {
        let mut sim = running_sim();
        let mut input = FrameInput::default();
        input.record(Command::Right);
        input.record(Command::Down);
        input.record(Command::Up);
        assert_eq!(input.steer(&mut sim), Some(Direction::Up));
        assert_eq!(sim.heading(), Direction::Up);
    }

    #[test]
    fn steer_skips_reversal() {
        let mut sim = running_sim();
        let mut input = FrameInput::default();
        input.record(Command::Left);
        input.record(Command::Down);
        assert_eq!(input.steer(&mut sim), Some(Direction::Down));
        assert_eq!(sim.heading(), Direction::Down);
    }

    #[test]
    fn steer_only_reversal() {
        let mut sim = running_sim();
        let mut input = FrameInput::default();
        input.record(Command::Left);
        assert_eq!(input.steer(&mut sim), None);
        assert_eq!(sim.heading(), Direction::Right);
    }
}
