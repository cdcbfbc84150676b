use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('r' | 'R')) => {
                Some(Command::Restart)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up.into(), Some(Command::Up))]
    #[case(KeyCode::Char('j').into(), Some(Command::Down))]
    #[case(KeyCode::Char('a').into(), Some(Command::Left))]
    #[case(KeyCode::Right.into(), Some(Command::Right))]
    #[case(KeyCode::Char('r').into(), Some(Command::Restart))]
    #[case(
        KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT),
        Some(Command::Restart)
    )]
    #[case(KeyCode::Esc.into(), Some(Command::Quit))]
    #[case(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Command::Quit)
    )]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::ALT), None)]
    #[case(KeyCode::Char('x').into(), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
