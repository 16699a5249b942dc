use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

/// What the user asked the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Activate,
    Click { y: u16 },
    ToggleReducedMotion,
    Quit,
}

impl Action {
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
                KeyCode::Char('r') => Some(Action::ToggleReducedMotion),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Action::Click { y: mouse.row }),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_map_to_actions() {
        assert_eq!(Action::from_crossterm(&key(KeyCode::Up)), Some(Action::Up));
        assert_eq!(Action::from_crossterm(&key(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(Action::from_crossterm(&key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(Action::from_crossterm(&key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(Action::from_crossterm(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_left_click_carries_row() {
        let event = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(Action::from_crossterm(&event), Some(Action::Click { y: 7 }));
    }
}
