//! Keyboard routing per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

impl App {
    /// Route a key press to the active screen.
    ///
    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit bindings
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return true;
            }
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            _ => {}
        }

        match self.screen {
            Screen::Splash => {
                // Any other key dismisses the splash.
                self.enter_home();
                true
            }
            Screen::Home => self.handle_home_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        // While the spinner is up only the quit bindings are live.
        if self.home.loading {
            return false;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.home.move_cursor(-1);
                self.mark_dirty();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.home.move_cursor(1);
                self.mark_dirty();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_category();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.scroll_grid(-1);
                self.mark_dirty();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.scroll_grid(1);
                self.mark_dirty();
                true
            }
            KeyCode::Char('r') => {
                self.reroll_featured();
                true
            }
            _ => false,
        }
    }
}
