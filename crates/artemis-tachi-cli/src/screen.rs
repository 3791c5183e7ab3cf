//! Interactive screen state.
//!
//! Key handling is pure: it updates the screen and returns an [`Action`] for
//! the runner to perform against the database.

use artemis_tachi::{Game, Player};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maximum length of an Aime access code entry
pub const CARD_INPUT_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    GameSelection,
    CardInput { game: Game, input: String },
    UserDisplay { player: Player },
}

/// Work requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Lookup { game: Game, card: String },
    Export { player: Player },
}

#[derive(Debug, Clone)]
pub struct App {
    pub screen: Screen,
    /// Highlighted entry in the game list
    pub cursor: usize,
    /// Player counts shown next to each game
    pub counts: Vec<(Game, u64)>,
    /// Result of the last action, cleared on navigation
    pub status: Option<String>,
}

impl App {
    pub fn new(counts: Vec<(Game, u64)>) -> Self {
        Self {
            screen: Screen::GameSelection,
            cursor: 0,
            counts,
            status: None,
        }
    }

    pub fn selected_game(&self) -> Game {
        Game::ALL[self.cursor.min(Game::ALL.len() - 1)]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match &mut self.screen {
            Screen::GameSelection => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.cursor = (self.cursor + 1).min(Game::ALL.len() - 1);
                    Action::None
                }
                KeyCode::Enter => {
                    self.screen = Screen::CardInput {
                        game: self.selected_game(),
                        input: String::new(),
                    };
                    self.status = None;
                    Action::None
                }
                _ => Action::None,
            },
            Screen::CardInput { game, input } => match key.code {
                KeyCode::Esc => {
                    self.back();
                    Action::None
                }
                KeyCode::Enter if !input.trim().is_empty() => Action::Lookup {
                    game: *game,
                    card: input.trim().to_string(),
                },
                KeyCode::Backspace => {
                    input.pop();
                    Action::None
                }
                KeyCode::Char(c) if !c.is_control() && input.chars().count() < CARD_INPUT_LIMIT => {
                    input.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            Screen::UserDisplay { player } => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
                KeyCode::Char('e') | KeyCode::Char('E') => Action::Export {
                    player: player.clone(),
                },
                KeyCode::Esc => {
                    self.back();
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    /// Show the player found for a lookup
    pub fn show_player(&mut self, player: Player) {
        self.screen = Screen::UserDisplay { player };
        self.status = None;
    }

    /// Return to the game list, dropping any entered card or player
    pub fn back(&mut self) {
        self.screen = Screen::GameSelection;
        self.status = None;
    }

    /// Lines to draw for the current screen
    pub fn view(&self) -> Vec<String> {
        let mut lines = match &self.screen {
            Screen::GameSelection => {
                let mut lines = vec!["Select a Game".to_string(), String::new()];
                for (index, game) in Game::ALL.iter().enumerate() {
                    let count = self
                        .counts
                        .iter()
                        .find(|(g, _)| g == game)
                        .map_or(0, |(_, count)| *count);
                    let marker = if index == self.cursor { ">" } else { " " };
                    lines.push(format!(" {} {} ({} users)", marker, game, count));
                }
                lines.push(String::new());
                lines.push("Press Enter to select a game, q to quit.".to_string());
                lines
            }
            Screen::CardInput { game, input } => vec![
                format!("Selected Game: {}", game),
                format!("Enter Aime Card ID: {}", input),
                "Press Enter to continue, Esc to go back.".to_string(),
            ],
            Screen::UserDisplay { player } => vec![
                format!("Selected Game: {}", player.game),
                format!("User ID: {}", player.user_id),
                format!("UserName: {}", player.name),
                "Press 'e' to export to Tachi, Esc to go back.".to_string(),
            ],
        };

        if let Some(status) = &self.status {
            lines.push(String::new());
            lines.push(status.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn player() -> Player {
        Player {
            game: Game::Ongeki,
            user_id: "1".into(),
            name: "GEKI".into(),
        }
    }

    #[test]
    fn test_game_selection_navigation() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_game(), Game::Chunithm);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_game(), Game::Ongeki);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected_game(), Game::MaiMai);
    }

    #[test]
    fn test_select_game_opens_card_input() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
        assert_eq!(
            app.screen,
            Screen::CardInput {
                game: Game::Ongeki,
                input: String::new()
            }
        );
    }

    #[test]
    fn test_card_input_submit() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);

        type_text(&mut app, "0123x");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Action::Lookup {
                game: Game::Chunithm,
                card: "0123".into()
            }
        );
    }

    #[test]
    fn test_card_input_q_is_text() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::None);
        assert!(matches!(app.screen, Screen::CardInput { ref input, .. } if input == "q"));
    }

    #[test]
    fn test_card_input_limit() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, &"9".repeat(CARD_INPUT_LIMIT + 8));
        match &app.screen {
            Screen::CardInput { input, .. } => assert_eq!(input.len(), CARD_INPUT_LIMIT),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_escape_returns_to_game_selection() {
        let mut app = App::new(Vec::new());
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "123");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::GameSelection);

        app.show_player(player());
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::GameSelection);
    }

    #[test]
    fn test_user_display_export() {
        let mut app = App::new(Vec::new());
        app.show_player(player());
        assert_eq!(
            app.handle_key(key(KeyCode::Char('e'))),
            Action::Export { player: player() }
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Vec::new());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);

        app.handle_key(key(KeyCode::Enter));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_view_shows_counts_and_cursor() {
        let app = App::new(vec![(Game::Chunithm, 12), (Game::Ongeki, 3)]);
        let view = app.view();
        assert_eq!(view[2], " > Chunithm (12 users)");
        assert_eq!(view[3], "   Ongeki (3 users)");
        assert_eq!(view[4], "   MaiMai (0 users)");
    }

    #[test]
    fn test_view_status_line() {
        let mut app = App::new(Vec::new());
        app.show_player(player());
        app.status = Some("Exported".into());
        let view = app.view();
        assert_eq!(view[2], "UserName: GEKI");
        assert_eq!(view.last().unwrap(), "Exported");
    }
}
