//! Interactive mode: pick a game, enter a card, export.

use std::io::{self, Write};

use anyhow::Result;
use artemis_tachi::{Config, DataSource, find_player, user_counts};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use super::export::export_to_file;
use crate::input::{RawModeGuard, read_key};
use crate::screen::{Action, App, Screen};

pub fn run(source: &dyn DataSource, config: &Config) -> Result<()> {
    let mut app = App::new(user_counts(source)?);
    let _raw = RawModeGuard::enable()?;
    let mut stdout = io::stdout();

    loop {
        render(&mut stdout, &app)?;

        match app.handle_key(read_key()?) {
            Action::None => {}
            Action::Quit => break,
            Action::Lookup { game, card } => match find_player(source, game, &card) {
                Ok(player) => {
                    debug!("Found user {} for {}", player.user_id, game);
                    app.show_player(player);
                }
                Err(e) if e.is_lookup() => app.status = Some(e.to_string()),
                Err(e) => return Err(e.into()),
            },
            Action::Export { player } => {
                app.status = Some(
                    match export_to_file(source, config, player.game, &player.user_id) {
                        Ok(path) => format!("Exported to Tachi and saved to {}", path.display()),
                        Err(e) => {
                            warn!("Export failed: {:#}", e);
                            format!("Export failed: {:#}", e)
                        }
                    },
                );
            }
        }
    }

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn render(out: &mut impl Write, app: &App) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let highlighted = match app.screen {
        Screen::GameSelection => Some(2 + app.cursor),
        _ => None,
    };
    for (index, line) in app.view().into_iter().enumerate() {
        if index == 0 {
            write!(out, "{}\r\n", line.bold())?;
        } else if Some(index) == highlighted {
            write!(out, "{}\r\n", line.cyan())?;
        } else {
            write!(out, "{}\r\n", line)?;
        }
    }
    out.flush()
}
