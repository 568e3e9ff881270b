//! Interactive password generator widget.

mod keys;
mod state;
mod theme;
mod view;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

pub use keys::{Command, command};
pub use state::{Action, WidgetState};
pub use theme::{Style, Theme};
pub use view::{Line, draw, lines, slider};

use crate::clipboard::SystemClipboard;
use crate::entropy;
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::ScreenGuard;

/// Poll interval; also how often the copied feedback is re-checked.
const TICK: Duration = Duration::from_millis(250);

/// Run the widget until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let mut rng = entropy::rng(settings.source, settings.seed);
    let source = entropy::source_name(settings.source, settings.seed);
    let mut clipboard = SystemClipboard::new();
    let mut state = WidgetState::new(settings.config.clone(), settings.dark_mode, &mut rng);

    log::info!("widget started ({source})");

    let mut guard = ScreenGuard::enter()?;
    let mut out = io::stdout();
    let mut dirty = true;

    loop {
        if dirty {
            draw(&mut out, &state, source)?;
            dirty = false;
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => match command(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Copy) => {
                        if let Err(e) = state.copy_to(&mut clipboard, Instant::now()) {
                            log::warn!("copy failed: {e}");
                        }
                        dirty = true;
                    }
                    Some(Command::Update(action)) => {
                        state.update(action, &mut rng);
                        dirty = true;
                    }
                    None => {}
                },
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        let was_copied = state.copied();
        state.tick(Instant::now());
        dirty |= was_copied != state.copied();
    }

    guard.leave();
    log::info!("widget closed");
    Ok(())
}
