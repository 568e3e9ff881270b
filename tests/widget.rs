use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use passgen::clipboard::Clipboard;
use passgen::tui::{Action, Command, Style, WidgetState, command, lines};
use passgen::{GenerationConfig, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct Recorder(Vec<String>);

impl Clipboard for Recorder {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.push(text.to_owned());
        Ok(())
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Drive the widget the way the event loop does.
fn press(
    state: &mut WidgetState,
    rng: &mut StdRng,
    clipboard: &mut Recorder,
    c: char,
    now: Instant,
) {
    match command(key(c)) {
        Some(Command::Update(action)) => state.update(action, rng),
        Some(Command::Copy) => state.copy_to(clipboard, now).unwrap(),
        Some(Command::Quit) | None => {}
    }
}

#[test]
fn configure_copy_and_theme_session() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut clipboard = Recorder::default();
    let mut state = WidgetState::new(GenerationConfig::default(), false, &mut rng);
    let start = Instant::now();

    press(&mut state, &mut rng, &mut clipboard, 's', start);
    press(&mut state, &mut rng, &mut clipboard, '+', start);
    assert_eq!(state.config().length, 13);
    assert!(state.config().include_symbols);
    assert_eq!(state.password().len(), 13);

    press(&mut state, &mut rng, &mut clipboard, 'c', start);
    assert_eq!(clipboard.0, vec![state.password().to_string()]);
    assert!(state.copied());
    let copy_line = lines(&state, "seeded")
        .into_iter()
        .find(|l| l.style == Style::CopyButton)
        .unwrap();
    assert!(copy_line.text.contains("Copied!"));

    press(&mut state, &mut rng, &mut clipboard, 't', start);
    assert!(state.is_dark_mode());

    state.tick(start + Duration::from_secs(3));
    assert!(!state.copied());
}

#[test]
fn slider_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = WidgetState::new(GenerationConfig::default(), false, &mut rng);

    for _ in 0..30 {
        state.update(Action::IncreaseLength, &mut rng);
    }
    assert_eq!(state.config().length, GenerationConfig::MAX_LENGTH);

    for _ in 0..30 {
        state.update(Action::DecreaseLength, &mut rng);
    }
    assert_eq!(state.config().length, GenerationConfig::MIN_LENGTH);
    assert_eq!(state.password().len(), GenerationConfig::MIN_LENGTH);
}
