//! Widget state and its update functions.

use std::time::Instant;

use rand::Rng;

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::{self, GenerationConfig, Password};
use crate::settings::COPIED_FEEDBACK;

use super::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    IncreaseLength,
    DecreaseLength,
    SetLength(usize),
    ToggleLetters,
    ToggleNumbers,
    ToggleSymbols,
    Regenerate,
    ToggleTheme,
}

/// Everything the view needs. Mutated only through the methods below.
#[derive(Debug)]
pub struct WidgetState {
    config: GenerationConfig,
    password: Password,
    theme: Theme,
    copied: bool,
    copied_at: Option<Instant>,
    copy_error: Option<String>,
}

impl WidgetState {
    /// Build the state and generate the first password.
    pub fn new<R: Rng + ?Sized>(config: GenerationConfig, dark_mode: bool, rng: &mut R) -> Self {
        let mut config = config;
        config.set_length(config.length);
        let password = pass::generate(&config, rng);

        Self {
            config,
            password,
            theme: if dark_mode { Theme::Dark } else { Theme::Light },
            copied: false,
            copied_at: None,
            copy_error: None,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn copy_error(&self) -> Option<&str> {
        self.copy_error.as_deref()
    }

    /// Apply an action. Config changes regenerate; unchanged config does not.
    pub fn update<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) {
        let before = self.config.clone();

        match action {
            Action::IncreaseLength => self.config.set_length(self.config.length + 1),
            Action::DecreaseLength => self.config.set_length(self.config.length.saturating_sub(1)),
            Action::SetLength(len) => self.config.set_length(len),
            Action::ToggleLetters => self.config.include_letters = !self.config.include_letters,
            Action::ToggleNumbers => self.config.include_numbers = !self.config.include_numbers,
            Action::ToggleSymbols => self.config.include_symbols = !self.config.include_symbols,
            Action::Regenerate => {
                self.regenerate(rng);
                return;
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                return;
            }
        }

        if self.config != before {
            self.regenerate(rng);
        }
    }

    /// Copy the current password. An empty password is not copied.
    pub fn copy_to(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<()> {
        if self.password.is_empty() {
            return Ok(());
        }

        match clipboard.set_text(self.password.as_str()) {
            Ok(()) => {
                self.copied = true;
                self.copied_at = Some(now);
                self.copy_error = None;
                Ok(())
            }
            Err(e) => {
                self.copied = false;
                self.copied_at = None;
                self.copy_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Expire the copied feedback.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.copied_at
            && now.saturating_duration_since(at) >= COPIED_FEEDBACK
        {
            self.copied = false;
            self.copied_at = None;
        }
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.password = pass::generate(&self.config, rng);
        self.copy_error = None;
    }
}
