//! CLI context - bundles settings, flags, and output targets.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use zeroize::Zeroizing;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::entropy;
use crate::error::Result;
use crate::logging::{self, Mode};
use crate::pass::{self, Password};
use crate::settings::Settings;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = flags.settings();
        Self { settings, flags }
    }

    /// Parse a full argument list. A bare invocation opens the widget with
    /// the defaults and any environment overrides.
    pub fn from_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let bare = args.len() <= 1;
        let mut context = Self::new(CliFlags::try_parse_from(args)?);
        if bare {
            context.settings.interactive = true;
        }
        Ok(context)
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.settings.quiet);

        if self.settings.interactive {
            logging::init(Mode::Interactive);
            return tui::run(&self.settings);
        }

        logging::init(Mode::Cli);
        log::debug!("cli flags: {:?}", self.flags);

        let passwords = self.generate();
        if passwords.is_empty() {
            prompts::no_character_sets();
            return Ok(());
        }

        if self.settings.to_clipboard {
            match SystemClipboard::open() {
                Ok(mut clipboard) => return copy_output(&mut clipboard, &passwords),
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        write_output(&mut stdout.lock(), &passwords)?;
        Ok(())
    }

    /// Empty when no character set is enabled.
    pub fn generate(&self) -> Vec<Password> {
        if !self.settings.config.has_any_class() {
            return Vec::new();
        }
        let mut rng = entropy::rng(self.settings.source, self.settings.seed);
        pass::generate_batch(
            &self.settings.config,
            self.settings.number_of_passwords,
            &mut rng,
        )
    }
}

/// One password per line.
pub fn write_output<W: Write>(out: &mut W, passwords: &[Password]) -> std::io::Result<()> {
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// All passwords, newline separated, as one clipboard entry.
pub fn copy_output(clipboard: &mut dyn Clipboard, passwords: &[Password]) -> Result<()> {
    let joined = Zeroizing::new(
        passwords
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    );

    match clipboard.set_text(&joined) {
        Ok(()) => {
            prompts::clipboard_copied(passwords.len());
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            Err(e)
        }
    }
}
