//! Process settings: generation config plus how and where to output.

use std::time::Duration;

use crate::entropy::Source;
use crate::pass::GenerationConfig;

/// How long the widget shows "Copied!" after a copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: GenerationConfig,
    pub number_of_passwords: usize,
    pub source: Source,
    pub seed: Option<u64>,
    pub to_clipboard: bool,
    pub quiet: bool,
    pub interactive: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
            number_of_passwords: 1,
            source: Source::Thread,
            seed: None,
            to_clipboard: false,
            quiet: false,
            interactive: false,
            dark_mode: false,
        }
    }
}
