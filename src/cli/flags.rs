use clap::Parser;

use crate::entropy::Source;
use crate::pass::GenerationConfig;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Password generator with letters, digits and symbols",
    long_about = r#"
Generates random passwords from letters, digits and symbols.

Run without arguments to open the interactive widget: a length slider,
character set toggles, a one-key copy to clipboard and a light/dark theme.
Pass flags to print passwords directly instead.

Examples:
  passgen                  Open the widget
  passgen -l 16 -s         One 16-character password with symbols
  passgen -n 5 --no-letters
  passgen -b               Copy a password to the clipboard
  passgen -i --dark -l 20  Open the widget with these settings
"#
)]
pub struct CliFlags {
    /// Characters per password
    #[arg(
        short,
        long,
        env = "PASSGEN_LENGTH",
        default_value_t = GenerationConfig::DEFAULT_LENGTH as u8,
        value_parser = clap::value_parser!(u8).range(
            GenerationConfig::MIN_LENGTH as i64..=GenerationConfig::MAX_LENGTH as i64
        ),
    )]
    pub length: u8,

    /// Leave letters (a-z, A-Z) out
    #[arg(long)]
    pub no_letters: bool,

    /// Leave digits (0-9) out
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols (!@#$%^&* ...)
    #[arg(short, long)]
    pub symbols: bool,

    /// How many passwords to print
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress everything except the passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Draw from the operating system RNG
    #[arg(
        short,
        long,
        env = "PASSGEN_URANDOM",
        value_parser = clap::builder::FalseyValueParser::new(),
    )]
    pub urandom: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Open the interactive widget with these settings
    #[arg(short, long)]
    pub interactive: bool,

    /// Start the widget in dark mode
    #[arg(long)]
    pub dark: bool,
}

impl CliFlags {
    /// Apply flags on top of default settings.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            config: GenerationConfig {
                length: usize::from(self.length),
                include_letters: !self.no_letters,
                include_numbers: !self.no_numbers,
                include_symbols: self.symbols,
            },
            number_of_passwords: self.number as usize,
            source: if self.urandom {
                Source::Os
            } else {
                defaults.source
            },
            seed: self.seed,
            to_clipboard: self.clipboard,
            quiet: self.quiet,
            interactive: self.interactive || self.dark,
            dark_mode: self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_widget() {
        let settings = parse(&[]).unwrap().settings();
        assert_eq!(settings.config, GenerationConfig::default());
        assert_eq!(settings.number_of_passwords, 1);
        assert!(!settings.interactive);
    }

    #[test]
    fn class_flags() {
        let settings = parse(&["--no-letters", "-s", "-l", "6"]).unwrap().settings();
        let config = settings.config;
        assert_eq!(config.length, 6);
        assert!(!config.include_letters);
        assert!(config.include_numbers);
        assert!(config.include_symbols);
    }

    #[test]
    fn length_out_of_range_is_rejected() {
        assert!(parse(&["-l", "5"]).is_err());
        assert!(parse(&["-l", "21"]).is_err());
        assert!(parse(&["-l", "-3"]).is_err());
        assert!(parse(&["-l", "20"]).is_ok());
    }

    #[test]
    fn number_must_be_positive() {
        assert!(parse(&["-n", "0"]).is_err());
        assert_eq!(parse(&["-n", "3"]).unwrap().settings().number_of_passwords, 3);
    }

    #[test]
    fn output_and_source_flags() {
        let settings = parse(&["-b", "-q", "-u", "--seed", "7"]).unwrap().settings();
        assert!(settings.to_clipboard);
        assert!(settings.quiet);
        assert_eq!(settings.source, Source::Os);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn dark_implies_interactive() {
        let settings = parse(&["--dark"]).unwrap().settings();
        assert!(settings.interactive);
        assert!(settings.dark_mode);
    }
}
