//! Logger setup.

use std::env;
use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "PASSGEN_LOG";
pub const LOG_FILE_ENV: &str = "PASSGEN_LOG_FILE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cli,
    /// The widget owns the screen, so stderr logging stays off unless asked for.
    Interactive,
}

pub fn init(mode: Mode) {
    let default_filter = match mode {
        Mode::Cli => "warn",
        Mode::Interactive => "off",
    };

    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, default_filter));
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Ok(path) = env::var(LOG_FILE_ENV) {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Failed to open log file {path}: {e}"),
        }
    }

    // A second init (tests, re-entry) is harmless.
    let _ = builder.try_init();
}
