//! Password generator: letters, digits and symbols, with at least one
//! character from every selected set, uniformly shuffled.
//!
//! The generator itself is [`pass::generate`]; it takes any [`rand::Rng`],
//! so a seeded RNG gives reproducible output. Around it sit an interactive
//! terminal widget ([`tui`]) and a one-shot command line mode ([`cli`]).

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{CharacterClass, GenerationConfig, Password, generate, generate_batch};
