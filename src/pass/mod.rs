//! Password generation.

pub mod charset;
mod config;
mod generate;
mod password;

pub use charset::CharacterClass;
pub use config::GenerationConfig;
pub use generate::{generate, generate_batch};
pub use password::Password;
