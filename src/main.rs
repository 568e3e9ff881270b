use std::env;

use passgen::cli::{self, prompts};
use passgen::{exits, terminal};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = cli::run(args) {
        terminal::reset_terminal();
        prompts::error(&e.to_string());
        std::process::exit(1);
    }
}
