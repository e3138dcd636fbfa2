use colored::Colorize;
use std::io::IsTerminal;

mod cli;

fn main() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = cli::run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
