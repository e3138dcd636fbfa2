//! # Interactive Session
//!
//! One registry, many commands. Each input line is split into words and parsed
//! with the same clap definitions as the command line, then dispatched against
//! the shared [`AppContext`]. A failing command prints its error and the
//! session goes on; `exit`, `quit` or end of input closes it.
//!
//! On a terminal, lines come from a `rustyline` editor (history, line
//! editing); otherwise they are read plainly from stdin, which is what scripts
//! and tests use.

use super::commands::{dispatch, AppContext};
use super::setup::Cli;
use arbor::error::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, IsTerminal};
use tracing::debug;

const PROMPT: &str = "arbor> ";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    if std::io::stdin().is_terminal() {
        run_interactive(ctx)
    } else {
        run_piped(ctx)
    }
}

fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    println!(
        "{}",
        "Tree registry session. Type `help` for commands, `exit` to leave.".dimmed()
    );
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if handle_line(ctx, &line) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Bytes that are not UTF-8 are replaced; such a line fails as an unknown
/// command.
fn run_piped(ctx: &mut AppContext) -> Result<()> {
    let mut input = std::io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if handle_line(ctx, line.trim_end_matches(['\r', '\n'])) == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return Flow::Continue;
        }
    };

    match words.first().map(String::as_str) {
        None => return Flow::Continue,
        Some("exit") | Some("quit") => return Flow::Exit,
        _ => {}
    }
    debug!(?words, "session command");

    let cli = match Cli::try_parse_from(std::iter::once("arbor".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(e) => {
            // Covers --help and --version as well as real parse errors.
            let _ = e.print();
            return Flow::Continue;
        }
    };

    if let Some(command) = cli.command {
        if let Err(e) = dispatch(ctx, command) {
            eprintln!("{}", format!("Error: {}", e).red());
        }
    }
    Flow::Continue
}

/// Splits a line into words the way a POSIX shell would for simple input:
/// whitespace separates words, single quotes are literal, double quotes allow
/// `\"` and `\\`, and a backslash outside quotes escapes the next character.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err("unterminated single quote".to_string()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err("unterminated double quote".to_string()),
                        },
                        Some(c) => current.push(c),
                        None => return Err("unterminated double quote".to_string()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => current.push(c),
                    None => return Err("trailing backslash".to_string()),
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}
