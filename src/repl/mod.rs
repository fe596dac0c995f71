//! Command language for the numeral shell
//!
//! Each line is a keyword followed by its arguments, separated by whitespace.
//! Keywords are case-insensitive; numerals are not.

use crate::arithmetic::{add, diff};
use crate::converter::{int_to_numeral, numeral_to_int};
use crate::error::{Result, RomanError};
use crate::validator::validate;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Numeral to integer
    ToInt(String),
    /// Integer to numeral
    ToRoman(u32),
    /// Validate a numeral
    Valid(String),
    /// Add two numerals
    Add(String, String),
    /// Subtract the second numeral from the first
    Diff(String, String),
    Help,
    Exit,
}

impl Command {
    /// Check if this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

fn syntax_error(message: impl Into<String>) -> RomanError {
    RomanError::SyntaxError {
        message: message.into(),
    }
}

fn expect_args(keyword: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(syntax_error(format!(
            "{} takes {} argument(s), got {}",
            keyword,
            count,
            args.len()
        )));
    }
    Ok(())
}

/// Parse one line of shell input
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let keyword = words
        .next()
        .ok_or_else(|| syntax_error("empty command"))?
        .to_ascii_uppercase();
    let args: Vec<&str> = words.collect();

    match keyword.as_str() {
        "INT" => {
            expect_args(&keyword, &args, 1)?;
            Ok(Command::ToInt(args[0].to_string()))
        }
        "ROMAN" => {
            expect_args(&keyword, &args, 1)?;
            let value = args[0]
                .parse::<u32>()
                .map_err(|_| syntax_error(format!("not a non-negative integer: {}", args[0])))?;
            Ok(Command::ToRoman(value))
        }
        "VALID" => {
            expect_args(&keyword, &args, 1)?;
            Ok(Command::Valid(args[0].to_string()))
        }
        "ADD" => {
            expect_args(&keyword, &args, 2)?;
            Ok(Command::Add(args[0].to_string(), args[1].to_string()))
        }
        "DIFF" => {
            expect_args(&keyword, &args, 2)?;
            Ok(Command::Diff(args[0].to_string(), args[1].to_string()))
        }
        "HELP" => Ok(Command::Help),
        "EXIT" | "QUIT" => Ok(Command::Exit),
        other => Err(syntax_error(format!("unknown command: {}", other))),
    }
}

/// Run a command and return the text to print
pub fn execute(command: &Command) -> Result<String> {
    match command {
        Command::ToInt(numeral) => Ok(numeral_to_int(numeral)?.to_string()),
        Command::ToRoman(value) => Ok(int_to_numeral(*value)),
        Command::Valid(numeral) => Ok(match validate(numeral) {
            Ok(()) => "valid".to_string(),
            Err(reason) => format!("invalid: {}", reason),
        }),
        Command::Add(left, right) => add(left, right),
        Command::Diff(bigger, remove) => diff(bigger, remove),
        Command::Help => Ok(help_text().to_string()),
        Command::Exit => Ok(String::new()),
    }
}

/// Usage summary for the shell
pub fn help_text() -> &'static str {
    "Commands:\n  \
     INT <numeral>        Numeral to integer\n  \
     ROMAN <n>            Integer to numeral\n  \
     VALID <numeral>      Check a numeral\n  \
     ADD <a> <b>          Add two numerals\n  \
     DIFF <big> <small>   Subtract small from big\n  \
     HELP                 Show this text\n  \
     EXIT                 Leave the shell"
}
