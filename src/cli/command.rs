// src/cli/command.rs
//! The one-letter command grammar of the interactive game.

use std::str::FromStr;

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// `c <n>`: top (n > 0) or bottom (n < 0) centers by average separation.
    Centers(i64),
    /// `d <low> <high>`: actors by degree.
    Degree { low: usize, high: usize },
    /// `i`: actors with infinite separation.
    Infinite,
    /// `p <name>`: path from name to the center.
    Path(String),
    /// `s <low> <high>`: actors by separation.
    Separation { low: usize, high: usize },
    /// `u <name>`: change the center.
    Universe(String),
    Help,
    Quit,
}

impl FromStr for GameCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "" => Err(CommandError::Empty),
            "c" => Ok(Self::Centers(number(first(rest, "count")?)?)),
            "d" => {
                let (low, high) = bounds(rest)?;
                Ok(Self::Degree { low, high })
            }
            "s" => {
                let (low, high) = bounds(rest)?;
                Ok(Self::Separation { low, high })
            }
            "p" => Ok(Self::Path(name(rest)?)),
            "u" => Ok(Self::Universe(name(rest)?)),
            "i" => Ok(Self::Infinite),
            "h" | "?" => Ok(Self::Help),
            "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn first<'a>(args: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    args.split_whitespace()
        .next()
        .ok_or(CommandError::MissingArgument(what))
}

fn bounds(args: &str) -> Result<(usize, usize), CommandError> {
    let mut parts = args.split_whitespace();
    let low = parts.next().ok_or(CommandError::MissingArgument("low bound"))?;
    let high = parts.next().ok_or(CommandError::MissingArgument("high bound"))?;
    Ok((number(low)?, number(high)?))
}

fn name(args: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument("name"));
    }
    Ok(args.to_string())
}

fn number<T: FromStr>(text: &str) -> Result<T, CommandError> {
    text.parse()
        .map_err(|_| CommandError::NotANumber(text.to_string()))
}
