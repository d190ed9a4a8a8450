//! Commands a rover understands, and the symbols they are written with.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single rover instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell along the current orientation (`f`).
    Forward,
    /// Step one cell against the current orientation (`b`).
    Backward,
    /// Rotate 90 degrees counter-clockwise (`l`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`r`).
    TurnRight,
}

/// The external command alphabet.
pub const STANDARD_SYMBOLS: [(&str, Command); 4] = [
    ("f", Command::Forward),
    ("b", Command::Backward),
    ("l", Command::TurnLeft),
    ("r", Command::TurnRight),
];

impl Command {
    /// Looks up `symbol` in [`STANDARD_SYMBOLS`]. Matching is exact and case-sensitive.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        STANDARD_SYMBOLS
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|&(_, cmd)| cmd)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Forward => "f",
            Self::Backward => "b",
            Self::TurnLeft => "l",
            Self::TurnRight => "r",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| CommandError::Unrecognized(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_symbols_parse() {
        assert_eq!("f".parse(), Ok(Command::Forward));
        assert_eq!("b".parse(), Ok(Command::Backward));
        assert_eq!("l".parse(), Ok(Command::TurnLeft));
        assert_eq!("r".parse(), Ok(Command::TurnRight));
    }

    #[test]
    fn symbol_matches_table() {
        for (sym, cmd) in STANDARD_SYMBOLS {
            assert_eq!(cmd.symbol(), sym);
        }
    }

    #[test]
    fn anything_else_is_unrecognized() {
        for bad in ["F", "x", "", "ff", " f"] {
            assert_eq!(
                bad.parse::<Command>(),
                Err(CommandError::Unrecognized(bad.to_string()))
            );
        }
    }
}
