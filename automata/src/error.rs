//! Error type for the CLI driver (§10.2, §10.4). The core automaton algebra
//! has no fallible entry point — every `Automaton` method returns a plain
//! value — so this type exists only at the one real system boundary the
//! crate has: turning a command-line argument into a word.

use thiserror::Error;

/// A problem with a word supplied on the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordArgError {
    /// The argument contains the reserved epsilon byte (`#`) literally,
    /// which would be indistinguishable from a structural epsilon edge in
    /// the debug dump.
    #[error("word argument contains the reserved epsilon byte '#' at position {position}")]
    ContainsEpsilon { position: usize },
}

/// Converts a command-line argument into a word (byte sequence), rejecting
/// literal occurrences of the reserved epsilon byte.
pub fn parse_word(argument: &str) -> Result<Vec<u8>, WordArgError> {
    if let Some(position) = argument.bytes().position(|b| b == crate::containers::EPSILON) {
        return Err(WordArgError::ContainsEpsilon { position });
    }
    Ok(argument.as_bytes().to_vec())
}
