//! Errors raised while reading a list specification.

use thiserror::Error;

/// Errors that occur during parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A closing bracket with nothing left to close.
    #[error("Syntax Error: Unopened brackets")]
    UnopenedBracket {
        /// Byte offset of the bracket within the children section
        offset: usize,
    },

    /// Input ended while brackets were still open.
    #[error("Syntax Error: Unclosed brackets!")]
    UnclosedBracket {
        /// How many brackets were left open
        depth: usize,
    },

    /// Only raised in strict mode; otherwise bad numbers read as 0.
    #[error("Syntax Error: invalid {field} `{value}`")]
    InvalidNumber { field: NumberField, value: String },
}

/// Which positional field held a malformed number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Number,
    Length,
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberField::Number => f.write_str("number"),
            NumberField::Length => f.write_str("length"),
        }
    }
}
