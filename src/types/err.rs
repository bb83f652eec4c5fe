//! Error types used in the library.
//!
//! - Evaluation errors arise only when a sentence is evaluated directly on a valuation which misses some symbol.
//!   The model checker always builds a full valuation, and so never sees these.
//! - Construction errors are the runtime residue of the requirement that connectives are only ever applied to sentences.
//!   Most of this requirement is met by the types of the constructors, what remains is arity and appending to a conjunction.
//! - Parse errors arise when reading sentences from text.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{sentence::Connective, symbol::Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Construction(ConstructionError),
    Evaluation(EvaluationError),
    Parse(ParseError),

    /// Some thread of a split examination failed to finish.
    Worker,
}

/// Noted errors when composing sentences.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    /// A connective was given a count of operands it does not take.
    Arity {
        connective: Connective,
        found: usize,
    },

    /// A conjunct was added to a sentence which is not a conjunction.
    NotAConjunction,
}

impl From<ConstructionError> for ErrorKind {
    fn from(e: ConstructionError) -> Self {
        ErrorKind::Construction(e)
    }
}

/// Noted errors during evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The valuation has no value for the symbol.
    MissingAssignment(Symbol),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Errors during parsing.
///
/// Positions are character offsets into the text being parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some sentence was required.
    Empty,

    /// Some token which cannot appear at the position.
    UnexpectedToken(usize),

    /// The text ended while a sentence was still expected.
    UnexpectedEnd,

    /// An opening parenthesis without a close, or the reverse.
    UnbalancedParenthesis(usize),

    /// Some issue at a specific line of input.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
