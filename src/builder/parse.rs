//! Parsing sentences from text.

use std::{io::BufRead, iter::Peekable, str::FromStr};

use crate::{
    context::Context,
    db::knowledge::KnowledgeBase,
    misc::log::targets::{self},
    structures::sentence::{Connective, Sentence},
    types::err::{self, ErrorKind},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
    Name(String),
}

/// Splits text into (position, token) pairs, where the position is a character offset.
fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ErrorKind> {
    let mut tokens = Vec::default();
    let mut chars: Peekable<_> = text.chars().enumerate().peekable();

    while let Some((position, character)) = chars.next() {
        let token = match character {
            c if c.is_whitespace() => continue,

            '¬' | '~' | '!' => Token::Not,
            '∧' | '&' => Token::And,
            '∨' | '|' => Token::Or,
            '→' => Token::Implies,
            '↔' => Token::Iff,
            '(' => Token::Open,
            ')' => Token::Close,

            '-' => match chars.next() {
                Some((_, '>')) => Token::Implies,
                _ => return Err(err::ParseError::UnexpectedToken(position).into()),
            },

            '<' => match (chars.next(), chars.next()) {
                (Some((_, '-')), Some((_, '>'))) => Token::Iff,
                _ => return Err(err::ParseError::UnexpectedToken(position).into()),
            },

            c if c.is_alphanumeric() || c == '_' => {
                let mut name = String::from(c);
                while let Some((_, next)) = chars.peek() {
                    if next.is_alphanumeric() || *next == '_' {
                        name.push(*next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Name(name)
            }

            _ => return Err(err::ParseError::UnexpectedToken(position).into()),
        };

        tokens.push((position, token));
    }

    Ok(tokens)
}

/// A recursive descent parser, with a function for each level of precedence.
///
/// From loosest to tightest: ↔, →, ∨, ∧, ¬.
/// Both ↔ and → associate to the right, while a chain of ∧ (or ∨) is a single conjunction (or disjunction).
struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(usize, Token)> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Consumes the next token if it is the given token.
    fn eat(&mut self, token: &Token) -> bool {
        match self.peek() {
            Some((_, next)) if next == token => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    fn biconditional(&mut self) -> Result<Sentence, ErrorKind> {
        let left = self.implication()?;
        match self.eat(&Token::Iff) {
            true => Sentence::compose(Connective::Biconditional, vec![left, self.biconditional()?]),
            false => Ok(left),
        }
    }

    fn implication(&mut self) -> Result<Sentence, ErrorKind> {
        let antecedent = self.disjunction()?;
        match self.eat(&Token::Implies) {
            true => Sentence::compose(Connective::Implication, vec![antecedent, self.implication()?]),
            false => Ok(antecedent),
        }
    }

    fn disjunction(&mut self) -> Result<Sentence, ErrorKind> {
        let mut disjuncts = vec![self.conjunction()?];
        while self.eat(&Token::Or) {
            disjuncts.push(self.conjunction()?);
        }
        match disjuncts.len() {
            1 => Ok(disjuncts.remove(0)),
            _ => Sentence::compose(Connective::Or, disjuncts),
        }
    }

    fn conjunction(&mut self) -> Result<Sentence, ErrorKind> {
        let mut conjuncts = vec![self.unary()?];
        while self.eat(&Token::And) {
            conjuncts.push(self.unary()?);
        }
        match conjuncts.len() {
            1 => Ok(conjuncts.remove(0)),
            _ => Sentence::compose(Connective::And, conjuncts),
        }
    }

    fn unary(&mut self) -> Result<Sentence, ErrorKind> {
        match self.next() {
            None => Err(err::ParseError::UnexpectedEnd.into()),

            Some((_, Token::Not)) => Sentence::compose(Connective::Not, vec![self.unary()?]),

            Some((_, Token::Name(name))) => Ok(Sentence::symbol(name)),

            Some((open, Token::Open)) => {
                let sentence = self.biconditional()?;
                match self.next() {
                    Some((_, Token::Close)) => Ok(sentence),
                    None => Err(err::ParseError::UnbalancedParenthesis(open).into()),
                    Some((position, _)) => Err(err::ParseError::UnexpectedToken(position).into()),
                }
            }

            Some((position, _)) => Err(err::ParseError::UnexpectedToken(position).into()),
        }
    }
}

/// Parses a sentence from text.
///
/// Sentences may be written with either the glyphs used by [formula](Sentence::formula), or with ASCII alternatives:
///
/// | Connective | Glyph | Alternatives |
/// |------------|-------|--------------|
/// | Not        | ¬     | `~`, `!`     |
/// | And        | ∧     | `&`          |
/// | Or         | ∨     | `\|`         |
/// | Implies    | →     | `->`         |
/// | Iff        | ↔     | `<->`        |
///
/// Symbols are any (non-empty) sequence of alphanumeric characters and underscores.
///
/// ```rust
/// # use otter_logic::builder::parse::parse_sentence;
/// # use otter_logic::structures::sentence::Sentence;
/// let p = Sentence::symbol("p");
/// let q = Sentence::symbol("q");
///
/// assert_eq!(parse_sentence("p -> ~q"), Ok(Sentence::implies(p.clone(), !q.clone())));
/// assert_eq!(parse_sentence("(¬p) → q"), Ok(Sentence::implies(!p, q)));
/// ```
pub fn parse_sentence(text: &str) -> Result<Sentence, ErrorKind> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty.into());
    }

    let mut parser = Parser { tokens, index: 0 };
    let sentence = parser.biconditional()?;

    match parser.peek() {
        None => Ok(sentence),
        Some((position, Token::Close)) => Err(err::ParseError::UnbalancedParenthesis(*position).into()),
        Some((position, _)) => Err(err::ParseError::UnexpectedToken(*position).into()),
    }
}

impl FromStr for Sentence {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sentence(s)
    }
}

impl Context {
    /// Reads knowledge, one sentence to a line, into a knowledge base.
    ///
    /// Blank lines and lines beginning with '#' are skipped.
    ///
    /// ```rust
    /// # use otter_logic::context::Context;
    /// # use otter_logic::structures::sentence::Sentence;
    /// let mut the_context = Context::default();
    ///
    /// let text = "
    /// ## Colonel Mustard, Professor Plum, or Ms Scarlet
    /// mustard ∨ plum ∨ scarlet
    /// ¬mustard
    /// ~plum
    /// ";
    ///
    /// let knowledge = the_context.read_knowledge(text.as_bytes()).unwrap();
    /// assert_eq!(knowledge.len(), 3);
    /// assert_eq!(the_context.entails(&knowledge, &Sentence::symbol("scarlet")), Ok(true));
    /// ```
    pub fn read_knowledge(&self, mut reader: impl BufRead) -> Result<KnowledgeBase, ErrorKind> {
        let mut knowledge = KnowledgeBase::new();
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            let line = buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_sentence(line) {
                Ok(sentence) => knowledge.tell(sentence),
                Err(e) => {
                    log::warn!(target: targets::PARSE, "Failed to parse line {line_counter}: {e:?}");
                    return Err(err::ParseError::Line(line_counter).into());
                }
            }
        }

        log::info!(target: targets::PARSE, "Read {} sentences from {line_counter} lines", knowledge.len());
        Ok(knowledge)
    }
}
