/*!
Sentences of propositional logic.

A sentence is either a [symbol](Symbol), or some connective applied to sentences:

| Variant         | Reading    | True on a valuation 𝐯 when                      |
|-----------------|------------|-------------------------------------------------|
| `Symbol(p)`     | p          | 𝐯(p) is true                                    |
| `Not(a)`        | ¬a         | a is false                                      |
| `And(as)`       | a₁ ∧ … ∧ aₙ | every aᵢ is true (and so always, if n = 0)      |
| `Or(as)`        | a₁ ∨ … ∨ aₙ | some aᵢ is true (and so never, if n = 0)        |
| `Implication`   | a → b      | a is false or b is true                         |
| `Biconditional` | a ↔ b      | a and b have the same value                     |

Each sentence owns its operands, and so a sentence is a tree.
Evaluation never mutates a sentence, and aside from [add](Sentence::add) on a conjunction, nothing mutates a sentence after construction.

# Construction

Sentences may be built through the variants directly, through the constructors on [Sentence], or through the `!`, `&`, and `|` operators:

```rust
# use otter_logic::structures::sentence::Sentence;
let rain = Sentence::symbol("rain");
let hagrid = Sentence::symbol("hagrid");

let sentence = Sentence::implies(!rain.clone(), hagrid.clone());
assert_eq!(sentence.formula(), "(¬rain) → hagrid");

let sentence = rain & !hagrid;
assert_eq!(sentence.formula(), "rain ∧ (¬hagrid)");
```

As operands are typed as sentences, a connective cannot be applied to something which is not a sentence.
Where the shape of a sentence is only known at runtime [compose](Sentence::compose) checks the count of operands against the connective.

# Knowledge as a conjunction

A conjunction may be grown through [add](Sentence::add), and so may be used as a knowledge base.
This is the one exception to the immutability of sentences, see [KnowledgeBase](crate::db::knowledge::KnowledgeBase) for a dedicated alternative.
*/

mod formula;
pub use formula::parenthesize;

use std::collections::HashSet;

use crate::{
    structures::{symbol::Symbol, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// A sentence of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentence {
    Symbol(Symbol),
    Not(Box<Sentence>),
    And(Vec<Sentence>),
    Or(Vec<Sentence>),
    Implication(Box<Sentence>, Box<Sentence>),
    Biconditional(Box<Sentence>, Box<Sentence>),
}

/// The connectives, without operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Implication,
    Biconditional,
}

impl Connective {
    /// The glyph used when writing the connective in a formula.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implication => "→",
            Self::Biconditional => "↔",
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl Sentence {
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Sentence::Symbol(Symbol::new(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Sentence) -> Self {
        Sentence::Not(Box::new(operand))
    }

    pub fn and(conjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::And(conjuncts.into_iter().collect())
    }

    pub fn or(disjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::Or(disjuncts.into_iter().collect())
    }

    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Sentence::Biconditional(Box::new(left), Box::new(right))
    }

    /// Applies a connective to a collection of operands, failing if the count of operands is not one the connective takes.
    ///
    /// ```rust
    /// # use otter_logic::structures::sentence::{Connective, Sentence};
    /// # use otter_logic::types::err::{self, ErrorKind};
    /// let p = Sentence::symbol("p");
    /// let q = Sentence::symbol("q");
    ///
    /// let pq = Sentence::compose(Connective::Implication, vec![p.clone(), q.clone()]);
    /// assert_eq!(pq, Ok(Sentence::implies(p.clone(), q.clone())));
    ///
    /// let bad = Sentence::compose(Connective::Not, vec![p, q]);
    /// assert_eq!(
    ///     bad,
    ///     Err(ErrorKind::from(err::ConstructionError::Arity {
    ///         connective: Connective::Not,
    ///         found: 2
    ///     }))
    /// );
    /// ```
    pub fn compose(connective: Connective, operands: Vec<Sentence>) -> Result<Self, ErrorKind> {
        let found = operands.len();
        let arity_error = ErrorKind::from(err::ConstructionError::Arity { connective, found });

        match connective {
            Connective::And => Ok(Sentence::And(operands)),
            Connective::Or => Ok(Sentence::Or(operands)),

            Connective::Not => {
                let [operand]: [Sentence; 1] = operands.try_into().map_err(|_| arity_error)?;
                Ok(Sentence::not(operand))
            }

            Connective::Implication => {
                let [a, b]: [Sentence; 2] = operands.try_into().map_err(|_| arity_error)?;
                Ok(Sentence::implies(a, b))
            }

            Connective::Biconditional => {
                let [a, b]: [Sentence; 2] = operands.try_into().map_err(|_| arity_error)?;
                Ok(Sentence::iff(a, b))
            }
        }
    }

    /// Appends a conjunct to a conjunction.
    ///
    /// Fails, without change, if the sentence is not a conjunction.
    pub fn add(&mut self, conjunct: Sentence) -> Result<(), ErrorKind> {
        match self {
            Sentence::And(conjuncts) => {
                conjuncts.push(conjunct);
                Ok(())
            }
            _ => Err(err::ConstructionError::NotAConjunction.into()),
        }
    }

    /// The main connective of the sentence, if the sentence is not a symbol.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Sentence::Symbol(_) => None,
            Sentence::Not(_) => Some(Connective::Not),
            Sentence::And(_) => Some(Connective::And),
            Sentence::Or(_) => Some(Connective::Or),
            Sentence::Implication(_, _) => Some(Connective::Implication),
            Sentence::Biconditional(_, _) => Some(Connective::Biconditional),
        }
    }

    /// The value of the sentence on the valuation.
    ///
    /// Conjunctions and disjunctions stop at the first operand which fixes their value, and so a missing assignment is only noted if some symbol without a value is reached.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind> {
        match self {
            Sentence::Symbol(symbol) => match valuation.value_of(symbol) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::MissingAssignment(symbol.clone()).into()),
            },

            Sentence::Not(operand) => Ok(!operand.evaluate(valuation)?),

            Sentence::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(valuation)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Sentence::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(valuation)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Sentence::Implication(antecedent, consequent) => {
                Ok(!antecedent.evaluate(valuation)? || consequent.evaluate(valuation)?)
            }

            Sentence::Biconditional(left, right) => {
                Ok(left.evaluate(valuation)? == right.evaluate(valuation)?)
            }
        }
    }

    /// The (distinct) symbols which appear anywhere in the sentence.
    pub fn symbols(&self) -> HashSet<Symbol> {
        let mut symbols = HashSet::default();
        self.extend_symbols(&mut symbols);
        symbols
    }

    /// Adds the symbols of the sentence to some set of symbols.
    pub fn extend_symbols(&self, symbols: &mut HashSet<Symbol>) {
        match self {
            Sentence::Symbol(symbol) => {
                symbols.insert(symbol.clone());
            }

            Sentence::Not(operand) => operand.extend_symbols(symbols),

            Sentence::And(operands) | Sentence::Or(operands) => {
                for operand in operands {
                    operand.extend_symbols(symbols);
                }
            }

            Sentence::Implication(a, b) | Sentence::Biconditional(a, b) => {
                a.extend_symbols(symbols);
                b.extend_symbols(symbols);
            }
        }
    }
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Symbol(symbol)
    }
}

impl From<&Symbol> for Sentence {
    fn from(symbol: &Symbol) -> Self {
        Sentence::Symbol(symbol.clone())
    }
}

impl std::ops::Not for Sentence {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::not(self)
    }
}

impl std::ops::Not for Symbol {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::not(Sentence::Symbol(self))
    }
}

impl std::ops::BitAnd for Sentence {
    type Output = Sentence;

    fn bitand(self, other: Self) -> Self::Output {
        Sentence::And(vec![self, other])
    }
}

impl std::ops::BitOr for Sentence {
    type Output = Sentence;

    fn bitor(self, other: Self) -> Self::Output {
        Sentence::Or(vec![self, other])
    }
}
