/*!
A database of knowledge.

A [KnowledgeBase] is an ordered collection of sentences, interpreted as the conjunction of those sentences.
Sentences are added through [tell](KnowledgeBase::tell), and are never removed or revised.

No check is made on a sentence told to a knowledge base.
So, a sentence may be told twice, and a sentence may contradict what is already known.
Neither is a problem, as conjunction is idempotent and [model checking](crate::procedures::model_check) handles a contradiction as knowledge with no models.

```rust
# use otter_logic::db::knowledge::KnowledgeBase;
# use otter_logic::structures::sentence::Sentence;
let mut knowledge = KnowledgeBase::new();
knowledge.tell(Sentence::symbol("p") | Sentence::symbol("q"));
knowledge.tell(!Sentence::symbol("p"));

assert_eq!(knowledge.len(), 2);
assert_eq!(knowledge.formula(), "(p ∨ q) ∧ (¬p)");
```

# Knowledge

Both a knowledge base and a (conjunctive) sentence may be used as knowledge, and the [Knowledge] trait captures what is required of knowledge by a model check.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{sentence::Sentence, symbol::Symbol, valuation::Valuation},
    types::err::ErrorKind,
};

/// Something which is true or false on a valuation of some collection of symbols.
pub trait Knowledge {
    /// The value of the knowledge on the valuation.
    fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind>;

    /// The (distinct) symbols the value of the knowledge depends on.
    fn symbols(&self) -> HashSet<Symbol>;
}

impl Knowledge for Sentence {
    fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind> {
        Sentence::evaluate(self, valuation)
    }

    fn symbols(&self) -> HashSet<Symbol> {
        Sentence::symbols(self)
    }
}

/// An ordered, append only, collection of sentences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        KnowledgeBase::default()
    }

    /// Adds a sentence to the knowledge base.
    pub fn tell(&mut self, sentence: Sentence) {
        log::trace!(target: targets::KNOWLEDGE, "Told: {sentence}");
        self.sentences.push(sentence);
    }

    /// The sentences of the knowledge base, in the order told.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The union of the symbols of each sentence of the knowledge base.
    pub fn symbols(&self) -> HashSet<Symbol> {
        let mut symbols = HashSet::default();
        for sentence in &self.sentences {
            sentence.extend_symbols(&mut symbols);
        }
        symbols
    }

    /// The value of the conjunction of the sentences of the knowledge base.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind> {
        for sentence in &self.sentences {
            if !sentence.evaluate(valuation)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The knowledge base as a single conjunction.
    pub fn as_sentence(&self) -> Sentence {
        Sentence::And(self.sentences.clone())
    }

    /// The knowledge base written as the formula of a conjunction.
    pub fn formula(&self) -> String {
        self.as_sentence().formula()
    }
}

impl Knowledge for KnowledgeBase {
    fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, ErrorKind> {
        KnowledgeBase::evaluate(self, valuation)
    }

    fn symbols(&self) -> HashSet<Symbol> {
        KnowledgeBase::symbols(self)
    }
}

impl From<Vec<Sentence>> for KnowledgeBase {
    fn from(sentences: Vec<Sentence>) -> Self {
        KnowledgeBase { sentences }
    }
}

impl From<KnowledgeBase> for Sentence {
    fn from(knowledge: KnowledgeBase) -> Self {
        Sentence::And(knowledge.sentences)
    }
}

impl FromIterator<Sentence> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        KnowledgeBase {
            sentences: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sentence> for KnowledgeBase {
    fn extend<I: IntoIterator<Item = Sentence>>(&mut self, iter: I) {
        for sentence in iter {
            self.tell(sentence);
        }
    }
}
