/*!
Classification of a sentence with respect to some knowledge.

A sentence 𝐐 is classified through (at most) two model checks:
- If the knowledge entails 𝐐, then 𝐐 is [proved](Classification::Proved).
- Otherwise, if the knowledge entails ¬𝐐, then 𝐐 is [refuted](Classification::Refuted).
- Otherwise, 𝐐 is [undetermined](Classification::Undetermined).

Note, if the knowledge has no models then every sentence is proved, as the first check succeeds.

```rust
# use otter_logic::context::Context;
# use otter_logic::reports::Classification;
# use otter_logic::structures::sentence::Sentence;
let mut the_context = Context::default();

let knowledge = Sentence::and([
    Sentence::symbol("x") | Sentence::symbol("y"),
    !Sentence::symbol("y"),
]);

let x = Sentence::symbol("x");
let y = Sentence::symbol("y");
let w = Sentence::symbol("w");

assert_eq!(the_context.classify(&knowledge, &x), Ok(Classification::Proved));
assert_eq!(the_context.classify(&knowledge, &y), Ok(Classification::Refuted));
assert_eq!(the_context.classify(&knowledge, &w), Ok(Classification::Undetermined));
```
*/

use crate::{
    context::Context,
    db::knowledge::Knowledge,
    misc::log::targets::{self},
    reports::Classification,
    structures::{sentence::Sentence, symbol::Symbol},
    types::err::ErrorKind,
};

impl Context {
    /// The classification of the query with respect to the knowledge.
    pub fn classify<K: Knowledge + Sync>(
        &mut self,
        knowledge: &K,
        query: &Sentence,
    ) -> Result<Classification, ErrorKind> {
        let classification = if self.entails(knowledge, query)? {
            Classification::Proved
        } else if self.entails(knowledge, &Sentence::not(query.clone()))? {
            Classification::Refuted
        } else {
            Classification::Undetermined
        };

        log::info!(target: targets::CLASSIFY, "{query}: {classification}");
        Ok(classification)
    }

    /// The classification of each symbol with respect to the knowledge, in the order given.
    pub fn classify_all<K: Knowledge + Sync>(
        &mut self,
        knowledge: &K,
        symbols: impl IntoIterator<Item = Symbol>,
    ) -> Result<Vec<(Symbol, Classification)>, ErrorKind> {
        let mut classifications = Vec::default();
        for symbol in symbols {
            let classification = self.classify(knowledge, &Sentence::from(&symbol))?;
            classifications.push((symbol, classification));
        }
        Ok(classifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradiction_proves() {
        let mut context = Context::default();
        let p = Sentence::symbol("p");
        let knowledge = p.clone() & !p.clone();

        assert_eq!(context.classify(&knowledge, &p), Ok(Classification::Proved));
        assert_eq!(context.counters.model_checks, 1);
    }

    #[test]
    fn two_checks_at_most() {
        let mut context = Context::default();
        let knowledge = Sentence::symbol("p");

        let _ = context.classify(&knowledge, &Sentence::symbol("q"));
        assert_eq!(context.counters.model_checks, 2);
    }
}
