/*!
Models of some knowledge.

The models of some knowledge are found by the same examination as a model check, over the symbols of the knowledge alone.

```rust
# use otter_logic::context::Context;
# use otter_logic::structures::sentence::Sentence;
let mut the_context = Context::default();

let knowledge = Sentence::symbol("p") | Sentence::symbol("q");

let models = the_context.satisfying_models(&knowledge).unwrap();
assert_eq!(models.len(), 3);

assert_eq!(the_context.satisfiable(&knowledge), Ok(true));
assert_eq!(the_context.satisfiable(&(Sentence::symbol("p") & !Sentence::symbol("p"))), Ok(false));
```
*/

use crate::{
    context::Context,
    db::knowledge::Knowledge,
    procedures::examine::Leaf,
    structures::valuation::Model,
    types::err::ErrorKind,
};

impl Context {
    /// Every model of the knowledge, over the symbols of the knowledge, in the configured order of symbols.
    pub fn satisfying_models<K: Knowledge + Sync>(
        &mut self,
        knowledge: &K,
    ) -> Result<Vec<Model>, ErrorKind> {
        let symbols = self.ordered_symbols(knowledge.symbols(), Default::default());

        let examination = self.examine(&symbols, |model| match knowledge.evaluate(model)? {
            true => Ok(Leaf::Note),
            false => Ok(Leaf::Pass),
        })?;

        Ok(examination.noted)
    }

    /// Whether the knowledge has some model.
    pub fn satisfiable<K: Knowledge + Sync>(&mut self, knowledge: &K) -> Result<bool, ErrorKind> {
        let symbols = self.ordered_symbols(knowledge.symbols(), Default::default());

        let examination = self.examine(&symbols, |model| match knowledge.evaluate(model)? {
            true => Ok(Leaf::Halt),
            false => Ok(Leaf::Pass),
        })?;

        Ok(!examination.noted.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        db::knowledge::KnowledgeBase,
        structures::{sentence::Sentence, symbol::Symbol},
    };

    use super::*;

    #[test]
    fn every_model() {
        let mut context = Context::default();

        let knowledge: KnowledgeBase = ["a", "b", "c"]
            .into_iter()
            .map(|name| Sentence::symbol(name) | !Sentence::symbol(name))
            .collect();

        let models = context.satisfying_models(&knowledge).unwrap();
        assert_eq!(models.len(), 8);
        assert!(models.iter().all(|model| model.len() == 3));
    }

    #[test]
    fn empty_knowledge() {
        let mut context = Context::default();

        let models = context.satisfying_models(&KnowledgeBase::new()).unwrap();
        assert_eq!(models, vec![Model::default()]);
    }

    #[test]
    fn split_models() {
        let knowledge = Sentence::iff(
            Sentence::symbol("a"),
            Sentence::symbol("b") | Sentence::symbol("c"),
        );

        let mut context = Context::default();
        let single = context.satisfying_models(&knowledge).unwrap();

        context.config.split_depth.value = 2;
        let split = context.satisfying_models(&knowledge).unwrap();

        assert_eq!(single, split);
        assert!(single
            .iter()
            .all(|model| model[&Symbol::new("a")]
                == (model[&Symbol::new("b")] || model[&Symbol::new("c")])));
    }
}
