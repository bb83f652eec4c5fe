/*!
Deciding entailment by model checking.

Knowledge 𝐊 entails a query 𝐐 if and only if every full valuation of the symbols of 𝐊 and 𝐐 on which 𝐊 is true is a valuation on which 𝐐 is true.

A model check [examines](crate::procedures::examine) each full valuation of the symbols of 𝐊 and 𝐐 in turn:
- If 𝐊 is false on the valuation, the valuation says nothing about entailment.
- If 𝐊 is true on the valuation, and 𝐐 is false, the valuation is a counterexample and the check halts.
- Otherwise, the check continues.

So, if 𝐊 has no models then 𝐊 entails every query, and if there are *n* symbols up to 2^*n* valuations are examined.
There is no learning, propagation, or other pruning, and so checks are only practical for small collections of symbols.

# Example

```rust
# use otter_logic::model_check;
# use otter_logic::structures::sentence::Sentence;
let rain = Sentence::symbol("rain");
let hagrid = Sentence::symbol("hagrid");
let dumbledore = Sentence::symbol("dumbledore");

let knowledge = Sentence::and([
    Sentence::implies(!rain.clone(), hagrid.clone()),
    hagrid.clone() | dumbledore.clone(),
    !(hagrid & dumbledore.clone()),
    dumbledore,
]);

assert_eq!(model_check(&knowledge, &rain), Ok(true));
```
*/

use crate::{
    config::Config,
    context::Context,
    db::knowledge::Knowledge,
    misc::log::targets::{self},
    procedures::examine::Leaf,
    structures::{sentence::Sentence, valuation::Model},
    types::err::ErrorKind,
};

/// Whether the knowledge entails the query, checked with a default context.
pub fn model_check<K: Knowledge + Sync>(
    knowledge: &K,
    query: &Sentence,
) -> Result<bool, ErrorKind> {
    Context::from_config(Config::default()).entails(knowledge, query)
}

impl Context {
    /// Whether the knowledge entails the query.
    pub fn entails<K: Knowledge + Sync>(
        &mut self,
        knowledge: &K,
        query: &Sentence,
    ) -> Result<bool, ErrorKind> {
        Ok(self.counterexample(knowledge, query)?.is_none())
    }

    /// Some model of the knowledge on which the query is false, if one exists.
    ///
    /// Without a split, the counterexample returned is the first found in the configured order of symbols.
    /// With a split, the counterexample is the first found by some thread.
    pub fn counterexample<K: Knowledge + Sync>(
        &mut self,
        knowledge: &K,
        query: &Sentence,
    ) -> Result<Option<Model>, ErrorKind> {
        self.counters.model_checks += 1;

        let symbols = self.ordered_symbols(knowledge.symbols(), query.symbols());
        log::info!(target: targets::MODEL_CHECK, "Checking {query} over {} symbols", symbols.len());

        let examination = self.examine(&symbols, |model| {
            if knowledge.evaluate(model)? && !query.evaluate(model)? {
                Ok(Leaf::Halt)
            } else {
                Ok(Leaf::Pass)
            }
        })?;

        let counterexample = examination.noted.into_iter().next();

        if counterexample.is_some() {
            self.counters.counterexamples += 1;
            log::info!(target: targets::MODEL_CHECK, "Counterexample to {query} found");
        }

        Ok(counterexample)
    }
}

#[cfg(test)]
mod tests {
    use crate::{db::knowledge::KnowledgeBase, structures::symbol::Symbol};

    use super::*;

    #[test]
    fn no_symbols() {
        let truth = Sentence::And(vec![]);
        let falsum = Sentence::Or(vec![]);

        assert_eq!(model_check(&truth, &truth), Ok(true));
        assert_eq!(model_check(&truth, &falsum), Ok(false));
        assert_eq!(model_check(&falsum, &falsum), Ok(true));
    }

    #[test]
    fn counterexample_model() {
        let mut context = Context::default();

        let knowledge = Sentence::symbol("a") | Sentence::symbol("b");
        let query = Sentence::symbol("a");

        let counterexample = context.counterexample(&knowledge, &query).unwrap();
        let Some(model) = counterexample else {
            panic!("Missing counterexample");
        };

        assert_eq!(model.get(&Symbol::new("a")), Some(&false));
        assert_eq!(model.get(&Symbol::new("b")), Some(&true));
        assert_eq!(context.counters.counterexamples, 1);
    }

    #[test]
    fn counters() {
        let mut context = Context::default();

        let mut knowledge = KnowledgeBase::new();
        knowledge.tell(Sentence::symbol("p"));
        knowledge.tell(Sentence::implies(Sentence::symbol("p"), Sentence::symbol("q")));

        assert_eq!(context.entails(&knowledge, &Sentence::symbol("q")), Ok(true));
        assert_eq!(context.counters.models_examined, 4);
        assert_eq!(context.counters.counterexamples, 0);

        context.reset_counters();
        assert_eq!(context.counters.model_checks, 0);
    }

    #[test]
    fn query_only_symbols() {
        let knowledge = Sentence::symbol("p");

        assert_eq!(model_check(&knowledge, &Sentence::symbol("q")), Ok(false));

        let tautology = Sentence::symbol("q") | !Sentence::symbol("q");
        assert_eq!(model_check(&knowledge, &tautology), Ok(true));
    }
}
