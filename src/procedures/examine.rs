/*!
Examination of every full valuation of a collection of symbols.

The procedures of the library are each some examination, differing only in what is done at each full valuation.

# Order

Valuations are examined in a depth-first order over the (ordered) symbols, with the true branch of a symbol before the false branch.
So, with symbols p and q the order is:

| p     | q     |
|-------|-------|
| true  | true  |
| true  | false |
| false | true  |
| false | false |

Branches are tracked on an explicit stack, rather than through recursion, and so the count of symbols is not bound by the depth of the call stack.
Still, with *n* symbols 2^*n* valuations are examined, unless an examination is halted.

If there are no symbols, the single (empty) valuation is examined.

# Splits

If the [split depth](crate::config::Config::split_depth) of a context is some *d* greater than zero, the first *d* symbols (or all symbols, if fewer) are fixed in each way possible and each fixed prefix is examined on its own thread.
Each thread writes to its own valuation, and the only shared state is a flag to note some thread has halted, so the other threads may halt too.

Examinations which do not halt note the same valuations in the same order regardless of the split depth.
*/

use std::{
    collections::HashSet,
    sync::atomic::{AtomicBool, Ordering},
};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    config::SymbolOrder,
    context::Context,
    misc::log::targets::{self},
    structures::{symbol::Symbol, valuation::Model},
    types::err::{self, ErrorKind},
};

/// What to do with a full valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Leaf {
    /// Nothing, continue to the next valuation.
    Pass,

    /// Note the valuation and continue.
    Note,

    /// Note the valuation and stop the examination.
    Halt,
}

/// The result of an examination.
#[derive(Debug, Default)]
pub(crate) struct Examination {
    /// The valuations noted, in the order examined.
    pub noted: Vec<Model>,

    /// A count of the full valuations examined.
    pub examined: usize,

    /// Whether the examination halted before examining every valuation.
    pub halted: bool,
}

impl Examination {
    fn absorb(&mut self, other: Examination) {
        self.noted.extend(other.noted);
        self.examined += other.examined;
        self.halted |= other.halted;
    }
}

impl Context {
    /// The union of two sets of symbols, ordered as configured.
    pub(crate) fn ordered_symbols(
        &self,
        knowledge: HashSet<Symbol>,
        query: HashSet<Symbol>,
    ) -> Vec<Symbol> {
        let mut symbols = knowledge.union(&query).cloned().collect::<Vec<_>>();
        symbols.sort_unstable();

        match self.config.symbol_order.value {
            SymbolOrder::Lexicographic => {}

            SymbolOrder::KnowledgeFirst => {
                // A stable sort, to preserve lexicographic order within each part.
                symbols.sort_by_key(|symbol| !knowledge.contains(symbol));
            }

            SymbolOrder::Shuffled => {
                let mut rng = StdRng::seed_from_u64(self.config.seed.value);
                symbols.shuffle(&mut rng);
            }
        }

        log::trace!(target: targets::MODEL_CHECK, "Symbol order: {symbols:?}");
        symbols
    }

    /// Examines every full valuation of the symbols, splitting the examination across threads as configured.
    ///
    /// The count of valuations examined is added to the counters of the context.
    pub(crate) fn examine<F>(&mut self, symbols: &[Symbol], leaf: F) -> Result<Examination, ErrorKind>
    where
        F: Fn(&Model) -> Result<Leaf, ErrorKind> + Sync,
    {
        let start = std::time::Instant::now();

        let split = std::cmp::min(self.config.split_depth.value as usize, symbols.len());

        let examination = match split {
            0 => examine_from(symbols, &mut Model::default(), None, &leaf)?,
            _ => examine_split(symbols, split, &leaf)?,
        };

        self.counters.models_examined += examination.examined;
        self.counters.time += start.elapsed();

        log::debug!(target: targets::MODEL_CHECK,
            "Examined {} valuations of {} symbols ({} noted, halted: {})",
            examination.examined,
            symbols.len(),
            examination.noted.len(),
            examination.halted
        );

        Ok(examination)
    }
}

/// Examines every full valuation of the symbols which extends the given model, depth first and true before false.
///
/// If a stop flag is given, the examination halts (without noting any valuation) once the flag is raised.
pub(crate) fn examine_from<F>(
    symbols: &[Symbol],
    model: &mut Model,
    stop: Option<&AtomicBool>,
    leaf: &F,
) -> Result<Examination, ErrorKind>
where
    F: Fn(&Model) -> Result<Leaf, ErrorKind>,
{
    let mut examination = Examination::default();

    // For each symbol with a value, whether the value is true (and so the false branch remains).
    let mut branches: Vec<bool> = Vec::with_capacity(symbols.len());

    loop {
        while branches.len() < symbols.len() {
            model.insert(symbols[branches.len()].clone(), true);
            branches.push(true);
        }

        if stop.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            examination.halted = true;
            return Ok(examination);
        }

        examination.examined += 1;
        match leaf(model)? {
            Leaf::Pass => {}

            Leaf::Note => examination.noted.push(model.clone()),

            Leaf::Halt => {
                examination.noted.push(model.clone());
                examination.halted = true;
                return Ok(examination);
            }
        }

        'backtrack: loop {
            match branches.pop() {
                None => return Ok(examination),

                Some(true) => {
                    model.insert(symbols[branches.len()].clone(), false);
                    branches.push(false);
                    break 'backtrack;
                }

                Some(false) => {}
            }
        }
    }
}

/// Examines every full valuation of the symbols, with each way of fixing the first `split` symbols examined on a separate thread.
///
/// Noted valuations are returned in the order of the fixed prefixes, and so in the same order as an examination on a single thread.
fn examine_split<F>(symbols: &[Symbol], split: usize, leaf: &F) -> Result<Examination, ErrorKind>
where
    F: Fn(&Model) -> Result<Leaf, ErrorKind> + Sync,
{
    let (prefix, rest) = symbols.split_at(split);
    let stop = AtomicBool::new(false);

    let (tx, rx) = crossbeam::channel::unbounded::<(usize, Result<Examination, ErrorKind>)>();

    log::debug!(target: targets::MODEL_CHECK, "Splitting on {} symbols", prefix.len());

    let scope_result = crossbeam::thread::scope(|scope| {
        for index in 0..(1_usize << split) {
            let tx = tx.clone();
            let stop = &stop;

            scope.spawn(move |_| {
                let mut model = Model::default();
                for (position, symbol) in prefix.iter().enumerate() {
                    // The most significant bit is the first symbol, and a clear bit is true.
                    let value = (index >> (split - 1 - position)) & 1 == 0;
                    model.insert(symbol.clone(), value);
                }

                let result = examine_from(rest, &mut model, Some(stop), leaf);

                match &result {
                    Ok(examination) if examination.halted => stop.store(true, Ordering::Relaxed),
                    Err(_) => stop.store(true, Ordering::Relaxed),
                    Ok(_) => {}
                }

                let _ = tx.send((index, result));
            });
        }
    });

    drop(tx);

    if scope_result.is_err() {
        return Err(err::ErrorKind::Worker);
    }

    let mut results = rx.into_iter().collect::<Vec<_>>();
    results.sort_unstable_by_key(|(index, _)| *index);

    let mut examination = Examination::default();
    for (_, result) in results {
        examination.absorb(result?);
    }

    Ok(examination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(Symbol::new).collect()
    }

    #[test]
    fn order_true_first() {
        let symbols = symbols(&["p", "q"]);
        let examination =
            examine_from(&symbols, &mut Model::default(), None, &|_| Ok(Leaf::Note)).unwrap();

        let values = examination
            .noted
            .iter()
            .map(|model| (model[&Symbol::new("p")], model[&Symbol::new("q")]))
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            vec![(true, true), (true, false), (false, true), (false, false)]
        );
        assert_eq!(examination.examined, 4);
        assert!(!examination.halted);
    }

    #[test]
    fn no_symbols() {
        let examination = examine_from(&[], &mut Model::default(), None, &|model| {
            assert!(model.is_empty());
            Ok(Leaf::Note)
        })
        .unwrap();

        assert_eq!(examination.examined, 1);
        assert_eq!(examination.noted.len(), 1);
    }

    #[test]
    fn halt() {
        let symbols = symbols(&["a", "b", "c"]);
        let examination = examine_from(&symbols, &mut Model::default(), None, &|model| {
            match model[&Symbol::new("b")] {
                true => Ok(Leaf::Pass),
                false => Ok(Leaf::Halt),
            }
        })
        .unwrap();

        // a = true, b = false, c = true is the third valuation.
        assert_eq!(examination.examined, 3);
        assert!(examination.halted);
        assert_eq!(examination.noted.len(), 1);
    }

    #[test]
    fn split_agrees() {
        let symbols = symbols(&["a", "b", "c", "d", "e"]);
        let leaf = |model: &Model| match model[&Symbol::new("b")] ^ model[&Symbol::new("e")] {
            true => Ok(Leaf::Note),
            false => Ok(Leaf::Pass),
        };

        let single = examine_from(&symbols, &mut Model::default(), None, &leaf).unwrap();

        for split in 1..=symbols.len() {
            let split_examination = examine_split(&symbols, split, &leaf).unwrap();
            assert_eq!(split_examination.examined, 32);
            assert_eq!(split_examination.noted, single.noted);
        }
    }

    #[test]
    fn ordering() {
        let mut context = Context::default();
        let knowledge = HashSet::from([Symbol::new("z"), Symbol::new("b")]);
        let query = HashSet::from([Symbol::new("a"), Symbol::new("b")]);

        let lexicographic = context.ordered_symbols(knowledge.clone(), query.clone());
        assert_eq!(lexicographic, symbols(&["a", "b", "z"]));

        context.config.symbol_order.value = SymbolOrder::KnowledgeFirst;
        let knowledge_first = context.ordered_symbols(knowledge.clone(), query.clone());
        assert_eq!(knowledge_first, symbols(&["b", "z", "a"]));

        context.config.symbol_order.value = SymbolOrder::Shuffled;
        let mut shuffled = context.ordered_symbols(knowledge, query);
        shuffled.sort();
        assert_eq!(shuffled, lexicographic);
    }
}
