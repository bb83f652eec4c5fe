/*!
A (partial) function from symbols to truth values.

If every symbol of interest is assigned a value the valuation is 'full' (a 'model'), otherwise the valuation is 'partial'.

The valuation trait is implemented for maps from [symbols](Symbol) to booleans, and the canonical representation of a model is a [HashMap].

```rust
# use otter_logic::structures::symbol::Symbol;
# use otter_logic::structures::valuation::{Model, Valuation};
let mut model = Model::default();
model.insert(Symbol::new("p"), true);

assert_eq!(model.value_of(&Symbol::new("p")), Some(true));
assert_eq!(model.value_of(&Symbol::new("q")), None);
```

Evaluation of a [sentence](crate::structures::sentence::Sentence) on a partial valuation may fail, as some symbol of the sentence may have no value.
*/

use std::collections::{BTreeMap, HashMap};

use super::symbol::Symbol;

/// The canonical representation of a model.
pub type Model = HashMap<Symbol, bool>;

/// A valuation is something which stores the value of a symbol, or perhaps the information that the symbol has no value.
pub trait Valuation {
    /// Some value of a symbol under the valuation, or otherwise nothing.
    fn value_of(&self, symbol: &Symbol) -> Option<bool>;

    /// A count of the symbols which have some value.
    fn valued_count(&self) -> usize;
}

impl Valuation for HashMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }

    fn valued_count(&self) -> usize {
        self.len()
    }
}

impl Valuation for BTreeMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }

    fn valued_count(&self) -> usize {
        self.len()
    }
}

/// A string representation of a valuation, with symbols in lexicographic order and false symbols prefixed by '-'.
///
/// ```rust
/// # use otter_logic::structures::symbol::Symbol;
/// # use otter_logic::structures::valuation::{valuation_string, Model};
/// let mut model = Model::default();
/// model.insert(Symbol::new("q"), false);
/// model.insert(Symbol::new("p"), true);
///
/// assert_eq!(valuation_string(&model), "p -q");
/// ```
pub fn valuation_string(model: &Model) -> String {
    let mut pairs = model.iter().collect::<Vec<_>>();
    pairs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    pairs
        .into_iter()
        .map(|(symbol, value)| match value {
            true => format!("{symbol}"),
            false => format!("-{symbol}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
