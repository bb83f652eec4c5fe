/*!
Symbols, aka. 'atoms' or 'propositional variables'.

A symbol is identified by its name, and nothing else.
So, two symbols are the same symbol if and only if they have the same name, and the hash of a symbol is the hash of its name.
This allows symbols to be used as the keys of a [valuation](crate::structures::valuation) and as members of sets, regardless of where the symbol was created.

```rust
# use otter_logic::structures::symbol::Symbol;
let rain = Symbol::new("rain");
let also_rain = Symbol::from("rain");

assert_eq!(rain, also_rain);
assert_eq!(rain.name(), "rain");
assert_ne!(rain, Symbol::new("hagrid"));
```

The name is held in an [Arc], and so cloning a symbol (or a sentence built from symbols) does not copy the name, and sentences may be shared across threads.
*/

use std::sync::Arc;

/// An atomic proposition.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: Arc<str>,
}

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Symbol {
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol {
            name: Arc::from(name),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
