/*!
The context --- within which model checks take place.

A context holds a [configuration](crate::config) and [counters](Counters) of the work done by the checks made with the context.
A context holds no knowledge, and so a single context may be used to check any number of (knowledge, query) pairs.

# Example
```rust
# use otter_logic::config::Config;
# use otter_logic::context::Context;
# use otter_logic::structures::sentence::Sentence;
let mut the_context = Context::from_config(Config::default());

let p = Sentence::symbol("p");
let q = Sentence::symbol("q");

let knowledge = Sentence::and([Sentence::implies(p.clone(), q.clone()), p]);

assert_eq!(the_context.entails(&knowledge, &q), Ok(true));
assert_eq!(the_context.entails(&knowledge, &!q), Ok(false));

assert_eq!(the_context.counters.model_checks, 2);
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;

/// A context, holding configuration and counters.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters of the work done by checks made with the context.
    pub counters: Counters,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }

    /// Sets each counter to zero.
    pub fn reset_counters(&mut self) {
        self.counters = Counters::default();
    }
}
