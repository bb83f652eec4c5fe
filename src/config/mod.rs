/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption] noting the bounds of the value.

```rust
# use otter_logic::config::{Config, SymbolOrder};
let mut config = Config::default();

assert!(config.split_depth.set(3));
assert!(!config.split_depth.set(64));
assert_eq!(config.split_depth.value, 3);

config.symbol_order.value = SymbolOrder::Shuffled;
```

No option has an effect on the result of a model check, only on the way models are examined.
*/

mod config_option;
pub use config_option::ConfigOption;

mod symbol_order;
pub use symbol_order::SymbolOrder;

/// Representation of the count of symbols to split a model check on.
pub type SplitDepth = u8;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The order in which symbols are given values.
    pub symbol_order: ConfigOption<SymbolOrder>,

    /// The seed used when shuffling symbols.
    pub seed: ConfigOption<u64>,

    /// The count of symbols to fix before examining the remaining symbols on separate threads.
    ///
    /// With a value of *d*, 2^*d* threads are used, and with a value of 0 the check is made on the calling thread.
    pub split_depth: ConfigOption<SplitDepth>,
}

impl Default for Config {
    /// The default context examines models on the calling thread, with symbols in lexicographic order.
    fn default() -> Self {
        Config {
            symbol_order: ConfigOption {
                name: "symbol_order",
                min: SymbolOrder::MIN,
                max: SymbolOrder::MAX,
                value: SymbolOrder::Lexicographic,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            split_depth: ConfigOption {
                name: "split_depth",
                min: 0,
                max: 8,
                value: 0,
            },
        }
    }
}
