/*!
Building sentences and knowledge from text.

Text is read as it is written by [formula](crate::structures::sentence::Sentence::formula), and so knowledge which has been written out may be read back in.
See [parse_sentence](parse::parse_sentence) for details of the syntax.

```rust
# use otter_logic::structures::sentence::Sentence;
let sentence: Sentence = "(hagrid ∨ dumbledore) ∧ (¬(hagrid ∧ dumbledore))".parse().unwrap();
assert_eq!(sentence.formula(), "(hagrid ∨ dumbledore) ∧ (¬(hagrid ∧ dumbledore))");
```
*/

pub mod parse;
