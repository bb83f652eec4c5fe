/*!
Rendering sentences as formulas.

Operands are written with [parenthesize] applied, at every level of nesting.
So, a symbol is written as is, as is anything which is already wrapped in a single balanced pair of parentheses, and anything else is wrapped in a fresh pair.

```rust
# use otter_logic::structures::sentence::Sentence;
let p = Sentence::symbol("p");
let q = Sentence::symbol("q");
let r = Sentence::symbol("r");

let sentence = Sentence::and([
    Sentence::implies(Sentence::not(p.clone()), q.clone()),
    Sentence::or([q.clone(), r.clone()]),
    Sentence::not(Sentence::and([q, r])),
    p,
]);

assert_eq!(sentence.formula(), "((¬p) → q) ∧ (q ∨ r) ∧ (¬(q ∧ r)) ∧ p");
```

Note, 'already a symbol' is read as 'made only of alphabetic characters'.
So, a negation is written within parentheses when an operand, as is a symbol such as `p_1`.
*/

use super::Sentence;

/// Wraps a formula in parentheses, unless the formula is empty, alphabetic, or already wrapped in a balanced pair of parentheses.
///
/// ```rust
/// # use otter_logic::structures::sentence::parenthesize;
/// assert_eq!(parenthesize("X"), "X");
/// assert_eq!(parenthesize("(X ∧ Y)"), "(X ∧ Y)");
/// assert_eq!(parenthesize("X ∧ Y"), "(X ∧ Y)");
/// assert_eq!(parenthesize("(X) ∧ (Y)"), "((X) ∧ (Y))");
/// ```
pub fn parenthesize(formula: &str) -> String {
    if formula.is_empty() || formula.chars().all(char::is_alphabetic) {
        return formula.to_string();
    }

    if let Some(inner) = formula
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        if balanced(inner) {
            return formula.to_string();
        }
    }

    format!("({formula})")
}

/// Whether every close parenthesis follows a matching open parenthesis, and every open parenthesis is closed.
fn balanced(formula: &str) -> bool {
    let mut depth: usize = 0;
    for character in formula.chars() {
        match character {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(lower) => depth = lower,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

impl Sentence {
    /// The sentence written with the glyphs ¬, ∧, ∨, →, and ↔.
    pub fn formula(&self) -> String {
        match self {
            Sentence::Symbol(symbol) => symbol.name().to_string(),

            Sentence::Not(operand) => format!("¬{}", parenthesize(&operand.formula())),

            Sentence::And(conjuncts) => join(conjuncts, " ∧ "),

            Sentence::Or(disjuncts) => join(disjuncts, " ∨ "),

            Sentence::Implication(antecedent, consequent) => format!(
                "{} → {}",
                parenthesize(&antecedent.formula()),
                parenthesize(&consequent.formula())
            ),

            Sentence::Biconditional(left, right) => format!(
                "{} ↔ {}",
                parenthesize(&left.formula()),
                parenthesize(&right.formula())
            ),
        }
    }
}

fn join(operands: &[Sentence], separator: &str) -> String {
    operands
        .iter()
        .map(|operand| parenthesize(&operand.formula()))
        .collect::<Vec<_>>()
        .join(separator)
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}
