use otter_logic::{
    config::{Config, SymbolOrder},
    context::Context,
    model_check,
    structures::{sentence::Sentence, symbol::Symbol, valuation::Model},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const SYMBOL_LIMIT: usize = 5;

fn random_sentence(rng: &mut StdRng, depth: usize) -> Sentence {
    if depth == 0 || rng.gen_bool(0.25) {
        return Sentence::symbol(format!("s{}", rng.gen_range(0..SYMBOL_LIMIT)));
    }

    match rng.gen_range(0..5) {
        0 => Sentence::not(random_sentence(rng, depth - 1)),
        1 => {
            let count = rng.gen_range(2..=3);
            Sentence::and((0..count).map(|_| random_sentence(rng, depth - 1)).collect::<Vec<_>>())
        }
        2 => {
            let count = rng.gen_range(2..=3);
            Sentence::or((0..count).map(|_| random_sentence(rng, depth - 1)).collect::<Vec<_>>())
        }
        3 => Sentence::implies(random_sentence(rng, depth - 1), random_sentence(rng, depth - 1)),
        _ => Sentence::iff(random_sentence(rng, depth - 1), random_sentence(rng, depth - 1)),
    }
}

/// The index of a symbol named `s<index>`.
fn index_of(symbol: &Symbol) -> usize {
    symbol.name()[1..].parse().unwrap()
}

/// Truth of a sentence where bit *i* of the mask is the value of `s<i>`.
fn truth(sentence: &Sentence, mask: usize) -> bool {
    match sentence {
        Sentence::Symbol(symbol) => mask >> index_of(symbol) & 1 == 1,
        Sentence::Not(inner) => !truth(inner, mask),
        Sentence::And(conjuncts) => conjuncts.iter().all(|c| truth(c, mask)),
        Sentence::Or(disjuncts) => disjuncts.iter().any(|d| truth(d, mask)),
        Sentence::Implication(antecedent, consequent) => {
            !truth(antecedent, mask) || truth(consequent, mask)
        }
        Sentence::Biconditional(left, right) => truth(left, mask) == truth(right, mask),
    }
}

/// Entailment by a table over every symbol, including those in neither sentence.
fn entailed_by_table(knowledge: &Sentence, query: &Sentence) -> bool {
    (0..(1 << SYMBOL_LIMIT)).all(|mask| !truth(knowledge, mask) || truth(query, mask))
}

fn model_of(mask: usize) -> Model {
    (0..SYMBOL_LIMIT)
        .map(|i| (Symbol::new(format!("s{i}")), mask >> i & 1 == 1))
        .collect()
}

mod random {

    use super::*;

    #[test]
    fn evaluation_agrees_with_table() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..64 {
            let sentence = random_sentence(&mut rng, 3);
            for mask in 0..(1 << SYMBOL_LIMIT) {
                assert_eq!(sentence.evaluate(&model_of(mask)), Ok(truth(&sentence, mask)));
            }
        }
    }

    #[test]
    fn entailment_agrees_with_table() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..128 {
            let knowledge = random_sentence(&mut rng, 3);
            let query = random_sentence(&mut rng, 2);

            assert_eq!(
                model_check(&knowledge, &query),
                Ok(entailed_by_table(&knowledge, &query)),
                "{knowledge} ⊨ {query}"
            );
        }
    }

    #[test]
    fn configurations_agree() {
        let mut rng = StdRng::seed_from_u64(23);

        let orders = [
            SymbolOrder::Lexicographic,
            SymbolOrder::KnowledgeFirst,
            SymbolOrder::Shuffled,
        ];

        for round in 0..24 {
            let knowledge = random_sentence(&mut rng, 3);
            let query = random_sentence(&mut rng, 2);
            let expected = entailed_by_table(&knowledge, &query);

            for order in orders {
                for split_depth in [0, 2, 4] {
                    let mut config = Config::default();
                    config.symbol_order.value = order;
                    config.seed.value = round;
                    config.split_depth.value = split_depth;

                    let mut ctx = Context::from_config(config);
                    assert_eq!(ctx.entails(&knowledge, &query), Ok(expected));
                }
            }
        }
    }

    #[test]
    fn symbols_are_a_union() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..64 {
            let left = random_sentence(&mut rng, 3);
            let right = random_sentence(&mut rng, 3);

            let expected = left
                .symbols()
                .union(&right.symbols())
                .cloned()
                .collect::<std::collections::HashSet<_>>();

            assert_eq!(Sentence::and([left.clone(), right.clone()]).symbols(), expected);
            assert_eq!(Sentence::implies(left, right).symbols(), expected);
        }
    }

    #[test]
    fn biconditional_symmetry() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..32 {
            let left = random_sentence(&mut rng, 2);
            let right = random_sentence(&mut rng, 2);

            let forward = Sentence::iff(left.clone(), right.clone());
            let backward = Sentence::iff(right, left);

            for mask in 0..(1 << SYMBOL_LIMIT) {
                let model = model_of(mask);
                assert_eq!(forward.evaluate(&model), backward.evaluate(&model));
            }
        }
    }
}
