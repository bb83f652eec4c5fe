use otter_logic::{
    config::{Config, SymbolOrder},
    context::Context,
    db::knowledge::KnowledgeBase,
    reports::Classification,
    structures::{sentence::Sentence, symbol::Symbol},
};

mod classification {

    use super::*;

    fn exclusive_knowledge() -> KnowledgeBase {
        let mut knowledge = KnowledgeBase::new();
        knowledge.tell(Sentence::or(["x", "y", "z"].map(Sentence::symbol)));
        knowledge.tell(Sentence::not(Sentence::symbol("y")));
        knowledge.tell(Sentence::not(Sentence::symbol("z")));
        knowledge
    }

    #[test]
    fn three_ways() {
        let mut ctx = Context::from_config(Config::default());
        let knowledge = exclusive_knowledge();

        let x = Sentence::symbol("x");
        let y = Sentence::symbol("y");
        let w = Sentence::symbol("w");

        assert_eq!(ctx.entails(&knowledge, &x), Ok(true));
        assert_eq!(ctx.entails(&knowledge, &y), Ok(false));
        assert_eq!(ctx.entails(&knowledge, &Sentence::not(y.clone())), Ok(true));

        assert_eq!(ctx.entails(&knowledge, &w), Ok(false));
        assert_eq!(ctx.entails(&knowledge, &Sentence::not(w.clone())), Ok(false));

        assert_eq!(ctx.classify(&knowledge, &x), Ok(Classification::Proved));
        assert_eq!(ctx.classify(&knowledge, &y), Ok(Classification::Refuted));
        assert_eq!(ctx.classify(&knowledge, &w), Ok(Classification::Undetermined));
    }

    #[test]
    fn clue() {
        let mut ctx = Context::default();

        let [mustard, plum, scarlet] = ["ColMustard", "ProfPlum", "MsScarlet"].map(Symbol::new);
        let [ballroom, kitchen, library] = ["Ballroom", "Kitchen", "Library"].map(Symbol::new);
        let [knife, revolver, rope] = ["Knife", "Revolver", "Rope"].map(Symbol::new);

        let mut knowledge = Sentence::and([
            Sentence::or([&mustard, &plum, &scarlet].map(Sentence::from)),
            Sentence::or([&ballroom, &kitchen, &library].map(Sentence::from)),
            Sentence::or([&knife, &revolver, &rope].map(Sentence::from)),
        ]);

        assert!(knowledge.add(!mustard.clone()).is_ok());
        assert!(knowledge.add(!kitchen.clone()).is_ok());
        assert!(knowledge.add(!revolver.clone()).is_ok());
        assert!(knowledge
            .add(Sentence::or([!scarlet.clone(), !library.clone(), !rope.clone()]))
            .is_ok());
        assert!(knowledge.add(!plum.clone()).is_ok());
        assert!(knowledge.add(!ballroom.clone()).is_ok());

        let symbols = [
            mustard, plum, scarlet, ballroom, kitchen, library, knife, revolver, rope,
        ];

        let classifications = ctx.classify_all(&knowledge, symbols).unwrap();

        let proved = classifications
            .iter()
            .filter(|(_, c)| *c == Classification::Proved)
            .map(|(s, _)| s.name())
            .collect::<Vec<_>>();
        assert_eq!(proved, vec!["MsScarlet", "Library", "Knife"]);

        assert!(classifications
            .iter()
            .all(|(_, c)| *c != Classification::Undetermined));
    }
}

mod knowledge_base {

    use super::*;

    #[test]
    fn duplicate_tells() {
        let mut ctx = Context::default();

        let mut knowledge = KnowledgeBase::new();
        knowledge.tell(Sentence::implies(Sentence::symbol("p"), Sentence::symbol("q")));
        knowledge.tell(Sentence::symbol("p"));

        let queries = [
            Sentence::symbol("q"),
            Sentence::not(Sentence::symbol("q")),
            Sentence::symbol("r"),
        ];

        let before = queries
            .iter()
            .map(|query| ctx.entails(&knowledge, query))
            .collect::<Vec<_>>();

        knowledge.tell(Sentence::symbol("p"));
        assert_eq!(knowledge.len(), 3);

        let after = queries
            .iter()
            .map(|query| ctx.entails(&knowledge, query))
            .collect::<Vec<_>>();

        assert_eq!(before, after);
        assert_eq!(before, vec![Ok(true), Ok(false), Ok(false)]);
    }

    #[test]
    fn representations_agree() {
        let mut ctx = Context::default();

        let told = vec![
            Sentence::or([Sentence::symbol("a"), Sentence::symbol("b")]),
            Sentence::implies(Sentence::symbol("a"), Sentence::symbol("c")),
            Sentence::implies(Sentence::symbol("b"), Sentence::symbol("c")),
        ];

        let knowledge_base = KnowledgeBase::from(told.clone());
        let mut conjunction = Sentence::And(vec![]);
        for sentence in told {
            assert!(conjunction.add(sentence).is_ok());
        }

        assert_eq!(knowledge_base.symbols(), conjunction.symbols());

        for query in ["a", "b", "c"].map(Sentence::symbol) {
            assert_eq!(
                ctx.entails(&knowledge_base, &query),
                ctx.entails(&conjunction, &query)
            );
        }

        assert_eq!(ctx.entails(&knowledge_base, &Sentence::symbol("c")), Ok(true));
    }

    #[test]
    fn contradiction_told() {
        let mut ctx = Context::default();

        let mut knowledge = KnowledgeBase::new();
        knowledge.tell(Sentence::symbol("p"));
        assert_eq!(ctx.entails(&knowledge, &Sentence::symbol("q")), Ok(false));

        knowledge.tell(Sentence::not(Sentence::symbol("p")));
        assert_eq!(ctx.entails(&knowledge, &Sentence::symbol("q")), Ok(true));
        assert_eq!(ctx.satisfiable(&knowledge), Ok(false));
    }
}

mod configuration {

    use super::*;

    fn knowledge() -> Sentence {
        let a = Sentence::symbol("a");
        let b = Sentence::symbol("b");
        let c = Sentence::symbol("c");
        let d = Sentence::symbol("d");

        Sentence::and([
            Sentence::iff(a.clone(), Sentence::or([b.clone(), c.clone()])),
            Sentence::implies(c.clone(), d.clone()),
            Sentence::or([a, Sentence::not(d)]),
        ])
    }

    #[test]
    fn orders_agree() {
        let queries = [
            Sentence::symbol("a"),
            Sentence::implies(Sentence::symbol("c"), Sentence::symbol("a")),
            Sentence::implies(Sentence::symbol("d"), Sentence::symbol("a")),
            Sentence::symbol("e"),
        ];

        let mut expected = Vec::default();
        let mut base = Context::default();
        for query in &queries {
            expected.push(base.entails(&knowledge(), query));
        }

        for order in [SymbolOrder::KnowledgeFirst, SymbolOrder::Shuffled] {
            for seed in [0, 7, 91] {
                for split_depth in [0, 1, 3] {
                    let mut config = Config::default();
                    config.symbol_order.value = order;
                    config.seed.value = seed;
                    config.split_depth.value = split_depth;

                    let mut ctx = Context::from_config(config);
                    for (query, expectation) in queries.iter().zip(&expected) {
                        assert_eq!(&ctx.entails(&knowledge(), query), expectation);
                    }
                }
            }
        }
    }

    #[test]
    fn split_counterexample() {
        let mut config = Config::default();
        config.split_depth.value = 2;
        let mut ctx = Context::from_config(config);

        let knowledge = knowledge();
        let query = Sentence::symbol("b");

        let counterexample = ctx.counterexample(&knowledge, &query).unwrap();
        let Some(model) = counterexample else {
            panic!("Missing counterexample");
        };

        assert_eq!(knowledge.evaluate(&model), Ok(true));
        assert_eq!(query.evaluate(&model), Ok(false));
    }
}
