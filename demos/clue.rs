use otter_logic::{
    context::Context,
    reports::Classification,
    structures::{sentence::Sentence, symbol::Symbol},
};

/// A game of Clue, with three suspects, three rooms, and three weapons.
///
/// The knowledge begins as a conjunction and is grown as cards are seen.
fn main() {
    let characters = ["ColMustard", "ProfPlum", "MsScarlet"].map(Symbol::new);
    let rooms = ["Ballroom", "Kitchen", "Library"].map(Symbol::new);
    let weapons = ["Knife", "Revolver", "Rope"].map(Symbol::new);

    let one_of = |symbols: &[Symbol]| Sentence::or(symbols.iter().map(Sentence::from));

    let mut knowledge = Sentence::and([one_of(&characters), one_of(&rooms), one_of(&weapons)]);

    let [mustard, plum, scarlet] = characters.clone();
    let [ballroom, kitchen, library] = rooms.clone();
    let [_, revolver, rope] = weapons.clone();

    let seen = [
        !mustard,
        !kitchen,
        !revolver,
        Sentence::or([!scarlet, !library, !rope]),
        !plum,
        !ballroom,
    ];

    for sentence in seen {
        if let Err(e) = knowledge.add(sentence) {
            println!("Failed to add knowledge: {e:?}");
            return;
        }
    }

    let mut the_context = Context::default();

    let symbols = characters.into_iter().chain(rooms).chain(weapons);
    let classifications = match the_context.classify_all(&knowledge, symbols) {
        Ok(classifications) => classifications,
        Err(e) => {
            println!("Check error: {e:?}");
            return;
        }
    };

    for (symbol, classification) in classifications {
        match classification {
            Classification::Refuted => {}
            _ => println!("{symbol}: {classification}"),
        }
    }
}
