use std::{fs::File, io::BufReader, path::Path};

use crossterm::style::Stylize;

use otter_logic::{
    context::Context, db::knowledge::KnowledgeBase, reports::Classification,
    structures::symbol::Symbol, types::err,
};

pub fn load_knowledge(context: &Context, path: &Path) -> Result<KnowledgeBase, err::ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open knowledge file {path:?}");
            std::process::exit(1);
        }
    };

    context.read_knowledge(BufReader::new(&file))
}

pub fn print_classification(symbol: &Symbol, classification: Classification) {
    let note = classification.to_string();
    match classification {
        Classification::Proved => println!("{symbol}: {}", note.green()),
        Classification::Refuted => println!("{symbol}: {}", note.red()),
        Classification::Undetermined => println!("{symbol}: {}", note.yellow()),
    }
}
