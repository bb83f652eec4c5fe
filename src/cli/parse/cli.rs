use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use otter_logic::config::{Config, SymbolOrder};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("otter_logic")
        .about("Determines what follows from some knowledge written in propositional logic")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("knowledge")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("A file of knowledge, with one sentence to a line.")
            .long_help("A file of knowledge, with one sentence to a line.

Blank lines and lines beginning with '#' are skipped.
Sentences may be written with the glyphs ¬ ∧ ∨ → ↔ or with ~ & | -> <->."))

        .arg(Arg::new("query")
            .short('q')
            .long("query")
            .action(ArgAction::Append)
            .num_args(1)
            .help("A sentence to check for entailment by the knowledge. May be given more than once."))

        .arg(Arg::new("classify")
            .short('c')
            .long("classify")
            .action(ArgAction::SetTrue)
            .help("Classify each symbol of the knowledge as YES (entailed), NO (negation entailed), or MAYBE."))

        .arg(Arg::new("counterexample")
            .long("counterexample")
            .action(ArgAction::SetTrue)
            .help("Display a counterexample to each query which is not entailed."))

        .arg(Arg::new("models")
            .short('m')
            .long("models")
            .action(ArgAction::SetTrue)
            .help("Display every model of the knowledge."))

        .arg(Arg::new("formula")
            .short('f')
            .long("formula")
            .action(ArgAction::SetTrue)
            .help("Display the knowledge as a single formula."))

        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .help("Display counts of the work done."))

        .arg(Arg::new("symbol_order")
            .value_name("ORDER")
            .long("symbol-order")
            .value_parser(clap::builder::ValueParser::new(symbol_order_parser))
            .num_args(1)
            .help(format!("The order in which symbols are given values.
Default: {}", defaults.symbol_order.value))
            .long_help(format!("The order in which symbols are given values.
Default: {}

  - Lexicographic : Order symbols by name.
  - KnowledgeFirst: Order symbols of the knowledge before symbols only in a query.
  - Shuffled      : Order symbols by a shuffle, see --seed.", defaults.symbol_order.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help(format!("The seed used when shuffling symbols.
Default: {}", defaults.seed.value)))

        .arg(Arg::new("split_depth")
            .long("split-depth")
            .short('s')
            .value_parser(value_parser!(u8))
            .num_args(1)
            .help(format!("The count of symbols to split checks on, with one thread for each way of valuing the symbols.
Default: {}", defaults.split_depth.value)))
}

fn symbol_order_parser(arg: &str) -> Result<SymbolOrder, std::io::Error> {
    arg.parse::<SymbolOrder>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown symbol order")
    })
}
