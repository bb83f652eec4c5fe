#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use otter_logic::{
    context::Context,
    structures::{sentence::Sentence, valuation::valuation_string},
};

mod config_io;
mod misc;
mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(note) => {
            println!("c {note}");
            std::process::exit(1);
        }
    };
    let config_io = parse::config::config_io_from_args(&matches);

    let mut the_context = Context::from_config(config);

    println!("c Reading knowledge from {:?}", config_io.knowledge);

    let knowledge = match misc::load_knowledge(&the_context, &config_io.knowledge) {
        Ok(knowledge) => knowledge,
        Err(e) => {
            println!("c Error loading knowledge: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c Read {} sentences over {} symbols",
        knowledge.len(),
        knowledge.symbols().len()
    );

    if config_io.formula {
        println!("c {}", knowledge.formula());
    }

    let mut all_entailed = true;

    for query_text in &config_io.queries {
        let query = match query_text.parse::<Sentence>() {
            Ok(query) => query,
            Err(e) => {
                println!("c Failed to parse query '{query_text}': {e:?}");
                std::process::exit(1);
            }
        };

        match the_context.counterexample(&knowledge, &query) {
            Ok(None) => println!("s ENTAILED {query}"),

            Ok(Some(model)) => {
                all_entailed = false;
                println!("s NOT ENTAILED {query}");
                if config_io.counterexample {
                    println!("v {}", valuation_string(&model));
                }
            }

            Err(e) => {
                println!("c Check error: {e:?}");
                std::process::exit(2);
            }
        }
    }

    if config_io.classify {
        let mut symbols = knowledge.symbols().into_iter().collect::<Vec<_>>();
        symbols.sort_unstable();

        match the_context.classify_all(&knowledge, symbols) {
            Ok(classifications) => {
                for (symbol, classification) in classifications {
                    misc::print_classification(&symbol, classification);
                }
            }

            Err(e) => {
                println!("c Classification error: {e:?}");
                std::process::exit(2);
            }
        }
    }

    if config_io.models {
        match the_context.satisfying_models(&knowledge) {
            Ok(models) => {
                for model in &models {
                    println!("v {}", valuation_string(model));
                }
                println!("c {} models", models.len());
            }

            Err(e) => {
                println!("c Model error: {e:?}");
                std::process::exit(2);
            }
        }
    }

    if config_io.stats {
        let counters = &the_context.counters;
        println!("c Model checks:       {}", counters.model_checks);
        println!("c Models examined:    {}", counters.models_examined);
        println!("c Counterexamples:    {}", counters.counterexamples);
        println!("c Time:               {:.2?}", counters.time);
    }

    match all_entailed {
        true => std::process::exit(10),
        false => std::process::exit(20),
    }
}
