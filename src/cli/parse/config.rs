use clap::ArgMatches;

use otter_logic::config::{Config, SplitDepth, SymbolOrder};

use crate::config_io::ConfigIO;

/// A config from the arguments, or a note of the first argument out of bounds.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, String> {
    let mut the_config = Config::default();

    if let Ok(Some(order)) = args.try_get_one::<SymbolOrder>("symbol_order") {
        the_config.symbol_order.value = *order
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.value = *seed
    };

    if let Ok(Some(depth)) = args.try_get_one::<SplitDepth>("split_depth") {
        if !the_config.split_depth.set(*depth) {
            let (min, max) = the_config.split_depth.min_max();
            return Err(format!("split_depth requires a value between {min} and {max}"));
        }
    };

    Ok(the_config)
}

pub fn config_io_from_args(args: &ArgMatches) -> ConfigIO {
    let mut config_io = ConfigIO::default();

    if let Ok(Some(path)) = args.try_get_one::<std::path::PathBuf>("knowledge") {
        config_io.knowledge = path.clone();
    }

    if let Ok(Some(queries)) = args.try_get_many::<String>("query") {
        config_io.queries = queries.cloned().collect();
    }

    config_io.classify = args.get_flag("classify");
    config_io.counterexample = args.get_flag("counterexample");
    config_io.models = args.get_flag("models");
    config_io.formula = args.get_flag("formula");
    config_io.stats = args.get_flag("stats");

    config_io
}
