//! A library for deciding whether some knowledge entails a query, where both are sentences of propositional logic.
//!
//! otter_logic represents sentences built from symbols with negation, conjunction, disjunction, implication, and biconditionals, evaluates sentences on valuations, and decides entailment by checking every valuation of the symbols involved.
//!
//! otter_logic is developed to help researchers, developers, or anyone curious, to investigate reasoning with propositional logic, and is intended as a reference against which cleverer methods may be compared.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [sentence](structures::sentence::Sentence).
//!
//! Sentences are built from [symbols](structures::symbol), either programatically or by [parsing](builder) text.
//! A collection of sentences taken to be true is [knowledge](db::knowledge), and either a knowledge base or a single sentence may be used as knowledge.
//!
//! A [context] holds configuration and counters, and through a context:
//! - [Entailment](procedures::model_check) of a query by some knowledge may be decided.
//! - A query may be [classified](procedures::classify) as proved, refuted, or undetermined by some knowledge.
//! - The [models](procedures::models) of some knowledge may be listed.
//!
//! Each of these is an [examination](procedures::examine) of every full valuation of some collection of symbols, and so takes time exponential in the count of symbols.
//!
//! Useful starting points, then, may be:
//! - The [model checking procedure](crate::procedures::model_check) to see how entailment is decided.
//! - The [structures] to familiarise yourself with sentences and valuations.
//! - The [configuration](crate::config) to see what may be varied.
//!
//! # Examples
//!
//! + Decide whether a conclusion follows.
//!
//! ```rust
//! # use otter_logic::model_check;
//! # use otter_logic::structures::sentence::Sentence;
//! let rain = Sentence::symbol("rain");
//! let hagrid = Sentence::symbol("hagrid");
//! let dumbledore = Sentence::symbol("dumbledore");
//!
//! let knowledge = Sentence::and([
//!     Sentence::implies(Sentence::not(rain.clone()), hagrid.clone()),
//!     Sentence::or([hagrid.clone(), dumbledore.clone()]),
//!     Sentence::not(Sentence::and([hagrid, dumbledore.clone()])),
//!     dumbledore,
//! ]);
//!
//! assert_eq!(model_check(&knowledge, &rain), Ok(true));
//! ```
//!
//! + Grow a knowledge base, and classify symbols.
//!
//! ```rust
//! # use otter_logic::context::Context;
//! # use otter_logic::db::knowledge::KnowledgeBase;
//! # use otter_logic::reports::Classification;
//! # use otter_logic::structures::{sentence::Sentence, symbol::Symbol};
//! let mut the_context = Context::default();
//! let mut knowledge = KnowledgeBase::new();
//!
//! let [x, y, z, w] = ["x", "y", "z", "w"].map(Symbol::new);
//!
//! knowledge.tell(Sentence::or([&x, &y, &z].map(Sentence::from)));
//! knowledge.tell(!y.clone());
//! knowledge.tell(!z.clone());
//!
//! let classifications = the_context.classify_all(&knowledge, [x, y, z, w]).unwrap();
//! let reports = classifications.iter().map(|(_, c)| *c).collect::<Vec<_>>();
//!
//! assert_eq!(
//!     reports,
//!     vec![
//!         Classification::Proved,
//!         Classification::Refuted,
//!         Classification::Refuted,
//!         Classification::Undetermined
//!     ]
//! );
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to model checks can be filtered with `RUST_LOG=model_check …` or,
//! - Logs of each sentence told to a knowledge base can be found with `RUST_LOG=knowledge=trace …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;

pub use procedures::model_check::model_check;
