//! Databases for holding information relevant to a model check.
//!
//! For the moment, this is limited to [knowledge], the sentences which are taken to be true.

pub mod knowledge;
