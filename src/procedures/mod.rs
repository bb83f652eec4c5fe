//! Various procedures for examining knowledge.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod classify;
pub mod examine;
pub mod model_check;
pub mod models;
