//! Types used throughout the library which are not structures.

pub mod err;
