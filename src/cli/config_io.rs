use std::path::PathBuf;

/// Configuration of input and output, as distinct from the configuration of a context.
#[derive(Clone, Default)]
pub struct ConfigIO {
    pub knowledge: PathBuf,
    pub queries: Vec<String>,
    pub classify: bool,
    pub counterexample: bool,
    pub models: bool,
    pub formula: bool,
    pub stats: bool,
}
