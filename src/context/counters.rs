use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counts accumulate over every check made with a context, until [reset](crate::context::Context::reset_counters).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every call for a model check, including those made to classify a sentence.
    pub model_checks: usize,

    /// A count of every full valuation examined.
    pub models_examined: usize,

    /// A count of the model checks which found a counterexample.
    pub counterexamples: usize,

    /// The time taken examining models.
    pub time: Duration,
}
