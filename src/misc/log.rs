/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [model checking](crate::procedures::model_check)
    pub const MODEL_CHECK: &str = "model_check";

    /// Logs related to [classification](crate::procedures::classify)
    pub const CLASSIFY: &str = "classify";

    /// Logs related to the [knowledge base](crate::db::knowledge)
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
