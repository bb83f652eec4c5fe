use std::str::FromStr;

/// The order in which symbols are given values during a model check.
///
/// As every combination of values is examined, the order has no effect on the result of a check.
/// Though, the order may have an effect on how soon a counterexample is found, and which counterexample is found first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolOrder {
    /// Symbols are ordered by name.
    Lexicographic = 0,

    /// Symbols of the knowledge are ordered before symbols only in the query, and otherwise by name.
    KnowledgeFirst,

    /// Symbols are ordered by a shuffle, seeded by the configured seed.
    Shuffled,
}

impl std::fmt::Display for SymbolOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexicographic => write!(f, "Lexicographic"),
            Self::KnowledgeFirst => write!(f, "KnowledgeFirst"),
            Self::Shuffled => write!(f, "Shuffled"),
        }
    }
}

impl SymbolOrder {
    /// The minimum SymbolOrder type.
    pub const MIN: SymbolOrder = SymbolOrder::Lexicographic;

    /// The maximum SymbolOrder type.
    pub const MAX: SymbolOrder = SymbolOrder::Shuffled;
}

impl FromStr for SymbolOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lexicographic" | "lexicographic" => Ok(Self::Lexicographic),

            "KnowledgeFirst" | "knowledge_first" => Ok(Self::KnowledgeFirst),

            "Shuffled" | "shuffled" => Ok(Self::Shuffled),

            _unkown_string => Err(()),
        }
    }
}
