/*!
Reports for the context.
*/

/// The status of a sentence with respect to some knowledge, as determined by two model checks.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Classification {
    /// The knowledge entails the sentence.
    Proved,

    /// The knowledge entails the negation of the sentence, and not the sentence.
    Refuted,

    /// The knowledge entails neither the sentence nor the negation of the sentence.
    Undetermined,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "YES"),
            Self::Refuted => write!(f, "NO"),
            Self::Undetermined => write!(f, "MAYBE"),
        }
    }
}
