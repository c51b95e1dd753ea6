/// What the generator does when it meets input it cannot use.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorPolicy {
    /// Log a warning, drop the offending item and keep generating.
    #[default]
    Skip,
    /// Abort generation and return the error.
    Fail,
}

/// Configuration for a [`CorpusGenerator`](crate::CorpusGenerator).
///
/// The default skips bad input and malformed templates so one broken intent
/// never costs the rest of the corpus.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct GeneratorConfig {
    /// Applies to empty or non-mapping input, intent values that are not a
    /// string or list of strings, and non-string list entries.
    pub invalid_input: ErrorPolicy,
    /// Applies to templates that fail to scan or expand.
    pub malformed_template: ErrorPolicy,
}

impl GeneratorConfig {
    /// Fails on the first invalid input or malformed template.
    pub const fn strict() -> Self {
        Self {
            invalid_input: ErrorPolicy::Fail,
            malformed_template: ErrorPolicy::Fail,
        }
    }

    pub const fn with_invalid_input(mut self, policy: ErrorPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    pub const fn with_malformed_template(mut self, policy: ErrorPolicy) -> Self {
        self.malformed_template = policy;
        self
    }
}
