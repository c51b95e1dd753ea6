//! Generates sample utterance corpora for intent-based language understanding
//! models from compact phrase templates.
//!
//! ```
//! use uttergen::Intents;
//!
//! let mut intents = Intents::new();
//! intents.insert("PlayMusic", "play (|some) (rock|jazz)");
//!
//! assert_eq!(
//!     uttergen::generate(&intents).unwrap(),
//!     "PlayMusic play some rock\nPlayMusic play some jazz\nPlayMusic play rock\nPlayMusic play jazz\n"
//! );
//! ```

mod ast;
mod config;
mod error;
mod generator;
mod interface;
mod parser;
mod template;

// Public exports.
pub use config::{ErrorPolicy, GeneratorConfig};
pub use error::{ParseError, ParseErrorKind, UttergenError, UttergenResult};
pub use generator::CorpusGenerator;
pub use interface::{Intents, Templates, UtteranceInterface};
pub use template::Template;

/// Expands a single phrase template into every phrase it denotes.
///
/// # Errors
///
/// Returns `UttergenError::MalformedTemplate` if the template cannot be scanned.
pub fn expand<T: AsRef<str>>(template: T) -> UttergenResult<Vec<String>> {
    Template::new(template.as_ref())?.expand()
}

/// Expands each template in order and concatenates the results.
///
/// Fails on the first malformed template; use a [`CorpusGenerator`] to skip them
/// instead.
///
/// # Errors
///
/// Returns `UttergenError::MalformedTemplate` if any template cannot be scanned.
pub fn expand_all<I>(templates: I) -> UttergenResult<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut phrases = Vec::new();
    for template in templates {
        phrases.extend(expand(template)?);
    }
    Ok(phrases)
}

/// Generates a corpus with the default, tolerant [`GeneratorConfig`].
///
/// # Errors
///
/// None in practice: the default configuration skips empty input and
/// malformed templates.
pub fn generate(intents: &Intents) -> UttergenResult<String> {
    CorpusGenerator::new().generate(intents)
}
