use crate::config::{ErrorPolicy, GeneratorConfig};
use crate::error::{UttergenError, UttergenResult};
use crate::interface::{Intents, Templates, UtteranceInterface};
use crate::template::Template;

/// `CorpusGenerator` is the primary implementation of [`UtteranceInterface`].
///
/// It expands every template of every intent and assembles the corpus, applying
/// its [`GeneratorConfig`] to invalid input and malformed templates.
///
/// # Examples
///
/// ```
/// use uttergen::{CorpusGenerator, Intents, UtteranceInterface};
///
/// let mut intents = Intents::new();
/// intents.insert("Intent1", "go (left|right)");
///
/// let corpus = CorpusGenerator::new().generate(&intents).unwrap();
/// assert_eq!(corpus, "Intent1 go left\nIntent1 go right\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorpusGenerator {
    config: GeneratorConfig,
}

impl CorpusGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The policies this generator applies.
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Applies the invalid input policy: `Ok(())` means skip and carry on.
    fn reject_input(&self, reason: String) -> UttergenResult<()> {
        match self.config.invalid_input {
            ErrorPolicy::Skip => {
                tracing::warn!(%reason, "skipping invalid input");
                Ok(())
            }
            ErrorPolicy::Fail => Err(UttergenError::invalid_input(reason)),
        }
    }

    /// Expands one template into `phrases`, applying the malformed template
    /// policy.
    fn expand_template(
        &self,
        intent: Option<&str>,
        template: &str,
        phrases: &mut Vec<String>,
    ) -> UttergenResult<()> {
        match Template::new(template).and_then(|t| t.expand()) {
            Ok(expanded) => {
                phrases.extend(expanded);
                Ok(())
            }
            Err(error) => match self.config.malformed_template {
                ErrorPolicy::Skip => {
                    tracing::warn!(intent, template, %error, "skipping malformed template");
                    Ok(())
                }
                ErrorPolicy::Fail => Err(error),
            },
        }
    }

    fn expand_intent(&self, intent: Option<&str>, templates: &Templates) -> UttergenResult<Vec<String>> {
        let mut phrases = Vec::new();
        for template in templates.iter() {
            self.expand_template(intent, template, &mut phrases)?;
        }
        Ok(phrases)
    }

    /// Writes the corpus for `entries`, where `None` marks an intent that was
    /// skipped as invalid. Every position but the last is followed by a blank
    /// line, except skipped ones which contribute nothing at all.
    fn assemble<'i, I>(&self, entries: I) -> UttergenResult<String>
    where
        I: ExactSizeIterator<Item = (&'i str, Option<&'i Templates>)>,
    {
        let total = entries.len();
        let mut corpus = String::new();

        for (position, (intent, templates)) in entries.enumerate() {
            let Some(templates) = templates else {
                continue;
            };

            let phrases = self.expand_intent(Some(intent), templates)?;
            tracing::debug!(intent, phrases = phrases.len(), "expanded intent");

            for phrase in &phrases {
                corpus.push_str(intent);
                corpus.push(' ');
                corpus.push_str(phrase);
                corpus.push('\n');
            }
            if position < total.saturating_sub(1) {
                corpus.push('\n');
            }
        }

        Ok(corpus)
    }

    /// Generates a corpus from loosely typed JSON, e.g. a configuration file
    /// mapping intent names to a template or a list of templates.
    ///
    /// Non-conforming input is handled by the invalid input policy: with
    /// [`ErrorPolicy::Skip`] a non-object value yields an empty corpus and bad
    /// intents or list entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns `UttergenError::InvalidInput` under [`ErrorPolicy::Fail`] and
    /// `UttergenError::MalformedTemplate` as for [`UtteranceInterface::generate`].
    #[cfg(feature = "serde")]
    pub fn generate_json(&self, value: &serde_json::Value) -> UttergenResult<String> {
        use serde_json::Value;

        let Value::Object(map) = value else {
            self.reject_input(format!("expected an object of intents, found {}", json_kind(value)))?;
            return Ok(String::new());
        };
        if map.is_empty() {
            self.reject_input("no intents given".to_string())?;
            return Ok(String::new());
        }

        let mut entries = Vec::with_capacity(map.len());
        for (intent, templates) in map {
            let templates = match templates {
                Value::String(template) => Some(Templates::One(template.clone())),
                Value::Array(items) => {
                    let mut collected = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(template) => collected.push(template.clone()),
                            other @ (Value::Null
                            | Value::Bool(_)
                            | Value::Number(_)
                            | Value::Array(_)
                            | Value::Object(_)) => self.reject_input(format!(
                                "intent '{intent}' lists a {} where a template string was expected",
                                json_kind(other)
                            ))?,
                        }
                    }
                    Some(Templates::Many(collected))
                }
                other @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::Object(_)) => {
                    self.reject_input(format!(
                        "intent '{intent}' maps to a {}, expected a template or list of templates",
                        json_kind(other)
                    ))?;
                    None
                }
            };
            entries.push((intent.as_str(), templates));
        }

        self.assemble(entries.iter().map(|(intent, templates)| (*intent, templates.as_ref())))
    }
}

#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl UtteranceInterface for CorpusGenerator {
    fn expand(&self, templates: &Templates) -> UttergenResult<Vec<String>> {
        self.expand_intent(None, templates)
    }

    fn generate(&self, intents: &Intents) -> UttergenResult<String> {
        if intents.is_empty() {
            self.reject_input("no intents given".to_string())?;
            return Ok(String::new());
        }
        self.assemble(intents.iter().map(|(intent, templates)| (intent, Some(templates))))
    }
}
