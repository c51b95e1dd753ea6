use std::borrow::Cow;

use crate::ast::Token;
use crate::error::{UttergenError, UttergenResult};
use crate::parser::{normalize, tokenize};

/// A Template is a validated phrase template that can be expanded into every
/// concrete phrase it denotes.
///
/// Templates are made of whitespace separated words, alternation groups such as
/// `(a|b|c)`, optional groups such as `(|the)` and slot groups such as
/// `{(one|two)|PartySize}`.
///
/// # Example
///
/// ```rust
/// use uttergen::Template;
///
/// let template = Template::new("turn (|the) light (on|off)").unwrap();
/// assert_eq!(
///     template.expand().unwrap(),
///     vec![
///         "turn the light on",
///         "turn the light off",
///         "turn light on",
///         "turn light off",
///     ]
/// );
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template<'a> {
    content: Cow<'a, str>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template<'_> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct TemplateHelper {
            content: String,
        }

        let helper = TemplateHelper::deserialize(deserializer)?;
        Template::new(helper.content)
            .map_err(|e| serde::de::Error::custom(format!("Failed to parse template: {}", e)))
    }
}

impl<'c> Template<'c> {
    /// Creates a new template, normalizing single-word groups and checking
    /// that the top level of the template scans cleanly.
    ///
    /// # Errors
    ///
    /// Returns `UttergenError::MalformedTemplate` for unbalanced brackets or a
    /// group with no non-empty alternatives.
    pub fn new<T: Into<Cow<'c, str>>>(content: T) -> UttergenResult<Self> {
        let content: Cow<'c, str> = content.into();
        let content = if let Cow::Owned(normalized) = normalize(&content) {
            Cow::Owned(normalized)
        } else {
            content
        };

        tokenize(&content).map_err(|error| UttergenError::MalformedTemplate {
            template: content.to_string(),
            error,
        })?;

        Ok(Self { content })
    }

    /// The normalized template text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Expands the template into every phrase it denotes.
    ///
    /// Groups are resolved leftmost first and every branch is re-scanned, so
    /// multiple groups produce their full cross product. Alternatives come
    /// before the omitted branch of an optional group.
    ///
    /// # Errors
    ///
    /// Returns `UttergenError::MalformedTemplate` when a nested group turns
    /// out to be malformed once its enclosing group has been resolved.
    pub fn expand(&self) -> UttergenResult<Vec<String>> {
        let mut phrases = Vec::new();
        // Branches are pushed in reverse so they pop in generation order.
        let mut pending = vec![self.content.to_string()];

        while let Some(candidate) = pending.pop() {
            match step(&candidate)? {
                Step::Phrase(phrase) => phrases.push(phrase),
                Step::Branches(branches) => pending.extend(branches.into_iter().rev()),
            }
        }
        Ok(phrases)
    }
}

/// The outcome of resolving the leftmost branching group of a candidate.
enum Step {
    /// No group left: the candidate is a finished phrase.
    Phrase(String),
    /// Candidates to re-scan, in order.
    Branches(Vec<String>),
}

fn step(text: &str) -> UttergenResult<Step> {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized).map_err(|error| UttergenError::MalformedTemplate {
        template: normalized.to_string(),
        error,
    })?;

    let mut head: Vec<Cow<'_, str>> = Vec::with_capacity(tokens.len());
    let mut rebuilt = false;
    let mut remaining = tokens.iter();

    while let Some(token) = remaining.next() {
        if let Some(resolved) = token.resolve_in_place() {
            head.push(Cow::Owned(resolved));
            rebuilt = true;
            continue;
        }
        let Some(branches) = token.branches() else {
            head.push(Cow::Borrowed(token.raw()));
            continue;
        };

        tracing::trace!(
            group = token.raw(),
            branches = branches.len(),
            "expanding group"
        );

        let tail: Vec<&str> = remaining.map(Token::raw).collect();
        let candidates = branches
            .iter()
            .map(|branch| rebuild(&head, branch.as_deref(), &tail))
            .collect();
        return Ok(Step::Branches(candidates));
    }

    if rebuilt {
        Ok(Step::Phrase(head.join(" ")))
    } else {
        Ok(Step::Phrase(normalized.to_string()))
    }
}

/// Joins the phrase back together around a substituted group, leaving the
/// group out when `replacement` is `None`.
fn rebuild(head: &[Cow<'_, str>], replacement: Option<&str>, tail: &[&str]) -> String {
    head.iter()
        .map(AsRef::as_ref)
        .chain(replacement)
        .chain(tail.iter().copied())
        .collect::<Vec<&str>>()
        .join(" ")
}
