use indexmap::IndexMap;

/// The phrase template(s) registered under a single intent.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Templates {
    One(String),
    Many(Vec<String>),
}

impl Templates {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let templates: &[String] = match self {
            Self::One(template) => std::slice::from_ref(template),
            Self::Many(templates) => templates,
        };
        templates.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(templates) => templates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Templates {
    fn from(template: &str) -> Self {
        Self::One(template.to_string())
    }
}

impl From<String> for Templates {
    fn from(template: String) -> Self {
        Self::One(template)
    }
}

impl From<Vec<String>> for Templates {
    fn from(templates: Vec<String>) -> Self {
        Self::Many(templates)
    }
}

impl From<Vec<&str>> for Templates {
    fn from(templates: Vec<&str>) -> Self {
        Self::Many(templates.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Templates {
    fn from(templates: [&str; N]) -> Self {
        Self::Many(templates.into_iter().map(str::to_string).collect())
    }
}

/// An insertion-ordered mapping from intent name to its templates.
///
/// Corpus lines are emitted in the order intents were first inserted.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intents {
    data: IndexMap<String, Templates>,
}

impl Intents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `templates` under `name`. Re-inserting an intent replaces its
    /// templates but keeps its original position.
    pub fn insert<N: AsRef<str>, T: Into<Templates>>(&mut self, name: N, templates: T) -> &mut Self {
        self.data.insert(name.as_ref().to_string(), templates.into());
        self
    }

    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&Templates> {
        self.data.get(name.as_ref())
    }

    pub fn contains<N: AsRef<str>>(&self, name: N) -> bool {
        self.data.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Templates)> {
        self.data.iter().map(|(name, templates)| (name.as_str(), templates))
    }
}

impl<N: AsRef<str>, T: Into<Templates>> FromIterator<(N, T)> for Intents {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut intents = Self::new();
        for (name, templates) in iter {
            intents.insert(name, templates);
        }
        intents
    }
}

/// `UtteranceInterface` turns phrase templates into sample utterances for
/// intent-based language understanding models.
pub trait UtteranceInterface {
    /// `expand` expands each template in order and concatenates the phrases,
    /// without deduplication.
    ///
    /// # Errors
    /// - If a template is malformed and the implementation does not skip it.
    fn expand(&self, templates: &Templates) -> crate::UttergenResult<Vec<String>>;

    /// `generate` builds the corpus: one `"<intent> <phrase>\n"` line per
    /// expanded phrase, intents in insertion order, with a blank line between
    /// consecutive intents.
    ///
    /// # Errors
    /// - If `intents` is empty and the implementation rejects invalid input.
    /// - If a template is malformed and the implementation does not skip it.
    fn generate(&self, intents: &Intents) -> crate::UttergenResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ntest::timeout(100)]
    fn test_templates_iter() {
        let one = Templates::from("go (left|right)");
        assert_eq!(one.iter().collect::<Vec<_>>(), vec!["go (left|right)"]);
        assert_eq!(one.len(), 1);

        let many = Templates::from(["a", "b"]);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(Templates::Many(vec![]).is_empty());
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_intents_keep_insertion_order() {
        let mut intents = Intents::new();
        intents
            .insert("Zeta", "z")
            .insert("Alpha", "a")
            .insert("Mid", vec!["m1", "m2"]);

        let names: Vec<_> = intents.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert!(intents.contains("Mid"));
        assert_eq!(intents.get("Alpha"), Some(&Templates::One("a".to_string())));
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_reinsert_keeps_position() {
        let mut intents: Intents = [("First", "one"), ("Second", "two")].into_iter().collect();
        intents.insert("First", "uno");

        let mut entries = intents.iter();
        assert_eq!(entries.next(), Some(("First", &Templates::from("uno"))));
        assert_eq!(entries.next().map(|(name, _)| name), Some("Second"));
        assert_eq!(intents.len(), 2);
    }
}
