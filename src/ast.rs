use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Text emitted verbatim, including groups that are not expansion points
    /// such as `{Name}` or `(two words)`.
    Word(&'a str),
    /// A parenthesized group such as `(a|b|c)` or `(|the)`.
    ///
    /// Only non-empty alternatives are kept, so a single entry means the group
    /// is optional.
    Alternation {
        raw: &'a str,
        alternatives: Vec<&'a str>,
    },
    /// A slot group such as `{(one|two)|PartySize}`.
    ///
    /// `annotation` is everything between the alternation list and the closing
    /// brace, e.g. `|PartySize`.
    Slot {
        raw: &'a str,
        alternatives: Vec<&'a str>,
        annotation: &'a str,
    },
}

fn render_slot(alternative: &str, annotation: &str) -> String {
    format!("{{{alternative}{annotation}}}")
}

impl<'a> Token<'a> {
    /// The token exactly as it appeared in the template.
    pub(crate) fn raw(&self) -> &'a str {
        match self {
            Self::Word(raw) | Self::Alternation { raw, .. } | Self::Slot { raw, .. } => *raw,
        }
    }

    /// The substitutions this token resolves to, in branch order.
    ///
    /// `None` inside the list stands for the branch where the token is
    /// omitted entirely. Returns `None` for plain words.
    pub(crate) fn branches(&self) -> Option<Vec<Option<Cow<'a, str>>>> {
        match self {
            Self::Word(_) => None,
            Self::Alternation { alternatives, .. } => {
                let mut branches: Vec<_> = alternatives
                    .iter()
                    .map(|alternative| Some(Cow::Borrowed(*alternative)))
                    .collect();
                if alternatives.len() == 1 {
                    branches.push(None);
                }
                Some(branches)
            }
            Self::Slot {
                alternatives,
                annotation,
                ..
            } => Some(
                alternatives
                    .iter()
                    .map(|alternative| Some(Cow::Owned(render_slot(alternative, annotation))))
                    .collect(),
            ),
        }
    }

    /// The final text of a slot with exactly one alternative and no nested
    /// groups, which can be substituted without branching or re-scanning.
    pub(crate) fn resolve_in_place(&self) -> Option<String> {
        let Self::Slot {
            alternatives,
            annotation,
            ..
        } = self
        else {
            return None;
        };
        let [alternative] = alternatives.as_slice() else {
            return None;
        };

        let nested = |text: &str| text.contains(['(', '{']);
        (!nested(*alternative) && !nested(*annotation)).then(|| render_slot(alternative, annotation))
    }
}
