use std::borrow::Cow;

use crate::{
    ast::Token,
    error::{ParseError, ParseErrorKind},
};

type ParseResult<T> = Result<T, ParseError>;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces every single-word group `(word)` with the bare `word`.
///
/// This is a single left-to-right pass, so `((foo))` becomes `(foo)`. The
/// input is borrowed untouched when there is nothing to replace.
pub(crate) fn normalize(input: &str) -> Cow<'_, str> {
    let mut output = String::new();
    let mut rest = input;
    let mut replaced = false;

    while let Some((before, after)) = rest.split_once('(') {
        let word_end = after
            .find(|c: char| !is_word_char(c))
            .unwrap_or(after.len());
        let (word, tail) = after.split_at_checked(word_end).unwrap_or((after, ""));

        output.push_str(before);
        if let Some(tail) = tail.strip_prefix(')').filter(|_| !word.is_empty()) {
            output.push_str(word);
            rest = tail;
            replaced = true;
        } else {
            output.push('(');
            rest = after;
        }
    }

    if replaced {
        output.push_str(rest);
        Cow::Owned(output)
    } else {
        Cow::Borrowed(input)
    }
}

/// Splits the inside of a group at pipes that are not nested in another group.
fn split_alternatives(inner: &str) -> Vec<&str> {
    let mut depth = 0usize;
    inner
        .split(|c: char| {
            match c {
                '(' | '{' => depth = depth.saturating_add(1),
                ')' | '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
            c == '|' && depth == 0
        })
        .collect()
}

/// The balanced group that opens `input`, brackets included.
fn leading_group(input: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (index, c) in input.char_indices() {
        match c {
            '(' | '{' => depth = depth.saturating_add(1),
            ')' | '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return input.get(..=index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Whether the inside of a literal group hides a group that would expand.
fn hides_expandable(inner: &str) -> bool {
    let mut depth = 0usize;
    inner.char_indices().any(|(index, c)| {
        let opens = matches!(c, '(' | '{');
        let expandable = opens
            && depth == 0
            && inner
                .get(index..)
                .and_then(leading_group)
                .is_some_and(|group| !matches!(classify(group), Ok(Token::Word(_))));

        match c {
            '(' | '{' => depth = depth.saturating_add(1),
            ')' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        expandable
    })
}

/// Trims the alternatives and drops the empty ones, failing if none are left.
fn non_empty<'a>(raw: &str, parts: Vec<&'a str>) -> Result<Vec<&'a str>, ParseErrorKind> {
    let alternatives: Vec<_> = parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if alternatives.is_empty() {
        return Err(ParseErrorKind::EmptyAlternation {
            group: raw.to_string(),
        });
    }
    Ok(alternatives)
}

/// A group that is not an expansion point, kept verbatim unless it hides one.
fn literal<'a>(raw: &'a str, inner: &str) -> Result<Token<'a>, ParseErrorKind> {
    if hides_expandable(inner) {
        return Err(ParseErrorKind::NestedGroupInWord {
            group: raw.to_string(),
        });
    }
    Ok(Token::Word(raw))
}

/// Decides what kind of token a balanced group is.
fn classify(raw: &str) -> Result<Token<'_>, ParseErrorKind> {
    if let Some(inner) = raw.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        let parts = split_alternatives(inner);
        if parts.len() < 2 {
            return literal(raw, inner);
        }
        let alternatives = non_empty(raw, parts)?;
        return Ok(Token::Alternation { raw, alternatives });
    }

    let Some(inner) = raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) else {
        return Ok(Token::Word(raw));
    };

    // A slot is `{(alternatives)annotation}` where the annotation holds a pipe.
    let slot = Some(inner)
        .filter(|inner| inner.starts_with('('))
        .and_then(leading_group)
        .and_then(|group| {
            let list = group.strip_prefix('(')?.strip_suffix(')')?;
            let annotation = inner.strip_prefix(group)?;
            Some((split_alternatives(list), annotation))
        })
        .filter(|(parts, annotation)| parts.len() >= 2 && annotation.contains('|'));

    let Some((parts, annotation)) = slot else {
        return literal(raw, inner);
    };
    Ok(Token::Slot {
        raw,
        alternatives: non_empty(raw, parts)?,
        annotation,
    })
}

struct Parser<'a> {
    /// Input not yet consumed.
    rest: &'a str,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column in characters (1-indexed)
    column: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn make_error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            column: self.column,
            kind,
        }
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character, tracking line and column.
    #[inline]
    fn advance(&mut self) {
        let mut chars = self.rest.chars();
        if let Some(current_char) = chars.next() {
            if current_char == '\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
            self.rest = chars.as_str();
        }
    }

    /// The text consumed since the parser was at `start`.
    fn consumed_since(&self, start: &'a str) -> &'a str {
        start.strip_suffix(self.rest).unwrap_or(start)
    }

    const fn eof(&self) -> bool {
        self.rest.is_empty()
    }

    fn consume_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes a run of text up to whitespace or the start of a group.
    fn parse_word(&mut self) -> ParseResult<&'a str> {
        let start = self.rest;
        while let Some(c) = self.peek_char() {
            match c {
                '(' | '{' => break,
                ')' | '}' => {
                    return Err(self.make_error(ParseErrorKind::UnmatchedClose { found: c }));
                }
                c if c.is_whitespace() => break,
                _ => self.advance(),
            }
        }
        Ok(self.consumed_since(start))
    }

    /// Consumes a balanced `(...)` or `{...}` run, whitespace included.
    fn parse_group(&mut self) -> ParseResult<&'a str> {
        let start = self.rest;
        let mut closers = Vec::new();

        loop {
            let Some(c) = self.peek_char() else {
                let expected = closers.last().copied().unwrap_or(')');
                return Err(self.make_error(ParseErrorKind::UnclosedGroup { expected }));
            };

            match c {
                '(' => closers.push(')'),
                '{' => closers.push('}'),
                ')' | '}' => {
                    let Some(expected) = closers.pop() else {
                        return Err(self.make_error(ParseErrorKind::UnmatchedClose { found: c }));
                    };
                    if expected != c {
                        return Err(self.make_error(ParseErrorKind::MismatchedClose {
                            expected,
                            found: c,
                        }));
                    }
                }
                _ => {}
            }
            self.advance();

            if closers.is_empty() {
                break;
            }
        }

        Ok(self.consumed_since(start))
    }

    fn parse_token(&mut self) -> ParseResult<Token<'a>> {
        if !matches!(self.peek_char(), Some('(' | '{')) {
            return self.parse_word().map(Token::Word);
        }

        let (line, column) = (self.line, self.column);
        let raw = self.parse_group()?;
        classify(raw).map_err(|kind| ParseError { line, column, kind })
    }
}

/// Splits an already normalized template into its token sequence.
pub(crate) fn tokenize(input: &str) -> ParseResult<Vec<Token<'_>>> {
    let mut parser = Parser::new(input);
    let mut tokens = Vec::new();

    loop {
        parser.consume_whitespace();
        if parser.eof() {
            break;
        }
        tokens.push(parser.parse_token()?);
    }

    Ok(tokens)
}
