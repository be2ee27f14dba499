//! Path templates and the variables they capture.
//!
//! A template is split on `/` once, at registration. Each segment is either a
//! literal, compared byte-for-byte, or a `{name}` placeholder that captures
//! one non-empty segment of the request path. The segment counts must agree,
//! so matching is always anchored at both ends:
//!
//! ```text
//! Template: /books/{id}
//!
//!  /books/1          match, id = "1"
//!  /books/dune       match, id = "dune"
//!  /books            no match
//!  /books/           no match
//!  /books/1/reviews  no match
//! ```
//!
//! There are no metacharacters. `.`, `+`, `(`, `^` and friends are ordinary
//! bytes, so `/v1.0/^users$` only ever matches that exact string.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::error::{Error, TemplateError};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Result<Self, TemplateError> {
        if !raw.contains(['{', '}']) {
            return Ok(Self::Literal(raw.to_owned()));
        }

        let Some(open) = raw.find('{') else {
            return Err(TemplateError::UnmatchedClose);
        };
        let Some(close) = raw[open..].find('}').map(|i| open + i) else {
            return Err(TemplateError::Unterminated);
        };
        if raw[..open].contains('}') {
            return Err(TemplateError::UnmatchedClose);
        }

        let name = &raw[open + 1..close];
        if name.contains('{') {
            return Err(TemplateError::Unterminated);
        }
        if open != 0 || close != raw.len() - 1 {
            return Err(TemplateError::PartialSegment);
        }
        if name.is_empty() {
            return Err(TemplateError::EmptyName);
        }

        Ok(Self::Param(name.to_owned()))
    }
}

/// A compiled route template.
///
/// Built once by [`PathPattern::compile`]; immutable afterwards and cheap to
/// test against any number of paths concurrently.
#[derive(Clone, Debug)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles `template`, rejecting malformed placeholder syntax.
    ///
    /// ```rust
    /// use pathwise::PathPattern;
    ///
    /// let pattern = PathPattern::compile("/books/{id}").unwrap();
    /// let vars = pattern.matches("/books/42").unwrap();
    /// assert_eq!(vars.get("id"), Some("42"));
    ///
    /// assert!(PathPattern::compile("/books/{id").is_err());
    /// ```
    pub fn compile(template: &str) -> Result<Self, Error> {
        let segments = template
            .split('/')
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| Error::template(template, reason))?;

        Ok(Self { template: template.to_owned(), segments })
    }

    /// The template this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Number of `{name}` placeholders in the template.
    pub fn param_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Param(_))).count()
    }

    /// Tests `path` against the whole pattern.
    ///
    /// `None` means "not this route" and is the common case, not a failure.
    /// A template without placeholders yields an empty [`PathVariables`] on
    /// success.
    pub fn matches(&self, path: &str) -> Option<PathVariables> {
        let mut parts = path.split('/');
        let mut vars = PathVariables::default();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    vars.insert(name.clone(), part.to_owned());
                }
            }
        }

        // Leftover path segments mean the template only matched a prefix.
        if parts.next().is_some() {
            return None;
        }
        Some(vars)
    }
}

/// Values captured by a route's `{name}` placeholders for one request.
///
/// Lives on the [`Request`](crate::Request) handed to the handler and is
/// dropped with it. Iteration order is unspecified.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathVariables(HashMap<String, String>);

impl PathVariables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // Duplicate names in one template: the later capture overwrites.
    fn insert(&mut self, name: String, value: String) {
        self.0.insert(name, value);
    }
}

impl IntoIterator for PathVariables {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
