//! Placeholder templates for email and phone patterns.
//!
//! A pattern such as `{first}.{last}@{domain}` is parsed once into literal and
//! placeholder segments. Rendering walks the segments in order and never
//! rescans substituted text, so a value that itself contains `{l}` is emitted
//! verbatim.

use std::fmt;

/// Placeholders accepted in email patterns.
pub const EMAIL_PLACEHOLDERS: &[&str] = &["first", "last", "f", "l", "domain", "random"];

/// Placeholders accepted in phone patterns.
pub const PHONE_PLACEHOLDERS: &[&str] = &["intl", "area", "subscriber"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated placeholder in pattern '{0}'")]
    Unterminated(String),

    #[error("empty placeholder in pattern '{0}'")]
    EmptyPlaceholder(String),

    #[error("unknown placeholder {{{name}}} in pattern '{pattern}'")]
    UnknownPlaceholder { name: String, pattern: String },

    #[error("no value bound for placeholder {{{0}}}")]
    Unbound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| TemplateError::Unterminated(pattern.to_string()))?;
            let name = &after[..close];
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder(pattern.to_string()));
            }
            if name.contains('{') {
                return Err(TemplateError::Unterminated(pattern.to_string()));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// Parse and reject placeholders outside `allowed`.
    pub fn parse_restricted(pattern: &str, allowed: &[&str]) -> Result<Self, TemplateError> {
        let template = Self::parse(pattern)?;
        if let Some(name) = template.placeholders().find(|p| !allowed.contains(p)) {
            return Err(TemplateError::UnknownPlaceholder {
                name: name.to_string(),
                pattern: pattern.to_string(),
            });
        }
        Ok(template)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute every placeholder from `bindings`. Fails if any placeholder
    /// has no binding, so the output never contains an unresolved token.
    pub fn render(&self, bindings: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = bindings
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| TemplateError::Unbound(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
