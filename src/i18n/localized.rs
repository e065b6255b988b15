//! Deferred string formatting
//!
//! A [`LocalizedString`] is a lookup key plus an ordered list of
//! [`FormatArgs`]. Nothing is looked up or substituted until the string is
//! localized into a concrete language code.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use super::loader::LocaleStore;

/// Placeholder values applied in one formatting pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatArgs {
    pub positional: Vec<String>,
    pub named: BTreeMap<String, String>,
}

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a single named argument
    pub fn named(name: impl Into<String>, value: impl ToString) -> Self {
        Self::new().with(name, value)
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Add a named argument
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.named.insert(name.into(), value.to_string());
        self
    }

    /// Substitute placeholders in `template`
    ///
    /// `{{` and `}}` are escapes, `{}` takes the next positional argument,
    /// `{N}` the N-th one and `{name}` a named one. Anything after `:` or `!`
    /// inside the braces is ignored. Placeholders without a value and
    /// unterminated braces are copied through unchanged.
    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut next_auto = 0;
        let mut rest = template;

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                out.push('{');
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with("}}") {
                out.push('}');
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('}') {
                out.push('}');
                rest = &tail[1..];
                continue;
            }

            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return out;
            };
            let placeholder = &tail[..=close];
            let field = &tail[1..close];
            let field = field.split([':', '!']).next().unwrap_or_default();

            match self.lookup(field, &mut next_auto) {
                Some(value) => out.push_str(value),
                None => out.push_str(placeholder),
            }
            rest = &tail[close + 1..];
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, field: &str, next_auto: &mut usize) -> Option<&str> {
        if field.is_empty() {
            let index = *next_auto;
            *next_auto += 1;
            return self.positional.get(index).map(String::as_str);
        }
        if let Ok(index) = field.parse::<usize>() {
            return self.positional.get(index).map(String::as_str);
        }
        self.named.get(field).map(String::as_str)
    }
}

/// A lookup key with queued formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    key: String,
    formatters: Vec<FormatArgs>,
}

impl LocalizedString {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_formatters(key, Vec::new())
    }

    /// Create a string with an inherited formatter queue
    pub fn with_formatters(key: impl Into<String>, formatters: Vec<FormatArgs>) -> Self {
        Self {
            key: key.into(),
            formatters,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Queued formatting passes, in application order
    pub fn formatters(&self) -> &[FormatArgs] {
        &self.formatters
    }

    /// Return a copy with `args` appended to the formatter queue
    pub fn format(&self, args: FormatArgs) -> Self {
        let mut formatters = self.formatters.clone();
        formatters.push(args);
        Self::with_formatters(self.key.clone(), formatters)
    }

    /// Resolve the text for `code` and run every queued pass in order
    ///
    /// A key missing from the store is displayed as-is.
    pub fn localize(&self, store: &LocaleStore, code: &str) -> String {
        let base = store.get(&self.key, code).unwrap_or(self.key.as_str());
        self.formatters
            .iter()
            .fold(base.to_string(), |text, args| args.apply(&text))
    }
}
