//! Search-and-replace rules applied to the whole document buffer.

use crate::error::RuleError;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;

/// A single search-and-replace directive.
///
/// The pattern is compiled multi-line and with `.` matching newlines, so one
/// rule can span a whole method body. The replacement follows the `regex`
/// crate's expansion syntax (`$name`, `${name}`, `$1`; `$$` for a literal `$`).
#[derive(Debug, Clone)]
pub struct PatchRule {
    id: String,
    pattern: Regex,
    replacement: String,
}

impl PatchRule {
    /// Compile a rule. Fails only if `pattern` is not a valid regex.
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        let pattern = RegexBuilder::new(pattern)
            .multi_line(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                id: id.clone(),
                source,
            })?;

        Ok(Self {
            id,
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of non-overlapping matches in `text`.
    pub fn match_count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }

    /// Like [`Self::apply`], also returning the number of spans replaced.
    pub fn apply_counted<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut count = 0;
        let patched = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            let mut expanded = String::new();
            caps.expand(&self.replacement, &mut expanded);
            expanded
        });
        (patched, count)
    }
}
