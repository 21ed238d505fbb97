//! Load, rewrite and save the target file in one pass.
//!
//! [`Patcher::run`] is the whole program: read the file, apply every rule in
//! declaration order (each rule sees the output of the previous one), write
//! the buffer back, then print the success message. Rules that match nothing
//! are skipped silently; their counts are only visible in the returned
//! [`PatchReport`] and in `debug` logs.

use crate::document::SourceDocument;
use crate::error::{PatchError, RuleError};
use crate::rule::PatchRule;
use crate::rules::{teacher_controller_rules, SUCCESS_MESSAGE, TARGET_PATH};
use similar::{ChangeTag, TextDiff};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// How one rule fared during [`Patcher::apply_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub id: String,
    pub matches: usize,
}

/// Per-rule match counts, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "PatchReport lists which rules matched"]
pub struct PatchReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl PatchReport {
    /// Total spans replaced across all rules.
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }

    /// Rules that replaced at least one span.
    pub fn matched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.matches > 0)
    }

    /// Rules that found nothing to replace.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.matches == 0)
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} rules matched ({} replacements)",
            self.matched().count(),
            self.outcomes.len(),
            self.total_matches()
        )
    }
}

/// Applies an ordered rule list to a single file.
#[derive(Debug, Clone)]
pub struct Patcher {
    path: PathBuf,
    rules: Vec<PatchRule>,
}

impl Patcher {
    pub fn new(path: impl Into<PathBuf>, rules: Vec<PatchRule>) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }

    /// The built-in rule set aimed at [`TARGET_PATH`].
    pub fn teacher_controller() -> Result<Self, RuleError> {
        Self::teacher_controller_at(TARGET_PATH)
    }

    /// The built-in rule set aimed at another file.
    pub fn teacher_controller_at(path: impl Into<PathBuf>) -> Result<Self, RuleError> {
        Ok(Self::new(path, teacher_controller_rules()?))
    }

    pub fn rules(&self) -> &[PatchRule] {
        &self.rules
    }

    pub fn load(&self) -> Result<SourceDocument, PatchError> {
        SourceDocument::load(&self.path)
    }

    /// Apply every rule in order against the current buffer.
    pub fn apply_all(&self, document: &mut SourceDocument) -> PatchReport {
        let before = document.text().to_owned();

        let outcomes = self
            .rules
            .iter()
            .map(|rule| {
                let matches = document.apply(rule);
                if matches == 0 {
                    debug!(rule = rule.id(), "no match");
                } else {
                    debug!(rule = rule.id(), matches, "rewrote");
                }
                RuleOutcome {
                    id: rule.id().to_owned(),
                    matches,
                }
            })
            .collect();

        if document.is_modified() {
            let (removed, added) = line_changes(&before, document.text());
            debug!(removed, added, "document changed");
        }

        PatchReport { outcomes }
    }

    pub fn save(&self, document: &SourceDocument) -> Result<(), PatchError> {
        document.save()
    }

    /// Load, apply every rule, save, then write [`SUCCESS_MESSAGE`] to `out`.
    ///
    /// Nothing is written to `out` if loading or saving fails. A failed write
    /// to `out` is reported as [`PatchError::OutputFailed`], after the file
    /// has already been saved.
    pub fn run(&self, out: &mut impl Write) -> Result<PatchReport, PatchError> {
        let mut document = self.load()?;
        let report = self.apply_all(&mut document);
        self.save(&document)?;
        info!(path = %self.path.display(), "{report}");

        writeln!(out, "{SUCCESS_MESSAGE}")
            .map_err(|source| PatchError::OutputFailed { source })?;
        Ok(report)
    }
}

/// Count removed and inserted lines between two texts.
fn line_changes(before: &str, after: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(before, after);
    diff.iter_all_changes()
        .fold((0, 0), |(removed, added), change| match change.tag() {
            ChangeTag::Delete => (removed + 1, added),
            ChangeTag::Insert => (removed, added + 1),
            ChangeTag::Equal => (removed, added),
        })
}
