//! Condition evaluator
//!
//! Removes file set entries whose paths match a condition's exclude patterns
//! when the condition's expression renders to `true`. Conditions only ever
//! subtract from the set.

use glob::{MatchOptions, Pattern};

use crate::domain::entities::{Condition, FileSet};
use crate::domain::ports::{TemplateError, TemplateRenderer};
use crate::domain::value_objects::Variables;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("failed to evaluate condition '{expression}': {source}")]
pub struct ConditionError {
    pub expression: String,
    #[source]
    pub source: TemplateError,
}

/// Applies blueprint conditions to a resolved file set
pub struct ConditionEvaluator<R: TemplateRenderer> {
    renderer: R,
}

impl<R: TemplateRenderer> ConditionEvaluator<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Evaluate `conditions` in order, removing excluded entries from `files`.
    ///
    /// Returns the removed paths in removal order.
    pub fn apply(
        &self,
        conditions: &[Condition],
        variables: &Variables,
        files: &mut FileSet,
    ) -> Result<Vec<String>, ConditionError> {
        let mut removed = Vec::new();

        for condition in conditions {
            let rendered = self
                .renderer
                .render_string(&condition.when, variables)
                .map_err(|source| ConditionError {
                    expression: condition.when.clone(),
                    source,
                })?;

            if rendered.trim() != "true" {
                continue;
            }

            let patterns: Vec<PathPattern> = condition
                .exclude
                .iter()
                .map(|p| PathPattern::new(p))
                .collect();

            let dropped = files.remove_where(|path| patterns.iter().any(|p| p.matches(path)));
            tracing::debug!(
                condition = %condition.when,
                removed = dropped.len(),
                "condition matched"
            );
            removed.extend(dropped);
        }

        Ok(removed)
    }
}

/// Path pattern: exact path, directory prefix (`dir/*`), or glob
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    glob: Option<Pattern>,
}

impl PathPattern {
    /// Invalid glob syntax never matches, not even the literal path.
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            glob: Pattern::new(raw).ok(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let Some(glob) = &self.glob else {
            return false;
        };
        if self.raw == path {
            return true;
        }
        if let Some(dir) = self.raw.strip_suffix("/*") {
            if path
                .strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with('/'))
            {
                return true;
            }
        }
        glob.matches_with(path, SEGMENT_MATCH)
    }
}

/// `*` and `?` stay within one path segment
const SEGMENT_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};
