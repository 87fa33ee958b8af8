// src/models/filter_rule.rs
use serde::Deserialize;
use std::fmt;

/// A regex applied to record paths. Records survive when
/// `regex.is_match(path) == keep`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    #[serde(rename = "Rgxp", alias = "rgxp")]
    pub pattern: String,
    #[serde(rename = "Match", alias = "match")]
    pub keep: bool,
}

impl FilterRule {
    #[inline]
    #[must_use]
    pub fn new(pattern: impl Into<String>, keep: bool) -> Self {
        Self {
            pattern: pattern.into(),
            keep,
        }
    }

    #[inline]
    #[must_use]
    pub fn include(pattern: impl Into<String>) -> Self {
        Self::new(pattern, true)
    }

    #[inline]
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self::new(pattern, false)
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.keep)
    }
}
