//! Replacement rules
//!
//! Rules are compiled once up front and applied in order, each rule seeing the
//! output of the previous one.

use regex::{NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;
use std::str::FromStr;

use crate::core::model::RebrandError;

/// Separator between pattern and replacement in a rule string
pub const RULE_SEPARATOR: &str = "=>";

/// A (pattern, literal replacement) pair, not yet compiled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl FromStr for ReplacementRule {
    type Err = RebrandError;

    /// Parse `PATTERN=>REPLACEMENT`. The first separator wins, so the
    /// replacement may itself contain `=>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(RULE_SEPARATOR) {
            Some((pattern, replacement)) if !pattern.is_empty() => {
                Ok(Self::new(pattern, replacement))
            }
            _ => Err(RebrandError::InvalidRule(s.to_string())),
        }
    }
}

/// Built-in rules
pub fn default_rules() -> Vec<ReplacementRule> {
    vec![
        ReplacementRule::new(r"Kadraj\s*Panel", "Weey.NET"),
        ReplacementRule::new(r"Fotoplan", "Weey.NET"),
    ]
}

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

/// An ordered, validated list of rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile every pattern case-insensitively, failing on the first invalid one
    pub fn compile(rules: &[ReplacementRule]) -> Result<Self, RebrandError> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RebrandError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Ok(CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect::<Result<Vec<_>, RebrandError>>()?;

        Ok(Self { rules })
    }

    /// Apply the rules in sequence, threading the text through each one.
    ///
    /// Returns `Cow::Borrowed` when no rule matched anything.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for rule in &self.rules {
            let next = match rule
                .regex
                .replace_all(&current, NoExpand(&rule.replacement))
            {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            current = Cow::Owned(next);
        }
        current
    }
}
