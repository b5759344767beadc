// crates/geoprofile-core/src/topics.rs

//! # Topic Fallback Chain
//!
//! Country-specific encyclopedia pages are sparse. For each subject we try a
//! short, ordered list of page titles and stop at the first one whose extract
//! clears the subject's threshold:
//!
//! | Subject     | Candidates                           | Threshold           |
//! |-------------|--------------------------------------|---------------------|
//! | `Culture`   | `Culture_of_<c>`, `<c>`              | `summary_min_chars` |
//! | `Landmarks` | `<c>_landmarks`, `<c>`               | `summary_min_chars` |
//! | `Facts`     | `<c>`                                | `facts_min_chars`   |
//!
//! A chain returns acceptable data or `None`, never something in between.

use crate::config::Thresholds;
use crate::model::SummaryResult;
use crate::source::topic_title;
use crate::summary::SummaryResolver;
use crate::text::first_sentences;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Culture,
    Landmarks,
    Facts,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Culture => write!(f, "culture"),
            Subject::Landmarks => write!(f, "landmarks"),
            Subject::Facts => write!(f, "facts"),
        }
    }
}

impl Subject {
    /// Builds the ordered candidate list and threshold for `country`.
    pub fn chain(self, country: &str, thresholds: &Thresholds) -> FallbackChain {
        let c = topic_title(country);
        match self {
            Subject::Culture => FallbackChain::new(
                vec![format!("Culture_of_{c}"), c],
                thresholds.summary_min_chars,
            ),
            Subject::Landmarks => FallbackChain::new(
                vec![format!("{c}_landmarks"), c],
                thresholds.summary_min_chars,
            ),
            Subject::Facts => FallbackChain::new(vec![c], thresholds.facts_min_chars),
        }
    }
}

/// Ordered candidate titles plus the acceptability threshold they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    candidates: Vec<String>,
    min_chars: usize,
}

impl FallbackChain {
    pub fn new(candidates: Vec<String>, min_chars: usize) -> Self {
        Self {
            candidates,
            min_chars,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Tries each candidate in order; first acceptable summary wins.
    pub fn resolve(&self, summaries: &SummaryResolver) -> Option<SummaryResult> {
        for title in self.candidates.iter().filter(|t| !t.is_empty()) {
            if let Some(found) = summaries.resolve_with(title, self.min_chars) {
                if found.is_acceptable(self.min_chars) {
                    debug!(title = %title, "fallback chain resolved");
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Resolves subjects for a country on top of a [`SummaryResolver`].
#[derive(Debug, Clone)]
pub struct TopicResolver {
    summaries: SummaryResolver,
    thresholds: Thresholds,
}

impl TopicResolver {
    pub fn new(summaries: SummaryResolver, thresholds: Thresholds) -> Self {
        Self {
            summaries,
            thresholds,
        }
    }

    pub fn resolve_subject(&self, country: &str, subject: Subject) -> Option<SummaryResult> {
        let found = subject
            .chain(country, &self.thresholds)
            .resolve(&self.summaries);
        if found.is_none() {
            warn!(country, %subject, "no acceptable summary");
        }
        found
    }

    /// First sentences of the country's page, or `None` when the page does
    /// not clear the facts threshold.
    pub fn fun_facts(&self, country: &str) -> Option<String> {
        let summary = self.resolve_subject(country, Subject::Facts)?;
        let text = summary.extract?;
        first_sentences(&text, self.thresholds.facts_sentences)
    }
}
