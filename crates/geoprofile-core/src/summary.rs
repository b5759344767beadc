// crates/geoprofile-core/src/summary.rs

//! # Summary Resolver
//!
//! Single-shot lookup of one encyclopedia page summary. No chaining here;
//! see [`crate::topics`] for the fallback logic.

use crate::config::Config;
use crate::error::Unavailable;
use crate::model::convert::summary_from_raw;
use crate::model::SummaryResult;
use crate::raw::PageSummaryRaw;
use crate::source::{encode_segment, topic_title, SourceClient};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SummaryResolver {
    client: SourceClient,
    config: Config,
}

impl SummaryResolver {
    pub fn new(client: SourceClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Looks up `title` and applies the single-topic threshold.
    pub fn resolve(&self, title: &str) -> Option<SummaryResult> {
        self.resolve_with(title, self.config.thresholds.summary_min_chars)
    }

    /// Looks up `title`; the extract must be longer than `min_chars`.
    pub fn resolve_with(&self, title: &str, min_chars: usize) -> Option<SummaryResult> {
        match self.lookup(title, min_chars) {
            Ok(summary) => Some(summary),
            Err(reason) => {
                debug!(title, %reason, "no summary");
                None
            }
        }
    }

    fn lookup(&self, title: &str, min_chars: usize) -> Result<SummaryResult, Unavailable> {
        let title = topic_title(title);
        if title.is_empty() {
            return Err(Unavailable::ProviderMiss("empty title".into()));
        }
        let url = self
            .config
            .summary_endpoint(&format!("page/summary/{}", encode_segment(&title)));
        let raw: PageSummaryRaw = self.client.fetch_json(&url)?;
        let summary = summary_from_raw(raw);
        if !summary.is_acceptable(min_chars) {
            return Err(Unavailable::QualityReject {
                len: summary.extract_len(),
                threshold: min_chars,
            });
        }
        Ok(summary)
    }
}
