//! geoprofile-cli
//! ==============
//!
//! Command-line interface for the `geoprofile-core` country profile pipeline.
//!
//! This crate primarily provides a binary (`geoprofile`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geoprofile-cli
//! geoprofile --help
//! geoprofile profile france
//! geoprofile country DEU
//! geoprofile weather Nairobi
//! ```
//!
//! For programmatic access use the [`geoprofile-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
