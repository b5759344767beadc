//! geoprofile-rs
//!
//! Convenience facade over [`geoprofile_core`] so the demos can
//! `use geoprofile_rs::prelude::*`.

pub use geoprofile_core::*;
