//! `livedocs_core` is the core library for the livedocs doc-test extractor.
//! It scans a markdown documentation file for literate examples and turns
//! them into an executable test module for a downstream doctest runner.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Documentation file (README.md)
//!   → Block parser (captures fenced, language-tagged blocks under headings)
//!   → Record builder (normalizes headers, drops examples marked untested)
//!   → Formatter (filters prompt-less blocks, numbers and renders test functions)
//!   → Module writer (preamble + fragments, written once, overwrite on re-run)
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — Single-pass line scanner that captures fenced example blocks.
//! - [`record`] — Header normalization and the `untested` exclusion rule.
//! - [`format`] — Test numbering, the `>>>` prompt filter, and module rendering.
//! - [`extract`] — File-level orchestration: read, transform, write.
//!
//! ## Key Types
//!
//! - [`Block`] — A captured fenced block with its synthesized label.
//! - [`TestRecord`] — A normalized, filter-eligible test candidate.
//! - [`Extraction`] — The rendered module together with its surviving records.
//! - [`ExtractOptions`] — Extraction settings (fence language tag).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use livedocs_core::ExtractOptions;
//! use livedocs_core::extract_file;
//! use livedocs_core::write_module;
//!
//! let options = ExtractOptions::default();
//! let extraction = extract_file(Path::new("README.md"), &options).unwrap();
//! write_module(Path::new("test_docs.py"), &extraction).unwrap();
//! ```

pub use error::*;
pub use extract::*;
pub use format::*;
pub use parser::*;
pub use record::*;

mod error;
mod extract;
mod format;
mod parser;
mod record;

#[cfg(test)]
mod __fixtures;
