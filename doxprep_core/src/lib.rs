//! `doxprep_core` is the core library for the `doxprep` documentation
//! preprocessor. It turns a tree of module source files into a staging tree
//! that Doxygen can render as grouped, navigable documentation: every
//! module becomes a documentation group, every module subdirectory a nested
//! subgroup, and every source file is rewritten so its symbols are
//! attributed to the right group, including symbols hidden inside
//! namespace blocks.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Module source tree
//!   → Module selection (explicit list, or every subdirectory of the root)
//!   → Tree copy into the staging directory
//!   → Header extraction (declaration block → short description + details)
//!   → Marker injection (@weakgroup begin/end pairs, namespace-aware)
//!   → Index generation (one @defgroup block per module)
//! ```
//!
//! ## Modules
//!
//! - [`scope`] — Brace-scope matching over raw text.
//! - [`inject`] — Namespace-aware group-marker injection.
//! - [`header`] — Module declaration block extraction.
//! - [`groups`] — Group definition and index rendering.
//! - [`pipeline`] — The orchestrator driving a full processing run.
//! - [`config`] — Configuration loading from `doxprep.toml`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use doxprep_core::process_modules;
//!
//! let summary = process_modules(Path::new("modules"), Path::new("build/doc"), &[]).unwrap();
//! if !summary.is_ok() {
//! 	eprintln!("{} file(s) failed preprocessing", summary.failures.len());
//! }
//! ```

pub use config::*;
pub use error::*;
pub use groups::*;
pub use header::*;
pub use inject::*;
pub use pipeline::*;
pub use scope::*;

pub mod config;
mod error;
pub mod groups;
pub mod header;
pub mod inject;
pub mod pipeline;
pub mod scope;

#[cfg(test)]
mod __fixtures;
