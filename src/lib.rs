#![deny(missing_docs)]

//! Rust bindings for the MeCab command-line tool.
//!
//! This crate runs the external `mecab` morphological analyzer as a
//! subprocess and decodes its per-mode text output into typed records. It
//! deliberately stays a thin binding: analysis itself is the external tool's
//! job, and each call is one independent spawn-write-wait-decode cycle.
//!
//! ## Quick Start
//! ```no_run
//! use mecab_rs::MeCab;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mecab = MeCab::new(["mecab"])?;
//!     for word in mecab.parse("日本語を話す")? {
//!         println!("{}\t{}", word.surface, word.feature);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Output Modes
//! Each public operation maps onto one analyzer output flag:
//!
//! | Operation          | Flag        | Result                  |
//! |--------------------|-------------|-------------------------|
//! | [`MeCab::parse`]   | (none)      | [`Vec<AnalyzedWord>`](AnalyzedWord) |
//! | [`MeCab::dump`]    | `-Odump`    | [`Vec<DumpWord>`](DumpWord) |
//! | [`MeCab::chasen`]  | `-Ochasen` / `-Ochasen2` | [`Vec<AnalyzedWord>`](AnalyzedWord) |
//! | [`MeCab::simple`]  | `-Osimple`  | [`Vec<AnalyzedWord>`](AnalyzedWord) |
//! | [`MeCab::wakati`]  | `-Owakati`  | `Vec<String>`           |
//! | [`MeCab::yomi`]    | `-Oyomi`    | `String`                |
//!
//! ## Process Contract
//! The configured command vector is spawned as-is with the mode flag
//! appended; the input text is written to the child's stdin as UTF-8, stdin
//! is closed, and stdout is collected after exit. A non-zero exit surfaces as
//! [`MeCabError::RunFailure`] carrying the child's stderr (or stdout, or the
//! exit status). There is no retry and no timeout; callers needing timeouts
//! must wrap calls externally.
//!
//! ## Environment Variables
//! - `MECAB_PATH`: analyzer executable used by [`MeCab::init`] (`mecab` by
//!   default).

mod decode;
mod error;
mod runner;
mod runtime;
mod types;

pub use error::{MeCabError, Result};
pub use runtime::MeCab;
pub use types::{AnalyzedWord, DumpWord, MeCabConfig};
