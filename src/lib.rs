//! An interactive shell front-end with inline path search.
//!
//! This crate provides a small command-line shell whose distinguishing
//! feature is a pair of path-search directives embedded directly in the
//! command line: `<name` resolves to the closest ancestor directory that
//! contains a subdirectory `name`, and `>pattern` resolves to the first file
//! found by a bounded breadth-first walk below the current directory whose
//! relative path ends with `pattern`. Directives are rewritten into absolute
//! paths before the line is tokenized and dispatched.
//!
//! The main entry point is [`Session`], which owns the line-reading loop and
//! the dispatch state. The public modules [`search`], [`transform`],
//! [`history`] and [`vfs`] expose the underlying building blocks: the search
//! algorithms, the directive rewriter, the navigable directory history and
//! the filesystem-query trait everything is written against.

pub mod dispatch;
pub mod env;
mod error;
pub mod history;
pub mod search;
mod session;
pub mod transform;
pub mod vfs;

/// Just a convenient re-export of the interactive loop.
///
/// See [`Session`] for the high-level API.
pub use session::Session;

pub use error::Error;
