//! Command-line loader for URL-selected markdown slide decks.
//!
//! This crate provides the `mdeck` binary: given a query string such as
//! `?slide=category-theory`, it selects a deck under `slides/`, hands the
//! path to the rendering boundary, and writes the rendered HTML document to
//! stdout or a file. A missing or unusable `slide` parameter silently falls
//! back to the default deck.
//!
//! The process entry point is the only place ambient state is read; below it
//! the query string is an explicit argument.
//!
//! # Usage
//!
//! ```bash
//! mdeck '?slide=category-theory'
//! mdeck -L /var/decks -o out.html
//! ```

pub mod cli;

pub use cli::Cli;
