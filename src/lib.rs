//! A parser library for [Conventional Commit] messages.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     docs(parser, readme)!: describe the footer rules
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     BREAKING CHANGE: the old footer syntax is no longer accepted.
//!
//!     Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>
//!     Closes #12
//! ");
//!
//! let commit = conventional_commit::Commit::parse(message).unwrap();
//!
//! // You can access all components of the summary line.
//! assert_eq!(commit.type_(), conventional_commit::Type::DOCS);
//! assert_eq!(commit.scopes()[0], "parser");
//! assert_eq!(commit.scopes()[1], "readme");
//! assert_eq!(commit.description(), "describe the footer rules");
//!
//! // And the free-form commit body.
//! assert!(commit.body().unwrap().contains("helps people understand"));
//!
//! // If a commit is marked with a bang (`!`) OR has a footer with the key
//! // "BREAKING CHANGE", it is considered a "breaking" commit.
//! assert!(commit.breaking());
//!
//! // You can access each footer individually.
//! assert!(commit.footers()[0].value().contains("no longer accepted"));
//!
//! // Footers provide access to their key and value.
//! assert_eq!(commit.footers()[1].key(), "Co-Authored-By");
//! assert_eq!(commit.footers()[1].value(), "Lisa Simpson <lisa@simpsons.fam>");
//!
//! // Two kinds of delimiters are supported, regular ": ", and " #":
//! assert_eq!(commit.footers()[2].separator(), " #");
//! assert_eq!(commit.footers()[2].value(), "12");
//!
//! // A message that does not conform yields no result at all.
//! assert!(conventional_commit::Commit::parse("not a commit").is_err());
//! ```

#![warn(missing_docs)]

mod commit;
mod error;
mod parser;

pub use commit::{Commit, Footer, FooterKey, FooterSeparator, Scope, Type};
pub use error::Error;
