//! # charcomb - Parser Combinators over Text
//!
//! A parser combinator library for recursive-descent parsers over an immutable
//! character stream, with failures that carry enough position information to print a
//! line-and-column diagnostic.
//!
//! - **Immutable input**: a [`Stream`] is a cursor into a borrowed buffer; parsers
//!   never mutate or copy it, so backtracking is free
//! - **Failures are values**: a parser returns [`Success`] or [`Failure`]; alternatives
//!   keep the failure that got furthest and merge expectations on a tie
//! - **Commitment**: [`cut`](cut::cut) marks a failure fatal so enclosing alternatives
//!   stop trying other branches
//!
//! ```
//! use charcomb::chars::{spaces1, upper};
//! use charcomb::label::LabelExt;
//! use charcomb::many::many1;
//! use charcomb::parser::execute;
//!
//! let verb = many1(upper()).expected("an upper case HTTP verb");
//! assert_eq!(execute(&verb, "GET /").unwrap(), "GET");
//!
//! let failure = execute(&spaces1(), "GET").unwrap_err();
//! assert_eq!(
//!     failure.render(),
//!     "At line 0, column 0:\n\nGET\n^\n|\nError: expected whitespace, saw \"GET\""
//! );
//! ```

pub mod between;
pub mod chars;
pub mod cut;
pub mod diagnostics;
pub mod eof;
pub mod failure;
pub mod fragment;
pub mod label;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parser;
pub mod program;
pub mod sat;
pub mod separated_list;
pub mod seq;
pub mod stream;
pub mod success;
pub mod text;
pub mod unit;

pub use diagnostics::RenderOptions;
pub use failure::Failure;
pub use parser::{BoxedParser, ParseResult, Parser, execute, execute_complete, parse};
pub use stream::{Stream, StreamError};
pub use success::{Span, Success};
