//! Number and string literals, composed from the character parsers.

pub mod float;
pub mod integer;
pub mod quoted;

pub use float::float;
pub use integer::integer;
pub use quoted::{quote, quoted_string};
