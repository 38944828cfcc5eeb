//! Fills crossword templates from a word list.
//!
//! A template is a list of equal-length rows made of `*` (black), `.`
//! (blank) and letters. Every run of two or more non-black cells is an
//! [`Entry`] that must end up spelling a word from the list, and crossing
//! entries must agree on their shared cell.
//!
//! ```
//! use std::io::Cursor;
//! use xwords::Generator;
//!
//! let generator = Generator::new(&[".."], Cursor::new("at\nit\n")).unwrap();
//! let fills: Vec<String> = generator
//!     .solve()
//!     .map(|solution| solution.unwrap().grid().row(0))
//!     .collect();
//! assert_eq!(fills, vec!["at", "it"]);
//! ```

pub mod crossword;
pub mod entry;
pub mod error;
pub mod fill;
pub mod index;
mod parse;
pub mod solution;

pub use crossword::{Crossword, Direction, BLACK, BLANK};
pub use entry::Entry;
pub use error::{Error, Inconsistency, MalformedTemplate, Result};
pub use fill::{Generator, Solutions, Statistics};
pub use index::WordIndex;
pub use solution::Solution;
