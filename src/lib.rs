//! Menagerie - timed walkthroughs of standard collections.
//!
//! Each demonstrator takes one collection through a fixed script of
//! searches, min/max scans, sorts, insertions and removals, writing what it
//! found and how long each step took to a [`timing::Transcript`].
//!
//! # Quick Start
//!
//! ```
//! use menagerie::demo::{Demonstrator, ListDemo};
//! use menagerie::timing::Transcript;
//!
//! let mut demo = ListDemo::new('k', vec!['t', 'k', 'b'], None);
//! let mut out = Transcript::new(Vec::new());
//! demo.run(&mut out).unwrap();
//!
//! let text = String::from_utf8(out.into_inner()).unwrap();
//! assert!(text.contains("Element 'k' found in LinkedList at position: 1"));
//! ```
//!
//! Map demonstrators are keyed by [`record::Record`], whose ordering is
//! descending by label and ascending by count.

pub mod config;
pub mod data_file;
pub mod demo;
pub mod error;
pub mod linked_map;
pub mod search;
pub mod timing;

pub use record::Record;
