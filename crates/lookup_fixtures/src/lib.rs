//! Lookup dataset builder for personagen.
//!
//! Enlarges a base dataset with deterministic fake names, address words and
//! street suffixes, so generation can be exercised against realistic table
//! sizes.
//!
//! # Example
//!
//! ```rust
//! use lookup_fixtures::{Generator, Scale};
//! use personagen::LookupSet;
//!
//! let base = LookupSet::builtin().unwrap();
//! let mut gen = Generator::new(42, Scale::Small);
//! let set = gen.generate(&base).unwrap();
//!
//! assert!(set.names.len() >= base.names.len());
//! ```

pub mod faker;
pub mod generator;

pub use faker::FakeLocale;
pub use generator::{Generator, Scale};
