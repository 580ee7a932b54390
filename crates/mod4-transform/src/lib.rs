//! A four-way integer transform selected by `n mod 4`.
//!
//! [`target`] is the plain transform. [`substitution`] evaluates the same
//! arms with every bitwise operator rewritten into an equivalent form, and
//! [`subkey`] holds the block subkey derivation that ships alongside it.

pub mod error;
pub mod subkey;
pub mod substitution;
pub mod transform;

pub use error::{Error, Result};
pub use subkey::derive_subkey;
pub use substitution::target_substituted;
pub use transform::{Branch, MAGIC, target};
