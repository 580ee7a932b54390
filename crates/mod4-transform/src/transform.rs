//! The mod-4 selected transform.
//!
//! Every arm multiplies two sub-expressions of `n`. Addition and
//! multiplication wrap modulo 2^32.

use std::fmt;

/// Fixed operand shared by the left-hand side of every arm.
pub const MAGIC: u32 = 0xBAAA_D0BF;

/// The four arms of [`target`], in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `n % 4 == 0`: `(n | MAGIC) * (2 ^ n)`
    Or,
    /// `n % 4 == 1`: `(n & MAGIC) * (3 + n)`
    And,
    /// `n % 4 == 2`: `(n ^ MAGIC) * (4 | n)`
    Xor,
    /// Anything else: `(n + MAGIC) * (5 & n)`
    Add,
}

impl Branch {
    /// Pick the arm for `n` from its remainder modulo 4.
    #[must_use]
    pub fn select(n: u32) -> Self {
        let rem = n % 4;
        if rem == 0 {
            Self::Or
        } else if rem == 1 {
            Self::And
        } else if rem == 2 {
            Self::Xor
        } else {
            Self::Add
        }
    }

    /// Evaluate this arm's expression for `n`, regardless of whether `n`
    /// would select it.
    #[must_use]
    pub fn apply(self, n: u32) -> u32 {
        match self {
            Self::Or => (n | MAGIC).wrapping_mul(2 ^ n),
            Self::And => (n & MAGIC).wrapping_mul(3u32.wrapping_add(n)),
            Self::Xor => (n ^ MAGIC).wrapping_mul(4 | n),
            Self::Add => n.wrapping_add(MAGIC).wrapping_mul(5 & n),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Xor => "xor",
            Self::Add => "add",
        };
        f.write_str(name)
    }
}

/// Transform `n` through the arm selected by `n % 4`.
///
/// Total over `u32`; never panics, including on overflow.
#[must_use]
pub fn target(n: u32) -> u32 {
    let branch = Branch::select(n);
    let result = branch.apply(n);
    tracing::trace!(n, %branch, result, "transform");
    result
}
