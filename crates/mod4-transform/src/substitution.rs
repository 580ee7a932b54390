//! Equivalent rewrites of the bitwise operators.
//!
//! Each round replaces an operator with a longer expression that computes
//! the same value:
//!
//! ```text
//! a & b  =>  (a ^ !b) & a
//! a | b  =>  (a & b) | (a ^ b)
//! a ^ b  =>  (!a & b) | (a & !b)
//! ```
//!
//! The operators introduced by one round are rewritten again by the next,
//! so the work grows roughly as `3^rounds`.

use crate::transform::{Branch, MAGIC};

#[must_use]
pub fn substituted_and(a: u32, b: u32, rounds: u32) -> u32 {
    let Some(rest) = rounds.checked_sub(1) else {
        return a & b;
    };
    substituted_and(substituted_xor(a, !b, rest), a, rest)
}

#[must_use]
pub fn substituted_or(a: u32, b: u32, rounds: u32) -> u32 {
    let Some(rest) = rounds.checked_sub(1) else {
        return a | b;
    };
    substituted_or(
        substituted_and(a, b, rest),
        substituted_xor(a, b, rest),
        rest,
    )
}

#[must_use]
pub fn substituted_xor(a: u32, b: u32, rounds: u32) -> u32 {
    let Some(rest) = rounds.checked_sub(1) else {
        return a ^ b;
    };
    substituted_or(
        substituted_and(!a, b, rest),
        substituted_and(a, !b, rest),
        rest,
    )
}

/// [`crate::target`] with every bitwise operator of the selected arm put
/// through `rounds` rounds of substitution.
///
/// Addition and multiplication are left as they are. The result always
/// equals `target(n)`.
#[must_use]
pub fn target_substituted(n: u32, rounds: u32) -> u32 {
    let branch = Branch::select(n);
    tracing::trace!(n, %branch, rounds, "substituted transform");
    match branch {
        Branch::Or => {
            substituted_or(n, MAGIC, rounds).wrapping_mul(substituted_xor(2, n, rounds))
        }
        Branch::And => substituted_and(n, MAGIC, rounds).wrapping_mul(3u32.wrapping_add(n)),
        Branch::Xor => {
            substituted_xor(n, MAGIC, rounds).wrapping_mul(substituted_or(4, n, rounds))
        }
        Branch::Add => n
            .wrapping_add(MAGIC)
            .wrapping_mul(substituted_and(5, n, rounds)),
    }
}
