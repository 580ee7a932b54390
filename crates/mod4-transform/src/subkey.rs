//! Block-cipher subkey derivation (the CMAC doubling step).

use crate::{Error, Result};

/// Reduction constant for 128-bit blocks.
const RB_128: u8 = 0x87;
/// Reduction constant for every other block length.
const RB_64: u8 = 0x1B;

/// Shift `block` left by one bit as a big-endian integer, folding the
/// carried-out bit back in with the reduction constant.
///
/// Applied to `L = E_K(0)` this yields CMAC's K1; applied to K1 it yields K2.
/// Blocks of 16 bytes reduce with `0x87`, anything else with `0x1B`.
///
/// # Errors
///
/// Returns [`Error::EmptyBlock`] if `block` is empty.
pub fn derive_subkey(block: &[u8]) -> Result<Vec<u8>> {
    let (&first, _) = block.split_first().ok_or(Error::EmptyBlock)?;
    let carry = first >> 7;
    let rb = if block.len() == 16 { RB_128 } else { RB_64 };

    let mut out: Vec<u8> = block
        .windows(2)
        .map(|pair| (pair[0] << 1) | (pair[1] >> 7))
        .collect();
    let last = block[block.len() - 1] << 1;
    // Mask is all ones when the top bit was set.
    out.push(last ^ (0u8.wrapping_sub(carry) & rb));

    tracing::trace!(len = block.len(), carry, "derived subkey");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn rfc4493_subkeys() {
        let l = hex("7df76b0c1ab899b33e42f047b91b546f");
        let k1 = derive_subkey(&l).unwrap();
        assert_eq!(k1, hex("fbeed618357133667c85e08f7236a8de"));
        let k2 = derive_subkey(&k1).unwrap();
        assert_eq!(k2, hex("f7ddac306ae266ccf90bc11ee46d513b"));
    }

    #[test]
    fn short_blocks_reduce_with_0x1b() {
        assert_eq!(
            derive_subkey(&hex("8000000000000000")).unwrap(),
            hex("000000000000001b")
        );
        assert_eq!(derive_subkey(&[0x80]).unwrap(), vec![0x1B]);
        assert_eq!(derive_subkey(&[0x01]).unwrap(), vec![0x02]);
    }

    #[test]
    fn no_carry_is_plain_shift() {
        let mut block = [0u8; 16];
        block[15] = 0x81;
        let mut expected = [0u8; 16];
        expected[14] = 0x01;
        expected[15] = 0x02;
        assert_eq!(derive_subkey(&block).unwrap(), expected);
    }

    #[test]
    fn empty_block_is_rejected() {
        assert!(matches!(derive_subkey(&[]), Err(Error::EmptyBlock)));
    }
}
