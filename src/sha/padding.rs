//! Message padding and the trailing length field (FIPS 180-4, 5.1).

use super::compress::Compressor;

/// Pad the final partial block and fold it into `core`.
///
/// `remainder` holds the `0..BLOCK_LEN` bytes left over after every full
/// block of the message went through `core`. `total_len` counts every byte
/// of the message. Afterwards `core` holds the finished digest state.
///
/// The terminator byte `0x80` follows the remainder. When it leaves no room
/// for the length field, the current block is zero-filled and compressed on
/// its own, and the length goes into a second, otherwise empty, block.
pub fn pad_and_finish<C: Compressor>(core: &mut C, remainder: &[u8], total_len: u128) {
    debug_assert!(remainder.len() < C::BLOCK_LEN);

    let mut block = C::ZERO_BLOCK;
    let buf = block.as_mut();
    let used = remainder.len();
    buf[..used].copy_from_slice(remainder);
    buf[used] = 0x80;

    if used + 1 > C::BLOCK_LEN - C::LENGTH_FIELD_LEN {
        core.compress(buf);
        buf.fill(0);
    }

    // Bit count in 128 bits: the SHA-512 field's upper half carries
    // `total_len >> 61`, the 64-bit field keeps the low half.
    let bits = total_len.wrapping_mul(8).to_be_bytes();
    buf[C::BLOCK_LEN - C::LENGTH_FIELD_LEN..]
        .copy_from_slice(&bits[bits.len() - C::LENGTH_FIELD_LEN..]);
    core.compress(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of blocks the padding of a `remainder_len`-byte tail occupies.
    fn padding_blocks<C: Compressor>(remainder_len: usize) -> usize {
        if remainder_len + 1 > C::BLOCK_LEN - C::LENGTH_FIELD_LEN {
            2
        } else {
            1
        }
    }

    /// Records every block it is handed instead of hashing it.
    #[derive(Clone, Default)]
    struct Recorder<const N: usize, const L: usize> {
        blocks: Vec<Vec<u8>>,
    }

    impl<const N: usize, const L: usize> Compressor for Recorder<N, L> {
        type Block = [u8; N];
        const BLOCK_LEN: usize = N;
        const LENGTH_FIELD_LEN: usize = L;
        const ZERO_BLOCK: [u8; N] = [0; N];

        fn compress(&mut self, block: &[u8]) {
            self.blocks.push(block.to_vec());
        }

        fn write_state(&self, _out: &mut [u8]) {}
    }

    type Small = Recorder<64, 8>;
    type Big = Recorder<128, 16>;

    #[test]
    fn empty_message_is_one_block() {
        let mut r = Small::default();
        pad_and_finish(&mut r, &[], 0);
        assert_eq!(r.blocks.len(), 1);
        assert_eq!(r.blocks[0][0], 0x80);
        assert!(r.blocks[0][1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn length_fits_at_block_minus_nine() {
        let tail = [0xaau8; 55];
        let mut r = Small::default();
        pad_and_finish(&mut r, &tail, 55);
        assert_eq!(r.blocks.len(), 1);
        assert_eq!(padding_blocks::<Small>(55), 1);
        let b = &r.blocks[0];
        assert_eq!(&b[..55], &tail[..]);
        assert_eq!(b[55], 0x80);
        assert_eq!(&b[56..], &(55u64 * 8).to_be_bytes());
    }

    #[test]
    fn length_spills_at_block_minus_eight() {
        let tail = [0x11u8; 56];
        let mut r = Small::default();
        pad_and_finish(&mut r, &tail, 56 + 64 * 3);
        assert_eq!(r.blocks.len(), 2);
        assert_eq!(padding_blocks::<Small>(56), 2);
        assert_eq!(r.blocks[0][56], 0x80);
        assert!(r.blocks[0][57..].iter().all(|&b| b == 0));
        assert!(r.blocks[1][..56].iter().all(|&b| b == 0));
        assert_eq!(&r.blocks[1][56..], &((56u64 + 192) * 8).to_be_bytes());
    }

    #[test]
    fn wide_family_thresholds() {
        assert_eq!(padding_blocks::<Big>(111), 1);
        assert_eq!(padding_blocks::<Big>(112), 2);
        assert_eq!(padding_blocks::<Big>(127), 2);

        let mut r = Big::default();
        pad_and_finish(&mut r, &[7u8; 111], 111);
        assert_eq!(r.blocks.len(), 1);
        assert_eq!(r.blocks[0][111], 0x80);
        assert_eq!(&r.blocks[0][112..], &(111u128 * 8).to_be_bytes());
    }

    #[test]
    fn wide_length_field_carries_high_bits() {
        // 2^61 bytes is 2^64 bits: the low half overflows into the high half.
        let total = 1u128 << 61;
        let mut r = Big::default();
        pad_and_finish(&mut r, &[], total);
        let field = &r.blocks[0][112..];
        assert_eq!(&field[..8], &((total >> 61) as u64).to_be_bytes());
        assert_eq!(&field[8..], &[0u8; 8]);
    }

    #[test]
    fn narrow_length_field_is_low_64_bits() {
        let total = (1u128 << 61) + 1;
        let mut r = Small::default();
        pad_and_finish(&mut r, &[], total);
        assert_eq!(&r.blocks[0][56..], &8u64.to_be_bytes());
    }
}
