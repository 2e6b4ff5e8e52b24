//! Fixed-size bit-vector used to record predicate matches.
//!
//! The bit-vector is a compact representation of a sequence of bits, using [u64]
//! "blocks" for a more-efficient memory layout than a `Vec<bool>` (roughly one
//! bit per element instead of one byte). If the length is not a multiple of 64,
//! the last block contains bits that are not part of the vector; an invariant of
//! the implementation is that those trailing bits are always 0.

/// Type alias for the underlying block type.
type Block = u64;

/// Number of bits in a [Block].
const BITS_PER_BLOCK: usize = Block::BITS as usize;

/// Represents a fixed-length vector of bits, all initially 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitVec {
    /// The underlying storage for the bits.
    storage: Vec<Block>,
    /// The total number of bits.
    num_bits: usize,
}

impl BitVec {
    /// Creates a new `BitVec` with `size` bits, all initialized to zero.
    pub fn zeroes(size: usize) -> Self {
        BitVec {
            storage: vec![0; size.div_ceil(BITS_PER_BLOCK)],
            num_bits: size,
        }
    }

    /// Returns the number of bits in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Returns true if the vector contains no bits.
    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Sets the bit at `index` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(index < self.num_bits, "index out of bounds");
        self.storage[index / BITS_PER_BLOCK] |= 1 << (index % BITS_PER_BLOCK);
    }

    /// Gets the value of the bit at `index` (true if 1, false if 0).
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.num_bits {
            return None;
        }
        Some(self.storage[index / BITS_PER_BLOCK] & (1 << (index % BITS_PER_BLOCK)) != 0)
    }

    /// Returns the number of bits set to 1.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.storage
            .iter()
            .map(|block| block.count_ones() as usize)
            .sum()
    }

    /// Iterates the indices of set bits in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            storage: &self.storage,
            block: 0,
            current: self.storage.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over the indices of set bits of a [BitVec], in ascending order.
pub(crate) struct Ones<'a> {
    /// Remaining blocks of the vector.
    storage: &'a [Block],
    /// Index of the block currently being drained.
    block: usize,
    /// Unconsumed bits of the current block.
    current: Block,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.block += 1;
            if self.block >= self.storage.len() {
                return None;
            }
            self.current = self.storage[self.block];
        }
        let bit = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        Some(self.block * BITS_PER_BLOCK + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroes() {
        // Test case 0: empty vector
        let bv = BitVec::zeroes(0);
        assert_eq!(bv.len(), 0);
        assert!(bv.is_empty());
        assert_eq!(bv.count_ones(), 0);

        // Test case 1: within one block
        let bv = BitVec::zeroes(10);
        assert_eq!(bv.len(), 10);
        assert_eq!(bv.count_ones(), 0);
        assert_eq!(bv.get(0), Some(false));
        assert_eq!(bv.get(9), Some(false));
        assert_eq!(bv.get(10), None);

        // Test case 2: block boundaries
        for size in [63, 64, 65, 128, 129] {
            let bv = BitVec::zeroes(size);
            assert_eq!(bv.len(), size);
            assert_eq!(bv.count_ones(), 0);
        }
    }

    #[test]
    fn test_set_get() {
        let mut bv = BitVec::zeroes(130);
        for index in [0, 1, 63, 64, 65, 127, 128, 129] {
            assert_eq!(bv.get(index), Some(false));
            bv.set(index);
            assert_eq!(bv.get(index), Some(true));
        }
        assert_eq!(bv.count_ones(), 8);
        assert_eq!(bv.get(2), Some(false));
        assert_eq!(bv.get(130), None);
    }

    #[test]
    fn test_ones() {
        // Test case 0: empty vector
        let bv = BitVec::zeroes(0);
        assert_eq!(bv.ones().count(), 0);

        // Test case 1: no set bits
        let bv = BitVec::zeroes(100);
        assert_eq!(bv.ones().count(), 0);

        // Test case 2: ascending order across block boundaries
        let mut bv = BitVec::zeroes(200);
        let indices = [0, 5, 63, 64, 100, 128, 199];
        for index in indices {
            bv.set(index);
        }
        assert_eq!(bv.ones().collect::<Vec<_>>(), indices);

        // Test case 3: every bit set
        let mut bv = BitVec::zeroes(70);
        for index in 0..70 {
            bv.set(index);
        }
        assert_eq!(bv.ones().collect::<Vec<_>>(), (0..70).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_set_out_of_bounds() {
        let mut bv = BitVec::zeroes(64);
        bv.set(64);
    }
}
