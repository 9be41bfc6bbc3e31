//! Visited set - one bit per cell, keyed by row-major index

pub(crate) struct VisitedSet {
    bits: Vec<u64>,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self { bits: vec![0u64; len.div_ceil(64)] }
    }

    /// Mark `idx`; `true` if it was not marked before.
    #[inline(always)]
    pub(crate) fn insert(&mut self, idx: usize) -> bool {
        let word = idx >> 6; // idx / 64
        let bit = 1u64 << (idx & 63);
        match self.bits.get_mut(word) {
            Some(w) if *w & bit == 0 => {
                *w |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline(always)]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < self.bits.len() && (self.bits[word] & (1u64 << bit)) != 0
    }
}
