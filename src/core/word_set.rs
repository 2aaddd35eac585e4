//! Fixed-universe bitset of word positions
//!
//! Every `WordSet` belongs to one `ConstraintIndex` and is indexed by word position in that
//! index's sorted word list. Sets from different indices must not be mixed.

const BITS: usize = u64::BITS as usize;

/// A set of word positions in `0..universe`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    blocks: Vec<u64>,
    universe: usize,
}

impl WordSet {
    /// Empty set over `universe` positions
    #[must_use]
    pub fn empty(universe: usize) -> Self {
        Self {
            blocks: vec![0; universe.div_ceil(BITS)],
            universe,
        }
    }

    /// Set containing every position in `0..universe`
    #[must_use]
    pub fn full(universe: usize) -> Self {
        let mut set = Self {
            blocks: vec![u64::MAX; universe.div_ceil(BITS)],
            universe,
        };
        set.clear_tail();
        set
    }

    /// Size of the universe this set ranges over
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> usize {
        self.universe
    }

    #[inline]
    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < self.universe);
        self.blocks[position / BITS] |= 1 << (position % BITS);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        position < self.universe && self.blocks[position / BITS] & (1 << (position % BITS)) != 0
    }

    /// Number of positions in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// `self = self ∩ other`
    pub fn intersect_with(&mut self, other: &Self) {
        debug_assert_eq!(self.universe, other.universe);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= b;
        }
    }

    /// `self = self \ other`
    pub fn subtract(&mut self, other: &Self) {
        debug_assert_eq!(self.universe, other.universe);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= !b;
        }
    }

    /// `self = self ∪ other`
    pub fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.universe, other.universe);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a |= b;
        }
    }

    /// Overwrite `self` with `other` without reallocating
    pub fn copy_from(&mut self, other: &Self) {
        self.universe = other.universe;
        self.blocks.clone_from(&other.blocks);
    }

    /// Remove every position
    pub fn clear(&mut self) {
        self.blocks.fill(0);
    }

    /// Positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().enumerate().flat_map(|(i, &block)| {
            let mut bits = block;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * BITS + offset)
            })
        })
    }

    fn clear_tail(&mut self) {
        let used = self.universe % BITS;
        if used != 0
            && let Some(last) = self.blocks.last_mut()
        {
            *last &= (1u64 << used) - 1;
        }
    }
}
